use crate::error::ConfigError;

/// Tunables for layout generation.
///
/// Radii are expressed as fractions of the canvas width, so the same
/// config scales with the viewport.
#[derive(Clone, Copy, Debug)]
pub struct LayoutConfig {
    /// Number of wheels to try to place.
    pub target_count: usize,
    /// Smallest wheel radius, as a fraction of canvas width.
    pub min_radius_frac: f32,
    /// Largest wheel radius, as a fraction of canvas width.
    pub max_radius_frac: f32,
    /// Total placement attempt budget across all wheels.
    pub max_attempts: usize,
    /// Tolerated overlap, as a fraction of the smaller radius of a pair.
    pub overlap_allowance: f32,
    /// Neighbor gate: a prior wheel within this multiple of the combined
    /// radii makes a candidate acceptable.
    pub neighbor_range: f32,
    /// Connector threshold, as a multiple of a pair's combined radii.
    pub connect_range: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            target_count: 25,
            min_radius_frac: 0.04,
            max_radius_frac: 0.12,
            max_attempts: 5000,
            overlap_allowance: 0.4,
            neighbor_range: 1.5,
            connect_range: 1.3,
        }
    }
}

impl LayoutConfig {
    /// Rejects configs that would make generation meaningless or panic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_radius_frac.is_finite()
            || !self.max_radius_frac.is_finite()
            || self.min_radius_frac <= 0.0
            || self.min_radius_frac > self.max_radius_frac
        {
            return Err(ConfigError::InvalidRadiusRange {
                min: self.min_radius_frac,
                max: self.max_radius_frac,
            });
        }

        if !self.overlap_allowance.is_finite() || self.overlap_allowance < 0.0 {
            return Err(ConfigError::InvalidFactor {
                name: "overlap_allowance",
                value: self.overlap_allowance,
            });
        }
        for (name, value) in [
            ("neighbor_range", self.neighbor_range),
            ("connect_range", self.connect_range),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidFactor { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_radius_bounds_are_rejected() {
        let cfg = LayoutConfig {
            min_radius_frac: 0.2,
            max_radius_frac: 0.1,
            ..LayoutConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidRadiusRange { min: 0.2, max: 0.1 })
        );
    }

    #[test]
    fn non_positive_factors_are_rejected() {
        let cfg = LayoutConfig {
            connect_range: 0.0,
            ..LayoutConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidFactor {
                name: "connect_range",
                value: 0.0
            })
        );

        // Zero overlap allowance is a legitimate "no overlap" setting.
        let cfg = LayoutConfig {
            overlap_allowance: 0.0,
            ..LayoutConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn nan_fractions_are_rejected() {
        let cfg = LayoutConfig {
            min_radius_frac: f32::NAN,
            ..LayoutConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
