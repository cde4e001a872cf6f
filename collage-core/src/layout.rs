//! Layout generation for the wheel collage.
//!
//! A layout is built in two passes:
//! 1. [`place_wheels`] — rejection sampling places wheels under an
//!    overlap bound and an adjacency requirement.
//! 2. [`connect_wheels`] — an exhaustive pairwise scan links wheels
//!    whose centers are close enough.
//!
//! Both passes thread an explicit [`Rng`], so a seeded generator
//! reproduces a layout bit-for-bit.

use crate::{
    config::LayoutConfig, connector::Connector, error::ConfigError, palette::Palette,
    types::PaletteId, wheel::Wheel,
};
use glam::Vec2;
use log::warn;
use rand::Rng;
use std::f32::consts::TAU;

/// A complete generated composition for one canvas size.
///
/// Owned by a single controller and replaced wholesale on re-layout;
/// nothing mutates it between generation and drawing.
#[derive(Debug, PartialEq)]
pub struct Layout {
    pub size: Vec2,
    pub wheels: Vec<Wheel>,
    pub connectors: Vec<Connector>,
}

impl Layout {
    /// A layout with no wheels, e.g. before the first canvas size is known.
    pub fn empty(size: Vec2) -> Self {
        Self {
            size,
            wheels: Vec::new(),
            connectors: Vec::new(),
        }
    }

    /// Generates a fresh layout for the given canvas size.
    ///
    /// Placement and connection run synchronously to completion, so the
    /// returned layout is always fully built. Falling short of
    /// `cfg.target_count` wheels is not an error (see [`place_wheels`]).
    ///
    /// ### Parameters
    /// - `size` - Canvas dimensions in pixels; both must be positive.
    /// - `cfg` - Generation tunables; validated up front.
    /// - `palettes` - Non-empty palette table to draw colors from.
    /// - `rng` - Randomness source; pass a seeded generator for a
    ///   reproducible layout.
    ///
    /// ### Errors
    /// [`ConfigError`] when the canvas, config, or palette table fails
    /// its precondition. No partial layout is produced in that case.
    pub fn generate(
        size: Vec2,
        cfg: &LayoutConfig,
        palettes: &[Palette],
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        if !size.x.is_finite() || !size.y.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(ConfigError::InvalidCanvas {
                width: size.x,
                height: size.y,
            });
        }
        cfg.validate()?;
        if palettes.is_empty() {
            return Err(ConfigError::EmptyPaletteTable);
        }

        let wheels = place_wheels(size, cfg, palettes, rng);
        let connectors = connect_wheels(&wheels, cfg, palettes, rng);
        Ok(Self {
            size,
            wheels,
            connectors,
        })
    }
}

/// Places wheels by rejection sampling.
///
/// Each attempt samples a radius uniformly in the configured bounds and
/// a center uniformly such that the circle stays inside the canvas. The
/// candidate is checked against every wheel placed so far:
///
/// - it is rejected when it overlaps any wheel by more than
///   `cfg.overlap_allowance` of the smaller radius;
/// - it is accepted only if some prior wheel lies within
///   `cfg.neighbor_range` times the combined radii (the first wheel is
///   exempt).
///
/// The attempt counter increments on every iteration, accepted or not.
/// When the budget runs out below `cfg.target_count`, the shortfall is
/// logged at warn level and the wheels placed so far are returned; an
/// empty result is possible when no candidate can fit the canvas.
///
/// ### Parameters
/// - `size` - Canvas dimensions in pixels.
/// - `cfg` - Generation tunables; assumed already validated.
/// - `palettes` - Palette table; only its length drives selection here.
/// - `rng` - Randomness source.
///
/// ### Returns
/// The placed wheels, in placement order.
pub fn place_wheels(
    size: Vec2,
    cfg: &LayoutConfig,
    palettes: &[Palette],
    rng: &mut impl Rng,
) -> Vec<Wheel> {
    let min_radius = size.x * cfg.min_radius_frac;
    let max_radius = size.x * cfg.max_radius_frac;

    let mut wheels: Vec<Wheel> = Vec::with_capacity(cfg.target_count);
    let mut attempts = 0;

    while wheels.len() < cfg.target_count && attempts < cfg.max_attempts {
        // Every candidate consumes one attempt, accepted or not.
        attempts += 1;

        let radius = rng.random_range(min_radius..=max_radius);
        if 2.0 * radius > size.x || 2.0 * radius > size.y {
            // No center keeps this circle inside the canvas.
            continue;
        }
        let pos = Vec2::new(
            rng.random_range(radius..=size.x - radius),
            rng.random_range(radius..=size.y - radius),
        );

        let mut overlaps_too_much = false;
        // The very first wheel needs no neighbor.
        let mut has_neighbor = wheels.is_empty();

        for other in &wheels {
            let d = pos.distance(other.pos);
            let combined = radius + other.radius;

            // Tolerate overlap up to a fraction of the smaller radius.
            let allowance = radius.min(other.radius) * cfg.overlap_allowance;
            if d < combined - allowance {
                overlaps_too_much = true;
                break;
            }
            if d < combined * cfg.neighbor_range {
                has_neighbor = true;
            }
        }

        if overlaps_too_much || !has_neighbor {
            continue;
        }

        let palette = pick_palette(palettes.len(), wheels.last().map(|w| w.palette), rng);
        let stem_angle = rng.random_range(0.0..TAU);
        wheels.push(Wheel::new(pos, radius, palette, stem_angle));
    }

    if wheels.len() < cfg.target_count {
        warn!(
            "placed {}/{} wheels after {} attempts",
            wheels.len(),
            cfg.target_count,
            attempts
        );
    }

    wheels
}

/// Links every pair of wheels whose centers are close enough.
///
/// For each pair `(i, j)` with `i < j` in placement order, a connector
/// is emitted iff the center distance is below `cfg.connect_range`
/// times the combined radii. The connector color is the base entry of a
/// uniformly random palette, independent of either wheel's own palette.
///
/// Quadratic in the wheel count, which stays in the tens.
pub fn connect_wheels(
    wheels: &[Wheel],
    cfg: &LayoutConfig,
    palettes: &[Palette],
    rng: &mut impl Rng,
) -> Vec<Connector> {
    let mut connectors = Vec::new();
    for i in 0..wheels.len() {
        for j in (i + 1)..wheels.len() {
            let (a, b) = (&wheels[i], &wheels[j]);
            let d = a.pos.distance(b.pos);
            if d < (a.radius + b.radius) * cfg.connect_range {
                let color = palettes[rng.random_range(0..palettes.len())].base();
                connectors.push(Connector::between(i, j, a, b, color));
            }
        }
    }
    connectors
}

/// Picks a palette index uniformly, redrawing once when it matches the
/// immediately preceding wheel's palette.
///
/// A soft anti-repetition heuristic: only the previous wheel is
/// consulted, and a single-entry table is returned as-is.
fn pick_palette(count: usize, prev: Option<PaletteId>, rng: &mut impl Rng) -> PaletteId {
    let picked = rng.random_range(0..count);
    match prev {
        Some(prev) if picked == prev && count > 1 => {
            // Uniform over the remaining indices, skipping `prev`.
            let redraw = rng.random_range(0..count - 1);
            if redraw >= prev { redraw + 1 } else { redraw }
        }
        _ => picked,
    }
}
