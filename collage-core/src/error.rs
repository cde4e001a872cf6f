//! Precondition errors reported by [`crate::layout::Layout::generate`].
//!
//! Running out of placement attempts is deliberately not an error: the
//! engine returns the partial layout and logs a diagnostic instead.

use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Canvas dimensions were zero, negative, or non-finite.
    InvalidCanvas { width: f32, height: f32 },
    /// Radius fraction bounds were non-positive, non-finite, or inverted.
    InvalidRadiusRange { min: f32, max: f32 },
    /// A placement or connection factor was unusable.
    InvalidFactor { name: &'static str, value: f32 },
    /// The palette table had no entries to choose from.
    EmptyPaletteTable,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCanvas { width, height } => {
                write!(f, "canvas size {width}x{height} is not drawable")
            }
            Self::InvalidRadiusRange { min, max } => {
                write!(f, "radius fraction range [{min}, {max}] is unusable")
            }
            Self::InvalidFactor { name, value } => {
                write!(f, "{name} = {value} is unusable")
            }
            Self::EmptyPaletteTable => write!(f, "palette table is empty"),
        }
    }
}

impl Error for ConfigError {}
