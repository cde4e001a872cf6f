//! Layout engine for a procedurally generated 2-D wheel collage.
//!
//! Main components:
//! - [`palette`] — color palettes and the built-in table.
//! - [`wheel`] — placed wheel motifs.
//! - [`connector`] — proximity links between wheels.
//! - [`layout`] — wheel placement and connector generation.
//! - [`config`] — tunables for the generator.
//! - [`error`] — precondition errors.
//! - [`types`] — shared index aliases.

pub mod config;
pub mod connector;
pub mod error;
pub mod layout;
pub mod palette;
pub mod types;
pub mod wheel;

pub use config::LayoutConfig;
pub use connector::Connector;
pub use error::ConfigError;
pub use layout::{Layout, connect_wheels, place_wheels};
pub use palette::{BACKGROUND, PALETTES, Palette, Rgb};
pub use types::{PaletteId, WheelId};
pub use wheel::Wheel;
