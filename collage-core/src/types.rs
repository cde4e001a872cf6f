/// Identifier for a wheel in a [`crate::layout::Layout`].
///
/// This is an index into `Layout::wheels`, and is only meaningful within
/// the lifetime of a given `Layout` instance.
pub type WheelId = usize;

/// Identifier for a palette in the table handed to the layout engine.
///
/// Palettes are compared by this index, never by reference.
pub type PaletteId = usize;
