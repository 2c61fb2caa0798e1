//! Color values, parsing and comparison

/// Perceptual distance between colors
pub mod distance;
/// CSS named color table
pub mod names;
/// RGB color type and parsing
pub mod rgb;

pub use distance::{color_distance, colors_too_similar};
pub use rgb::Rgb;
