//! Turning patterns into pixels and text

/// Multi-image collage for batches
pub mod collage;
/// Grid to pixel buffer rasterization
pub mod raster;
/// Terminal character preview
pub mod terminal;

pub use collage::collage;
pub use raster::{average_distance_to, render};
pub use terminal::{AsciiStyle, adjust, to_ascii};
