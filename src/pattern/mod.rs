//! Pattern construction from a seed
//!
//! This module contains:
//! - The seeded generator shared by every draw of one pattern
//! - Mirror-symmetric grid construction
//! - Color derivation and the foreground weight blend

/// Combined grid and color construction
pub mod builder;
/// Symmetric boolean grid
pub mod grid;
/// Color selection and weighting
pub mod palette;
/// Seeded pattern generator
pub mod rng;

pub use builder::{Pattern, build_pattern};
pub use grid::{PatternGrid, build_grid};
pub use palette::{ColorOverrides, ColorPair, ColorWeight, derive_colors};
pub use rng::PatternRng;
