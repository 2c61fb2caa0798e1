//! Deterministic symmetric profile pictures derived from text
//!
//! Text is hashed into a seed, the seed drives a PCG generator that fills the
//! left half of a square grid which is then mirrored, and the grid is painted
//! as solid blocks in a background and a weighted foreground color. The same
//! text and parameters always give the same image; without text the seed is
//! random.

#![forbid(unsafe_code)]

/// Color values, parsing and distance
pub mod color;
/// End-to-end generation and batches
pub mod generation;
/// Command line, export, configuration and error handling
pub mod io;
/// Seeded grid and color construction
pub mod pattern;
/// Rasterization, collages and terminal previews
pub mod render;
/// Seed derivation from text or randomness
pub mod seed;

pub use generation::{GenerationConfig, Generated, generate, generate_batch};
pub use io::error::{PfpError, Result};
