//! Text to image pipeline and batched generation
//!
//! Each run resolves its own seed, builds its own generator and renders a fresh
//! image, so batch elements share nothing and run in parallel.

use image::RgbImage;
use log::{debug, info};
use rayon::prelude::*;

use crate::color::Rgb;
use crate::io::configuration::{
    DEFAULT_BATCHES, DEFAULT_COLOR_WEIGHT, DEFAULT_PIXEL_BLOCK, DEFAULT_SIZE,
};
use crate::io::error::{Result, require_positive};
use crate::pattern::{ColorOverrides, ColorPair, ColorWeight, PatternGrid, build_pattern};
use crate::render::render;
use crate::seed::{Seed, SeedSource};

/// Parameters of one generation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Grid side length in cells
    pub size: usize,
    /// Pixel side length of one cell
    pub pixel_block: usize,
    /// Explicit background color
    pub background: Option<Rgb>,
    /// Explicit foreground color
    pub foreground: Option<Rgb>,
    /// Foreground prominence for on cells
    pub color_weight: ColorWeight,
    /// Number of images to generate
    pub batches: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            pixel_block: DEFAULT_PIXEL_BLOCK,
            background: None,
            foreground: None,
            color_weight: ColorWeight::new(DEFAULT_COLOR_WEIGHT),
            batches: DEFAULT_BATCHES,
        }
    }
}

impl GenerationConfig {
    /// Explicit colors as pattern overrides
    pub const fn overrides(&self) -> ColorOverrides {
        ColorOverrides {
            background: self.background,
            foreground: self.foreground,
        }
    }

    /// Check every dimension parameter
    ///
    /// # Errors
    ///
    /// Returns `PfpError::InvalidSize` if the size, pixel block or batch count
    /// is zero
    pub fn validate(&self) -> Result<()> {
        require_positive("size", self.size)?;
        require_positive("pixel_block", self.pixel_block)?;
        require_positive("batches", self.batches)?;
        Ok(())
    }
}

/// Output of one pipeline run
#[derive(Debug, Clone)]
pub struct Generated {
    /// Seed the pattern was built from
    pub seed: Seed,
    /// Mirror-symmetric cell layout
    pub grid: PatternGrid,
    /// Colors used for rendering
    pub colors: ColorPair,
    /// Rendered pixel buffer
    pub image: RgbImage,
}

/// Generate one image for optional text
///
/// Empty or missing text takes a random seed.
///
/// # Errors
///
/// Returns `PfpError::InvalidSize` if the configuration has a zero dimension
pub fn generate(text: Option<&str>, config: &GenerationConfig) -> Result<Generated> {
    config.validate()?;
    run(&SeedSource::from_text(text), config)
}

/// Generate `config.batches` images for optional text
///
/// With text every element is identical; without text each element has its
/// own random seed. Output order is stable.
///
/// # Errors
///
/// Returns `PfpError::InvalidSize` if the configuration has a zero dimension
pub fn generate_batch(text: Option<&str>, config: &GenerationConfig) -> Result<Vec<Generated>> {
    config.validate()?;
    let source = SeedSource::from_text(text);
    info!(
        "Generating {} {}x{} pattern(s) from a {} seed",
        config.batches,
        config.size,
        config.size,
        if source.is_deterministic() { "text" } else { "random" }
    );

    (0..config.batches)
        .into_par_iter()
        .map(|_| run(&source, config))
        .collect()
}

fn run(source: &SeedSource, config: &GenerationConfig) -> Result<Generated> {
    let seed = source.resolve();
    let pattern = build_pattern(&seed, config.size, config.color_weight, config.overrides())?;
    let image = render(&pattern.grid, &pattern.colors, config.pixel_block)?;
    debug!(
        "Rendered {}x{} image for seed {}",
        image.width(),
        image.height(),
        seed.short_hex()
    );

    Ok(Generated {
        seed,
        grid: pattern.grid,
        colors: pattern.colors,
        image,
    })
}
