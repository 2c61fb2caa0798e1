//! Grid and colors from a single generator instance

use crate::io::error::Result;
use crate::pattern::grid::{PatternGrid, build_grid_with};
use crate::pattern::palette::{ColorOverrides, ColorPair, ColorWeight, derive_colors};
use crate::pattern::rng::PatternRng;
use crate::seed::Seed;

/// Cell layout and resolved colors of one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Mirror-symmetric cell states
    pub grid: PatternGrid,
    /// Colors for off and on cells
    pub colors: ColorPair,
}

/// Build the grid and then derive colors from the same stream
///
/// # Errors
///
/// Returns `PfpError::InvalidSize` if `size` is zero
pub fn build_pattern(
    seed: &Seed,
    size: usize,
    weight: ColorWeight,
    overrides: ColorOverrides,
) -> Result<Pattern> {
    let mut rng = PatternRng::new(seed);
    let grid = build_grid_with(&mut rng, size)?;
    let colors = derive_colors(&mut rng, weight, overrides);
    Ok(Pattern { grid, colors })
}
