//! Mirror-symmetric boolean pattern grid
//!
//! Only the left half of each row (including the middle column for odd sizes)
//! is drawn from the generator. The right half is written by mirroring, so
//! `grid[r][c] == grid[r][size - 1 - c]` holds by construction.

use log::debug;
use ndarray::{Array2, ArrayView1};

use crate::io::error::{Result, invalid_size, require_positive};
use crate::pattern::rng::PatternRng;
use crate::seed::Seed;

/// Square grid of cell states stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrid {
    cells: Array2<bool>,
}

impl PatternGrid {
    /// Wrap an existing square cell matrix
    ///
    /// # Errors
    ///
    /// Returns `PfpError::InvalidSize` if the matrix is empty or not square
    pub fn from_cells(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        require_positive("size", rows)?;
        if rows != cols {
            return Err(invalid_size("size", &format!("{rows}x{cols}")));
        }
        Ok(Self { cells })
    }

    /// Number of rows, equal to the number of columns
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// State of a cell, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get([row, col]).copied()
    }

    /// Whether a cell renders in the foreground color
    pub fn is_on(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// View of one row
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, bool>> {
        (row < self.size()).then(|| self.cells.row(row))
    }

    /// Number of cells that are on
    pub fn count_on(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check the horizontal mirror invariant
    pub fn is_mirror_symmetric(&self) -> bool {
        let size = self.size();
        self.cells.outer_iter().all(|row| {
            (0..size / 2).all(|col| row.get(col) == row.get(size - 1 - col))
        })
    }

    /// Underlying row-major cell matrix
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }
}

/// Build the grid for a seed
///
/// # Errors
///
/// Returns `PfpError::InvalidSize` if `size` is zero
pub fn build_grid(seed: &Seed, size: usize) -> Result<PatternGrid> {
    let mut rng = PatternRng::new(seed);
    build_grid_with(&mut rng, size)
}

/// Build a grid from an already positioned generator
///
/// Draws happen row by row, left to right over `ceil(size / 2)` columns.
///
/// # Errors
///
/// Returns `PfpError::InvalidSize` if `size` is zero
pub fn build_grid_with(rng: &mut PatternRng, size: usize) -> Result<PatternGrid> {
    let size = require_positive("size", size)?;
    let half = size.div_ceil(2);
    let mut cells = Array2::from_elem((size, size), false);

    for row in 0..size {
        for col in 0..half {
            let on = rng.draw_cell();
            if let Some(cell) = cells.get_mut([row, col]) {
                *cell = on;
            }
            if let Some(mirror) = cells.get_mut([row, size - 1 - col]) {
                *mirror = on;
            }
        }
    }

    let grid = PatternGrid { cells };
    debug!("Built {size}x{size} grid with {} cells on", grid.count_on());
    Ok(grid)
}
