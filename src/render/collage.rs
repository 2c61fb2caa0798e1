//! Batch collage layout

use image::RgbImage;
use image::imageops::{self, FilterType};

use crate::io::error::{Result, invalid_size, require_positive};

/// Tile images left-to-right, top-to-bottom, `per_row` to a row
///
/// Every tile takes the dimensions of the first image; differently sized
/// images are scaled with nearest-neighbour sampling. Unused slots in the last
/// row stay black.
///
/// # Errors
///
/// Returns `PfpError::InvalidSize` if `images` is empty or `per_row` is zero
pub fn collage(images: &[RgbImage], per_row: usize) -> Result<RgbImage> {
    let per_row = require_positive("per_row", per_row)?;
    let first = images.first().ok_or_else(|| invalid_size("images", &0))?;
    let (tile_width, tile_height) = first.dimensions();

    let columns = images.len().min(per_row);
    let rows = images.len().div_ceil(per_row);
    let mut canvas = RgbImage::new(tile_width * columns as u32, tile_height * rows as u32);

    for (index, image) in images.iter().enumerate() {
        let x = (index % per_row) as u32 * tile_width;
        let y = (index / per_row) as u32 * tile_height;
        if image.dimensions() == (tile_width, tile_height) {
            imageops::replace(&mut canvas, image, i64::from(x), i64::from(y));
        } else {
            let scaled = imageops::resize(image, tile_width, tile_height, FilterType::Nearest);
            imageops::replace(&mut canvas, &scaled, i64::from(x), i64::from(y));
        }
    }

    Ok(canvas)
}
