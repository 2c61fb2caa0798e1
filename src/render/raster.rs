//! Nearest-neighbour rasterization of a pattern grid

use image::{ImageBuffer, RgbImage};

use crate::color::Rgb;
use crate::io::error::{Result, invalid_size, require_positive};
use crate::pattern::{ColorPair, PatternGrid};

/// Paint every cell as a solid `pixel_block` square
///
/// The cell at `(row, col)` covers pixels from `(col * pixel_block,
/// row * pixel_block)`. Off cells use the background, on cells the blended
/// on-color. The image is exactly `size * pixel_block` pixels on each side.
///
/// # Errors
///
/// Returns `PfpError::InvalidSize` if `pixel_block` is zero, the image side
/// would not fit in `u32` or the pixel buffer would not fit in memory
pub fn render(grid: &PatternGrid, colors: &ColorPair, pixel_block: usize) -> Result<RgbImage> {
    let pixel_block = require_positive("pixel_block", pixel_block)?;
    let side = grid
        .size()
        .checked_mul(pixel_block)
        .and_then(|side| u32::try_from(side).ok())
        .ok_or_else(|| invalid_size("pixel_block", &pixel_block))?;
    (side as usize)
        .checked_mul(side as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| invalid_size("pixel_block", &pixel_block))?;

    let background = image::Rgb::from(colors.background);
    let on_color = image::Rgb::from(colors.on_color);

    Ok(ImageBuffer::from_fn(side, side, |x, y| {
        let row = y as usize / pixel_block;
        let col = x as usize / pixel_block;
        if grid.is_on(row, col) {
            on_color
        } else {
            background
        }
    }))
}

/// Mean Euclidean RGB distance of all pixels to a color
///
/// Returns 0 for an empty image.
pub fn average_distance_to(image: &RgbImage, color: Rgb) -> f64 {
    let pixel_count = image.width() as usize * image.height() as usize;
    if pixel_count == 0 {
        return 0.0;
    }

    let target = color.channels();
    let total: f64 = image
        .pixels()
        .map(|pixel| {
            pixel
                .0
                .iter()
                .zip(target)
                .map(|(&channel, goal)| {
                    let delta = f64::from(channel) - f64::from(goal);
                    delta * delta
                })
                .sum::<f64>()
                .sqrt()
        })
        .sum();

    total / pixel_count as f64
}
