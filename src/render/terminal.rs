//! Character-cell preview of a rendered image
//!
//! The image is split into cells twice as tall as they are wide, matching the
//! usual terminal glyph aspect. Each cell maps
//! to a character by mean luminance and optionally carries its mean color as a
//! 24-bit ANSI escape.

use image::RgbImage;
use image::imageops;
use std::ops::Range;
use std::str::FromStr;

use crate::color::Rgb;
use crate::io::error::{Result, invalid_size, require_positive};

/// Character ramp used for the preview, darkest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsciiStyle {
    /// Ten-step ramp of common symbols
    Simple,
    /// Solid block for every cell, relying on color
    #[default]
    Bars,
    /// Long ramp with fine luminance steps
    Complex,
}

impl AsciiStyle {
    /// Characters ordered from darkest to lightest
    pub const fn ramp(self) -> &'static str {
        match self {
            Self::Simple => "@%#*+=-:. ",
            Self::Bars => "█",
            Self::Complex => {
                "$@B%8&WM#*zcvunxrjft/\\|()1{}[]?-_+~<>i!lI;;::,,,\"\"\"^^^`````'''''.......     "
            }
        }
    }
}

impl FromStr for AsciiStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "bars" => Ok(Self::Bars),
            "complex" => Ok(Self::Complex),
            other => Err(format!(
                "unknown preview style '{other}' (expected simple, bars or complex)"
            )),
        }
    }
}

/// Render an image as text, `columns` characters wide
///
/// Columns beyond the image width are reduced to one per pixel.
///
/// # Errors
///
/// Returns `PfpError::InvalidSize` if `columns` is zero or the image is empty
pub fn to_ascii(
    image: &RgbImage,
    columns: usize,
    style: AsciiStyle,
    colored: bool,
) -> Result<String> {
    let columns = require_positive("columns", columns)?;
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(invalid_size("image", &format!("{width}x{height}")));
    }

    let columns = columns.min(width as usize);
    let cell_width = f64::from(width) / columns as f64;
    let cell_height = 2.0 * cell_width;
    let rows = ((f64::from(height) / cell_height).round() as usize).max(1);
    let ramp: Vec<char> = style.ramp().chars().collect();

    let mut output = String::new();
    for row in 0..rows {
        let y_span = cell_span(row, cell_height, height);
        for column in 0..columns {
            let x_span = cell_span(column, cell_width, width);
            let color = mean_color(image, x_span, y_span.clone());
            let glyph = ramp
                .get(ramp_index(color, ramp.len()))
                .copied()
                .unwrap_or(' ');
            if colored {
                output.push_str(&format!(
                    "\x1b[38;2;{};{};{}m{glyph}\x1b[0m",
                    color.r, color.g, color.b
                ));
            } else {
                output.push(glyph);
            }
        }
        if row + 1 < rows {
            output.push('\n');
        }
    }

    Ok(output)
}

/// Apply optional contrast and then brightness changes ahead of a preview
///
/// `contrast` is a percentage change where negative values flatten the image
/// towards mid gray. `brightness` is added to every channel, saturating at the
/// channel bounds. Without either the image is returned unchanged.
pub fn adjust(image: &RgbImage, brightness: Option<i32>, contrast: Option<f32>) -> RgbImage {
    let contrasted = match contrast {
        Some(percent) => imageops::contrast(image, percent),
        None => image.clone(),
    };
    match brightness {
        Some(value) => imageops::brighten(&contrasted, value),
        None => contrasted,
    }
}

fn cell_span(index: usize, extent: f64, limit: u32) -> Range<u32> {
    let start = ((index as f64 * extent) as u32).min(limit.saturating_sub(1));
    let end = (((index + 1) as f64 * extent) as u32).clamp(start + 1, limit);
    start..end
}

fn mean_color(image: &RgbImage, x_span: Range<u32>, y_span: Range<u32>) -> Rgb {
    let mut sums = [0u64; 3];
    let mut count = 0u64;
    for y in y_span {
        for x in x_span.clone() {
            if let Some(pixel) = image.get_pixel_checked(x, y) {
                for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
                    *sum += u64::from(channel);
                }
                count += 1;
            }
        }
    }

    let [r, g, b] = sums.map(|sum| (sum / count.max(1)) as u8);
    Rgb::new(r, g, b)
}

fn ramp_index(color: Rgb, ramp_len: usize) -> usize {
    let luminance = 0.114f64.mul_add(
        f64::from(color.b),
        0.299f64.mul_add(f64::from(color.r), 0.587 * f64::from(color.g)),
    );
    ((luminance * ramp_len as f64 / 255.0) as usize).min(ramp_len.saturating_sub(1))
}
