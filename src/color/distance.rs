//! Perceptual color distance
//!
//! Uses the low-cost "redmean" approximation described by Thiadmer Riemersma,
//! which weights the red and blue differences by the mean red level.

use crate::color::rgb::Rgb;
use crate::io::configuration::COLOR_SIMILARITY_THRESHOLD;

/// Approximate perceptual distance between two colors
///
/// Ranges from 0 for identical colors to about 765 for black against white.
pub fn color_distance(a: Rgb, b: Rgb) -> f64 {
    let r_mean = (i64::from(a.r) + i64::from(b.r)) / 2;
    let r = i64::from(a.r) - i64::from(b.r);
    let g = i64::from(a.g) - i64::from(b.g);
    let b = i64::from(a.b) - i64::from(b.b);

    let weighted =
        (((512 + r_mean) * r * r) >> 8) + 4 * g * g + (((767 - r_mean) * b * b) >> 8);
    (weighted as f64).sqrt()
}

/// Whether two colors are too close to tell apart in a rendered pattern
pub fn colors_too_similar(a: Rgb, b: Rgb) -> bool {
    color_distance(a, b) < COLOR_SIMILARITY_THRESHOLD
}
