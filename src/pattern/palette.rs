//! Foreground/background selection and the color weight blend
//!
//! Derived colors continue the generator stream that built the grid:
//! the background is drawn first (only when not overridden), then up to
//! `MAX_FOREGROUND_ATTEMPTS` foreground candidates until one is distinct from
//! the background. Overridden colors consume no draws.

use log::debug;

use crate::color::{Rgb, colors_too_similar};
use crate::io::configuration::{
    BACKGROUND_TINT_FLOOR, BACKGROUND_TINT_SPAN, DEFAULT_COLOR_WEIGHT, MAX_FOREGROUND_ATTEMPTS,
};
use crate::pattern::rng::PatternRng;

/// Foreground prominence clamped to `[0, 1]`
///
/// Out-of-range input is corrected rather than rejected; NaN falls back to
/// the default weight.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ColorWeight(f64);

impl ColorWeight {
    /// Clamp a raw weight into range
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            Self(DEFAULT_COLOR_WEIGHT)
        } else {
            Self(raw.clamp(0.0, 1.0))
        }
    }

    /// Clamped value
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for ColorWeight {
    fn default() -> Self {
        Self(DEFAULT_COLOR_WEIGHT)
    }
}

impl From<f64> for ColorWeight {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

/// Caller supplied colors that bypass derivation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorOverrides {
    /// Explicit background color
    pub background: Option<Rgb>,
    /// Explicit foreground color
    pub foreground: Option<Rgb>,
}

/// Resolved colors for rendering one pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    /// Color of off cells
    pub background: Rgb,
    /// Unblended foreground color
    pub foreground: Rgb,
    /// Color of on cells: `background + (foreground - background) * weight`
    pub on_color: Rgb,
}

impl ColorPair {
    /// Blend a background/foreground pair with the given weight
    pub fn blend(background: Rgb, foreground: Rgb, weight: ColorWeight) -> Self {
        Self {
            background,
            foreground,
            on_color: background.lerp(foreground, weight.value()),
        }
    }

    /// Color used for a cell state
    pub const fn cell_color(&self, on: bool) -> Rgb {
        if on { self.on_color } else { self.background }
    }
}

/// Pick the colors for a pattern, continuing the generator stream
pub fn derive_colors(
    rng: &mut PatternRng,
    weight: ColorWeight,
    overrides: ColorOverrides,
) -> ColorPair {
    let background = overrides
        .background
        .unwrap_or_else(|| derive_background(rng));
    let foreground = overrides
        .foreground
        .unwrap_or_else(|| derive_foreground(rng, background));

    let pair = ColorPair::blend(background, foreground, weight);
    debug!(
        "Colors bg={} fg={} on={} (weight {})",
        pair.background.to_hex(),
        pair.foreground.to_hex(),
        pair.on_color.to_hex(),
        weight.value()
    );
    pair
}

// Pale tint, every channel in 224..=255
fn derive_background(rng: &mut PatternRng) -> Rgb {
    let tint = |channel: u8| BACKGROUND_TINT_FLOOR + channel % BACKGROUND_TINT_SPAN;
    let drawn = rng.draw_rgb();
    Rgb::new(tint(drawn.r), tint(drawn.g), tint(drawn.b))
}

fn derive_foreground(rng: &mut PatternRng, background: Rgb) -> Rgb {
    (0..MAX_FOREGROUND_ATTEMPTS)
        .map(|_| rng.draw_rgb())
        .find(|&candidate| !colors_too_similar(candidate, background))
        .unwrap_or(Rgb::BLACK)
}
