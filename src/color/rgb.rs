//! RGB color value and textual color parsing

use crate::color::names;
use crate::io::error::{PfpError, Result, invalid_color};
use std::fmt;
use std::str::FromStr;

/// Opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure black
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in RGB order
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation from `self` towards `target`
    ///
    /// `t` is expected in `[0, 1]`; each channel is rounded half away from zero.
    pub fn lerp(self, target: Self, t: f64) -> Self {
        let mix = |from: u8, to: u8| -> u8 {
            let from = f64::from(from);
            (f64::from(to) - from).mul_add(t, from).round().clamp(0.0, 255.0) as u8
        };
        Self::new(
            mix(self.r, target.r),
            mix(self.g, target.g),
            mix(self.b, target.b),
        )
    }

    /// Parse a color from a name, hex code or `r,g,b` triple
    ///
    /// Accepted forms are the CSS color names (any ASCII case), `#rgb`, `#rgba`,
    /// `#rrggbb`, `#rrggbbaa` and comma separated decimal channels. Alpha
    /// digits are validated and then discarded.
    ///
    /// # Errors
    ///
    /// Returns `PfpError::InvalidColor` when the text matches none of the forms,
    /// has the wrong number of components or a channel outside `0..=255`
    pub fn parse(input: &str) -> Result<Self> {
        let text = input.trim();
        if let Some(digits) = text.strip_prefix('#') {
            parse_hex(input, digits)
        } else if text.contains(',') {
            parse_triple(input, text)
        } else {
            names::lookup(text).ok_or_else(|| invalid_color(input, &"unknown color name"))
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}) | {}", self.r, self.g, self.b, self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = PfpError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(color: Rgb) -> Self {
        Self(color.channels())
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

fn parse_hex(input: &str, digits: &str) -> Result<Rgb> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid_color(input, &"hex code contains non-hex characters"));
    }

    let values: Vec<u8> = match digits.len() {
        3 | 4 => digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| (d * 17) as u8)
            .collect(),
        6 | 8 => digits
            .as_bytes()
            .chunks(2)
            .filter_map(|pair| std::str::from_utf8(pair).ok())
            .filter_map(|pair| u8::from_str_radix(pair, 16).ok())
            .collect(),
        count => {
            return Err(invalid_color(
                input,
                &format!("hex code must have 3, 4, 6 or 8 digits, found {count}"),
            ));
        }
    };

    match values.as_slice() {
        [r, g, b] | [r, g, b, _] => Ok(Rgb::new(*r, *g, *b)),
        _ => Err(invalid_color(input, &"malformed hex code")),
    }
}

fn parse_triple(input: &str, text: &str) -> Result<Rgb> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(invalid_color(
            input,
            &format!("expected 3 components, found {}", parts.len()),
        ));
    };

    let channel = |part: &str| -> Result<u8> {
        let value: u32 = part
            .parse()
            .map_err(|error| invalid_color(input, &format!("'{part}' is not a number: {error}")))?;
        u8::try_from(value)
            .ok()
            .ok_or_else(|| invalid_color(input, &format!("channel {value} is outside 0..=255")))
    };

    Ok(Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?))
}
