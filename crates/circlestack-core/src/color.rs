//! Fill color representation and CSS-style parsing.
//!
//! Colors are stored in typed RGBA8 form; string parsing and formatting
//! happen only at the external attribute boundary.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fallback used when a color string cannot be parsed (mid gray).
pub const FALLBACK_COLOR: Rgba = Rgba::new(128, 128, 128, 255);

/// Error raised when a color string is not in a recognized form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color string: {0:?}")]
pub struct ColorParseError(pub String);

/// An RGBA8 color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse a color string, degrading to [`FALLBACK_COLOR`] on failure.
    ///
    /// This is the attribute-boundary entry point: invalid input is never an
    /// error at the component surface.
    pub fn parse_lossy(value: &str) -> Self {
        value.parse().unwrap_or(FALLBACK_COLOR)
    }

    /// Format as a lowercase hex string: `#rrggbb`, or `#rrggbbaa` when the
    /// alpha channel is not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError(s.to_string()));
        }
        named_color(trimmed).ok_or_else(|| ColorParseError(s.to_string()))
    }
}

/// Parse the digits of a hex color (without the leading `#`).
///
/// Accepts the short `rgb` form (each nibble doubled, so `#0d0` is
/// `#00dd00`) as well as `rrggbb` and `rrggbbaa`.
fn parse_hex(hex: &str) -> Option<Rgba> {
    let nibble = |c: u8| (c as char).to_digit(16).map(|d| d as u8);
    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Some(Rgba::opaque(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 | 8 => {
            let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
            let r = channel(0)?;
            let g = channel(2)?;
            let b = channel(4)?;
            let a = if bytes.len() == 8 { channel(6)? } else { 255 };
            Some(Rgba::new(r, g, b, a))
        }
        _ => None,
    }
}

/// Look up a CSS named color (basic palette), case-insensitively.
fn named_color(name: &str) -> Option<Rgba> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "silver" => (192, 192, 192),
        "gray" | "grey" => (128, 128, 128),
        "white" => (255, 255, 255),
        "maroon" => (128, 0, 0),
        "red" => (255, 0, 0),
        "purple" => (128, 0, 128),
        "fuchsia" | "magenta" => (255, 0, 255),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "olive" => (128, 128, 0),
        "yellow" => (255, 255, 0),
        "navy" => (0, 0, 128),
        "blue" => (0, 0, 255),
        "teal" => (0, 128, 128),
        "aqua" | "cyan" => (0, 255, 255),
        "orange" => (255, 165, 0),
        _ => return None,
    };
    Some(Rgba::opaque(rgb.0, rgb.1, rgb.2))
}
