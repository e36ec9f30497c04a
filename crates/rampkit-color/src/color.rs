// SPDX-License-Identifier: MIT
//
// The Rgb triple — parsing, formatting, and compositing.
//
// A color string is valid only if it carries exactly six hex digits
// (optionally prefixed with `#`). Shorthand forms (`#abc`) and embedded
// alpha (`#rrggbbaa`) are rejected: opacity in this system is always a
// separate value chosen by the scale engine, never baked into the swatch.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A color string failed to parse as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Wrong number of hex digits after stripping the optional `#`.
    #[error("expected exactly 6 hex digits, found {0}")]
    Length(usize),

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit `{0}`")]
    Digit(char),
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit-per-channel sRGB color.
///
/// This is the only color representation the scale engine sees. Opacity is
/// applied externally via [`Rgb::over`], which composites a foreground onto
/// a surface and returns a new opaque `Rgb`.
///
/// # Examples
///
/// ```
/// use rampkit_color::Rgb;
///
/// let orange: Rgb = "#ff8000".parse().unwrap();
/// assert_eq!(orange.to_hex(), "#ff8000");
///
/// // Half-opacity white over black is mid gray.
/// let gray = Rgb::WHITE.over(Rgb::BLACK, 0.5);
/// assert_eq!(gray, Rgb::new(128, 128, 128));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its three channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (the `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] unless the string is exactly six hex
    /// digits resolving to three 8-bit channels.
    pub fn hex(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s)
    }

    /// The three channels as an array, in `[r, g, b]` order.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Composite `self` over `surface` at the given opacity.
    ///
    /// Blending is a per-channel linear interpolation in 8-bit sRGB space,
    /// matching how the downstream renderer composites swatches. `alpha` is
    /// clamped to `[0, 1]`; 0 returns the surface, 1 returns `self`.
    #[must_use]
    pub fn over(self, surface: Self, alpha: f64) -> Self {
        // Fast paths
        if alpha >= 1.0 {
            return self;
        }
        if alpha <= 0.0 {
            return surface;
        }

        let mix = |fg: u8, bg: u8| -> u8 {
            to_u8(f64::from(fg).mul_add(alpha, f64::from(bg) * (1.0 - alpha)))
        };

        Self {
            r: mix(self.r, surface.r),
            g: mix(self.g, surface.g),
            b: mix(self.b, surface.b),
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ─── Serde ───────────────────────────────────────────────────────────────────
//
// Colors serialize as their hex string so flattened scale tables read as
// ordinary design-token documents: `"surface": "#1a2b3c"`.

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Result<Rgb, ParseColorError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 {
        return Err(ParseColorError::Length(digits.len()));
    }

    let mut channels = [0u8; 3];
    for (channel, pair) in channels.iter_mut().zip(digits.as_bytes().chunks_exact(2)) {
        let hi = hex_digit(pair[0]).ok_or(ParseColorError::Digit(pair[0] as char))?;
        let lo = hex_digit(pair[1]).ok_or(ParseColorError::Digit(pair[1] as char))?;
        *channel = hi << 4 | lo;
    }

    let [r, g, b] = channels;
    Ok(Rgb::new(r, g, b))
}

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Convert a float (0.0–255.0) to a u8 with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v + 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
