//! Hex color representation: validation, hex ↔ RGB conversion and the
//! validated `HexColor` value type.
//!
//! The free functions take untrusted strings and never fail. `HexColor` is
//! the typed entry point for callers that want parse errors instead of a
//! silent fallback to black.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::constants::{FALLBACK_HEX, FALLBACK_RGBA};
use crate::error::{ColorError, Result};

/// Red, green and blue channels in that order.
///
/// Decoded colors stay within 0–255. Blends with a percentage outside
/// 0–100 can leave that range.
pub type RgbTriple = [i32; 3];

/// True iff `input` is `#` followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex(input: &str) -> bool {
    match input.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Decode a hex string to its 24-bit `0xRRGGBB` value, expanding `#RGB`
/// shorthand by doubling each digit.
fn packed_rgb(hex: &str) -> Option<u32> {
    if !is_valid_hex(hex) {
        return None;
    }
    let digits = &hex[1..];
    let shorthand = digits.len() == 3;
    digits.chars().try_fold(0u32, |acc, c| {
        let n = c.to_digit(16)?;
        Some(if shorthand {
            (acc << 8) | (n << 4) | n
        } else {
            (acc << 4) | n
        })
    })
}

fn unpack(value: u32) -> RgbTriple {
    [
        ((value >> 16) & 0xFF) as i32,
        ((value >> 8) & 0xFF) as i32,
        (value & 0xFF) as i32,
    ]
}

/// Convert a hex string to `[r, g, b]`. Invalid input yields `[0, 0, 0]`.
pub fn hex_to_rgb_arr(hex: &str) -> RgbTriple {
    match packed_rgb(hex) {
        Some(value) => unpack(value),
        None => {
            trace!(input = hex, "invalid hex color, using black");
            [0, 0, 0]
        }
    }
}

/// Convert RGB channels to a lowercase `#rrggbb` string.
///
/// The slice is accepted when it has exactly three channels and at least
/// one of them lies strictly between -1 and 256. Otherwise `#000000` is
/// returned. Channels are rounded half-up and are not clamped, so a value
/// like `300` or `-5` is written as `12c` or `-5`.
pub fn rgb_to_hex<T: Into<f64> + Copy>(rgb: &[T]) -> String {
    let accepted = rgb.len() == 3
        && rgb.iter().any(|&c| {
            let c: f64 = c.into();
            c > -1.0 && c < 256.0
        });
    if !accepted {
        trace!(channels = rgb.len(), "invalid rgb channels, using black");
        return FALLBACK_HEX.to_string();
    }
    rgb.iter().fold(String::from("#"), |mut acc, &c| {
        let pair = hex_digits(round_half_up(c.into()));
        if pair.len() < 2 {
            acc.push('0');
        }
        acc.push_str(&pair);
        acc
    })
}

/// Format a color as `rgba(r,g,b,alpha)`, with `alpha` written verbatim.
///
/// Invalid hex yields transparent black, `rgba(0,0,0,0)`.
pub fn hex_to_rgba(hex: &str, alpha: impl fmt::Display) -> String {
    match packed_rgb(hex) {
        Some(value) => {
            let [r, g, b] = unpack(value);
            format!("rgba({r},{g},{b},{alpha})")
        }
        None => {
            trace!(input = hex, "invalid hex color, using transparent black");
            FALLBACK_RGBA.to_string()
        }
    }
}

/// [`hex_to_rgba`] with an alpha of 1.
pub fn hex_to_rgba_opaque(hex: &str) -> String {
    hex_to_rgba(hex, 1)
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Lowercase base-16 text of an integral `f64`, with a leading `-` for
/// negatives and no width limit.
fn hex_digits(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mut n = value.abs();
    let mut digits = Vec::new();
    loop {
        let d = (n % 16.0) as u32;
        digits.push(char::from_digit(d, 16).unwrap_or('0'));
        n = (n / 16.0).floor();
        if n == 0.0 {
            break;
        }
    }
    if value < 0.0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

/// An opaque sRGB color that is known to be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Red channel (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green channel (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }
}

impl HexColor {
    /// Create from 0–255 RGB values.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`, case-insensitive.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(ColorError::Empty);
        }
        let digits = input.strip_prefix('#').ok_or(ColorError::MissingHash)?;
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(bad));
        }
        let value = packed_rgb(input).ok_or(ColorError::InvalidLength(digits.len()))?;
        let [r, g, b] = unpack(value);
        Ok(Self::from_rgb(r as u8, g as u8, b as u8))
    }

    /// Channels as an [`RgbTriple`].
    pub fn to_rgb_arr(&self) -> RgbTriple {
        [i32::from(self.r), i32::from(self.g), i32::from(self.b)]
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Format as `rgba(r,g,b,alpha)`.
    pub fn to_rgba(&self, alpha: impl fmt::Display) -> String {
        format!("rgba({},{},{},{alpha})", self.r, self.g, self.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for HexColor {
    type Err = ColorError;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ColorError;
    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;
    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_hex()
    }
}
