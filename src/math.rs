//! Photometric math: relative luminance, contrast ratio and YIQ brightness.
//!
//! Two luminance paths exist. [`relative_luminance`] works on decoded RGB
//! integers and backs [`get_hex_contrast`]. [`substring_luminance`] reads
//! the raw two-character slices of a hex string and backs
//! [`get_text_color`](crate::get_text_color). They disagree on shorthand
//! and malformed input, and are kept apart so each selector keeps its
//! behavior.

use crate::color::{hex_to_rgb_arr, HexColor, RgbTriple};
use crate::constants::{
    BRIGHTNESS_WEIGHTS, CONTRAST_OFFSET, DARK_BRIGHTNESS_THRESHOLD, LUMINANCE_WEIGHTS,
    SRGB_GAMMA, SRGB_LINEAR_CUTOFF,
};

/// sRGB gamma expansion of a channel normalized to 0.0–1.0.
fn linearize(normalized: f64) -> f64 {
    if normalized <= SRGB_LINEAR_CUTOFF {
        normalized / 12.92
    } else {
        ((normalized + 0.055) / 1.055).powf(SRGB_GAMMA)
    }
}

fn weighted_luminance(r: f64, g: f64, b: f64) -> f64 {
    LUMINANCE_WEIGHTS[0] * r + LUMINANCE_WEIGHTS[1] * g + LUMINANCE_WEIGHTS[2] * b
}

/// WCAG relative luminance of 0–255 RGB channels.
pub fn relative_luminance(rgb: RgbTriple) -> f64 {
    let [r, g, b] = rgb.map(|c| linearize(f64::from(c) / 255.0));
    weighted_luminance(r, g, b)
}

/// WCAG contrast ratio `(L1 + 0.05) / (L2 + 0.05)` with `L1` the larger.
///
/// A NaN luminance yields NaN.
pub fn contrast_from_luminance(a: f64, b: f64) -> f64 {
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + CONTRAST_OFFSET) / (darker + CONTRAST_OFFSET)
}

/// Contrast ratio between two hex colors. Invalid input counts as black.
pub fn get_hex_contrast(color1: &str, color2: &str) -> f64 {
    contrast_from_luminance(
        relative_luminance(hex_to_rgb_arr(color1)),
        relative_luminance(hex_to_rgb_arr(color2)),
    )
}

fn yiq_brightness(rgb: RgbTriple) -> f64 {
    let [r, g, b] = rgb.map(f64::from);
    (r * BRIGHTNESS_WEIGHTS[0] + g * BRIGHTNESS_WEIGHTS[1] + b * BRIGHTNESS_WEIGHTS[2]) / 1000.0
}

/// Perceived brightness (0–255) from raw channel values.
pub fn get_hex_brightness(hex: &str) -> f64 {
    yiq_brightness(hex_to_rgb_arr(hex))
}

/// True when the brightness falls below [`DARK_BRIGHTNESS_THRESHOLD`].
pub fn is_hex_dark(hex: &str) -> bool {
    get_hex_brightness(hex) < DARK_BRIGHTNESS_THRESHOLD
}

/// Relative luminance read straight from the characters at positions
/// 1–2, 3–4 and 5–6 of `hex`, without validating it first.
///
/// Each slice is read as a lenient base-16 prefix. When that read is zero
/// or finds no digits, the slice is read again as a decimal number, where an
/// empty slice counts as 0 and anything unreadable as NaN.
pub fn substring_luminance(hex: &str) -> f64 {
    let channel = |start: usize| {
        let slice: String = hex.chars().skip(start).take(2).collect();
        linearize(substring_channel(&slice) / 255.0)
    };
    weighted_luminance(channel(1), channel(3), channel(5))
}

fn substring_channel(text: &str) -> f64 {
    match parse_hex_prefix(text) {
        Some(value) if value != 0.0 => value,
        _ => parse_decimal(text),
    }
}

/// Base-16 read of the longest digit prefix, after leading whitespace, an
/// optional sign and an optional `0x`.
fn parse_hex_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let mut digits = text.chars().map_while(|c| c.to_digit(16)).peekable();
    digits.peek()?;
    let value = digits.fold(0.0, |acc, d| acc * 16.0 + f64::from(d));
    Some(if negative { -value } else { value })
}

/// Decimal read of the whole trimmed slice.
fn parse_decimal(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    let numeric = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !numeric || !text.chars().any(|c| c.is_ascii_digit()) {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

impl HexColor {
    /// WCAG relative luminance (0.0–1.0).
    pub fn relative_luminance(&self) -> f64 {
        relative_luminance(self.to_rgb_arr())
    }

    /// Perceived brightness (0–255).
    pub fn brightness(&self) -> f64 {
        yiq_brightness(self.to_rgb_arr())
    }

    /// See [`is_hex_dark`].
    pub fn is_dark(&self) -> bool {
        self.brightness() < DARK_BRIGHTNESS_THRESHOLD
    }

    /// WCAG contrast ratio against `other`.
    pub fn contrast_ratio(&self, other: &HexColor) -> f64 {
        contrast_from_luminance(self.relative_luminance(), other.relative_luminance())
    }
}
