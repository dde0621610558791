//! # solid-tones
//!
//! Hex color math for design-system theming.
//!
//! Provides hex/RGB conversion, WCAG relative luminance and contrast, a
//! YIQ-style brightness heuristic with a light/dark split, readable text and
//! hover color selection, percentage blending, and five-step tint/shade
//! ramps built from one base color.
//!
//! The free functions accept untrusted strings and never fail: malformed
//! input degrades to black (`#000000`), transparent black (`rgba(0,0,0,0)`)
//! or, for [`mix_hex`], the valid operand. Use [`HexColor`] when a parse
//! error is preferable to a silent fallback.
//!
//! ## Usage
//!
//! ```rust
//! use solid_tones::{darken, get_hex_contrast, pick_readable_text_color, Step};
//!
//! let bg = "#3366FF";
//! let text = pick_readable_text_color(bg, "#222222", "#FFFFFF");
//! assert_eq!(text, "#FFFFFF");
//! assert!(get_hex_contrast(bg, text) > 4.5);
//! assert_eq!(darken(bg, Step::One), "#2d5be5");
//! ```

mod color;
pub mod constants;
mod error;
mod math;
mod mix;
mod ramp;
mod select;

pub use color::{
    hex_to_rgb_arr, hex_to_rgba, hex_to_rgba_opaque, is_valid_hex, rgb_to_hex, HexColor,
    RgbTriple,
};
pub use error::{ColorError, Result};
pub use math::{
    contrast_from_luminance, get_hex_brightness, get_hex_contrast, is_hex_dark,
    relative_luminance, substring_luminance,
};
pub use mix::{darken, lighten, mix_hex, Step};
pub use ramp::{ItemColors, RampConfig, ToneRamp};
pub use select::{get_text_color, pick_hover_bg, pick_readable_text_color};
