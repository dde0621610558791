//! Design constants for brightness classification, luminance and tone ramps.

/// Brightness below this value classifies a color as dark
pub const DARK_BRIGHTNESS_THRESHOLD: f64 = 140.0;

/// Blend percentages toward white for lighten steps 1–5
pub const TINT_SCALE: [f64; 5] = [10.0, 20.0, 40.0, 80.0, 95.0];

/// Blend percentages toward black for darken steps 1–5
pub const SHADE_SCALE: [f64; 5] = [10.0, 20.0, 40.0, 60.0, 80.0];

/// Tint target
pub const WHITE: &str = "#FFFFFF";

/// Shade target
pub const BLACK: &str = "#000000";

/// Fallback for invalid hex input
pub const FALLBACK_HEX: &str = "#000000";

/// Fallback for invalid `rgba()` input (transparent black)
pub const FALLBACK_RGBA: &str = "rgba(0,0,0,0)";

/// YIQ brightness weights, per mille (R, G, B)
pub const BRIGHTNESS_WEIGHTS: [f64; 3] = [299.0, 587.0, 114.0];

/// Relative luminance weights (R, G, B)
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Normalized channel value at or below which the linear segment applies
pub const SRGB_LINEAR_CUTOFF: f64 = 0.03928;

/// Exponent of the sRGB gamma curve
pub const SRGB_GAMMA: f64 = 2.4;

/// Offset added to both luminances in the contrast ratio
pub const CONTRAST_OFFSET: f64 = 0.05;
