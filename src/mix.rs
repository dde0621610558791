//! Blending and the fixed tint/shade scales.
//!
//! Colors are lightened by tinting toward white and darkened by shading
//! toward black, not by raising or lowering brightness.

use tracing::trace;

use crate::color::{hex_to_rgb_arr, is_valid_hex, rgb_to_hex, HexColor, RgbTriple};
use crate::constants::{BLACK, FALLBACK_HEX, SHADE_SCALE, TINT_SCALE, WHITE};
use crate::error::ColorError;

/// Position on the five-step tint/shade scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Step {
    /// All steps, lightest change first.
    pub const ALL: [Step; 5] = [Step::One, Step::Two, Step::Three, Step::Four, Step::Five];

    /// Zero-based index into a scale.
    pub const fn index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for Step {
    type Error = ColorError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Step::One),
            2 => Ok(Step::Two),
            3 => Ok(Step::Three),
            4 => Ok(Step::Four),
            5 => Ok(Step::Five),
            other => Err(ColorError::InvalidStep(other)),
        }
    }
}

fn blend(color1: RgbTriple, color2: RgbTriple, percent: f64) -> [f64; 3] {
    std::array::from_fn(|i| {
        let (a, b) = (f64::from(color1[i]), f64::from(color2[i]));
        (b + (a - b) * (percent / 100.0)).floor()
    })
}

/// Blend two hex colors channel by channel.
///
/// `percent` is the weight of `color1`: 0 gives `color2`, 100 gives
/// `color1`. Results are floored. When only one input is valid it is
/// returned as given; when neither is, `#000000`.
pub fn mix_hex(color1: &str, color2: &str, percent: f64) -> String {
    match (is_valid_hex(color1), is_valid_hex(color2)) {
        (true, true) => rgb_to_hex(&blend(
            hex_to_rgb_arr(color1),
            hex_to_rgb_arr(color2),
            percent,
        )),
        (true, false) => {
            trace!(input = color2, "invalid mix operand, keeping the other");
            color1.to_string()
        }
        (false, true) => {
            trace!(input = color1, "invalid mix operand, keeping the other");
            color2.to_string()
        }
        (false, false) => {
            trace!(color1, color2, "both mix operands invalid, using black");
            FALLBACK_HEX.to_string()
        }
    }
}

/// Tint `color` toward white by the [`TINT_SCALE`] entry for `step`.
pub fn lighten(color: &str, step: Step) -> String {
    mix_hex(WHITE, color, TINT_SCALE[step.index()])
}

/// Shade `color` toward black by the [`SHADE_SCALE`] entry for `step`.
pub fn darken(color: &str, step: Step) -> String {
    mix_hex(BLACK, color, SHADE_SCALE[step.index()])
}

impl HexColor {
    /// Blend `self` with `other`; `percent` is the weight of `self`.
    ///
    /// The percentage is clamped to 0–100 (NaN counts as 0) so the result
    /// always fits in 8-bit channels.
    pub fn mix(&self, other: &HexColor, percent: f64) -> HexColor {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        let [r, g, b] = blend(self.to_rgb_arr(), other.to_rgb_arr(), percent);
        HexColor::from_rgb(r as u8, g as u8, b as u8)
    }

    /// See [`lighten`].
    pub fn lighten(&self, step: Step) -> HexColor {
        HexColor::from_rgb(255, 255, 255).mix(self, TINT_SCALE[step.index()])
    }

    /// See [`darken`].
    pub fn darken(&self, step: Step) -> HexColor {
        HexColor::from_rgb(0, 0, 0).mix(self, SHADE_SCALE[step.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(mix_hex("#3366FF", "#FAFAFA", 0.0), "#fafafa");
        assert_eq!(mix_hex("#3366FF", "#FAFAFA", 100.0), "#3366ff");
    }

    #[test]
    fn halfway_floors() {
        // 0x33 + (0xff - 0x33) / 2 = 153
        assert_eq!(mix_hex("#ffffff", "#333333", 50.0), "#999999");
        assert_eq!(mix_hex("#000000", "#ffffff", 50.0), "#7f7f7f");
    }

    #[test]
    fn invalid_operands() {
        assert_eq!(mix_hex("bad", "#fff", 50.0), "#fff");
        assert_eq!(mix_hex("#ABC", "bad", 50.0), "#ABC");
        assert_eq!(mix_hex("bad", "worse", 50.0), "#000000");
    }

    #[test]
    fn out_of_range_percent_is_not_clamped() {
        assert_eq!(mix_hex("#ff0000", "#000000", 150.0), "#17e0000");
        assert_eq!(mix_hex("#ffffff", "#000000", 200.0), "#000000");
        assert_eq!(mix_hex("#ffffff", "#000000", f64::NAN), "#000000");
    }

    #[test]
    fn lighten_first_step() {
        assert_eq!(lighten("#3366FF", Step::One), mix_hex("#FFFFFF", "#3366FF", 10.0));
        assert_eq!(lighten("#3366FF", Step::One), "#4775ff");
    }

    #[test]
    fn darken_first_step() {
        assert_eq!(darken("#3366FF", Step::One), "#2d5be5");
    }

    #[test]
    fn lighten_darken_invalid_color_returns_target() {
        assert_eq!(lighten("oops", Step::Three), "#FFFFFF");
        assert_eq!(darken("oops", Step::Three), "#000000");
    }

    #[test]
    fn step_conversion() {
        assert_eq!(Step::try_from(1u8), Ok(Step::One));
        assert_eq!(Step::try_from(5u8), Ok(Step::Five));
        assert_eq!(Step::try_from(0u8), Err(ColorError::InvalidStep(0)));
        assert_eq!(Step::try_from(6u8), Err(ColorError::InvalidStep(6)));
        let indices: Vec<usize> = Step::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn typed_mix_matches_free_function() {
        let blue = HexColor::parse("#3366ff").unwrap();
        for step in Step::ALL {
            assert_eq!(blue.lighten(step).to_hex(), lighten("#3366ff", step));
            assert_eq!(blue.darken(step).to_hex(), darken("#3366ff", step));
        }
    }

    #[test]
    fn typed_mix_clamps_percent() {
        let red = HexColor::from_rgb(255, 0, 0);
        let black = HexColor::from_rgb(0, 0, 0);
        assert_eq!(red.mix(&black, 150.0), red);
        assert_eq!(red.mix(&black, -20.0), black);
        assert_eq!(red.mix(&black, f64::NAN), black);
    }
}
