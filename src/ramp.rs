//! Palettes derived from a single base color.
//!
//! A theme defines one color per role; the lighter and darker variants a
//! component needs (pressed states, subtle fills) are extrapolated from it
//! here rather than authored by hand.

use crate::constants::{BLACK, SHADE_SCALE, TINT_SCALE, WHITE};
use crate::mix::{darken, mix_hex, Step};
use crate::select::pick_readable_text_color;

/// Blend percentages used to build a [`ToneRamp`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "use_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RampConfig {
    /// Percent of white mixed in for steps 1–5
    pub tint: [f64; 5],
    /// Percent of black mixed in for steps 1–5
    pub shade: [f64; 5],
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            tint: TINT_SCALE,
            shade: SHADE_SCALE,
        }
    }
}

/// A base color with five tints and five shades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneRamp {
    base: String,
    tints: [String; 5],
    shades: [String; 5],
}

impl ToneRamp {
    /// Build with the default scales; equivalent to calling [`lighten`] and
    /// [`darken`] for every step.
    ///
    /// [`lighten`]: crate::lighten
    pub fn new(base: &str) -> Self {
        Self::with_config(base, &RampConfig::default())
    }

    /// Build with custom tint and shade percentages.
    pub fn with_config(base: &str, config: &RampConfig) -> Self {
        Self {
            base: base.to_string(),
            tints: std::array::from_fn(|i| mix_hex(WHITE, base, config.tint[i])),
            shades: std::array::from_fn(|i| mix_hex(BLACK, base, config.shade[i])),
        }
    }

    /// The color the ramp was built from, as given.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Tint at `step`; higher steps are closer to white.
    pub fn tint(&self, step: Step) -> &str {
        &self.tints[step.index()]
    }

    /// Shade at `step`; higher steps are closer to black.
    pub fn shade(&self, step: Step) -> &str {
        &self.shades[step.index()]
    }

    /// Every color from darkest shade to lightest tint, base in the middle.
    pub fn swatches(&self) -> Vec<&str> {
        self.shades
            .iter()
            .rev()
            .map(String::as_str)
            .chain(std::iter::once(self.base.as_str()))
            .chain(self.tints.iter().map(String::as_str))
            .collect()
    }
}

/// Colors for a selected list or menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemColors {
    /// Selected background, as given
    pub background: String,
    /// Readable text color for `background`
    pub text: String,
    /// Background while the item is pressed
    pub active_background: String,
}

impl ItemColors {
    /// Derive item colors from the theme's selected background and its two
    /// text colors.
    pub fn selected(bg: &str, primary_text: &str, inverted_text: &str) -> Self {
        Self {
            background: bg.to_string(),
            text: pick_readable_text_color(bg, primary_text, inverted_text).to_string(),
            active_background: darken(bg, Step::One),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::get_hex_brightness;
    use crate::mix::lighten;

    #[test]
    fn default_ramp_matches_lighten_and_darken() {
        let ramp = ToneRamp::new("#3366ff");
        assert_eq!(ramp.base(), "#3366ff");
        for step in Step::ALL {
            assert_eq!(ramp.tint(step), lighten("#3366ff", step));
            assert_eq!(ramp.shade(step), darken("#3366ff", step));
        }
    }

    #[test]
    fn swatches_run_dark_to_light() {
        let ramp = ToneRamp::new("#e5484d");
        let swatches = ramp.swatches();
        assert_eq!(swatches.len(), 11);
        assert_eq!(swatches[5], "#e5484d");
        let brightness: Vec<f64> = swatches.iter().map(|s| get_hex_brightness(s)).collect();
        assert!(brightness.windows(2).all(|w| w[0] < w[1]), "{brightness:?}");
    }

    #[test]
    fn custom_scales() {
        let config = RampConfig {
            tint: [0.0, 25.0, 50.0, 75.0, 100.0],
            shade: [0.0, 25.0, 50.0, 75.0, 100.0],
        };
        let ramp = ToneRamp::with_config("#808080", &config);
        assert_eq!(ramp.tint(Step::One), "#808080");
        assert_eq!(ramp.tint(Step::Five), "#ffffff");
        assert_eq!(ramp.shade(Step::Five), "#000000");
    }

    #[test]
    fn ramp_of_invalid_color_is_flat() {
        let ramp = ToneRamp::new("nope");
        assert!(Step::ALL.iter().all(|&s| ramp.tint(s) == "#FFFFFF"));
        assert!(Step::ALL.iter().all(|&s| ramp.shade(s) == "#000000"));
    }

    #[test]
    fn selected_item_on_dark_background() {
        let colors = ItemColors::selected("#1A1A1A", "#222222", "#FFFFFF");
        assert_eq!(colors.background, "#1A1A1A");
        assert_eq!(colors.text, "#FFFFFF");
        assert_eq!(colors.active_background, darken("#1A1A1A", Step::One));
    }

    #[test]
    fn selected_item_on_light_background() {
        let colors = ItemColors::selected("#E6F0FF", "#222222", "#FFFFFF");
        assert_eq!(colors.text, "#222222");
    }

    #[cfg(feature = "use_serde")]
    #[test]
    fn config_deserializes_with_defaults() {
        let config: RampConfig = serde_json::from_str(r#"{"tint":[5,10,15,20,25]}"#).unwrap();
        assert_eq!(config.tint, [5.0, 10.0, 15.0, 20.0, 25.0]);
        assert_eq!(config.shade, SHADE_SCALE);
    }
}
