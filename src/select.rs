//! Picking text and hover colors for a given background.
//!
//! Every selector returns one of its candidate arguments unchanged.

use crate::math::{
    contrast_from_luminance, get_hex_brightness, get_hex_contrast, is_hex_dark,
    substring_luminance,
};

/// Pick the candidate that reads best on `bg_color` by brightness.
///
/// On a light background the darker candidate wins; on a dark background
/// the lighter one wins. Ties go to `inverted_text_option`.
///
/// Brightness is used instead of contrast ratio so that saturated mid-tone
/// backgrounds (a green success button, say) can still get white text.
pub fn pick_readable_text_color<'a>(
    bg_color: &str,
    base_text_option: &'a str,
    inverted_text_option: &'a str,
) -> &'a str {
    let base = get_hex_brightness(base_text_option);
    let inverted = get_hex_brightness(inverted_text_option);
    let base_wins = if is_hex_dark(bg_color) {
        base > inverted
    } else {
        base < inverted
    };
    if base_wins {
        base_text_option
    } else {
        inverted_text_option
    }
}

/// Pick whichever candidate has the higher WCAG contrast against
/// `bg_color`, falling back to `dark_text_color` on ties.
///
/// Luminance comes from [`substring_luminance`], so a shorthand or
/// malformed color is read slice by slice rather than decoded.
pub fn get_text_color<'a>(
    bg_color: &str,
    dark_text_color: &'a str,
    light_text_color: &'a str,
) -> &'a str {
    let bg = substring_luminance(bg_color);
    let light = contrast_from_luminance(bg, substring_luminance(light_text_color));
    let dark = contrast_from_luminance(bg, substring_luminance(dark_text_color));
    if light > dark {
        light_text_color
    } else {
        dark_text_color
    }
}

/// Pick the hover background with the lower contrast against `bg_color`,
/// so the hover state stays subtle. Ties go to `base_hover_bg`.
pub fn pick_hover_bg<'a>(
    bg_color: &str,
    base_hover_bg: &'a str,
    inverted_hover_bg: &'a str,
) -> &'a str {
    let base = get_hex_contrast(bg_color, base_hover_bg);
    let inverted = get_hex_contrast(bg_color, inverted_hover_bg);
    if base > inverted {
        inverted_hover_bg
    } else {
        base_hover_bg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_background_prefers_bright_text() {
        assert_eq!(pick_readable_text_color("#1A1A1A", "#000000", "#FFFFFF"), "#FFFFFF");
        assert_eq!(pick_readable_text_color("#1A1A1A", "#FFFFFF", "#000000"), "#FFFFFF");
    }

    #[test]
    fn light_background_prefers_dark_text() {
        assert_eq!(pick_readable_text_color("#FAFAFA", "#000000", "#FFFFFF"), "#000000");
        assert_eq!(pick_readable_text_color("#FAFAFA", "#FFFFFF", "#222"), "#222");
    }

    #[test]
    fn readable_text_tie_goes_to_inverted() {
        assert_eq!(pick_readable_text_color("#000", "#fff", "#FFFFFF"), "#FFFFFF");
        assert_eq!(pick_readable_text_color("#fff", "#000", "#000000"), "#000000");
    }

    #[test]
    fn saturated_green_gets_white_text() {
        // brightness ~106.5 is dark, contrast ratio would prefer black
        let green = "#1e9e2a";
        assert!(is_hex_dark(green));
        assert!(get_hex_contrast(green, "#000000") > get_hex_contrast(green, "#ffffff"));
        assert_eq!(pick_readable_text_color(green, "#000000", "#ffffff"), "#ffffff");
    }

    #[test]
    fn text_color_uses_contrast() {
        assert_eq!(get_text_color("#000000", "#000000", "#ffffff"), "#ffffff");
        assert_eq!(get_text_color("#ffffff", "#000000", "#ffffff"), "#000000");
        assert_eq!(get_text_color("#1e9e2a", "#000000", "#ffffff"), "#000000");
    }

    #[test]
    fn text_color_tie_and_nan_go_to_dark() {
        // "#000" reads as three zero slices, same luminance as black
        assert_eq!(get_text_color("#777777", "#000000", "#000"), "#000000");
        assert_eq!(get_text_color("zzzzzzz", "#111111", "#eeeeee"), "#111111");
    }

    #[test]
    fn text_color_reads_shorthand_by_slices() {
        // "#fff" reads as 0xff, 0x0f, 0 here: a red with luminance ~0.216
        assert!(substring_luminance("#fff") < 0.25);
        assert_eq!(get_text_color("#000000", "#000000", "#fff"), "#fff");
        assert_eq!(get_text_color("#ffffff", "#ffffff", "#fff"), "#fff");
    }

    #[test]
    fn hover_prefers_lower_contrast() {
        assert_eq!(pick_hover_bg("#ffffff", "#f0f0f0", "#202020"), "#f0f0f0");
        assert_eq!(pick_hover_bg("#101010", "#f0f0f0", "#202020"), "#202020");
    }

    #[test]
    fn hover_tie_goes_to_base() {
        assert_eq!(pick_hover_bg("#808080", "#ffffff", "#fff"), "#ffffff");
    }
}
