//! Standalone demo: prints the tone ramp and text/hover picks for a color.
//!
//! ```text
//! RUST_LOG=solid_tones=trace cargo run --example palette -- "#3366FF"
//! ```

use solid_tones::{
    get_hex_brightness, get_hex_contrast, get_text_color, hex_to_rgba, is_hex_dark,
    pick_hover_bg, pick_readable_text_color, HexColor, ItemColors, Step, ToneRamp,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base = std::env::args().nth(1).unwrap_or_else(|| "#3366FF".to_string());
    if let Err(err) = HexColor::parse(&base) {
        tracing::warn!(input = %base, %err, "not a hex color, results fall back to defaults");
    }

    let ramp = ToneRamp::new(&base);
    println!("base      {base}  {}", hex_to_rgba(&base, 1));
    println!(
        "brightness {:.1} ({})",
        get_hex_brightness(&base),
        if is_hex_dark(&base) { "dark" } else { "light" }
    );
    for (i, swatch) in ramp.swatches().into_iter().enumerate() {
        println!("  {i:>2}  {swatch}  contrast vs white {:.2}", get_hex_contrast(swatch, "#FFFFFF"));
    }

    println!(
        "text      brightness pick {}  wcag pick {}",
        pick_readable_text_color(&base, "#222222", "#FFFFFF"),
        get_text_color(&base, "#222222", "#FFFFFF"),
    );
    println!(
        "hover     {}",
        pick_hover_bg(&base, ramp.shade(Step::One), ramp.tint(Step::One))
    );

    let item = ItemColors::selected(&base, "#222222", "#FFFFFF");
    println!(
        "selected  bg {} text {} active {}",
        item.background, item.text, item.active_background
    );
}
