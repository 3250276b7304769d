//! Renders the active palette, scales and preferences into a CSS-variable
//! block consumed by the frontend.

use std::fmt::Write;

use super::palette::ThemePalette;
use super::preferences::DisplayPreferences;
use super::scale::{
    Breakpoint, BREAKPOINTS, FONT_BODY, FONT_MONO, FONT_SIZES_PX, KEYFRAMES_FADE_IN,
    KEYFRAMES_PULSE, RADIUS_PILL, RADIUS_PX, SPACING_PX, TRANSITION,
};

fn scaled_px(base: u16, percent: u16) -> u16 {
    (base as u32 * percent as u32 / 100) as u16
}

pub fn render_theme_css(palette: &ThemePalette, prefs: &DisplayPreferences) -> String {
    // High contrast strengthens text and borders; everything else stays.
    let (text, border) = if prefs.high_contrast {
        if palette.dark {
            ("#ffffff", "rgba(255, 255, 255, 0.45)")
        } else {
            ("#000000", "rgba(0, 0, 0, 0.55)")
        }
    } else {
        (palette.text, palette.border)
    };

    let transition = if prefs.reduced_motion { "0ms" } else { TRANSITION };
    let percent = prefs.font_size.scale_percent();

    let mut css = String::new();
    let _ = writeln!(css, ":root {{");
    let _ = writeln!(css, "  --theme: {};", palette.name);
    let _ = writeln!(css, "  --bg: {};", palette.bg);
    let _ = writeln!(css, "  --surface: {};", palette.surface);
    let _ = writeln!(css, "  --panel: {};", palette.panel);
    let _ = writeln!(css, "  --text: {};", text);
    let _ = writeln!(css, "  --text-muted: {};", palette.text_muted);
    let _ = writeln!(css, "  --accent: {};", palette.accent);
    let _ = writeln!(css, "  --accent-strong: {};", palette.accent_strong);
    let _ = writeln!(css, "  --positive: {};", palette.positive);
    let _ = writeln!(css, "  --warning: {};", palette.warning);
    let _ = writeln!(css, "  --negative: {};", palette.negative);
    let _ = writeln!(css, "  --border: {};", border);
    for (i, px) in SPACING_PX.iter().enumerate() {
        let _ = writeln!(css, "  --space-{}: {}px;", i + 1, px);
    }
    let _ = writeln!(css, "  --radius: {}px;", RADIUS_PX);
    let _ = writeln!(css, "  --radius-pill: {};", RADIUS_PILL);
    let _ = writeln!(css, "  --font-body: {};", FONT_BODY);
    let _ = writeln!(css, "  --font-mono: {};", FONT_MONO);
    for (name, px) in FONT_SIZES_PX {
        let _ = writeln!(css, "  --font-size-{}: {}px;", name, scaled_px(px, percent));
    }
    for Breakpoint { name, min_width_px } in BREAKPOINTS {
        let _ = writeln!(css, "  --breakpoint-{}: {}px;", name, min_width_px);
    }
    let _ = writeln!(css, "  --transition: {};", transition);
    let _ = writeln!(css, "}}");

    if !prefs.reduced_motion {
        let _ = writeln!(css, "\n{}\n\n{}", KEYFRAMES_FADE_IN, KEYFRAMES_PULSE);
    }

    css
}
