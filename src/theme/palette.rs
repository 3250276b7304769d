//! Named color palettes.

use serde::Serialize;

/// A process-wide, read-only color palette. All values are CSS colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub name: &'static str,
    pub dark: bool,
    pub bg: &'static str,
    pub surface: &'static str,
    pub panel: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub accent_strong: &'static str,
    pub positive: &'static str,
    pub warning: &'static str,
    pub negative: &'static str,
    pub border: &'static str,
}

pub const DEFAULT_THEME: &str = "midnight";

static THEMES: [ThemePalette; 3] = [
    ThemePalette {
        name: "midnight",
        dark: true,
        bg: "#05090f",
        surface: "#0b111a",
        panel: "#0d1520",
        text: "#e6edf7",
        text_muted: "#7f8ba0",
        accent: "#5cb0ff",
        accent_strong: "#7ac6ff",
        positive: "#3fb68b",
        warning: "#f7c843",
        negative: "#f0635c",
        border: "rgba(255, 255, 255, 0.08)",
    },
    ThemePalette {
        name: "slate",
        dark: true,
        bg: "#14161c",
        surface: "#1b1e27",
        panel: "#20242f",
        text: "#e8e9ed",
        text_muted: "#8d93a5",
        accent: "#8f7df0",
        accent_strong: "#a995ff",
        positive: "#4cc38a",
        warning: "#e8b044",
        negative: "#e5534b",
        border: "rgba(255, 255, 255, 0.10)",
    },
    ThemePalette {
        name: "daylight",
        dark: false,
        bg: "#f8fbff",
        surface: "#ffffff",
        panel: "#edf1f7",
        text: "#0c1625",
        text_muted: "#5b6678",
        accent: "#2563eb",
        accent_strong: "#1d4ed8",
        positive: "#0ea66c",
        warning: "#d97706",
        negative: "#e11d48",
        border: "rgba(0, 0, 0, 0.06)",
    },
];

/// Look up a palette by name. Unrecognized names fall back to the default
/// palette; the active theme is a configuration hint, not a hard contract.
pub fn palette(name: &str) -> &'static ThemePalette {
    THEMES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
        .unwrap_or(&THEMES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_exists() {
        assert_eq!(palette(DEFAULT_THEME).name, DEFAULT_THEME);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(palette("Slate").name, "slate");
        assert_eq!(palette("  DAYLIGHT ").name, "daylight");
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(palette("solarized").name, DEFAULT_THEME);
        assert_eq!(palette("").name, DEFAULT_THEME);
    }
}
