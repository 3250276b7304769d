pub mod css;
pub mod palette;
pub mod preferences;
pub mod scale;

pub use css::render_theme_css;
pub use palette::{palette, ThemePalette, DEFAULT_THEME};
pub use preferences::{DisplayPreferences, FontSize};
