//! Session-scoped display preferences. Held in server state, never persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Scaling applied to the base type scale, in percent.
    pub fn scale_percent(self) -> u16 {
        match self {
            Self::Small => 90,
            Self::Medium => 100,
            Self::Large => 115,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPreferences {
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub font_size: FontSize,
}
