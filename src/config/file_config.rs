//! TOML file configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Raw file configuration. Every field is optional; resolution against CLI
/// arguments happens in [`super::AppConfig::resolve`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub frontend_dir_path: Option<String>,
    pub cache_ttl_secs: Option<u64>,
    pub theme: Option<String>,
    pub secrets: Option<SecretsConfig>,
    pub backend: Option<BackendConfig>,
    pub analysis: Option<AnalysisConfig>,
}

/// The `[secrets]` table. Each secret accepts either a literal value or a
/// command whose first line of output is the value.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SecretsConfig {
    pub db_url: Option<String>,
    pub db_url_command: Option<String>,
    pub db_key: Option<String>,
    pub db_key_command: Option<String>,
    pub ai_key: Option<String>,
    pub ai_key_command: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct BackendConfig {
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AnalysisConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse config file {:?}", path))
    }
}
