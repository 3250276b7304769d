mod file_config;
mod secrets;

pub use file_config::{AnalysisConfig, BackendConfig, FileConfig, SecretsConfig};
pub use secrets::{Secrets, ENV_AI_KEY, ENV_DB_KEY, ENV_DB_URL};

use crate::analysis::gemini;
use crate::server::RequestsLoggingLevel;
use crate::theme;
use anyhow::Result;
use clap::ValueEnum;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub cache_ttl_secs: u64,
    pub theme: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub cache_ttl_secs: u64,
    pub theme: String,
    pub backend: BackendSettings,
    pub analysis: AnalysisSettings,
}

/// Settings for the hosted relational backend client.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// Settings for the generative-text provider.
#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            base_url: gemini::DEFAULT_BASE_URL.to_string(),
            model: gemini::DEFAULT_MODEL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let cache_ttl_secs = file.cache_ttl_secs.unwrap_or(cli.cache_ttl_secs);

        let theme = file.theme.unwrap_or_else(|| {
            if cli.theme.is_empty() {
                theme::DEFAULT_THEME.to_string()
            } else {
                cli.theme.clone()
            }
        });

        let backend_file = file.backend.unwrap_or_default();
        let backend_defaults = BackendSettings::default();
        let backend = BackendSettings {
            timeout_secs: backend_file
                .timeout_secs
                .unwrap_or(backend_defaults.timeout_secs),
        };

        let analysis_file = file.analysis.unwrap_or_default();
        let analysis_defaults = AnalysisSettings::default();
        let analysis = AnalysisSettings {
            base_url: analysis_file
                .base_url
                .unwrap_or(analysis_defaults.base_url),
            model: analysis_file.model.unwrap_or(analysis_defaults.model),
            timeout_secs: analysis_file
                .timeout_secs
                .unwrap_or(analysis_defaults.timeout_secs),
        };

        Ok(Self {
            port,
            logging_level,
            frontend_dir_path,
            cache_ttl_secs,
            theme,
            backend,
            analysis,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
