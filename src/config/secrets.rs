//! Resolution of the three deployment secrets.
//!
//! Priority per secret: literal value in the `[secrets]` table, then the
//! first line of output of the configured command, then the process
//! environment. The database pair gates all data operations; the AI key only
//! gates the analysis action.

use std::process::Command;

use tracing::warn;

use super::SecretsConfig;

pub const ENV_DB_URL: &str = "OPSBOARD_DB_URL";
pub const ENV_DB_KEY: &str = "OPSBOARD_DB_KEY";
pub const ENV_AI_KEY: &str = "OPSBOARD_AI_KEY";

#[derive(Debug, Clone, Default)]
pub struct Secrets {
    pub db_url: Option<String>,
    pub db_key: Option<String>,
    pub ai_key: Option<String>,
}

impl Secrets {
    pub fn resolve(config: &SecretsConfig) -> Self {
        Self::resolve_with(config, |name| std::env::var(name).ok())
    }

    /// Resolution with an injectable environment lookup, for tests.
    pub fn resolve_with(config: &SecretsConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            db_url: resolve_one(
                config.db_url.as_deref(),
                config.db_url_command.as_deref(),
                ENV_DB_URL,
                &env,
            ),
            db_key: resolve_one(
                config.db_key.as_deref(),
                config.db_key_command.as_deref(),
                ENV_DB_KEY,
                &env,
            ),
            ai_key: resolve_one(
                config.ai_key.as_deref(),
                config.ai_key_command.as_deref(),
                ENV_AI_KEY,
                &env,
            ),
        }
    }

    pub fn database_configured(&self) -> bool {
        self.db_url.is_some() && self.db_key.is_some()
    }
}

fn resolve_one(
    value: Option<&str>,
    command: Option<&str>,
    env_name: &str,
    env: &impl Fn(&str) -> Option<String>,
) -> Option<String> {
    if let Some(value) = non_blank(value) {
        return Some(value);
    }

    if let Some(command) = command {
        match run_secret_command(command) {
            Some(value) => return Some(value),
            None => warn!(
                "Secret command for {} produced no value, falling back to environment",
                env_name
            ),
        }
    }

    non_blank(env(env_name).as_deref())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn run_secret_command(command: &str) -> Option<String> {
    let output = Command::new("sh").arg("-c").arg(command).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}
