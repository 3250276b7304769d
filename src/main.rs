use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use opsboard_server::analysis::GeminiProvider;
use opsboard_server::config::{self, Secrets, ENV_DB_KEY, ENV_DB_URL};
use opsboard_server::server::state::{OptionalAnalysisProvider, OptionalTicketStore};
use opsboard_server::server::{run_server, RequestsLoggingLevel};
use opsboard_server::theme;
use opsboard_server::RestTicketStore;

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8080)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// How long a loaded ticket table stays fresh before the next request
    /// reloads it.
    #[clap(long, default_value_t = 60)]
    pub cache_ttl_secs: u64,

    /// Name of the active color theme.
    #[clap(long, default_value = theme::DEFAULT_THEME)]
    pub theme: String,
}

/// Convert CLI args to CliConfig for config resolution
impl From<&CliArgs> for config::CliConfig {
    fn from(args: &CliArgs) -> Self {
        config::CliConfig {
            port: args.port,
            logging_level: args.logging_level.clone(),
            frontend_dir_path: args.frontend_dir_path.clone(),
            cache_ttl_secs: args.cache_ttl_secs,
            theme: args.theme.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    // Load TOML config if provided
    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Some(config::FileConfig::load(path)?)
        }
        None => None,
    };

    // Extract the secrets table before consuming file_config
    let secrets_config = file_config
        .as_ref()
        .and_then(|f| f.secrets.clone())
        .unwrap_or_default();

    // Resolve final configuration (TOML overrides CLI)
    let cli_config: config::CliConfig = (&cli_args).into();
    let app_config = config::AppConfig::resolve(&cli_config, file_config)?;
    let secrets = Secrets::resolve(&secrets_config);

    info!("Configuration loaded:");
    info!("  port: {}", app_config.port);
    info!("  theme: {}", app_config.theme);
    info!("  cache_ttl_secs: {}", app_config.cache_ttl_secs);

    let ticket_store: OptionalTicketStore = match (&secrets.db_url, &secrets.db_key) {
        (Some(url), Some(key)) => {
            info!("Ticket backend configured at {}", url);
            Some(Arc::new(RestTicketStore::new(
                url.as_str(),
                key.as_str(),
                app_config.backend.timeout_secs,
            )?))
        }
        _ => {
            warn!(
                "Database credentials missing ({} / {}); serving with an empty table",
                ENV_DB_URL, ENV_DB_KEY
            );
            None
        }
    };

    let analysis: OptionalAnalysisProvider = match &secrets.ai_key {
        Some(key) => {
            info!("AI analysis enabled (model {})", app_config.analysis.model);
            Some(Arc::new(GeminiProvider::new(
                app_config.analysis.base_url.as_str(),
                key.as_str(),
                app_config.analysis.model.as_str(),
                app_config.analysis.timeout_secs,
            )))
        }
        None => {
            info!("AI key missing; analysis action disabled");
            None
        }
    };

    let palette = theme::palette(&app_config.theme);
    if !palette.name.eq_ignore_ascii_case(app_config.theme.trim()) {
        warn!(
            "Unknown theme {:?}, falling back to {:?}",
            app_config.theme, palette.name
        );
    }

    info!("Ready to serve at port {}!", app_config.port);

    run_server(
        ticket_store,
        analysis,
        palette,
        Duration::from_secs(app_config.cache_ttl_secs),
        app_config.logging_level.clone(),
        app_config.port,
        app_config.frontend_dir_path.clone(),
    )
    .await
}
