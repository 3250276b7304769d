//! Test server lifecycle management
//!
//! Each test gets an isolated server on a random port backed by an in-memory
//! ticket store, with a handle to that store for seeding and assertions.

use std::sync::Arc;
use std::time::Duration;

use opsboard_server::server::state::OptionalAnalysisProvider;
use opsboard_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use opsboard_server::theme;
use opsboard_server::{InMemoryTicketStore, TicketStore};
use tokio::net::TcpListener;

use super::fixtures::sample_tickets;

pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Ticket store for direct seeding and assertions in tests. Unwired when
    /// the server was spawned without a configured backend.
    pub store: Arc<InMemoryTicketStore>,
}

impl TestServer {
    /// Spawns a server with the standard seeded dataset and no AI provider.
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryTicketStore::new());
        store.seed(sample_tickets());
        Self::start(Some(store), None).await
    }

    /// Spawns a server whose backend is configured but empty.
    pub async fn spawn_empty() -> Self {
        Self::start(Some(Arc::new(InMemoryTicketStore::new())), None).await
    }

    /// Spawns a server with no backend at all, as when the database secrets
    /// are missing.
    pub async fn spawn_unconfigured() -> Self {
        Self::start(None, None).await
    }

    /// Spawns a seeded server with the given analysis provider.
    pub async fn spawn_with_analysis(analysis: OptionalAnalysisProvider) -> Self {
        let store = Arc::new(InMemoryTicketStore::new());
        store.seed(sample_tickets());
        Self::start(Some(store), analysis).await
    }

    async fn start(
        store: Option<Arc<InMemoryTicketStore>>,
        analysis: OptionalAnalysisProvider,
    ) -> Self {
        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port: 0,
            frontend_dir_path: None,
        };

        let app = make_app(
            config,
            store.clone().map(|s| s as Arc<dyn TicketStore>),
            analysis,
            theme::palette(theme::DEFAULT_THEME),
            Duration::from_secs(60),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to read local address")
            .port();

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server crashed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            port,
            store: store.unwrap_or_else(|| Arc::new(InMemoryTicketStore::new())),
        }
    }
}
