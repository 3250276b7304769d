use anyhow::Result;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::analysis::build_prompt;
use crate::theme::{render_theme_css, DisplayPreferences, ThemePalette};
use crate::ticket_store::StoreError;
use crate::tickets::cache::TicketCache;
use crate::tickets::filter::TicketFilter;
use crate::tickets::models::{Ticket, TicketChanges, TicketPriority, TicketStatus};
use crate::tickets::view::{Notice, TicketMetrics, TicketView, TicketsView};

use super::{log_requests, state::*, RequestsLoggingLevel, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub theme: &'static str,
    pub backend_configured: bool,
    pub ai_enabled: bool,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ErrorBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
struct TicketsQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub search: Option<String>,
}

impl From<TicketsQuery> for TicketFilter {
    fn from(query: TicketsQuery) -> Self {
        // Blank selections coming from cleared form controls mean "no filter".
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        TicketFilter {
            status: non_blank(query.status),
            priority: non_blank(query.priority),
            search: non_blank(query.search),
        }
    }
}

#[derive(Deserialize, Debug)]
struct UpdateTicketBody {
    pub title: String,
    pub description: String,
    /// Displayed (Spanish) status label.
    pub status: String,
    /// Displayed (Spanish) priority label.
    pub priority: String,
    pub notes: String,
}

#[derive(Serialize)]
struct AnalysisView {
    pub ticket_id: i64,
    pub model: String,
    pub text: String,
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        theme: state.theme.name,
        backend_configured: state.ticket_store.is_some(),
        ai_enabled: state.analysis.is_some(),
    };
    Json(stats)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Load the ticket table, honoring the cache. Returns the rows, whether they
/// came from the cache, and an optional notice for the view.
async fn load_tickets(
    state: &ServerState,
    force_reload: bool,
) -> (Vec<Ticket>, bool, Option<Notice>) {
    let store = match &state.ticket_store {
        Some(store) => store.clone(),
        // Missing credentials: no network call is attempted at all.
        None => return (Vec::new(), false, Some(Notice::missing_config())),
    };

    {
        let mut cache = state.ticket_cache.lock().unwrap();
        if force_reload {
            cache.invalidate();
        } else if let Some(rows) = cache.fresh() {
            return (rows.to_vec(), true, None);
        }
    }

    match store.list_tickets().await {
        Ok(rows) => {
            state.ticket_cache.lock().unwrap().store(rows.clone());
            (rows, false, None)
        }
        Err(err) => {
            warn!("Failed to load tickets: {}", err);
            let cache = state.ticket_cache.lock().unwrap();
            let notice = Some(Notice::transport(&err.to_string()));
            match cache.stale() {
                // Keep showing the last good snapshot alongside the error.
                Some(rows) => (rows.to_vec(), true, notice),
                None => (Vec::new(), false, notice),
            }
        }
    }
}

fn build_tickets_view(
    state: &ServerState,
    rows: Vec<Ticket>,
    from_cache: bool,
    notice: Option<Notice>,
    filter: &TicketFilter,
) -> TicketsView {
    let metrics = TicketMetrics::count(&rows);
    let tickets: Vec<TicketView> = filter
        .apply(&rows)
        .into_iter()
        .map(TicketView::from_ticket)
        .collect();

    // An empty table is informational, not an error; real errors win.
    let notice = notice.or_else(|| rows.is_empty().then(Notice::empty));

    TicketsView {
        tickets,
        metrics,
        from_cache,
        ai_enabled: state.analysis.is_some(),
        notice,
    }
}

async fn get_tickets(
    State(state): State<ServerState>,
    Query(query): Query<TicketsQuery>,
) -> Response {
    let filter = TicketFilter::from(query);
    let (rows, from_cache, notice) = load_tickets(&state, false).await;
    Json(build_tickets_view(&state, rows, from_cache, notice, &filter)).into_response()
}

async fn refresh_tickets(
    State(state): State<ServerState>,
    Query(query): Query<TicketsQuery>,
) -> Response {
    let filter = TicketFilter::from(query);
    let (rows, from_cache, notice) = load_tickets(&state, true).await;
    Json(build_tickets_view(&state, rows, from_cache, notice, &filter)).into_response()
}

async fn put_ticket(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTicketBody>,
) -> Response {
    let store = match &state.ticket_store {
        Some(store) => store.clone(),
        None => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorBody::new(
                    "No hay conexión con la base de datos; revisa las credenciales.",
                )),
            )
                .into_response()
        }
    };

    let changes = TicketChanges {
        title: body.title,
        description: body.description,
        status: TicketStatus::from_display(&body.status),
        priority: TicketPriority::from_display(&body.priority),
        notes: body.notes,
        updated_at: Utc::now(),
    };

    match store.update_ticket(id, &changes).await {
        Ok(ticket) => {
            // Any successful write invalidates the whole cached table.
            state.ticket_cache.lock().unwrap().invalidate();
            Json(TicketView::from_ticket(&ticket)).into_response()
        }
        Err(StoreError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            error!("Failed to update ticket {}: {}", id, err);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody::new(format!(
                    "No se pudo guardar el ticket: {}",
                    err
                ))),
            )
                .into_response()
        }
    }
}

async fn analyze_ticket(State(state): State<ServerState>, Path(id): Path<i64>) -> Response {
    let provider = match &state.analysis {
        Some(provider) => provider.clone(),
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorBody::new(
                    "El análisis con IA está deshabilitado: falta la clave de API.",
                )),
            )
                .into_response()
        }
    };

    let (rows, _, _) = load_tickets(&state, false).await;
    let ticket = match rows.iter().find(|t| t.id == id) {
        Some(ticket) => ticket.clone(),
        None => return StatusCode::NOT_FOUND.into_response(),
    };

    let prompt = build_prompt(&ticket);
    match provider.analyze(&prompt).await {
        Ok(text) => Json(AnalysisView {
            ticket_id: id,
            model: provider.model().to_string(),
            text,
        })
        .into_response(),
        Err(err) => {
            warn!(ticket_id = id, "AI analysis failed: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody::new(format!("El análisis de IA falló: {}", err))),
            )
                .into_response()
        }
    }
}

#[derive(Serialize)]
struct ThemeView {
    palette: &'static ThemePalette,
    preferences: DisplayPreferences,
}

async fn get_theme(State(state): State<ServerState>) -> Response {
    let preferences = state.preferences.lock().unwrap().clone();
    Json(ThemeView {
        palette: state.theme,
        preferences,
    })
    .into_response()
}

async fn get_theme_css(State(state): State<ServerState>) -> Response {
    let preferences = state.preferences.lock().unwrap().clone();
    let css = render_theme_css(state.theme, &preferences);
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response()
}

async fn get_preferences(State(preferences): State<GuardedPreferences>) -> Response {
    Json(preferences.lock().unwrap().clone()).into_response()
}

async fn put_preferences(
    State(preferences): State<GuardedPreferences>,
    Json(body): Json<DisplayPreferences>,
) -> Response {
    *preferences.lock().unwrap() = body.clone();
    Json(body).into_response()
}

pub fn make_app(
    config: ServerConfig,
    ticket_store: OptionalTicketStore,
    analysis: OptionalAnalysisProvider,
    theme: &'static ThemePalette,
    cache_ttl: Duration,
) -> Router {
    let state = ServerState {
        config: config.clone(),
        start_time: Instant::now(),
        ticket_store,
        ticket_cache: Arc::new(Mutex::new(TicketCache::new(cache_ttl))),
        analysis,
        theme,
        preferences: Arc::new(Mutex::new(DisplayPreferences::default())),
    };

    let ticket_routes: Router = Router::new()
        .route("/tickets", get(get_tickets))
        .route("/tickets/refresh", post(refresh_tickets))
        .route("/tickets/{id}", put(put_ticket))
        .route("/tickets/{id}/analyze", post(analyze_ticket))
        .with_state(state.clone());

    let theme_routes: Router = Router::new()
        .route("/theme", get(get_theme))
        .route("/theme.css", get(get_theme_css))
        .route("/preferences", get(get_preferences))
        .route("/preferences", put(put_preferences))
        .with_state(state.clone());

    let home_router: Router = match &config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new().route("/", get(home)).with_state(state.clone()),
    };

    home_router
        .route("/health", get(health))
        .nest("/v1", ticket_routes.merge(theme_routes))
        .layer(middleware::from_fn_with_state(state, log_requests))
}

#[allow(clippy::too_many_arguments)]
pub async fn run_server(
    ticket_store: OptionalTicketStore,
    analysis: OptionalAnalysisProvider,
    theme: &'static ThemePalette,
    cache_ttl: Duration,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
    frontend_dir_path: Option<String>,
) -> Result<()> {
    let config = ServerConfig {
        requests_logging_level,
        port,
        frontend_dir_path,
    };
    let app = make_app(config, ticket_store, analysis, theme, cache_ttl);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("Listening on 127.0.0.1:{}", port);

    Ok(axum::serve(listener, app).await?)
}
