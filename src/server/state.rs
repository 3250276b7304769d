use axum::extract::FromRef;

use crate::analysis::AnalysisProvider;
use crate::theme::{DisplayPreferences, ThemePalette};
use crate::ticket_store::TicketStore;
use crate::tickets::cache::TicketCache;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use super::ServerConfig;

pub type OptionalTicketStore = Option<Arc<dyn TicketStore>>;
pub type GuardedTicketCache = Arc<Mutex<TicketCache>>;
pub type OptionalAnalysisProvider = Option<Arc<dyn AnalysisProvider>>;
pub type GuardedPreferences = Arc<Mutex<DisplayPreferences>>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    /// Absent when the database secrets could not be resolved; every data
    /// operation then degrades to an empty table plus a setup notice.
    pub ticket_store: OptionalTicketStore,
    pub ticket_cache: GuardedTicketCache,
    /// Absent when the AI key is missing; the analyze action is then hidden.
    pub analysis: OptionalAnalysisProvider,
    pub theme: &'static ThemePalette,
    pub preferences: GuardedPreferences,
}

impl FromRef<ServerState> for OptionalTicketStore {
    fn from_ref(input: &ServerState) -> Self {
        input.ticket_store.clone()
    }
}

impl FromRef<ServerState> for GuardedTicketCache {
    fn from_ref(input: &ServerState) -> Self {
        input.ticket_cache.clone()
    }
}

impl FromRef<ServerState> for OptionalAnalysisProvider {
    fn from_ref(input: &ServerState) -> Self {
        input.analysis.clone()
    }
}

impl FromRef<ServerState> for GuardedPreferences {
    fn from_ref(input: &ServerState) -> Self {
        input.preferences.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
