//! View-models returned by the ticket handlers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::models::{Ticket, TicketStatus};

#[derive(Debug, Clone, Serialize)]
pub struct RecordingView {
    pub filename: String,
    pub transcription: Option<String>,
}

/// One ticket row as displayed: status and priority carry the Spanish label.
#[derive(Debug, Clone, Serialize)]
pub struct TicketView {
    pub id: i64,
    pub recording_id: Option<i64>,
    pub ticket_number: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub recording: Option<RecordingView>,
}

impl TicketView {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id,
            recording_id: ticket.recording_id,
            ticket_number: ticket.ticket_number.clone(),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: ticket.status.display().to_string(),
            priority: ticket.priority.display().to_string(),
            notes: ticket.notes.clone(),
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            recording: ticket.recording.as_ref().map(|r| RecordingView {
                filename: r.filename.clone(),
                transcription: r.transcription.clone(),
            }),
        }
    }
}

/// Dashboard counters over the loaded (unfiltered) snapshot.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TicketMetrics {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

impl TicketMetrics {
    pub fn count(tickets: &[Ticket]) -> Self {
        let mut metrics = Self {
            total: tickets.len(),
            open: 0,
            in_progress: 0,
            closed: 0,
        };
        for ticket in tickets {
            match ticket.status {
                TicketStatus::Open => metrics.open += 1,
                TicketStatus::InProgress => metrics.in_progress += 1,
                TicketStatus::Closed => metrics.closed += 1,
                TicketStatus::Other(_) => {}
            }
        }
        metrics
    }
}

/// Inline message attached to the tickets view. Empty results are
/// informational; the other two kinds are errors.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    MissingConfig { message: String },
    Transport { message: String },
    Empty { message: String },
}

impl Notice {
    pub fn missing_config() -> Self {
        Self::MissingConfig {
            message: "Faltan las credenciales de la base de datos. Define OPSBOARD_DB_URL y \
                      OPSBOARD_DB_KEY en el entorno o en la sección [secrets] del archivo de \
                      configuración."
                .to_string(),
        }
    }

    pub fn transport(detail: &str) -> Self {
        Self::Transport {
            message: format!("No se pudo consultar el backend: {}", detail),
        }
    }

    pub fn empty() -> Self {
        Self::Empty {
            message: "No hay tickets para mostrar.".to_string(),
        }
    }
}

/// Response body of `GET /v1/tickets` and the refresh action.
#[derive(Debug, Serialize)]
pub struct TicketsView {
    pub tickets: Vec<TicketView>,
    pub metrics: TicketMetrics,
    pub from_cache: bool,
    pub ai_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}
