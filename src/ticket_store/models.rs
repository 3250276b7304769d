//! Wire types for the hosted REST backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tickets::models::{Recording, Ticket, TicketChanges, TicketPriority, TicketStatus};

/// One row of the `opportunities` table as returned by the backend, with the
/// embedded recording join. Free-text columns are nullable in the schema.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketRow {
    pub id: i64,
    #[serde(default)]
    pub recording_id: Option<i64>,
    #[serde(default)]
    pub ticket_number: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub recordings: Option<RecordingRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordingRow {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub transcription: Option<String>,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Ticket {
            id: row.id,
            recording_id: row.recording_id,
            ticket_number: row.ticket_number.unwrap_or_default(),
            title: row.title.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            status: TicketStatus::from_stored(&row.status.unwrap_or_default()),
            priority: TicketPriority::from_stored(&row.priority.unwrap_or_default()),
            notes: row.notes.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
            recording: row.recordings.map(|r| Recording {
                filename: r.filename.unwrap_or_default(),
                transcription: r.transcription,
            }),
        }
    }
}

/// PATCH body for a point update. Status and priority go out in their
/// canonical stored form.
#[derive(Debug, Serialize)]
pub struct TicketUpdateRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub status: &'a str,
    pub priority: &'a str,
    pub notes: &'a str,
    pub updated_at: DateTime<Utc>,
}

impl<'a> TicketUpdateRow<'a> {
    pub fn from_changes(changes: &'a TicketChanges) -> Self {
        Self {
            title: &changes.title,
            description: &changes.description,
            status: changes.status.stored(),
            priority: changes.priority.stored(),
            notes: &changes.notes,
            updated_at: changes.updated_at,
        }
    }
}
