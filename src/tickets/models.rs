//! Ticket domain types and the English/Spanish label mapping.
//!
//! Status and priority are stored in English in the backend and displayed in
//! Spanish. Parsing is case-insensitive in both directions; writes always emit
//! the canonical stored form. Values outside the known sets are carried
//! through unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ticket workflow status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
    /// Unrecognized raw value, passed through as-is.
    Other(String),
}

impl TicketStatus {
    /// Parse the stored (English) form.
    pub fn from_stored(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "open" => Self::Open,
            "in progress" => Self::InProgress,
            "closed" => Self::Closed,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Parse the displayed (Spanish) form. Labels that are neither a known
    /// Spanish nor a known English form pass through unchanged.
    pub fn from_display(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "abierto" => Self::Open,
            "en progreso" => Self::InProgress,
            "cerrado" => Self::Closed,
            _ => Self::from_stored(label),
        }
    }

    /// Canonical stored form.
    pub fn stored(&self) -> &str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
            Self::Other(raw) => raw,
        }
    }

    /// Displayed form.
    pub fn display(&self) -> &str {
        match self {
            Self::Open => "Abierto",
            Self::InProgress => "En Progreso",
            Self::Closed => "Cerrado",
            Self::Other(raw) => raw,
        }
    }
}

/// Ticket priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketPriority {
    High,
    Medium,
    Low,
    /// Unrecognized raw value, passed through as-is.
    Other(String),
}

impl TicketPriority {
    pub fn from_stored(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn from_display(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "alta" => Self::High,
            "media" => Self::Medium,
            "baja" => Self::Low,
            _ => Self::from_stored(label),
        }
    }

    pub fn stored(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Other(raw) => raw,
        }
    }

    pub fn display(&self) -> &str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
            Self::Other(raw) => raw,
        }
    }
}

/// Audio artifact linked to a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub filename: String,
    pub transcription: Option<String>,
}

/// A support ticket ("opportunity" row in the backend).
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i64,
    pub recording_id: Option<i64>,
    pub ticket_number: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub recording: Option<Recording>,
}

/// Field-level changes applied by the edit form, already translated back to
/// stored form and stamped with the update time.
#[derive(Debug, Clone)]
pub struct TicketChanges {
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub notes: String,
    pub updated_at: DateTime<Utc>,
}
