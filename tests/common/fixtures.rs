//! Seed data for end-to-end tests

use chrono::{Duration, Utc};
use opsboard_server::tickets::models::{Recording, Ticket, TicketPriority, TicketStatus};

/// Build one ticket with sensible defaults.
pub fn make_ticket(
    id: i64,
    ticket_number: &str,
    title: &str,
    description: &str,
    status: &str,
    priority: &str,
    hours_old: i64,
) -> Ticket {
    Ticket {
        id,
        recording_id: None,
        ticket_number: ticket_number.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status: TicketStatus::from_stored(status),
        priority: TicketPriority::from_stored(priority),
        notes: String::new(),
        created_at: Utc::now() - Duration::hours(hours_old),
        updated_at: None,
        recording: None,
    }
}

/// Three tickets covering the three statuses. Ticket 3 is the newest, so the
/// default listing order is [3, 2, 1].
pub fn sample_tickets() -> Vec<Ticket> {
    let mut vpn = make_ticket(
        1,
        "TKT-1001",
        "Sin acceso a la red",
        "El cliente reporta un VPN issue tras el cambio de contraseña",
        "Open",
        "High",
        3,
    );
    vpn.recording_id = Some(11);
    vpn.recording = Some(Recording {
        filename: "llamada-011.wav".to_string(),
        transcription: Some("hola, no puedo conectarme a la vpn desde ayer".to_string()),
    });

    let mut printer = make_ticket(
        2,
        "TKT-1002",
        "Impresora atascada",
        "La impresora de la planta 3 no responde",
        "In Progress",
        "Medium",
        2,
    );
    printer.notes = "esperando repuesto".to_string();

    let locked = make_ticket(
        3,
        "TKT-1003",
        "Cuenta bloqueada",
        "Account locked after failed logins",
        "Closed",
        "Low",
        1,
    );

    vec![vpn, printer, locked]
}
