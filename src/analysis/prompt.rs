//! Prompt template for the per-ticket analysis action.

use crate::tickets::models::Ticket;

/// Maximum number of transcription characters included in a prompt.
pub const TRANSCRIPT_CHAR_BUDGET: usize = 4000;

/// Truncate to at most `max_chars` characters, respecting char boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build the fixed analysis prompt from the ticket fields and, when present,
/// the recording transcription.
pub fn build_prompt(ticket: &Ticket) -> String {
    let transcription = ticket
        .recording
        .as_ref()
        .and_then(|r| r.transcription.as_deref())
        .map(|t| truncate_chars(t, TRANSCRIPT_CHAR_BUDGET))
        .unwrap_or("(sin transcripción disponible)");

    format!(
        "Eres un analista de soporte técnico. Analiza el siguiente ticket y responde en \
         español con tres apartados: un resumen breve, la causa probable y los próximos \
         pasos recomendados.\n\n\
         Ticket {number}: {title}\n\
         Estado: {status}\n\
         Prioridad: {priority}\n\
         Descripción: {description}\n\
         Notas: {notes}\n\n\
         Transcripción de la llamada:\n{transcription}\n",
        number = ticket.ticket_number,
        title = ticket.title,
        status = ticket.status.display(),
        priority = ticket.priority.display(),
        description = ticket.description,
        notes = ticket.notes,
        transcription = transcription,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tickets::models::{Recording, TicketPriority, TicketStatus};
    use chrono::Utc;

    fn ticket(transcription: Option<String>) -> Ticket {
        Ticket {
            id: 1,
            recording_id: Some(2),
            ticket_number: "TKT-0001".to_string(),
            title: "Sin acceso a la VPN".to_string(),
            description: "El usuario no puede conectarse tras el cambio de contraseña".to_string(),
            status: TicketStatus::Open,
            priority: TicketPriority::High,
            notes: "llamó dos veces".to_string(),
            created_at: Utc::now(),
            updated_at: None,
            recording: Some(Recording {
                filename: "llamada.wav".to_string(),
                transcription,
            }),
        }
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let text = "ñ".repeat(10);
        assert_eq!(truncate_chars(&text, 4).chars().count(), 4);
        assert_eq!(truncate_chars(&text, 100), text);
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn prompt_includes_ticket_fields_and_displayed_labels() {
        let prompt = build_prompt(&ticket(Some("hola, no puedo entrar".to_string())));
        assert!(prompt.contains("TKT-0001"));
        assert!(prompt.contains("Sin acceso a la VPN"));
        assert!(prompt.contains("Estado: Abierto"));
        assert!(prompt.contains("Prioridad: Alta"));
        assert!(prompt.contains("hola, no puedo entrar"));
    }

    #[test]
    fn prompt_truncates_long_transcriptions() {
        let long = "palabra ".repeat(2000);
        let prompt = build_prompt(&ticket(Some(long)));
        // Template overhead is small; the transcription itself is capped.
        assert!(prompt.chars().count() < TRANSCRIPT_CHAR_BUDGET + 600);
    }

    #[test]
    fn prompt_notes_missing_transcription() {
        let prompt = build_prompt(&ticket(None));
        assert!(prompt.contains("(sin transcripción disponible)"));
    }
}
