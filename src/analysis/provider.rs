//! Analysis provider trait definition.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when interacting with a generative-text provider.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timeout")]
    Timeout,
}

/// Trait for generative-text backends used to annotate a ticket.
///
/// One prompt in, one text out. No streaming, no conversation state.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Get the provider's name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Get the model being used.
    fn model(&self) -> &str;

    /// Run a single completion for the given prompt and return the generated
    /// text verbatim.
    async fn analyze(&self, prompt: &str) -> Result<String, AnalysisError>;
}
