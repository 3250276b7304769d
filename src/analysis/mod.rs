pub mod gemini;
pub mod prompt;
pub mod provider;

pub use gemini::GeminiProvider;
pub use prompt::{build_prompt, TRANSCRIPT_CHAR_BUDGET};
pub use provider::{AnalysisError, AnalysisProvider};
