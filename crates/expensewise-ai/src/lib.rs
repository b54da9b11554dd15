//! AI engine for the ExpenseWise assistant.
//!
//! Provides:
//! - the `CompletionService` seam and its Gemini implementation
//! - `AssistantSession`, the transcript plus single in-flight request
//! - `AssistantPanel`, which owns a session for as long as the panel is open

pub mod gemini;
pub mod panel;
pub mod prompts;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use panel::AssistantPanel;
pub use session::{AssistantSession, SessionOptions, SubmitOutcome, SubmitRejection};

/// A remote text-generation service.
///
/// One call per user turn: the prompt is the latest user text only, and the
/// system instruction is sent alongside it.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str, system_instruction: &str) -> Result<String, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Missing credential: set {0}")]
    MissingCredential(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors_set_role() {
        assert_eq!(Message::user("hi").role, Role::User);
        assert_eq!(Message::assistant("hello").role, Role::Assistant);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("ok")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"ok"}"#);
    }

    #[test]
    fn ai_error_display() {
        assert_eq!(AiError::Timeout.to_string(), "Timeout");
        assert_eq!(
            AiError::MissingCredential("API_KEY".into()).to_string(),
            "Missing credential: set API_KEY"
        );
        assert_eq!(
            AiError::NetworkError("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }
}
