//! Conversation engine for gemchat.
//!
//! Provides:
//! - The turn data model shared by the log and the transport
//! - A Gemini (Generative Language API) client behind the `ChatBackend` trait
//! - Model sessions, the conversation log, configuration reconciliation and
//!   turn orchestration

pub mod gemini;
pub mod session;

use std::fmt;

use async_trait::async_trait;
use gemchat_common::ModelId;

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{
    ChatSession, ConfigurationController, ConversationLog, EventOutcome, GeminiSessionFactory,
    LogError, ModelConfiguration, ModelSession, RebuildError, SessionFactory, SubmitOutcome,
    TurnError,
};

/// Transport to a hosted model. Implementations hold no conversation state:
/// everything the model should see travels in the request.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<Reply, AiError>;
}

/// Who said a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Role name in the Gemini `contents` vocabulary.
    pub fn api_role(&self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Assistant => "model",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => f.write_str("user"),
            Speaker::Assistant => f.write_str("assistant"),
        }
    }
}

/// One message attributed to a speaker.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Speaker,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Speaker::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Speaker::Assistant,
            content: content.into(),
        }
    }
}

/// Everything the remote model needs to answer one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: ModelId,
    pub system_instruction: Option<String>,
    /// Prior turns, oldest first. Never includes `message`.
    pub history: Vec<Turn>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("remote unavailable: {0}")]
    RemoteUnavailable(String),
    #[error("remote rejected the request (HTTP {status}): {message}")]
    RemoteRejected { status: u16, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("missing credential: {0}")]
    MissingCredential(String),
}

impl AiError {
    /// A plain, actionable message to show in place of the assistant reply.
    pub fn user_message(&self) -> String {
        match self {
            AiError::RemoteUnavailable(detail) => format!(
                "Could not reach the Gemini API ({detail}). Check your network connection and send the message again."
            ),
            AiError::RemoteRejected { status, message } => match status {
                401 | 403 => format!(
                    "The Gemini API rejected the API key ({message}). Check GEMINI_API_KEY and restart."
                ),
                429 => format!(
                    "The Gemini API quota or rate limit was exceeded ({message}). Wait a moment and try again."
                ),
                _ => format!("The Gemini API rejected the request: {message}"),
            },
            AiError::MalformedResponse(detail) => format!(
                "The model returned a response without any text ({detail}). Try rephrasing the message."
            ),
            AiError::MissingCredential(detail) => {
                format!("No API key is configured ({detail}).")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_maps_to_api_roles() {
        assert_eq!(Speaker::User.api_role(), "user");
        assert_eq!(Speaker::Assistant.api_role(), "model");
    }

    #[test]
    fn turn_constructors() {
        assert_eq!(Turn::user("hi").role, Speaker::User);
        assert_eq!(Turn::assistant("hello").content, "hello");
    }

    #[test]
    fn turn_serializes_lowercase_role() {
        let json = serde_json::to_string(&Turn::assistant("ok")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"ok"}"#);
    }

    #[test]
    fn usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn user_messages_are_actionable() {
        let msg = AiError::RemoteUnavailable("connection refused".into()).user_message();
        assert!(msg.contains("network"));

        let msg = AiError::RemoteRejected {
            status: 403,
            message: "API key not valid".into(),
        }
        .user_message();
        assert!(msg.contains("GEMINI_API_KEY"));

        let msg = AiError::RemoteRejected {
            status: 429,
            message: "RESOURCE_EXHAUSTED".into(),
        }
        .user_message();
        assert!(msg.contains("rate limit"));

        let msg = AiError::MalformedResponse("no candidates".into()).user_message();
        assert!(msg.contains("no candidates"));
    }
}
