use serde::{Deserialize, Serialize};

/// A discrete interaction coming from the front-end.
///
/// Events are processed one at a time, each to completion, in the order they
/// arrive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum InboundEvent {
    SubmitMessage(String),
    SelectModel(String),
    SetSystemInstruction(String),
    ResetConversation,
}

impl InboundEvent {
    /// Whether handling this event calls the remote model. Blank messages
    /// are dropped before any request is made.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::SubmitMessage(text) if !text.trim().is_empty())
    }
}
