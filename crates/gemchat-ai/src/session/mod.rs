//! Conversation state management.
//!
//! A `ChatSession` owns the `ConversationLog` and the
//! `ConfigurationController`, and replays the full log through the active
//! `ModelSession` on every submitted message.

mod chat;
mod controller;
mod conversation;
mod model_session;


pub use chat::{ChatSession, EventOutcome, SubmitOutcome, TurnError};
pub use controller::{ConfigurationController, RebuildError};
pub use conversation::{ConversationLog, LogError};
pub use model_session::{GeminiSessionFactory, ModelConfiguration, ModelSession, SessionFactory};
