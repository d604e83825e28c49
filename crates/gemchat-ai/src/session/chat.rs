//! Turn orchestration: one submitted message in, one reply appended.

use gemchat_common::{new_correlation_id, InboundEvent, SessionId};
use tracing::{debug, info, warn};

use crate::{AiError, Turn};

use super::controller::{ConfigurationController, RebuildError};
use super::conversation::{ConversationLog, LogError};
use super::model_session::ModelConfiguration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error(transparent)]
    Remote(#[from] AiError),
    #[error(transparent)]
    Log(#[from] LogError),
}

impl TurnError {
    pub fn user_message(&self) -> String {
        match self {
            TurnError::Remote(e) => e.user_message(),
            TurnError::Log(e) => format!("The conversation is out of order ({e}). Use /reset to start over."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank message; nothing was sent or recorded.
    Ignored,
    Replied(String),
}

/// Result of handling one inbound event, for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Ignored,
    Replied(String),
    ReplyFailed(String),
    ConfigurationChanged { rebuilt: bool },
    ConfigurationRejected(String),
    Reset,
}

/// Everything one conversation needs: its log, its model configuration and
/// the last error to show.
///
/// All mutation goes through `&mut self`, so events are handled strictly one
/// at a time and a configuration swap is never observed mid-turn.
pub struct ChatSession {
    id: SessionId,
    log: ConversationLog,
    controller: ConfigurationController,
    pending_error: Option<String>,
}

impl ChatSession {
    pub fn new(controller: ConfigurationController) -> Self {
        let id = SessionId::new();
        info!(session = %id, model = %controller.configuration().model, "chat session started");
        Self {
            id,
            log: ConversationLog::new(),
            controller,
            pending_error: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn turns(&self) -> std::slice::Iter<'_, Turn> {
        self.log.all()
    }

    pub fn configuration(&self) -> &ModelConfiguration {
        self.controller.configuration()
    }

    pub fn rebuild_count(&self) -> u64 {
        self.controller.rebuild_count()
    }

    pub fn pending_error(&self) -> Option<&str> {
        self.pending_error.as_deref()
    }

    /// Send `message` with the full log as context and record the exchange.
    ///
    /// On failure the user turn is retracted, so the log only ever holds
    /// complete user/assistant pairs.
    pub async fn submit(&mut self, message: &str) -> Result<SubmitOutcome, TurnError> {
        if message.trim().is_empty() {
            debug!(session = %self.id, "ignoring empty message");
            return Ok(SubmitOutcome::Ignored);
        }

        let turn_id = new_correlation_id();
        self.log.append(Turn::user(message)).map_err(|e| {
            self.pending_error = Some(TurnError::from(e.clone()).user_message());
            e
        })?;

        let result = {
            let history = self.log.snapshot_excluding_last();
            debug!(session = %self.id, turn = %turn_id, history = history.len(), "submitting turn");
            self.controller.session().reply(history, message).await
        };

        match result {
            Ok(reply) => {
                self.log.append(Turn::assistant(reply.text.clone()))?;
                self.pending_error = None;
                info!(
                    session = %self.id,
                    turn = %turn_id,
                    tokens = reply.usage.total_tokens(),
                    turns = self.log.len(),
                    "turn complete"
                );
                Ok(SubmitOutcome::Replied(reply.text))
            }
            Err(e) => {
                self.log.discard_pending_user();
                warn!(session = %self.id, turn = %turn_id, error = %e, "turn failed, user turn rolled back");
                self.pending_error = Some(e.user_message());
                Err(e.into())
            }
        }
    }

    /// Drop the whole conversation. Configuration is left alone.
    pub fn reset(&mut self) {
        self.log.clear();
        self.pending_error = None;
        info!(session = %self.id, "conversation reset");
    }

    pub fn set_model(&mut self, id: &str) -> Result<bool, RebuildError> {
        let result = self.controller.set_model(id);
        self.record_configuration_result(&result);
        result
    }

    pub fn set_system_instruction(&mut self, text: &str) -> Result<bool, RebuildError> {
        let result = self.controller.set_system_instruction(text);
        self.record_configuration_result(&result);
        result
    }

    /// A no-op change leaves the pending error alone; only a rebuild or a
    /// rejection replaces it.
    fn record_configuration_result(&mut self, result: &Result<bool, RebuildError>) {
        match result {
            Ok(false) => {}
            Ok(true) => self.pending_error = None,
            Err(e) => self.pending_error = Some(format!("Configuration unchanged: {e}")),
        }
    }

    /// Handle one front-end event to completion.
    ///
    /// Never fails: errors are reported through the outcome and
    /// [`pending_error`](Self::pending_error).
    pub async fn handle(&mut self, event: InboundEvent) -> EventOutcome {
        match event {
            InboundEvent::SubmitMessage(text) => match self.submit(&text).await {
                Ok(SubmitOutcome::Ignored) => EventOutcome::Ignored,
                Ok(SubmitOutcome::Replied(reply)) => EventOutcome::Replied(reply),
                Err(e) => EventOutcome::ReplyFailed(e.user_message()),
            },
            InboundEvent::SelectModel(id) => self.configuration_outcome(|s| s.set_model(&id)),
            InboundEvent::SetSystemInstruction(text) => {
                self.configuration_outcome(|s| s.set_system_instruction(&text))
            }
            InboundEvent::ResetConversation => {
                self.reset();
                EventOutcome::Reset
            }
        }
    }

    fn configuration_outcome(
        &mut self,
        change: impl FnOnce(&mut Self) -> Result<bool, RebuildError>,
    ) -> EventOutcome {
        match change(self) {
            Ok(rebuilt) => EventOutcome::ConfigurationChanged { rebuilt },
            Err(_) => EventOutcome::ConfigurationRejected(
                self.pending_error.clone().unwrap_or_default(),
            ),
        }
    }
}
