//! Owns the active model configuration and rebuilds the session on change.

use gemchat_common::{ModelId, UnknownModelId};
use tracing::{debug, info, warn};

use crate::AiError;

use super::model_session::{ModelConfiguration, ModelSession, SessionFactory};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RebuildError {
    #[error(transparent)]
    UnknownModel(#[from] UnknownModelId),
    #[error("failed to rebuild model session: {0}")]
    Backend(#[source] AiError),
}

/// Holds exactly one `ModelSession` and keeps it consistent with the current
/// configuration.
///
/// Changes go through [`reconcile`](Self::reconcile): an equal configuration
/// is a no-op, a different one builds a new session and swaps it in only if
/// the build succeeds. The conversation log is never consulted.
pub struct ConfigurationController {
    factory: Box<dyn SessionFactory>,
    session: ModelSession,
    rebuilds: u64,
}

impl ConfigurationController {
    pub fn new(
        factory: Box<dyn SessionFactory>,
        initial: ModelConfiguration,
    ) -> Result<Self, RebuildError> {
        let session = factory.build(&initial).map_err(RebuildError::Backend)?;
        info!(model = %initial.model, "model session ready");
        Ok(Self {
            factory,
            session,
            rebuilds: 0,
        })
    }

    pub fn configuration(&self) -> &ModelConfiguration {
        self.session.configuration()
    }

    pub fn session(&self) -> &ModelSession {
        &self.session
    }

    /// Number of times the session has been replaced since construction.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Select a model by name. Returns whether the session was rebuilt.
    pub fn set_model(&mut self, id: &str) -> Result<bool, RebuildError> {
        let model: ModelId = id.parse().inspect_err(|e| warn!("{e}"))?;
        let next = self.configuration().clone().with_model(model);
        self.reconcile(next)
    }

    /// Replace the system instruction. An empty string clears it.
    pub fn set_system_instruction(&mut self, text: &str) -> Result<bool, RebuildError> {
        let next = self.configuration().clone().with_system_instruction(text);
        self.reconcile(next)
    }

    pub fn reconcile(&mut self, next: ModelConfiguration) -> Result<bool, RebuildError> {
        if &next == self.configuration() {
            debug!("configuration unchanged, keeping session");
            return Ok(false);
        }

        let session = self.factory.build(&next).map_err(|e| {
            warn!(model = %next.model, error = %e, "session rebuild failed, keeping previous");
            RebuildError::Backend(e)
        })?;

        info!(
            model = %next.model,
            system_instruction = next.system_instruction.is_some(),
            "model session rebuilt"
        );
        self.session = session;
        self.rebuilds += 1;
        Ok(true)
    }
}
