//! Model configuration and the live session bound to it.

use std::fmt;
use std::sync::Arc;

use gemchat_common::ModelId;
use tracing::debug;

use crate::gemini::{GeminiClient, GeminiConfig};
use crate::{AiError, ChatBackend, GenerateRequest, Reply, Turn};

/// Model identity plus standing instruction. Equality decides whether a
/// session must be rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelConfiguration {
    pub model: ModelId,
    pub system_instruction: Option<String>,
}

impl ModelConfiguration {
    /// Blank instructions are stored as `None`.
    pub fn new(model: ModelId, system_instruction: impl Into<String>) -> Self {
        Self {
            model,
            system_instruction: normalize_instruction(system_instruction.into()),
        }
    }

    pub fn with_model(mut self, model: ModelId) -> Self {
        self.model = model;
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = normalize_instruction(instruction.into());
        self
    }
}

fn normalize_instruction(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// A configuration bound to a backend. Immutable once built; a new
/// configuration gets a new session.
pub struct ModelSession {
    configuration: ModelConfiguration,
    backend: Arc<dyn ChatBackend>,
}

impl fmt::Debug for ModelSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSession")
            .field("configuration", &self.configuration)
            .finish_non_exhaustive()
    }
}

impl ModelSession {
    pub fn new(configuration: ModelConfiguration, backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            configuration,
            backend,
        }
    }

    pub fn configuration(&self) -> &ModelConfiguration {
        &self.configuration
    }

    /// Answer `new_message` given the turns that preceded it.
    ///
    /// `history` must not contain `new_message` itself.
    pub async fn reply(&self, history: &[Turn], new_message: &str) -> Result<Reply, AiError> {
        let request = GenerateRequest {
            model: self.configuration.model,
            system_instruction: self.configuration.system_instruction.clone(),
            history: history.to_vec(),
            message: new_message.to_string(),
        };
        debug!(model = %request.model, turns = history.len(), "replaying history");
        self.backend.generate(&request).await
    }
}

/// Builds sessions from configurations. Building must depend only on the
/// configuration passed in.
pub trait SessionFactory: Send + Sync {
    fn build(&self, configuration: &ModelConfiguration) -> Result<ModelSession, AiError>;
}

/// Builds sessions backed by a fresh `GeminiClient`.
pub struct GeminiSessionFactory {
    config: GeminiConfig,
}

impl GeminiSessionFactory {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }
}

impl SessionFactory for GeminiSessionFactory {
    fn build(&self, configuration: &ModelConfiguration) -> Result<ModelSession, AiError> {
        let client = GeminiClient::new(self.config.clone())?;
        Ok(ModelSession::new(configuration.clone(), Arc::new(client)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_instruction_means_none() {
        let config = ModelConfiguration::new(ModelId::FlashLatest, "   ");
        assert_eq!(config.system_instruction, None);
        assert_eq!(config, ModelConfiguration::default());
    }

    #[test]
    fn instruction_is_kept_verbatim() {
        let config = ModelConfiguration::default().with_system_instruction(" Be terse ");
        assert_eq!(config.system_instruction.as_deref(), Some(" Be terse "));
    }

    #[test]
    fn equality_is_structural() {
        let a = ModelConfiguration::new(ModelId::Gemini25Pro, "x");
        let b = ModelConfiguration::default()
            .with_model(ModelId::Gemini25Pro)
            .with_system_instruction("x");
        assert_eq!(a, b);
        assert_ne!(a, b.with_system_instruction(""));
    }

    #[test]
    fn gemini_factory_refuses_empty_key() {
        let factory = GeminiSessionFactory::new(GeminiConfig::new(""));
        let err = factory.build(&ModelConfiguration::default()).unwrap_err();
        assert!(matches!(err, AiError::MissingCredential(_)));
    }

    #[test]
    fn gemini_factory_binds_configuration() {
        let factory = GeminiSessionFactory::new(GeminiConfig::new("key"));
        let config = ModelConfiguration::new(ModelId::Gemini25Flash, "Be terse");
        let session = factory.build(&config).unwrap();
        assert_eq!(session.configuration(), &config);
    }
}
