//! Model selection and generation settings.

use gemchat_common::ModelId;
use serde::{Deserialize, Serialize};

/// Model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model selected when the session starts.
    pub name: ModelId,
    /// Initial system instruction. Empty means no instruction.
    pub system_instruction: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Upper bound on reply length in tokens (valid range: 1-65536).
    pub max_output_tokens: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: ModelId::default(),
            system_instruction: String::new(),
            temperature: 0.7,
            max_output_tokens: 8192,
        }
    }
}
