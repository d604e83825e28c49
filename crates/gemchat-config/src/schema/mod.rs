//! Configuration schema types for gemchat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod model;
mod system;

pub use api::*;
pub use model::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ChatConfig {
    pub model: ModelConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}
