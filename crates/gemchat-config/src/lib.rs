//! gemchat configuration system.
//!
//! Provides TOML-based configuration with validation and credential
//! resolution. All config sections use sensible defaults so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gemchat_config::{credentials, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! let key = credentials::resolve_api_key(&config.api.api_key_env);
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ChatConfig, LogLevel, CONFIG_SCHEMA_VERSION};

use gemchat_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// Unlike the raw loaders, this validates the result and rejects invalid
/// values.
pub fn load_config(path: Option<&Path>) -> Result<ChatConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}
