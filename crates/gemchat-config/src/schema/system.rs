//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive scoped to this workspace.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "gemchat=trace",
            LogLevel::Debug => "gemchat=debug",
            LogLevel::Info => "gemchat=info",
            LogLevel::Warning => "gemchat=warn",
            LogLevel::Error => "gemchat=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
