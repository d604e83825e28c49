//! Remote API endpoint and transport settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Remote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 5-600).
    pub request_timeout_secs: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key_env: DEFAULT_API_KEY_ENV.into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
