//! Full configuration validation.
//!
//! Validates numeric ranges and endpoint settings, collecting every problem
//! into a single `ConfigError`.

mod helpers;


use crate::schema::ChatConfig;
use gemchat_common::ConfigError;

use helpers::check_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_model(&mut errors, config);
    validate_api(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_model(errors: &mut Vec<String>, config: &ChatConfig) {
    check_range(errors, "model.temperature", config.model.temperature, 0.0..=2.0);
    check_range(errors, "model.max_output_tokens", config.model.max_output_tokens, 1..=65536);
}

fn validate_api(errors: &mut Vec<String>, config: &ChatConfig) {
    let url = config.api.base_url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push(format!(
            "api.base_url = {:?} must start with http:// or https://",
            config.api.base_url
        ));
    }
    if config.api.api_key_env.trim().is_empty() {
        errors.push("api.api_key_env must not be empty".into());
    }
    check_range(errors, "api.connect_timeout_secs", config.api.connect_timeout_secs, 1..=60);
    check_range(errors, "api.request_timeout_secs", config.api.request_timeout_secs, 5..=600);
}
