//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# gemchat configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
name = "gemini-flash-latest"
# gemini-flash-latest, gemini-flash-lite-latest, gemini-2.5-pro,
# gemini-2.5-flash, gemini-2.5-flash-lite
# system_instruction = ""    # empty means no instruction
# temperature = 0.7          # 0.0-2.0
# max_output_tokens = 8192   # 1-65536

[api]
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# api_key_env = "GEMINI_API_KEY"
# connect_timeout_secs = 10  # 1-60
# request_timeout_secs = 120 # 5-600

[logging]
# level = "INFO"             # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
