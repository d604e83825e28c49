//! API credential resolution.
//!
//! The key is read once at startup from the process environment, after an
//! optional `.env` file has been merged in. Variables already present in the
//! environment take precedence over the file.

use std::path::PathBuf;

use gemchat_common::ConfigError;
use tracing::{debug, info};

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments.
///
/// Surrounding quotes on values are stripped.
pub fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Candidate `.env` locations, most specific first.
pub fn dotenv_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(dir) = crate::toml_loader::app_config_dir() {
        candidates.push(dir.join(".env"));
    }
    candidates
}

/// Load the first readable `.env` file among `candidates` into the process
/// environment. Returns the path that was loaded, if any.
pub fn load_dotenv(candidates: &[PathBuf]) -> Option<PathBuf> {
    for path in candidates {
        let Ok(contents) = std::fs::read_to_string(path) else {
            continue;
        };
        apply_dotenv(&contents);
        info!("loaded environment from {}", path.display());
        return Some(path.clone());
    }
    debug!("no .env file found");
    None
}

fn apply_dotenv(contents: &str) {
    for (key, value) in parse_dotenv(contents) {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(&key, value);
        }
    }
}

/// Resolve the API key from `lookup`, rejecting missing or blank values.
pub fn api_key_from(
    var_name: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    match lookup(var_name) {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ConfigError::MissingCredential(var_name.to_string())),
    }
}

/// Resolve the API key from the process environment.
pub fn resolve_api_key(var_name: &str) -> Result<String, ConfigError> {
    api_key_from(var_name, |name| std::env::var(name).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_quoted_values() {
        let vars = parse_dotenv(
            "# comment\n\nGEMINI_API_KEY=\"abc123\"\nOTHER = 'x y'\nexport THIRD=3\n",
        );
        assert_eq!(
            vars,
            vec![
                ("GEMINI_API_KEY".to_string(), "abc123".to_string()),
                ("OTHER".to_string(), "x y".to_string()),
                ("THIRD".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn skips_malformed_lines() {
        let vars = parse_dotenv("NOEQUALS\n=value\nOK=1\n");
        assert_eq!(vars, vec![("OK".to_string(), "1".to_string())]);
    }

    #[test]
    fn missing_key_is_a_credential_error() {
        let err = api_key_from("GEMINI_API_KEY", |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(ref name) if name == "GEMINI_API_KEY"));
    }

    #[test]
    fn blank_key_is_a_credential_error() {
        let err = api_key_from("GEMINI_API_KEY", |_| Some("   ".into())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(_)));
    }

    #[test]
    fn key_is_trimmed() {
        let key = api_key_from("K", |_| Some(" secret \n".into())).unwrap();
        assert_eq!(key, "secret");
    }

    #[test]
    fn dotenv_file_does_not_override_existing_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "GEMCHAT_TEST_PRESET=from_file\nGEMCHAT_TEST_FRESH=from_file\n",
        )
        .unwrap();
        std::env::set_var("GEMCHAT_TEST_PRESET", "from_env");

        assert_eq!(load_dotenv(&[path.clone()]), Some(path.clone()));
        assert_eq!(std::env::var("GEMCHAT_TEST_PRESET").unwrap(), "from_env");
        assert_eq!(std::env::var("GEMCHAT_TEST_FRESH").unwrap(), "from_file");
    }

    #[test]
    fn unreadable_candidates_are_skipped() {
        let missing = PathBuf::from("/tmp/gemchat_definitely_missing/.env");
        assert_eq!(load_dotenv(&[missing]), None);
    }
}
