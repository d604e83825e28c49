//! Where gemchat keeps its files, and first-run creation of `config.toml`.

use std::path::{Path, PathBuf};

use gemchat_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "gemchat";
const CONFIG_FILE: &str = "config.toml";

/// Per-user gemchat directory, e.g. `~/.config/gemchat` on Linux.
pub fn app_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    app_config_dir()
        .map(|dir| dir.join(CONFIG_FILE))
        .ok_or_else(|| {
            ConfigError::ParseError("no per-user config directory on this platform".into())
        })
}

/// Write the commented template to `path`, creating parent directories.
/// An existing file is left as it is.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |action: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {action} {}: {e}", path.display()))
    };

    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create directory for", e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("write", e))?;

    info!("created default config at {}", path.display());
    Ok(())
}
