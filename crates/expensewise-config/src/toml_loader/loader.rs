//! Core TOML config loading: read from path or platform default.

use crate::schema::ExpenseWiseConfig;
use expensewise_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields are filled from serde defaults. Validation is left to
/// the caller.
pub fn load_from_path(path: &Path) -> Result<ExpenseWiseConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ExpenseWiseConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/expensewise/config.toml`
/// On Linux: `~/.config/expensewise/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<ExpenseWiseConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(ExpenseWiseConfig::default());
    }

    load_from_path(&path)
}
