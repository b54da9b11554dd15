//! ExpenseWise configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use serde defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use expensewise_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("model: {}", config.assistant.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{AssistantConfig, ExpenseWiseConfig, LogLevel, LoggingConfig};

use std::path::Path;

use expensewise_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a default `config.toml` if none exists, then validates the result.
pub fn load_config() -> Result<ExpenseWiseConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path (e.g. `--config`).
pub fn load_config_from(path: &Path) -> Result<ExpenseWiseConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let err = load_config_from(Path::new("/tmp/nonexistent_expensewise.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[assistant]\nrequest_timeout_secs = 9000\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("assistant.request_timeout_secs"));
    }
}
