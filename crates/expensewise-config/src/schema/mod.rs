//! Configuration schema types for ExpenseWise.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod system;

pub use assistant::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for ExpenseWise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseWiseConfig {
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn default_assistant_config() {
        let config = ExpenseWiseConfig::default();
        assert_eq!(config.assistant.model, "gemini-3-flash-preview");
        assert_eq!(config.assistant.api_key_env, "API_KEY");
        assert_eq!(config.assistant.request_timeout_secs, 30);
        assert!(config.assistant.max_output_tokens.is_none());
        assert!(config.assistant.temperature.is_none());
    }

    #[test]
    fn default_logging_config() {
        let config = ExpenseWiseConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.as_directive(), "info");
    }

    #[test]
    fn request_timeout_zero_means_unbounded() {
        let mut config = AssistantConfig::default();
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        config.request_timeout_secs = 0;
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ExpenseWiseConfig = toml::from_str(
            r#"
[assistant]
model = "gemini-2.0-flash"
"#,
        )
        .unwrap();
        assert_eq!(config.assistant.model, "gemini-2.0-flash");
        assert_eq!(config.assistant.request_timeout_secs, 30);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: ExpenseWiseConfig = toml::from_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_directive(), "debug");
    }
}
