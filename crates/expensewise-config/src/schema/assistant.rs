//! Assistant configuration: remote model, credential source, request policy.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the AI assistant panel and its completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Generative-language model identifier.
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Upper bound on one completion request, in seconds (valid range: 0-600).
    /// `0` leaves the request unbounded.
    pub request_timeout_secs: u32,
    /// Optional `maxOutputTokens` generation setting.
    pub max_output_tokens: Option<u32>,
    /// Optional sampling temperature (valid range: 0.0-2.0).
    pub temperature: Option<f64>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            api_key_env: "API_KEY".to_string(),
            request_timeout_secs: 30,
            max_output_tokens: None,
            temperature: None,
        }
    }
}

impl AssistantConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(u64::from(secs))),
        }
    }
}
