//! Gemini API client configuration.

use tracing::warn;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Gemini API client configuration.
///
/// An empty `api_key` is allowed; requests then fail with
/// `AiError::MissingCredential` instead of reaching the network.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Environment variable the key came from, for error messages.
    pub api_key_env: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_key_env", &self.api_key_env)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_key_env: "API_KEY".to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            max_tokens: None,
            temperature: None,
        }
    }

    /// Read the key from `var`. A missing or blank variable yields an
    /// unconfigured client rather than an error.
    pub fn from_env(var: &str) -> Self {
        let api_key = match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                warn!("{var} is not set; assistant requests will fail until it is configured");
                String::new()
            }
        };
        Self {
            api_key_env: var.to_string(),
            ..Self::new(api_key)
        }
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f64>) -> Self {
        self.temperature = temperature;
        self
    }
}
