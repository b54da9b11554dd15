//! Wiring from config to the completion service and session options.

use std::sync::Arc;

use expensewise_ai::{CompletionService, GeminiClient, GeminiConfig, SessionOptions};
use expensewise_common::ExpenseWiseError;
use expensewise_config::AssistantConfig;

/// Build the Gemini-backed completion service. A missing API key is not an
/// error here; requests will fail and show the fallback reply instead.
pub(super) fn build_service(
    config: &AssistantConfig,
) -> Result<Arc<dyn CompletionService>, ExpenseWiseError> {
    let gemini = GeminiConfig::from_env(&config.api_key_env)
        .with_model(config.model.clone())
        .with_max_tokens(config.max_output_tokens)
        .with_temperature(config.temperature);

    tracing::debug!(config = ?gemini, "Building Gemini client");

    let client = GeminiClient::new(gemini).map_err(|e| ExpenseWiseError::Ai(e.to_string()))?;
    Ok(Arc::new(client))
}

pub(super) fn session_options(config: &AssistantConfig) -> SessionOptions {
    SessionOptions {
        request_timeout: config.request_timeout(),
    }
}
