//! CompletionService implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, CompletionService};

use super::client::GeminiClient;

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete(&self, prompt: &str, system_instruction: &str) -> Result<String, AiError> {
        if !self.config.has_credential() {
            return Err(AiError::MissingCredential(self.config.api_key_env.clone()));
        }

        let body = self.build_request_body(prompt, system_instruction);
        let url = self.api_url();

        debug!(model = %self.config.model, "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let text = Self::parse_response(&json)?;
        debug!(model = %self.config.model, chars = text.chars().count(), "Gemini API response");
        Ok(text)
    }
}
