//! Gemini API client struct, request building, and response parsing.

use std::time::Duration;

use crate::AiError;

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    /// Build a client. The overall request deadline is owned by the
    /// session, so only the connect phase is bounded here.
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body: a single user turn plus the system
    /// instruction. Earlier turns are never included.
    pub(crate) fn build_request_body(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        });

        if !system_instruction.is_empty() {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system_instruction }]
            });
        }

        let mut generation = serde_json::Map::new();
        if let Some(max_tokens) = self.config.max_tokens {
            generation.insert("maxOutputTokens".into(), max_tokens.into());
        }
        if let Some(temperature) = self.config.temperature {
            generation.insert("temperature".into(), temperature.into());
        }
        if !generation.is_empty() {
            body["generationConfig"] = serde_json::Value::Object(generation);
        }

        body
    }

    /// Concatenate the text parts of the first candidate.
    ///
    /// A response without candidates (e.g. blocked by safety filters)
    /// yields empty text rather than an error.
    pub(crate) fn parse_response(json: &serde_json::Value) -> Result<String, AiError> {
        if !json.is_object() {
            return Err(AiError::ParseError("response is not a JSON object".into()));
        }

        let Some(first) = json["candidates"].as_array().and_then(|c| c.first()) else {
            return Ok(String::new());
        };

        let content = first["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        Ok(content)
    }
}
