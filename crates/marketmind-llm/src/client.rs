// Gemini generateContent client behind the `TextGenerator` capability.
//
// The server only ever sees `TextGenerator`: one prompt in, the generated
// text out, or a `ServiceError`. `GeminiClient` is the production
// implementation; tests substitute their own.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use marketmind_core::config::Config;

use crate::error::ServiceError;

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// Something that turns a prompt into generated text.
///
/// Implementations return the upstream output unmodified and map every
/// failure to a single `ServiceError`. They never retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError>;
}

// ---------------------------------------------------------------------------
// GeminiClient
// ---------------------------------------------------------------------------

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    /// Create a client for `model` against `api_base`
    /// (e.g. `https://generativelanguage.googleapis.com`).
    pub fn new(api_key: String, model: String, api_base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            api_base,
        }
    }

    /// Build a client from the process configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.credentials.gemini_api_key.clone(),
            config.llm.model.clone(),
            config.llm.api_base.clone(),
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!(model = %self.model, prompt_len = prompt.len(), "sending generateContent request");

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "generateContent request failed");
                ServiceError::new(format!("Network error: {e}"))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            warn!(error = %e, "failed to read generateContent response body");
            ServiceError::new(format!("Network error: {e}"))
        })?;

        if !status.is_success() {
            let message = extract_error_message(status, &text);
            warn!(%status, "generateContent returned an error: {message}");
            return Err(ServiceError::new(message));
        }

        parse_candidate_text(&text).ok_or_else(|| {
            warn!("generateContent response carried no candidate text");
            ServiceError::new("malformed response: no candidate text")
        })
    }
}

// ---------------------------------------------------------------------------
// Response JSON parsing helpers
// ---------------------------------------------------------------------------

/// Concatenate the `text` parts of the first candidate.
///
/// Expected shape:
/// `{ "candidates": [ { "content": { "parts": [ { "text": "..." } ] } } ] }`
///
/// Returns `None` for invalid JSON, no candidates (e.g. a blocked prompt),
/// or a candidate without any text part.
pub(crate) fn parse_candidate_text(data: &str) -> Option<String> {
    let v: Value = serde_json::from_str(data).ok()?;
    let parts = v
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let texts: Vec<&str> = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    if texts.is_empty() {
        return None;
    }
    Some(texts.concat())
}

/// Describe a non-2xx response. Prefers the API's own `error.message`.
///
/// Expected error shape: `{ "error": { "code": 400, "message": "...", "status": "..." } }`
fn extract_error_message(status: reqwest::StatusCode, body: &str) -> String {
    let upstream = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("error")?
            .get("message")?
            .as_str()
            .map(|s| s.to_string())
    });
    match upstream {
        Some(message) => format!("API returned status {status}: {message}"),
        None => format!("API returned status {status}"),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
