//! Gemini `generateContent` provider.
//!
//! Sends the ordered turns as `contents` and reads the first candidate back.
//! The API key is supplied per request and travels as the `key` query
//! parameter, never in logs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use speechintent_config::UpstreamConfig;
use speechintent_core::error::ProviderError;
use speechintent_core::message::Turn;
use speechintent_core::provider::*;
use std::time::Duration;
use tracing::{debug, warn};

/// A client for Google's generative-language API.
pub struct GeminiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a provider against `base_url` (e.g. `https://generativelanguage.googleapis.com/v1beta`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a provider from the `[upstream]` configuration section.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, ProviderError> {
        Self::new(&config.api_url, Duration::from_secs(config.timeout_secs))
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Convert our turns to Gemini `contents`.
    fn to_api_contents(turns: &[Turn]) -> Vec<ApiContent> {
        turns
            .iter()
            .map(|t| ApiContent {
                role: t.role.as_str().into(),
                parts: vec![ApiPart {
                    text: t.text.clone(),
                }],
            })
            .collect()
    }

    /// Pull the reply text out of a decoded response.
    ///
    /// Only the first candidate counts, and only when it is model-authored
    /// and carries a `parts` list. Anything else is an empty reply.
    fn extract_text(response: ApiResponse) -> String {
        response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .filter(|content| content.role.as_deref() == Some("model"))
            .and_then(|content| content.parts)
            .map(|parts| parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default()
    }

    /// Decode a response body.
    ///
    /// The body must be JSON; a JSON document of the wrong shape decodes to
    /// an empty reply rather than an error.
    fn parse_body(body: &str) -> Result<String, ProviderError> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let response = match serde_json::from_value::<ApiResponse>(value) {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, "Unexpected response shape, treating as empty reply");
                ApiResponse::default()
            }
        };

        Ok(Self::extract_text(response))
    }
}

#[async_trait]
impl speechintent_core::Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError> {
        let url = self.endpoint(&request.model);
        let body = ApiRequest {
            contents: Self::to_api_contents(&request.turns),
        };

        debug!(
            provider = "gemini",
            model = %request.model,
            turns = request.turns.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", request.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                if e.is_timeout() {
                    ProviderError::Timeout(e.to_string())
                } else {
                    ProviderError::Network(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %error_body, "Provider returned error");
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.without_url().to_string()))?;

        Ok(ProviderResponse {
            text: Self::parse_body(&text)?,
            model: request.model,
        })
    }
}

// --- Gemini API types (internal) ---

#[derive(Debug, Serialize)]
struct ApiRequest {
    contents: Vec<ApiContent>,
}

#[derive(Debug, Serialize)]
struct ApiContent {
    role: String,
    parts: Vec<ApiPart>,
}

#[derive(Debug, Serialize)]
struct ApiPart {
    text: String,
}

#[derive(Debug, Default, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Option<Vec<ApiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct ApiCandidate {
    #[serde(default)]
    content: Option<ApiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct ApiCandidateContent {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    parts: Option<Vec<ApiCandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct ApiCandidatePart {
    #[serde(default)]
    text: Option<String>,
}
