//! Provider trait — the abstraction over the upstream language model.
//!
//! A Provider knows how to send an ordered sequence of turns to a model and
//! get the model's raw text reply back.
//!
//! Implementations: Gemini `generateContent`; scripted providers in tests.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ProviderError;
use crate::message::Turn;

/// A single upstream request.
#[derive(Clone, Serialize)]
pub struct ProviderRequest {
    /// The model to use (e.g., "gemini-2.5-flash")
    pub model: String,

    /// Caller-supplied credential, forwarded upstream as-is
    #[serde(skip_serializing)]
    pub api_key: String,

    /// The conversation turns, oldest first
    pub turns: Vec<Turn>,
}

impl std::fmt::Debug for ProviderRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRequest")
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .field("turns", &self.turns)
            .finish()
    }
}

/// The model's reply to a [`ProviderRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderResponse {
    /// Concatenated text of the reply, empty when the response carried none
    pub text: String,

    /// Which model was asked
    pub model: String,
}

/// The core Provider trait.
///
/// The relay calls `complete()` once per request without knowing which
/// backend answers it.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a request and get the complete reply.
    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_api_key() {
        let req = ProviderRequest {
            model: "gemini-2.5-flash".into(),
            api_key: "AIza-secret".into(),
            turns: vec![Turn::user("hi")],
        };
        let debug = format!("{req:?}");
        assert!(!debug.contains("AIza-secret"));
        assert!(debug.contains("REDACTED"));
        assert!(debug.contains("gemini-2.5-flash"));
    }

    #[test]
    fn serialization_skips_api_key() {
        let req = ProviderRequest {
            model: "m".into(),
            api_key: "secret".into(),
            turns: vec![Turn::model("ok")],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"role\":\"model\""));
    }

    struct EchoProvider;

    #[async_trait]
    impl Provider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(
            &self,
            request: ProviderRequest,
        ) -> std::result::Result<ProviderResponse, ProviderError> {
            let text = request
                .turns
                .last()
                .map(|t| t.text.clone())
                .unwrap_or_default();
            Ok(ProviderResponse {
                text,
                model: request.model,
            })
        }
    }

    #[tokio::test]
    async fn provider_is_object_safe() {
        let provider: std::sync::Arc<dyn Provider> = std::sync::Arc::new(EchoProvider);
        let resp = provider
            .complete(ProviderRequest {
                model: "m".into(),
                api_key: "k".into(),
                turns: vec![Turn::user("ping")],
            })
            .await
            .unwrap();
        assert_eq!(provider.name(), "echo");
        assert_eq!(resp.text, "ping");
    }
}
