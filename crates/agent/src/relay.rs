//! Round orchestration: assemble, call upstream, sanitize, retain.

use std::sync::Arc;

use speechintent_core::error::ProviderError;
use speechintent_core::message::RetainedTurn;
use speechintent_core::provider::{Provider, ProviderRequest};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::context::{ConversationWindow, assemble};
use crate::sanitize::sanitize_reply;

/// Errors that abort a round. The retained window is untouched when one
/// is returned.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

/// Relays caller text to the model with a bounded conversation window.
///
/// The window is process-wide: every caller shares it. A round holds the
/// window lock from assembly until the new exchange is recorded, so rounds
/// never interleave and the window always reflects the last completed one.
pub struct IntentRelay {
    /// The upstream provider
    provider: Arc<dyn Provider>,

    /// Model name sent with each request
    model: String,

    /// Retained exchanges
    window: Mutex<ConversationWindow>,
}

impl IntentRelay {
    /// Create a relay with the default single-exchange window.
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            window: Mutex::new(ConversationWindow::default()),
        }
    }

    /// Keep `size` exchanges instead of one.
    pub fn with_history_window(mut self, size: usize) -> Self {
        self.window = Mutex::new(ConversationWindow::new(size));
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one round for `user_text`, authenticating upstream with `api_key`.
    ///
    /// Returns the sanitized reply. An upstream reply without usable text
    /// still succeeds, with an empty reply that is retained like any other.
    pub async fn handle(&self, api_key: &str, user_text: &str) -> Result<String, RelayError> {
        let mut window = self.window.lock().await;

        let turns = assemble(&window, user_text);
        debug!(
            turns = turns.len(),
            retained = window.len(),
            "Assembled upstream context"
        );

        let request = ProviderRequest {
            model: self.model.clone(),
            api_key: api_key.to_string(),
            turns,
        };

        let response = match self.provider.complete(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "Upstream call failed");
                return Err(e.into());
            }
        };

        let reply = sanitize_reply(&response.text);
        if reply.is_empty() {
            info!(raw_len = response.text.len(), "Upstream reply sanitized to empty");
        }

        let retained = RetainedTurn::new(user_text, reply.clone());
        info!(
            text_len = user_text.len(),
            reply_len = reply.len(),
            recorded_at = %retained.recorded_at.to_rfc3339(),
            "Round complete"
        );
        window.record(retained);

        Ok(reply)
    }

    /// Copy of the currently retained exchanges, oldest first.
    pub async fn retained(&self) -> Vec<RetainedTurn> {
        self.window.lock().await.snapshot()
    }
}
