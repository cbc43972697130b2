//! Error types for the SpeechIntent domain.
//!
//! Uses `thiserror` for ergonomic error definitions.

use thiserror::Error;

/// Failures talking to the upstream language model.
///
/// A response that decodes as JSON but lacks the expected fields is not an
/// error; providers map it to an empty reply instead.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}
