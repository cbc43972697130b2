//! `GET /gemini_proxy` — relay caller text to the model.
//!
//! Query parameters:
//! - `api_key` — upstream credential, forwarded as-is
//! - `text` — the caller's utterance
//!
//! Responses:
//! - `200` with the sanitized reply as a bare JSON string
//! - `400` `{"error": "Missing api_key or text"}` when either is absent or empty
//! - `500` `{"error": "<description>"}` when the upstream call fails

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::SharedState;

/// Error message for a request missing either parameter.
pub const MISSING_PARAMS: &str = "Missing api_key or text";

/// The two relay parameters. A repeated key keeps its first value.
#[derive(Debug, Default)]
pub struct ProxyParams {
    pub api_key: Option<String>,
    pub text: Option<String>,
}

impl ProxyParams {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "api_key" => &mut params.api_key,
                "text" => &mut params.text,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ProxyError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ProxyError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub async fn proxy_handler(
    State(state): State<SharedState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<String>, ProxyError> {
    let params = match query {
        Ok(Query(pairs)) => ProxyParams::from_pairs(pairs),
        Err(e) => {
            warn!(error = %e, "Unreadable query string");
            return Err(error_response(StatusCode::BAD_REQUEST, MISSING_PARAMS));
        }
    };

    let (api_key, text) = match (params.api_key, params.text) {
        (Some(key), Some(text)) if !key.is_empty() && !text.is_empty() => (key, text),
        _ => return Err(error_response(StatusCode::BAD_REQUEST, MISSING_PARAMS)),
    };

    info!(text_len = text.len(), "Proxy request received");

    match state.relay.handle(&api_key, &text).await {
        Ok(reply) => Ok(Json(reply)),
        Err(e) => {
            error!(error = %e, "Proxy round failed");
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
