//! HTTP gateway for SpeechIntent.
//!
//! Exposes the relay endpoint and a health check:
//! - `GET /gemini_proxy` — see [`proxy`]
//! - `GET /health`
//!
//! Built on Axum.

pub mod proxy;

use axum::{Router, response::Json, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use speechintent_agent::IntentRelay;
use speechintent_config::AppConfig;
use speechintent_core::error::ProviderError;
use speechintent_providers::GeminiProvider;

/// Shared application state for the gateway.
pub struct GatewayState {
    pub relay: Arc<IntentRelay>,
}

pub type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
///
/// The request span records only method and path: the query string carries
/// the caller's API key.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/gemini_proxy", get(proxy::proxy_handler))
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |req: &axum::http::Request<axum::body::Body>| {
                    tracing::debug_span!(
                        "request",
                        method = %req.method(),
                        path = %req.uri().path()
                    )
                },
            ),
        )
        .with_state(state)
}

/// Build the gateway state from configuration: a Gemini provider wrapped
/// in a relay with the configured history window.
pub fn build_state(config: &AppConfig) -> Result<SharedState, ProviderError> {
    let provider = Arc::new(GeminiProvider::from_config(&config.upstream)?);
    let relay = IntentRelay::new(provider, &config.upstream.model)
        .with_history_window(config.history_window);

    Ok(Arc::new(GatewayState {
        relay: Arc::new(relay),
    }))
}

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let app = build_router(build_state(&config)?);

    info!(
        addr = %addr,
        model = %config.upstream.model,
        history_window = config.history_window,
        "Gateway starting"
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
