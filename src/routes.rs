//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`  - Redirect to the decoded URL
//! - `GET  /health`  - Health check: codec canary round-trip
//! - `/api/*`        - Encode/decode REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::rate_limit::{self, RateLimitSettings};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `limits` - per-client token bucket; with `behind_proxy` set the client
///   IP is read from `X-Forwarded-For` / `X-Real-IP` headers instead of the
///   peer socket address
pub fn app_router(state: AppState, limits: &RateLimitSettings) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes());

    let router = rate_limit::apply(router, limits)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
