//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Codec round-trips the canary URL
/// - **503 Service Unavailable**: Canary round-trip failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "scheme": "v2",
///   "checks": {
///     "codec": { "status": "ok", "message": "Canary round-trip succeeded" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let codec_check = check_codec(&state);
    let healthy = codec_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        scheme: state.codec_service.scheme().to_string(),
        checks: HealthChecks { codec: codec_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_codec(state: &AppState) -> CheckStatus {
    match state.codec_service.self_check() {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Canary round-trip succeeded".to_string()),
        },
        Err(e) => {
            tracing::warn!("Codec self-check failed: {}", e);
            CheckStatus {
                status: "error".to_string(),
                message: Some(e.to_string()),
            }
        }
    }
}
