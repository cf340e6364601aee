//! Handler for code decoding endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::decode::DecodeResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Decodes a code back into its URL.
///
/// # Endpoint
///
/// `GET /api/decode/{code}`
///
/// # Response
///
/// ```json
/// {
///   "url": "https://github.com/user/repo",
///   "code": "S-...",
///   "scheme": "v2",
///   "protocol": "https",
///   "domain": "github.com",
///   "path": "/user/repo"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the code is malformed, the domain cannot be
/// separated from the path, or either component fails to decode.
pub async fn decode_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DecodeResponse>, AppError> {
    let parsed = state.codec_service.decode_parsed(&code)?;

    Ok(Json(DecodeResponse {
        url: parsed.to_string(),
        code,
        scheme: state.codec_service.scheme().to_string(),
        protocol: parsed.protocol.to_string(),
        domain: parsed.domain,
        path: parsed.path,
    }))
}
