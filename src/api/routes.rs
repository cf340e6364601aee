//! API route configuration.

use crate::api::handlers::{decode_handler, encode_batch_handler, encode_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Codec routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /encode`         - Encode a single URL
/// - `POST /encode/batch`   - Encode up to 100 URLs, failures reported per item
/// - `GET  /decode/{code}`  - Decode a code back to its URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/encode", post(encode_handler))
        .route("/encode/batch", post(encode_batch_handler))
        .route("/decode/{code}", get(decode_handler))
}
