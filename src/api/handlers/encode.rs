//! Handlers for URL encoding endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::encode::{
    BatchSummary, EncodeBatchRequest, EncodeBatchResponse, EncodeRequest, EncodeResponse,
    EncodeResultItem,
};
use crate::error::AppError;
use crate::state::AppState;

/// Encodes a single URL under the active scheme.
///
/// # Endpoint
///
/// `POST /api/encode`
///
/// # Request Body
///
/// ```json
/// { "url": "https://github.com/user/repo" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "S-...",
///   "url": "https://github.com/user/repo",
///   "scheme": "v2"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the URL is not
/// `http(s)://domain[/path]`.
pub async fn encode_handler(
    State(state): State<AppState>,
    Json(payload): Json<EncodeRequest>,
) -> Result<Json<EncodeResponse>, AppError> {
    payload.validate()?;

    let code = state.codec_service.encode(&payload.url)?;

    Ok(Json(EncodeResponse {
        code,
        url: payload.url,
        scheme: state.codec_service.scheme().to_string(),
    }))
}

/// Encodes several URLs at once.
///
/// # Endpoint
///
/// `POST /api/encode/batch`
///
/// # Batch Processing
///
/// URLs are encoded independently. If one fails, the others are still
/// processed and the failure is reported in its item.
///
/// # Request Body
///
/// ```json
/// { "urls": [ { "url": "https://example.com" }, { "url": "ftp://nope" } ] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "scheme": "v2",
///   "summary": { "total": 2, "successful": 1, "failed": 1 },
///   "items": [
///     { "url": "https://example.com", "code": "S-..." },
///     { "url": "ftp://nope", "error": { "code": "validation_error", ... } }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the batch is empty, holds more than 100 URLs,
/// or any URL fails length validation.
pub async fn encode_batch_handler(
    State(state): State<AppState>,
    Json(payload): Json<EncodeBatchRequest>,
) -> Result<Json<EncodeBatchResponse>, AppError> {
    payload.validate()?;

    let total = payload.urls.len();
    let mut items = Vec::with_capacity(total);
    let mut successful = 0;
    let mut failed = 0;

    for item in payload.urls {
        match state.codec_service.encode(&item.url) {
            Ok(code) => {
                successful += 1;
                items.push(EncodeResultItem::Success {
                    url: item.url,
                    code,
                });
            }
            Err(err) => {
                failed += 1;
                items.push(EncodeResultItem::Error {
                    url: item.url,
                    error: err.to_error_info(),
                });
            }
        }
    }

    Ok(Json(EncodeBatchResponse {
        scheme: state.codec_service.scheme().to_string(),
        summary: BatchSummary {
            total,
            successful,
            failed,
        },
        items,
    }))
}
