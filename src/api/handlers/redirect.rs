//! Handler for code redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a code to the URL it encodes.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The URL is recomputed from the code on every request; nothing is stored.
/// The decoded URL must also parse as an absolute URL before it is placed in
/// the `Location` header, so it is emitted in its serialized (percent-encoded)
/// form.
///
/// # Errors
///
/// Returns 400 Bad Request if the code does not decode or decodes to
/// something that is not a valid redirect target.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let decoded = state.codec_service.decode(&code)?;

    let target = Url::parse(&decoded).map_err(|e| {
        AppError::bad_request(
            "Decoded URL is not a valid redirect target",
            json!({ "url": decoded, "reason": e.to_string() }),
        )
    })?;

    Ok(Redirect::temporary(target.as_str()))
}
