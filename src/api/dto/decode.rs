//! DTOs for the decode endpoint.

use serde::Serialize;

/// Decoded URL with its components.
#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    pub url: String,
    pub code: String,
    pub scheme: String,
    pub protocol: String,
    pub domain: String,
    pub path: String,
}
