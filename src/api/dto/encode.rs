//! DTOs for the encode endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::MAX_URL_LEN;
use crate::error::ErrorInfo;

/// Longest URL accepted for encoding.
pub const MAX_URL_LENGTH: u64 = MAX_URL_LEN as u64;

/// Request to encode a single URL.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct EncodeRequest {
    /// The URL to encode (`http` or `https`).
    #[validate(length(min = 1, max = MAX_URL_LENGTH))]
    pub url: String,
}

/// Encoded URL.
#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub code: String,
    pub url: String,
    pub scheme: String,
}

/// Request to encode several URLs at once.
#[derive(Debug, Deserialize, Validate)]
pub struct EncodeBatchRequest {
    #[validate(length(min = 1, max = 100), nested)]
    pub urls: Vec<EncodeRequest>,
}

/// Response containing batch processing results.
#[derive(Debug, Serialize)]
pub struct EncodeBatchResponse {
    pub scheme: String,
    pub summary: BatchSummary,
    pub items: Vec<EncodeResultItem>,
}

/// Individual result for a URL in the batch.
///
/// Untagged: success items carry `code`, failures carry `error`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EncodeResultItem {
    Success { url: String, code: String },
    Error { url: String, error: ErrorInfo },
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}
