//! URL encoding and decoding service.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::codec::{DomainMappings, UrlCodec};
use crate::domain::entities::{ParsedUrl, SchemeVersion};
use crate::error::AppError;

/// URL used by [`CodecService::self_check`].
const CANARY_URL: &str = "https://github.com/rust-lang/rust/issues?q=is%3Aopen#top";

/// Service for turning URLs into codes and back.
///
/// Holds one [`UrlCodec`] for the configured scheme. Stateless beyond that,
/// so a single instance is shared across all requests.
#[derive(Debug, Clone)]
pub struct CodecService {
    codec: UrlCodec,
}

impl CodecService {
    /// Creates a service around an existing codec.
    pub fn new(codec: UrlCodec) -> Self {
        Self { codec }
    }

    /// Creates a service for `scheme` with the given shortcut tables.
    pub fn for_scheme(scheme: SchemeVersion, mappings: Arc<DomainMappings>) -> Self {
        Self::new(UrlCodec::new(scheme, mappings))
    }

    pub fn scheme(&self) -> SchemeVersion {
        self.codec.scheme()
    }

    /// Encodes a URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not match
    /// `http(s)://domain[/path]` or cannot be framed under the active scheme.
    pub fn encode(&self, url: &str) -> Result<String, AppError> {
        match self.codec.encode(url) {
            Ok(code) => {
                debug!(
                    scheme = %self.scheme(),
                    url_len = url.len(),
                    code_len = code.len(),
                    "Encoded URL"
                );
                Ok(code)
            }
            Err(e) => {
                debug!(scheme = %self.scheme(), error = %e, "Failed to encode URL");
                Err(e.into())
            }
        }
    }

    /// Decodes a code back into a URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code is malformed, the domain
    /// boundary cannot be recovered, or a component fails to decode.
    pub fn decode(&self, code: &str) -> Result<String, AppError> {
        self.decode_parsed(code).map(|parsed| parsed.to_string())
    }

    /// Decodes a code into URL components.
    ///
    /// # Errors
    ///
    /// See [`Self::decode`].
    pub fn decode_parsed(&self, code: &str) -> Result<ParsedUrl, AppError> {
        match self.codec.decode_parsed(code) {
            Ok(parsed) => {
                debug!(scheme = %self.scheme(), code, domain = %parsed.domain, "Decoded code");
                Ok(parsed)
            }
            Err(e) => {
                debug!(scheme = %self.scheme(), code, error = %e, "Failed to decode code");
                Err(e.into())
            }
        }
    }

    /// Round-trips a fixed URL through the codec.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the round-trip fails or does not
    /// reproduce the input.
    pub fn self_check(&self) -> Result<(), AppError> {
        let code = self.codec.encode(CANARY_URL).map_err(|e| {
            AppError::internal("Canary encode failed", json!({ "reason": e.to_string() }))
        })?;
        let decoded = self.codec.decode(&code).map_err(|e| {
            AppError::internal(
                "Canary decode failed",
                json!({ "code": code, "reason": e.to_string() }),
            )
        })?;

        if decoded != CANARY_URL {
            return Err(AppError::internal(
                "Canary round-trip mismatch",
                json!({ "code": code, "decoded": decoded }),
            ));
        }

        Ok(())
    }
}
