//! Domain shortening strategies.

use std::sync::Arc;

use super::compressor::{self, Effort};
use super::error::CodecError;
use super::mappings::DomainMappings;
use super::base62;
use crate::domain::entities::DomainStrategy;

/// Maps a domain name to a short code and back.
///
/// # Implementations
///
/// - [`LookupDomainCodec`] - shortcut tables, never fails
/// - [`CompressedDomainCodec`] - Brotli + base62, fails on foreign input
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait DomainCodec: Send + Sync {
    /// Strategy implemented by this codec.
    fn strategy(&self) -> DomainStrategy;

    /// Encodes `domain` into a code.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::CompressionFailed`] if the compressor fails.
    fn encode(&self, domain: &str) -> Result<String, CodecError>;

    /// Decodes a code produced by [`DomainCodec::encode`].
    ///
    /// # Errors
    ///
    /// Strategy-specific; see the implementations.
    fn decode(&self, code: &str) -> Result<String, CodecError>;
}

/// Shortcut-table strategy.
///
/// Domains outside the tables' `sub.domain.tld` shape pass through unchanged.
/// Such codes decode on a best-effort basis: a raw label that happens to equal
/// a shortcut (e.g. a TLD `c`) expands on decode.
#[derive(Debug, Clone)]
pub struct LookupDomainCodec {
    mappings: Arc<DomainMappings>,
}

impl LookupDomainCodec {
    pub fn new(mappings: Arc<DomainMappings>) -> Self {
        Self { mappings }
    }
}

impl DomainCodec for LookupDomainCodec {
    fn strategy(&self) -> DomainStrategy {
        DomainStrategy::Lookup
    }

    fn encode(&self, domain: &str) -> Result<String, CodecError> {
        if let Some(shortcut) = self.mappings.domain_shortcut(domain) {
            return Ok(shortcut.to_string());
        }

        let labels: Vec<&str> = domain.split('.').collect();
        let (sub, name, tld) = match labels.as_slice() {
            [] | [_] => return Ok(domain.to_string()),
            [name, tld] => ("", *name, tld.to_string()),
            [sub, name, rest @ ..] => (*sub, *name, rest.join(".")),
        };

        let sub_code = if sub.is_empty() {
            ""
        } else {
            self.mappings.subdomain_shortcut(sub).unwrap_or(sub)
        };
        let tld_code = self.mappings.tld_shortcut(&tld).unwrap_or(&tld);

        Ok(format!("{sub_code}.{name}.{tld_code}")
            .trim_matches('.')
            .to_string())
    }

    fn decode(&self, code: &str) -> Result<String, CodecError> {
        if let Some(domain) = self.mappings.domain_for(code) {
            return Ok(domain.to_string());
        }

        let parts: Vec<&str> = code.split('.').collect();
        let (sub, name, tld) = match parts.as_slice() {
            [sub, name, tld] => (*sub, *name, *tld),
            [name, tld] => ("", *name, *tld),
            _ => return Ok(code.to_string()),
        };

        let sub = self.mappings.subdomain_for(sub).unwrap_or(sub);
        let tld = self.mappings.tld_for(tld).unwrap_or(tld);

        Ok([sub, name, tld]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("."))
    }
}

/// Compression strategy: `base62(brotli(domain))`.
///
/// Case and structure are preserved exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressedDomainCodec;

impl DomainCodec for CompressedDomainCodec {
    fn strategy(&self) -> DomainStrategy {
        DomainStrategy::Compression
    }

    fn encode(&self, domain: &str) -> Result<String, CodecError> {
        Ok(base62::encode(&compressor::compress(domain, Effort::Max)?))
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InvalidCharacter`] or [`CodecError::CorruptData`]
    /// if `code` is not the output of [`DomainCodec::encode`].
    fn decode(&self, code: &str) -> Result<String, CodecError> {
        compressor::decompress(&base62::decode(code)?)
    }
}
