//! Top-level URL encoder/decoder.
//!
//! A code is the protocol marker, the domain code and the path code, framed
//! according to the scheme's
//! [`DelimiterPolicy`](crate::domain::entities::DelimiterPolicy). With delimiter-free framing
//! the decoder scans split points left to right and takes the first one where
//! both halves decode and re-encode to exactly the text they came from.

use std::sync::Arc;

use super::base62;
use super::compressor;
use super::domain_codec::{CompressedDomainCodec, DomainCodec, LookupDomainCodec};
use super::error::{CodecError, Component};
use super::mappings::DomainMappings;
use crate::domain::entities::{
    DomainStrategy, MAX_DOMAIN_LEN, MAX_URL_LEN, ParsedUrl, Protocol, SchemeVersion,
};

/// Longest domain code any strategy produces for a domain the parser accepts.
pub const MAX_DOMAIN_CODE_LEN: usize =
    base62::max_encoded_len(compressor::max_compressed_len(MAX_DOMAIN_LEN));

/// Longest code any scheme produces for a URL the parser accepts: marker, two
/// separators, domain code and path code.
pub const MAX_CODE_LEN: usize = 3
    + MAX_DOMAIN_CODE_LEN
    + base62::max_encoded_len(compressor::max_compressed_len(MAX_URL_LEN));

/// Encodes a path to its sub-code. Empty paths produce an empty code.
pub fn encode_path(path: &str) -> Result<String, CodecError> {
    if path.is_empty() || path == "/" {
        return Ok(String::new());
    }

    Ok(base62::encode(&compressor::compress_smallest(path)?))
}

/// Decodes a path sub-code. An empty code is the empty path.
pub fn decode_path(code: &str) -> Result<String, CodecError> {
    if code.is_empty() {
        return Ok(String::new());
    }

    compressor::decompress(&base62::decode(code)?)
}

/// Stateless URL codec for one scheme version.
///
/// Cheap to clone; the domain codec and its tables are shared.
#[derive(Clone)]
pub struct UrlCodec {
    scheme: SchemeVersion,
    domains: Arc<dyn DomainCodec>,
}

impl UrlCodec {
    /// Creates a codec for `scheme`, using `mappings` when the scheme uses the
    /// lookup strategy.
    pub fn new(scheme: SchemeVersion, mappings: Arc<DomainMappings>) -> Self {
        let domains: Arc<dyn DomainCodec> = match scheme.domain_strategy() {
            DomainStrategy::Lookup => Arc::new(LookupDomainCodec::new(mappings)),
            DomainStrategy::Compression => Arc::new(CompressedDomainCodec),
        };

        Self { scheme, domains }
    }

    /// Creates a codec around an explicit domain codec.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SchemeMismatch`] if the domain codec's strategy is
    /// not the one `scheme` is defined with.
    pub fn with_domain_codec(
        scheme: SchemeVersion,
        domains: Arc<dyn DomainCodec>,
    ) -> Result<Self, CodecError> {
        let expected = scheme.domain_strategy();
        let actual = domains.strategy();

        if expected != actual {
            return Err(CodecError::SchemeMismatch {
                scheme: scheme.as_str(),
                expected: expected.as_str(),
                actual: actual.as_str(),
            });
        }

        Ok(Self { scheme, domains })
    }

    pub fn scheme(&self) -> SchemeVersion {
        self.scheme
    }

    /// Encodes a URL string into a code.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidFormat`] if `url` is not `http(s)://domain[/path]`,
    ///   or a lookup domain code would contain the scheme's separator
    /// - [`CodecError::DomainRecoveryFailed`] if, without delimiters, the
    ///   resulting code would not decode back to the same boundary
    pub fn encode(&self, url: &str) -> Result<String, CodecError> {
        self.encode_parsed(&ParsedUrl::parse(url)?)
    }

    /// Encodes already-parsed URL components.
    ///
    /// # Errors
    ///
    /// See [`UrlCodec::encode`].
    pub fn encode_parsed(&self, url: &ParsedUrl) -> Result<String, CodecError> {
        let marker = self.scheme.marker_case().marker(url.protocol);
        let domain_code = self.domains.encode(&url.domain)?;
        let path_code = encode_path(&url.path)?;

        match self.scheme.delimiter_policy().separator() {
            Some(separator) => {
                if domain_code.is_empty() || domain_code.contains(separator) {
                    return Err(CodecError::InvalidFormat(format!(
                        "domain code {domain_code:?} cannot be framed with {separator:?}"
                    )));
                }

                let mut code = format!("{marker}{separator}{domain_code}");
                if !path_code.is_empty() {
                    code.push(separator);
                    code.push_str(&path_code);
                }
                Ok(code)
            }
            None => {
                let body = format!("{domain_code}{path_code}");
                let (domain, path) = self.recover_boundary(&body)?;

                if domain != url.domain || path != url.path {
                    return Err(CodecError::DomainRecoveryFailed);
                }

                Ok(format!("{marker}{body}"))
            }
        }
    }

    /// Decodes a code back into a URL string.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidFormat`] if the code's framing is malformed or it
    ///   is longer than [`MAX_CODE_LEN`]
    /// - [`CodecError::DomainRecoveryFailed`] if no delimiter-free split works
    /// - [`CodecError::DecodeFailed`] if the domain or path code is corrupt
    pub fn decode(&self, code: &str) -> Result<String, CodecError> {
        Ok(self.decode_parsed(code)?.to_string())
    }

    /// Decodes a code into URL components.
    ///
    /// # Errors
    ///
    /// See [`UrlCodec::decode`].
    pub fn decode_parsed(&self, code: &str) -> Result<ParsedUrl, CodecError> {
        if code.len() > MAX_CODE_LEN {
            return Err(CodecError::InvalidFormat(format!(
                "code exceeds {MAX_CODE_LEN} characters"
            )));
        }

        match self.scheme.delimiter_policy().separator() {
            Some(separator) => self.decode_delimited(code, separator),
            None => self.decode_compact(code),
        }
    }

    fn decode_delimited(&self, code: &str, separator: char) -> Result<ParsedUrl, CodecError> {
        let mut parts = code.split(separator);

        let (Some(marker), Some(domain_code)) = (parts.next(), parts.next()) else {
            return Err(CodecError::InvalidFormat(format!(
                "expected marker{separator}domain[{separator}path]"
            )));
        };
        let path_code = parts.next().unwrap_or("");

        if parts.next().is_some() {
            return Err(CodecError::InvalidFormat(format!(
                "too many {separator:?}-separated parts"
            )));
        }
        if domain_code.is_empty() {
            return Err(CodecError::InvalidFormat("empty domain code".to_string()));
        }

        let protocol = self.protocol_for(marker)?;
        let domain = self
            .domains
            .decode(domain_code)
            .map_err(|e| e.in_component(Component::Domain))?;
        let path = decode_path(path_code).map_err(|e| e.in_component(Component::Path))?;

        Ok(ParsedUrl::new(protocol, domain, path))
    }

    fn decode_compact(&self, code: &str) -> Result<ParsedUrl, CodecError> {
        let mut chars = code.chars();
        let marker = chars
            .next()
            .ok_or_else(|| CodecError::InvalidFormat("empty code".to_string()))?;
        let body = chars.as_str();

        let protocol = self.protocol_for(&marker.to_string())?;

        if body.is_empty() {
            return Err(CodecError::InvalidFormat("missing domain code".to_string()));
        }
        if let Some((position, character)) =
            body.char_indices().find(|(_, c)| !c.is_ascii_alphanumeric())
        {
            return Err(CodecError::InvalidCharacter {
                character,
                position: position + 1,
            }
            .in_component(Component::Domain));
        }

        let (domain, path) = self.recover_boundary(body)?;

        Ok(ParsedUrl::new(protocol, domain, path))
    }

    fn protocol_for(&self, marker: &str) -> Result<Protocol, CodecError> {
        let mut chars = marker.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self
                .scheme
                .marker_case()
                .protocol(c)
                .ok_or_else(|| CodecError::InvalidFormat(format!("unknown protocol marker {c:?}"))),
            _ => Err(CodecError::InvalidFormat(format!(
                "protocol marker must be one character, got {marker:?}"
            ))),
        }
    }

    /// Finds the domain/path boundary in a delimiter-free body.
    ///
    /// Only the first [`MAX_DOMAIN_CODE_LEN`] split points are tried, since no
    /// accepted domain encodes to anything longer. `body` must be ASCII.
    fn recover_boundary(&self, body: &str) -> Result<(String, String), CodecError> {
        for split in 1..=body.len().min(MAX_DOMAIN_CODE_LEN) {
            let (domain_code, path_code) = body.split_at(split);

            match self.try_boundary(domain_code, path_code) {
                Ok(parts) => return Ok(parts),
                Err(_) => continue,
            }
        }

        Err(CodecError::DomainRecoveryFailed)
    }

    /// Accepts a split only if both halves decode and are canonical encodings
    /// of what they decode to.
    fn try_boundary(
        &self,
        domain_code: &str,
        path_code: &str,
    ) -> Result<(String, String), CodecError> {
        let domain = self.domains.decode(domain_code)?;
        if !ParsedUrl::is_valid_domain(&domain) || self.domains.encode(&domain)? != domain_code {
            return Err(CodecError::InvalidFormat(
                "domain code is not canonical".to_string(),
            ));
        }

        let path = decode_path(path_code)?;
        if !ParsedUrl::is_valid_path(&path) || encode_path(&path)? != path_code {
            return Err(CodecError::InvalidFormat(
                "path code is not canonical".to_string(),
            ));
        }

        Ok((domain, path))
    }
}

impl std::fmt::Debug for UrlCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlCodec")
            .field("scheme", &self.scheme)
            .field("domain_strategy", &self.domains.strategy())
            .finish()
    }
}
