//! URL split into the three components the codec works on.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::domain::codec::CodecError;

/// `protocol://domain` followed by an optional path, query or fragment.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?)://([^/?#\s]+)([/?#].*)?$").unwrap());

static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^/?#\s]+$").unwrap());

/// Longest URL accepted, in bytes.
pub const MAX_URL_LEN: usize = 8192;

/// Longest domain accepted, in bytes: a 253-byte host name plus `:port`.
pub const MAX_DOMAIN_LEN: usize = 259;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL reduced to protocol, domain and path.
///
/// Everything after the domain (path, query string, fragment) is kept verbatim
/// in `path`. A path of exactly `/` is stored as empty, so `http://a.org/` and
/// `http://a.org` are the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub protocol: Protocol,
    pub domain: String,
    pub path: String,
}

impl ParsedUrl {
    /// Creates a parsed URL, normalizing a lone `/` path to empty.
    pub fn new(protocol: Protocol, domain: impl Into<String>, path: impl Into<String>) -> Self {
        let mut path = path.into();
        if path == "/" {
            path.clear();
        }

        Self {
            protocol,
            domain: domain.into(),
            path,
        }
    }

    /// Splits `url` into its components. Leading and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidFormat`] unless `url` is an `http` or
    /// `https` URL with a non-empty domain, at most [`MAX_URL_LEN`] bytes long
    /// and with a domain of at most [`MAX_DOMAIN_LEN`] bytes.
    pub fn parse(url: &str) -> Result<Self, CodecError> {
        let url = url.trim();
        if url.len() > MAX_URL_LEN {
            return Err(CodecError::InvalidFormat(format!(
                "URL exceeds {MAX_URL_LEN} bytes"
            )));
        }

        let captures = URL_REGEX
            .captures(url)
            .ok_or_else(|| CodecError::InvalidFormat("expected http(s)://domain[/path]".to_string()))?;

        let protocol = match &captures[1] {
            "https" => Protocol::Https,
            _ => Protocol::Http,
        };
        let domain = &captures[2];
        if domain.len() > MAX_DOMAIN_LEN {
            return Err(CodecError::InvalidFormat(format!(
                "domain exceeds {MAX_DOMAIN_LEN} bytes"
            )));
        }
        let path = captures.get(3).map_or("", |m| m.as_str());

        Ok(Self::new(protocol, domain, path))
    }

    /// Whether `domain` could have come out of [`ParsedUrl::parse`].
    pub fn is_valid_domain(domain: &str) -> bool {
        domain.len() <= MAX_DOMAIN_LEN && DOMAIN_REGEX.is_match(domain)
    }

    /// Whether `path` could have come out of [`ParsedUrl::parse`].
    pub fn is_valid_path(path: &str) -> bool {
        path.is_empty()
            || (path.starts_with(['/', '?', '#']) && path != "/" && !path.contains('\n'))
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.protocol, self.domain, self.path)
    }
}
