//! Scheme versions: the fixed combination of domain strategy, delimiter
//! policy and protocol-marker casing that encoder and decoder must share.

use std::fmt;
use std::str::FromStr;

use crate::domain::codec::CodecError;
use crate::domain::entities::Protocol;

/// How domains are shortened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainStrategy {
    /// Static shortcut tables with structured fallback. Never fails to decode.
    Lookup,
    /// Brotli + base62. Decoding fails on anything that is not its own output.
    Compression,
}

impl DomainStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            DomainStrategy::Lookup => "lookup",
            DomainStrategy::Compression => "compression",
        }
    }
}

/// How sub-codes are framed inside a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterPolicy {
    /// `m_domain_path`
    Underscore,
    /// `m-domain-path`
    Hyphen,
    /// `m` + domain + path, boundary recovered on decode.
    DelimiterFree,
}

impl DelimiterPolicy {
    pub fn separator(self) -> Option<char> {
        match self {
            DelimiterPolicy::Underscore => Some('_'),
            DelimiterPolicy::Hyphen => Some('-'),
            DelimiterPolicy::DelimiterFree => None,
        }
    }
}

/// Protocol marker casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCase {
    /// Emits `s`/`p`, accepts either case.
    Lower,
    /// Emits and accepts only `S`/`P`.
    Upper,
}

impl MarkerCase {
    pub fn marker(self, protocol: Protocol) -> char {
        match (self, protocol) {
            (MarkerCase::Lower, Protocol::Https) => 's',
            (MarkerCase::Lower, Protocol::Http) => 'p',
            (MarkerCase::Upper, Protocol::Https) => 'S',
            (MarkerCase::Upper, Protocol::Http) => 'P',
        }
    }

    pub fn protocol(self, marker: char) -> Option<Protocol> {
        match (self, marker) {
            (MarkerCase::Lower, 's' | 'S') | (MarkerCase::Upper, 'S') => Some(Protocol::Https),
            (MarkerCase::Lower, 'p' | 'P') | (MarkerCase::Upper, 'P') => Some(Protocol::Http),
            _ => None,
        }
    }
}

/// Supported code formats.
///
/// | Version | Domain strategy | Framing          | Markers |
/// |---------|-----------------|------------------|---------|
/// | `v1`    | lookup          | underscore       | `s`/`p` |
/// | `v2`    | compression     | hyphen           | `S`/`P` |
/// | `v3`    | compression     | delimiter-free   | `S`/`P` |
///
/// Delimiter-free framing relies on domain decode failures to find the
/// boundary, so it only exists paired with the compression strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeVersion {
    V1,
    #[default]
    V2,
    V3,
}

impl SchemeVersion {
    pub const ALL: [SchemeVersion; 3] = [SchemeVersion::V1, SchemeVersion::V2, SchemeVersion::V3];

    pub fn domain_strategy(self) -> DomainStrategy {
        match self {
            SchemeVersion::V1 => DomainStrategy::Lookup,
            SchemeVersion::V2 | SchemeVersion::V3 => DomainStrategy::Compression,
        }
    }

    pub fn delimiter_policy(self) -> DelimiterPolicy {
        match self {
            SchemeVersion::V1 => DelimiterPolicy::Underscore,
            SchemeVersion::V2 => DelimiterPolicy::Hyphen,
            SchemeVersion::V3 => DelimiterPolicy::DelimiterFree,
        }
    }

    pub fn marker_case(self) -> MarkerCase {
        match self {
            SchemeVersion::V1 => MarkerCase::Lower,
            SchemeVersion::V2 | SchemeVersion::V3 => MarkerCase::Upper,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemeVersion::V1 => "v1",
            SchemeVersion::V2 => "v2",
            SchemeVersion::V3 => "v3",
        }
    }
}

impl fmt::Display for SchemeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeVersion {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" | "lookup" => Ok(SchemeVersion::V1),
            "v2" | "2" | "compressed" => Ok(SchemeVersion::V2),
            "v3" | "3" | "compact" => Ok(SchemeVersion::V3),
            _ => Err(CodecError::UnknownScheme(s.to_string())),
        }
    }
}
