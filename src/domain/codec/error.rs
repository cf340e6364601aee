//! Error taxonomy for the URL codec.

use std::fmt;

/// URL component a decode failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Domain,
    Path,
}

impl Component {
    pub fn as_str(self) -> &'static str {
        match self {
            Component::Domain => "domain",
            Component::Path => "path",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while encoding or decoding URLs.
///
/// All errors are local to a single call. Inputs are deterministic, so
/// retrying a failed call reproduces the same error.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Input URL or code does not match the expected grammar.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Base62 decode saw a character outside the alphabet.
    #[error("Invalid base62 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Compressed bytes failed Brotli integrity or format checks.
    #[error("Corrupt compressed data: {0}")]
    CorruptData(String),

    /// The compressor itself failed.
    #[error("Compression failed: {0}")]
    CompressionFailed(String),

    /// Delimiter-free boundary search found no valid split point.
    #[error("Could not locate the boundary between domain and path")]
    DomainRecoveryFailed,

    /// A named component of the code failed to decode.
    #[error("Failed to decode {component}: {source}")]
    DecodeFailed {
        component: Component,
        #[source]
        source: Box<CodecError>,
    },

    /// Two keys in a mapping table share one shortcut.
    #[error("Shortcut {shortcut:?} is assigned more than once in the {table} table")]
    AmbiguousMapping { table: &'static str, shortcut: String },

    /// A domain codec was paired with a scheme that expects another strategy.
    #[error("Scheme {scheme} requires the {expected} domain strategy, got {actual}")]
    SchemeMismatch {
        scheme: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Unknown codec scheme {0:?} (expected v1, v2 or v3)")]
    UnknownScheme(String),
}

impl CodecError {
    /// Wraps this error as a failure of `component`.
    pub fn in_component(self, component: Component) -> Self {
        CodecError::DecodeFailed {
            component,
            source: Box::new(self),
        }
    }

    /// Stable machine-readable identifier of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CodecError::InvalidFormat(_) => "invalid_format",
            CodecError::InvalidCharacter { .. } => "invalid_character",
            CodecError::CorruptData(_) => "corrupt_data",
            CodecError::CompressionFailed(_) => "compression_failed",
            CodecError::DomainRecoveryFailed => "domain_recovery_failed",
            CodecError::DecodeFailed { .. } => "decode_failed",
            CodecError::AmbiguousMapping { .. } => "ambiguous_mapping",
            CodecError::SchemeMismatch { .. } => "scheme_mismatch",
            CodecError::UnknownScheme(_) => "unknown_scheme",
        }
    }

    /// Component tag for [`CodecError::DecodeFailed`], `None` otherwise.
    pub fn component(&self) -> Option<Component> {
        match self {
            CodecError::DecodeFailed { component, .. } => Some(*component),
            _ => None,
        }
    }
}
