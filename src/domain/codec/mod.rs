//! Reversible URL codec.
//!
//! Leaf-first:
//!
//! - [`base62`] - bytes as a big-endian integer in base 62
//! - [`compressor`] - Brotli at two effort levels
//! - [`mappings`] - shortcut tables for the lookup strategy
//! - [`domain_codec`] - the two domain strategies behind [`DomainCodec`]
//! - [`url_codec`] - URL parsing, framing and boundary recovery
//!
//! Everything here is pure and synchronous. The codec never logs; callers in
//! [`crate::application`] do.

pub mod base62;
pub mod compressor;
pub mod domain_codec;
pub mod error;
pub mod mappings;
pub mod url_codec;

pub use domain_codec::{CompressedDomainCodec, DomainCodec, LookupDomainCodec};
#[cfg(test)]
pub use domain_codec::MockDomainCodec;
pub use error::{CodecError, Component};
pub use mappings::DomainMappings;
pub use url_codec::UrlCodec;
