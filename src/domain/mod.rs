//! Domain layer: URL value types and the codec.
//!
//! Nothing here depends on HTTP, configuration or logging.
//!
//! # Architecture
//!
//! - [`entities`] - parsed URLs and scheme versions
//! - [`codec`] - base62, compression, domain strategies, URL framing
//!
//! # Encoding Flow
//!
//! 1. [`entities::ParsedUrl::parse`] splits the URL
//! 2. The protocol becomes a one-character marker
//! 3. The domain goes through the scheme's [`codec::DomainCodec`]
//! 4. The path is Brotli-compressed and base62-encoded
//! 5. [`codec::UrlCodec`] frames the three parts

pub mod codec;
pub mod entities;
