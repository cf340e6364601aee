//! Value types the codec operates on.
//!
//! - [`ParsedUrl`] - a URL split into protocol, domain and path
//! - [`SchemeVersion`] - which code format is in use

pub mod parsed_url;
pub mod scheme;

pub use parsed_url::{MAX_DOMAIN_LEN, MAX_URL_LEN, ParsedUrl, Protocol};
pub use scheme::{DelimiterPolicy, DomainStrategy, MarkerCase, SchemeVersion};
