//! # URL Codec
//!
//! A stateless URL shortener built with Axum: codes are computed from the URL
//! itself, so decoding needs no storage.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL model, scheme versions and the codec
//! - **Application Layer** ([`application`]) - Codec service with logging and self-check
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Code Format
//!
//! A code is a protocol marker followed by a domain code and an optional path
//! code. Three scheme versions exist; see
//! [`SchemeVersion`](domain::entities::SchemeVersion).
//!
//! ## Quick Start
//!
//! ```bash
//! export CODEC_SCHEME="v2"
//! cargo run
//!
//! # Offline CLI
//! cargo run --bin urlcode -- encode https://github.com/user/repo
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CodecService;
    pub use crate::domain::codec::{CodecError, DomainMappings, UrlCodec};
    pub use crate::domain::entities::{ParsedUrl, Protocol, SchemeVersion};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
