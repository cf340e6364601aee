//! Application layer services.
//!
//! Services wrap the pure codec with the concerns HTTP handlers and the CLI
//! share: error mapping to [`crate::error::AppError`] and structured logging.
//!
//! # Available Services
//!
//! - [`services::codec_service::CodecService`] - URL encoding, decoding and self-check

pub mod services;
