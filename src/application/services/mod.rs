//! Business logic services for the application layer.

pub mod codec_service;

pub use codec_service::CodecService;
