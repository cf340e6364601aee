//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod decode;
pub mod encode;
pub mod health;
pub mod redirect;

pub use decode::decode_handler;
pub use encode::{encode_batch_handler, encode_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
