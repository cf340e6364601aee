//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::CodecService;

/// State cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub codec_service: Arc<CodecService>,
}

impl AppState {
    pub fn new(codec_service: Arc<CodecService>) -> Self {
        Self { codec_service }
    }
}
