#![allow(dead_code)]

use std::sync::Arc;
use url_codec::application::services::CodecService;
use url_codec::domain::codec::DomainMappings;
use url_codec::domain::entities::SchemeVersion;
use url_codec::state::AppState;

pub fn create_test_state(scheme: SchemeVersion) -> AppState {
    AppState::new(Arc::new(create_test_service(scheme)))
}

pub fn create_test_service(scheme: SchemeVersion) -> CodecService {
    CodecService::for_scheme(scheme, Arc::new(DomainMappings::builtin()))
}

/// URLs covering the shapes the codec must round-trip.
pub const SAMPLE_URLS: &[&str] = &[
    "https://github.com",
    "https://github.com/user/repo",
    "http://example.org",
    "https://www.example.com/search?q=rust&lang=en",
    "https://blog.bbc.co.uk/news/articles/2024",
    "https://docs.rust-lang.org/std/index.html#structs",
    "http://localhost:8080/api/v1/items?page=2",
    "https://example.com?only=query",
    "https://example.com#fragment",
    "https://a.io/%E2%9C%93/caf%C3%A9",
    "https://sub.domain.example.net/a/b/c/d/e/f/g/h",
];
