mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_codec::api::handlers::decode_handler;
use url_codec::domain::codec::base62::ALPHABET;
use url_codec::domain::entities::SchemeVersion;

fn server(scheme: SchemeVersion) -> TestServer {
    let state = common::create_test_state(scheme);
    let app = Router::new()
        .route("/api/decode/{code}", get(decode_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_decode_success() {
    let server = server(SchemeVersion::V2);
    let code = common::create_test_service(SchemeVersion::V2)
        .encode("https://github.com/user/repo?tab=readme")
        .unwrap();

    let response = server.get(&format!("/api/decode/{code}")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://github.com/user/repo?tab=readme");
    assert_eq!(json["code"], code.as_str());
    assert_eq!(json["scheme"], "v2");
    assert_eq!(json["protocol"], "https");
    assert_eq!(json["domain"], "github.com");
    assert_eq!(json["path"], "/user/repo?tab=readme");
}

#[tokio::test]
async fn test_decode_v1_lookup_code() {
    let server = server(SchemeVersion::V1);

    let response = server.get("/api/decode/p_w.example.c").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "http://www.example.com");
    assert_eq!(json["path"], "");
}

#[tokio::test]
async fn test_decode_v3_roundtrip() {
    let server = server(SchemeVersion::V3);
    let code = common::create_test_service(SchemeVersion::V3)
        .encode("https://example.com/some/longer/path")
        .unwrap();

    let response = server.get(&format!("/api/decode/{code}")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com/some/longer/path");
}

#[tokio::test]
async fn test_decode_malformed_code() {
    let server = server(SchemeVersion::V2);

    let response = server.get("/api/decode/not-a-valid-code-format").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["kind"], "invalid_format");
}

#[tokio::test]
async fn test_decode_unknown_marker() {
    let server = server(SchemeVersion::V2);

    let response = server.get("/api/decode/X-abc").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_decode_corrupt_domain_names_component() {
    let server = server(SchemeVersion::V2);

    let response = server.get("/api/decode/S-abc").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Failed to decode domain");
    assert_eq!(json["error"]["details"]["kind"], "decode_failed");
    assert_eq!(json["error"]["details"]["component"], "domain");
}

#[tokio::test]
async fn test_decode_corrupt_path_names_component() {
    let server = server(SchemeVersion::V2);
    let code = common::create_test_service(SchemeVersion::V2)
        .encode("https://example.com")
        .unwrap();

    let response = server.get(&format!("/api/decode/{code}-abc")).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["component"], "path");
}

#[tokio::test]
async fn test_decode_v3_unrecoverable_boundary() {
    let server = server(SchemeVersion::V3);

    let response = server.get("/api/decode/Sabc").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["kind"], "domain_recovery_failed");
}

#[tokio::test]
async fn test_decode_oversized_v3_code_rejected() {
    let server = server(SchemeVersion::V3);
    let code = format!("S{}", "a".repeat(32_000));

    let started = std::time::Instant::now();
    let response = server.get(&format!("/api/decode/{code}")).await;

    response.assert_status_bad_request();
    assert!(started.elapsed() < std::time::Duration::from_secs(5));

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["kind"], "invalid_format");
}

#[tokio::test]
async fn test_decode_long_v3_garbage_fails_quickly() {
    let server = server(SchemeVersion::V3);
    let body: String = (0..12_000usize)
        .map(|i| char::from(ALPHABET[i * 7919 % ALPHABET.len()]))
        .collect();

    let started = std::time::Instant::now();
    let response = server.get(&format!("/api/decode/S{body}")).await;

    response.assert_status_bad_request();
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
}
