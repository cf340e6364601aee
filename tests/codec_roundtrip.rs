mod common;

use std::sync::Arc;
use url_codec::domain::codec::{CodecError, DomainMappings, UrlCodec, base62};
use url_codec::domain::entities::SchemeVersion;

fn codec(scheme: SchemeVersion) -> UrlCodec {
    UrlCodec::new(scheme, Arc::new(DomainMappings::builtin()))
}

#[test]
fn test_roundtrip_all_schemes() {
    for scheme in SchemeVersion::ALL {
        let codec = codec(scheme);

        for url in common::SAMPLE_URLS {
            let code = codec
                .encode(url)
                .unwrap_or_else(|e| panic!("{scheme}: encode {url}: {e}"));
            let decoded = codec
                .decode(&code)
                .unwrap_or_else(|e| panic!("{scheme}: decode {code}: {e}"));

            assert_eq!(&decoded, url, "{scheme}: code {code}");
        }
    }
}

#[test]
fn test_encoding_is_deterministic() {
    for scheme in SchemeVersion::ALL {
        for url in common::SAMPLE_URLS {
            assert_eq!(
                codec(scheme).encode(url).unwrap(),
                codec(scheme).encode(url).unwrap(),
                "{scheme}: {url}"
            );
        }
    }
}

#[test]
fn test_compressed_codes_stay_in_alphabet() {
    for scheme in [SchemeVersion::V2, SchemeVersion::V3] {
        let codec = codec(scheme);
        let separator = scheme.delimiter_policy().separator();

        for url in common::SAMPLE_URLS {
            let code = codec.encode(url).unwrap();
            let mut chars = code.chars();

            assert!(matches!(chars.next(), Some('S' | 'P')), "{code}");
            assert!(
                chars.all(|c| c.is_ascii_alphanumeric() || Some(c) == separator),
                "{scheme}: {code}"
            );
        }
    }
}

#[test]
fn test_compact_boundary_recovery_over_many_urls() {
    let codec = codec(SchemeVersion::V3);
    let domains = [
        "a.io",
        "x.co",
        "github.com",
        "example.org",
        "www.example.com",
        "localhost:3000",
        "very-long-subdomain.some-company.example.co.uk",
        "192.168.0.1",
    ];
    let paths = [
        "",
        "/",
        "/a",
        "?q=1",
        "#top",
        "/user/repo",
        "/search?q=rust+lang&page=2#results",
        "/aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    ];

    for domain in domains {
        for path in paths {
            for protocol in ["http", "https"] {
                let url = format!("{protocol}://{domain}{path}");
                let expected = if path == "/" {
                    format!("{protocol}://{domain}")
                } else {
                    url.clone()
                };

                let code = codec.encode(&url).unwrap();
                assert_eq!(codec.decode(&code).unwrap(), expected, "code {code}");
            }
        }
    }
}

#[test]
fn test_compact_decode_never_returns_wrong_url_for_truncated_codes() {
    let codec = codec(SchemeVersion::V3);
    let url = "https://github.com/user/repo";
    let code = codec.encode(url).unwrap();

    for end in 2..code.len() {
        if let Ok(decoded) = codec.decode(&code[..end]) {
            assert_ne!(decoded, url, "prefix {}", &code[..end]);
        }
    }
}

#[test]
fn test_codes_are_scheme_specific() {
    let v1 = codec(SchemeVersion::V1).encode("https://github.com/user/repo").unwrap();
    let v2 = codec(SchemeVersion::V2).encode("https://github.com/user/repo").unwrap();

    assert!(codec(SchemeVersion::V2).decode(&v1).is_err());
    assert!(codec(SchemeVersion::V1).decode(&v2).is_err());
}

#[test]
fn test_scenario_github_roundtrip() {
    let codec = codec(SchemeVersion::V2);
    let code = codec.encode("https://github.com/user/repo").unwrap();
    assert_eq!(codec.decode(&code).unwrap(), "https://github.com/user/repo");
}

#[test]
fn test_scenario_root_path_normalizes() {
    for scheme in SchemeVersion::ALL {
        let codec = codec(scheme);
        let code = codec.encode("http://example.org/").unwrap();
        assert_eq!(codec.decode(&code).unwrap(), "http://example.org");
        assert_eq!(code, codec.encode("http://example.org").unwrap());
    }
}

#[test]
fn test_scenario_invalid_code() {
    for scheme in SchemeVersion::ALL {
        let err = codec(scheme).decode("not-a-valid-code-format").unwrap_err();
        assert!(
            matches!(
                err,
                CodecError::InvalidFormat(_)
                    | CodecError::DecodeFailed { .. }
                    | CodecError::DomainRecoveryFailed
            ),
            "{scheme}: {err:?}"
        );
    }
}

#[test]
fn test_scenario_zero_byte_and_empty_collide() {
    assert_eq!(base62::encode(b"\x00"), "0");
    assert_eq!(base62::encode(b""), "0");
    assert_eq!(base62::decode("0").unwrap(), Vec::<u8>::new());
}
