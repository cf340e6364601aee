//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Token bucket parameters, applied per client IP.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitSettings {
    /// Tokens replenished per second.
    pub per_second: u64,
    /// Bucket size.
    pub burst_size: u32,
    /// Read the client IP from `X-Forwarded-For` / `X-Real-IP` instead of
    /// the peer socket address.
    pub behind_proxy: bool,
}

/// Wraps `router` in a rate limiter keyed on the client IP.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// - `behind_proxy = false`: socket peer address; the router must be served
///   with `into_make_service_with_connect_info::<SocketAddr>()`
/// - `behind_proxy = true`: forwarding headers, falling back to the peer address
///
/// # Example
///
/// ```rust,ignore
/// let app = rate_limit::apply(
///     Router::new().route("/encode", post(encode_handler)),
///     &config.rate_limit(),
/// );
/// ```
pub fn apply<S>(router: Router<S>, settings: &RateLimitSettings) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if settings.behind_proxy {
        router.layer(layer(settings, SmartIpKeyExtractor))
    } else {
        router.layer(layer(settings, PeerIpKeyExtractor))
    }
}

/// Builds a governor layer for the given key extractor.
///
/// # Panics
///
/// Panics if `per_second` or `burst_size` is zero; [`crate::config::Config::validate`]
/// rejects both at startup.
pub fn layer<K>(
    settings: &RateLimitSettings,
    key_extractor: K,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(settings.per_second)
            .burst_size(settings.burst_size)
            .finish()
            .expect("rate limit settings must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
