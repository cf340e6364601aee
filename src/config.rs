//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Key rate limits on `X-Forwarded-For` / `X-Real-IP` (default: `false`)
//! - `CODEC_SCHEME` - Code format: `v1`, `v2` or `v3` (default: `v2`)
//! - `RATE_LIMIT_PER_SECOND` - Token replenish rate per client (default: 10)
//! - `RATE_LIMIT_BURST` - Token bucket size per client (default: 100)
//!
//! ```bash
//! export CODEC_SCHEME="v3"
//! export LOG_FORMAT="json"
//! ```

use anyhow::{Context, Result};
use std::env;

use crate::api::middleware::rate_limit::RateLimitSettings;
use crate::domain::entities::SchemeVersion;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Code format used for encoding and decoding.
    pub scheme: SchemeVersion,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CODEC_SCHEME` names an unknown scheme.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let scheme = Self::load_scheme().context("Failed to load codec configuration")?;

        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            scheme,
            rate_limit_per_second,
            rate_limit_burst,
        })
    }

    /// Reads `CODEC_SCHEME`, falling back to the default scheme when unset.
    pub(crate) fn load_scheme() -> Result<SchemeVersion> {
        match env::var("CODEC_SCHEME") {
            Ok(value) if !value.trim().is_empty() => value
                .parse()
                .with_context(|| format!("CODEC_SCHEME has unsupported value '{value}'")),
            _ => Ok(SchemeVersion::default()),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - either rate limit setting is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.rate_limit_per_second == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND must be greater than 0");
        }

        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Rate limiter settings derived from this configuration.
    pub fn rate_limit(&self) -> RateLimitSettings {
        RateLimitSettings {
            per_second: self.rate_limit_per_second,
            burst_size: self.rate_limit_burst,
            behind_proxy: self.behind_proxy,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Codec scheme: {} ({} domains)",
            self.scheme,
            self.scheme.domain_strategy().as_str()
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Rate limit: {}/s, burst {}{}",
            self.rate_limit_per_second,
            self.rate_limit_burst,
            if self.behind_proxy { " (behind proxy)" } else { "" }
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable holds an unsupported value or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
