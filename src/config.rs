//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export PUBLIC_ORIGIN="https://s.example.com"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `PUBLIC_ORIGIN` - Prefix for fabricated short links (default: `http://{LISTEN}`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Link lifetime (30 minutes), countdown cadence (1 second) and code length
//! (4 characters) are fixed and not configurable.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Scheme, host and port only; no path and no trailing slash.
    pub public_origin: String,
    /// True when `PUBLIC_ORIGIN` was not set and the origin was derived from `LISTEN`.
    pub origin_defaulted: bool,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PUBLIC_ORIGIN` (or the origin derived from `LISTEN`)
    /// is not an `http`/`https` URL with a host.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let (raw_origin, origin_defaulted) = match env::var("PUBLIC_ORIGIN") {
            Ok(origin) => (origin, false),
            Err(_) => (format!("http://{}", listen_addr), true),
        };
        let public_origin =
            normalize_origin(&raw_origin).context("Failed to load public origin")?;

        Ok(Self {
            listen_addr,
            public_origin,
            origin_defaulted,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Returns true if logs should be emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Public origin: {}", self.public_origin);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.origin_defaulted {
            tracing::warn!(
                "PUBLIC_ORIGIN environment variable not set, using default: {}",
                self.public_origin
            );
        }
    }
}

/// Reduces a URL to its ASCII origin (`scheme://host[:port]`).
///
/// Default ports are dropped, paths and trailing slashes removed:
/// `https://S.Example.com:443/app/` becomes `https://s.example.com`.
///
/// # Errors
///
/// Returns an error unless the input is an `http` or `https` URL with a host.
pub fn normalize_origin(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid origin URL '{}'", raw))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!(
            "Origin must use http or https, got '{}' in '{}'",
            url.scheme(),
            raw
        );
    }

    if url.host().is_none() {
        anyhow::bail!("Origin must include a host, got '{}'", raw);
    }

    Ok(url.origin().ascii_serialization())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if loading or validation fails.
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
