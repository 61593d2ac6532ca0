//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    Text,
    /// One JSON object per line.
    Json,
}

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,

    /// Log line format.
    pub log_format: LogFormat,

    /// Per-request timeout applied by the HTTP stack.
    pub request_timeout: Duration,

    /// Whether `POST /admin/reset` is mounted.
    pub admin_reset_enabled: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            event_bus_capacity: 1024,
            log_format: LogFormat::Text,
            request_timeout: Duration::from_secs(30),
            admin_reset_enabled: true,
        }
    }
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to the [`Default`] values when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("LISTEN_ADDR") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid LISTEN_ADDR: {raw}"))?,
            Err(_) => defaults.listen_addr,
        };

        let event_bus_capacity = parse_env("EVENT_BUS_CAPACITY", defaults.event_bus_capacity);
        let log_format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => defaults.log_format,
        };
        let request_timeout = Duration::from_secs(parse_env(
            "REQUEST_TIMEOUT_SECS",
            defaults.request_timeout.as_secs(),
        ));
        let admin_reset_enabled =
            parse_env_bool("ADMIN_RESET_ENABLED", defaults.admin_reset_enabled);

        Ok(Self {
            listen_addr,
            event_bus_capacity,
            log_format,
            request_timeout,
            admin_reset_enabled,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key)
        .ok()
        .map(|v| v.to_ascii_lowercase())
        .as_deref()
    {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr.port(), 3000);
        assert_eq!(config.event_bus_capacity, 1024);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.admin_reset_enabled);
    }

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        assert_eq!(parse_env("WAREHOUSE_GATEWAY_TEST_UNSET_KEY", 7usize), 7);
        assert!(parse_env_bool("WAREHOUSE_GATEWAY_TEST_UNSET_KEY", true));
    }
}
