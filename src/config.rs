//! Configuration loading and constants.
//!
//! Loads the optional TOML configuration file and defines the defaults used
//! when a setting (or the whole file) is absent. `AppConfig` is the root
//! configuration struct.

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Probe results must never be served from an intermediary cache
pub const CACHE_CONTROL_PROBE: &str = "no-store";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default bind address (all interfaces, as expected inside a pod)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Seconds to wait for in-flight requests after SIGINT/SIGTERM
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "probe_server=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Grace period for draining connections on shutdown
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECONDS
    }

    /// Resolve host and port into the address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            ConfigError::Validation(format!("http.host '{}' is not an IP address", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable
    Text,
    /// Structured, one JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> LogFormat {
        LogFormat::Text
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Result<Self, ConfigError> {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be between 1 and 65535".to_string(),
            ));
        }
        self.http.socket_addr()?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
