//! Configuration for the ecotravel service
//!
//! Settings come from `ECOTRAVEL_*` environment variables with defaults
//! suitable for local use; nothing is read from disk.

use std::{env, fmt::Display, str::FromStr};

use anyhow::Result;
use tracing::debug;

use crate::EcoTravelError;

/// Root configuration for the ecotravel service
#[derive(Debug, Clone, PartialEq)]
pub struct EcoTravelConfig {
    /// Server bind settings
    pub server: ServerConfig,
    /// Request guard-rail settings
    pub limits: LimitsConfig,
}

/// Server bind settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

/// Per-request guard rails applied as middleware
#[derive(Debug, Clone, PartialEq)]
pub struct LimitsConfig {
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Request body cap in bytes
    pub body_limit_bytes: usize,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_body_limit() -> usize {
    64 * 1024
}

impl Default for EcoTravelConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            limits: LimitsConfig {
                request_timeout_secs: default_request_timeout(),
                body_limit_bytes: default_body_limit(),
            },
        }
    }
}

impl EcoTravelConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn load() -> Result<Self> {
        let config = Self {
            server: ServerConfig {
                host: load_or("ECOTRAVEL_HOST", default_host())?,
                port: load_or("ECOTRAVEL_PORT", default_port())?,
            },
            limits: LimitsConfig {
                request_timeout_secs: load_or(
                    "ECOTRAVEL_REQUEST_TIMEOUT_SECS",
                    default_request_timeout(),
                )?,
                body_limit_bytes: load_or("ECOTRAVEL_BODY_LIMIT_BYTES", default_body_limit())?,
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Address string for the TCP listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.limits.request_timeout_secs == 0 {
            return Err(
                EcoTravelError::config("Request timeout must be at least 1 second").into(),
            );
        }

        if self.limits.request_timeout_secs > 300 {
            return Err(
                EcoTravelError::config("Request timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.limits.body_limit_bytes == 0 {
            return Err(EcoTravelError::config("Request body limit cannot be zero").into());
        }

        Ok(())
    }
}

/// Read a typed value from the environment, keeping the default when the
/// variable is unset. A variable that is set but unparseable is an error
/// rather than a silent fallback.
fn load_or<T: FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| EcoTravelError::config(format!("Invalid {key} value {raw:?}: {e}")).into()),
        Err(_) => {
            debug!("{key} not set, using default");
            Ok(default)
        }
    }
}
