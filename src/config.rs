//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Command-line flags (see `main.rs`) override the environment.
//!
//! ## Required Variables
//!
//! - `PASSWORD_SECRET` - HMAC key used when hashing passwords
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BODY_LIMIT_BYTES` - Largest request body accepted by the validation
//!   chain (default: 65536, min: 1024, max: 16 MiB)

use anyhow::{Context, Result};
use std::env;

/// Default request body limit in bytes.
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

const MIN_BODY_LIMIT: usize = 1024;
const MAX_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// HMAC key for password hashing. Loaded from `PASSWORD_SECRET`. Must be non-empty.
    pub password_secret: String,
    pub body_limit: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PASSWORD_SECRET` is missing or `BODY_LIMIT_BYTES`
    /// is not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let password_secret =
            env::var("PASSWORD_SECRET").context("PASSWORD_SECRET must be set")?;

        let body_limit = match env::var("BODY_LIMIT_BYTES") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("BODY_LIMIT_BYTES must be a number, got '{}'", v))?,
            Err(_) => DEFAULT_BODY_LIMIT,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            password_secret,
            body_limit,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `password_secret` is empty
    /// - `body_limit` is outside 1 KiB to 16 MiB
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

        if self.password_secret.is_empty() {
            anyhow::bail!("PASSWORD_SECRET must not be empty");
        }

        if !(MIN_BODY_LIMIT..=MAX_BODY_LIMIT).contains(&self.body_limit) {
            anyhow::bail!(
                "BODY_LIMIT_BYTES must be between {} and {}, got {}",
                MIN_BODY_LIMIT,
                MAX_BODY_LIMIT,
                self.body_limit
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Body limit: {} bytes", self.body_limit);
        tracing::info!("  Password secret: ***");
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("password_secret", &"***")
            .field("body_limit", &self.body_limit)
            .finish()
    }
}
