//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base URL used to build short links
//!   (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `REAPER_INTERVAL_SECONDS` - How often the expiry reaper runs
//!   (default: 60, min: 1, max: 86400)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL prepended to short codes in API responses.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Interval between expiry reaper sweeps, in seconds.
    pub reaper_interval_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let reaper_interval_seconds = env::var("REAPER_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            reaper_interval_seconds,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `base_url` is not an absolute http(s) URL
    /// - `reaper_interval_seconds` is outside `1..=86400`
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

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.reaper_interval_seconds == 0 || self.reaper_interval_seconds > 86_400 {
            anyhow::bail!(
                "REAPER_INTERVAL_SECONDS must be between 1 and 86400, got {}",
                self.reaper_interval_seconds
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Reaper interval: {}s", self.reaper_interval_seconds);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            reaper_interval_seconds: 60,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Invalid base URL
        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://s.example.com".to_string();

        // Invalid reaper interval
        config.reaper_interval_seconds = 0;
        assert!(config.validate().is_err());

        config.reaper_interval_seconds = 100_000;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("LOG_FORMAT");
            env::remove_var("REAPER_INTERVAL_SECONDS");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.reaper_interval_seconds, 60);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("BASE_URL", "https://s.example.com");
            env::set_var("REAPER_INTERVAL_SECONDS", "5");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.base_url, "https://s.example.com");
        assert_eq!(config.reaper_interval_seconds, 5);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("REAPER_INTERVAL_SECONDS");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_reaper_interval_falls_back_to_default() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("REAPER_INTERVAL_SECONDS", "not-a-number");
        }

        let config = Config::from_env();
        assert_eq!(config.reaper_interval_seconds, 60);

        unsafe {
            env::remove_var("REAPER_INTERVAL_SECONDS");
        }
    }
}
