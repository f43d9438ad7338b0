//! Configuration management for the gateway
//!
//! Loads startup configuration from an optional `config.toml` plus
//! `WAYGATE_*` environment overrides. The three content-service API keys are
//! secrets and are expected to come from the environment (a `.env` file is
//! honored at startup).

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Gateway startup configuration. Loaded once; no runtime mutation.
#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    /// Path of the opaque credential blob persisted across restarts.
    pub credentials_path: String,

    /// Delay between reconnect attempts after a connect failure.
    pub reconnect_delay_secs: u64,

    /// Consecutive connect failures tolerated before giving up.
    pub max_connect_retries: usize,

    /// Bound on every outbound HTTP call so one slow command cannot starve
    /// the event loop.
    pub request_timeout_secs: u64,

    // ═══ CONTENT SERVICE SECRETS (Environment Only) ═══
    pub ai_api_key: String,
    pub weather_api_key: String,
    pub youtube_api_key: String,

    // ═══ CONTENT SERVICE ENDPOINTS (Overridable For Tests) ═══
    pub completion_base_url: String,
    pub completion_model: String,
    pub weather_base_url: String,
    pub wiki_base_url: String,
    pub video_base_url: String,
}

impl GatewayConfig {
    /// Load configuration from config.toml (optional) with environment
    /// overrides.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("credentials_path", "auth_info.creds")?
            .set_default("reconnect_delay_secs", 2_i64)?
            .set_default("max_connect_retries", 5_i64)?
            .set_default("request_timeout_secs", 15_i64)?
            .set_default("ai_api_key", "")?
            .set_default("weather_api_key", "")?
            .set_default("youtube_api_key", "")?
            .set_default(
                "completion_base_url",
                "https://generativelanguage.googleapis.com",
            )?
            .set_default("completion_model", "gemini-2.0-flash")?
            .set_default("weather_base_url", "https://api.openweathermap.org")?
            .set_default("wiki_base_url", "https://en.wikipedia.org")?
            .set_default("video_base_url", "https://www.googleapis.com")?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("WAYGATE"))
            .build()?;

        let config: GatewayConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.credentials_path.is_empty() {
            return Err(config::ConfigError::Message(
                "credentials_path cannot be empty".into(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        if self.max_connect_retries == 0 {
            return Err(config::ConfigError::Message(
                "max_connect_retries must be greater than 0".into(),
            ));
        }

        for (name, url) in [
            ("completion_base_url", &self.completion_base_url),
            ("weather_base_url", &self.weather_base_url),
            ("wiki_base_url", &self.wiki_base_url),
            ("video_base_url", &self.video_base_url),
        ] {
            if url.is_empty() {
                return Err(config::ConfigError::Message(format!(
                    "{} cannot be empty",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Get the credential blob path as a PathBuf
    pub fn credentials_path(&self) -> PathBuf {
        PathBuf::from(&self.credentials_path)
    }

    /// Get the reconnect delay as a Duration
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_secs(self.reconnect_delay_secs)
    }

    /// Get the HTTP request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
