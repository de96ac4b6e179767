//! Configuration management for the Costa Rica Climate API
//!
//! Settings come from an optional `crclimate.toml` file and then from
//! environment variables (`PORT`, `DATABASE_URL`, `DATABASE_NAME`, ...),
//! with the environment taking precedence.

use crate::GatewayError;
use crate::diagnostics::DatabaseDescriptor;
use anyhow::{Context, Result};
use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = "crclimate.toml";

/// Root configuration structure for the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Interface to bind (`BIND_HOST`)
    #[serde(default = "default_host")]
    pub bind_host: String,
    /// Listening port (`PORT`)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database connection string (`DATABASE_URL`), informational only
    #[serde(default)]
    pub database_url: Option<String>,
    /// Database name (`DATABASE_NAME`), informational only
    #[serde(default)]
    pub database_name: Option<String>,
    /// Base URL of the forecast provider, without the `/forecast` path
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// Upstream request timeout in seconds
    #[serde(default = "default_forecast_timeout")]
    pub forecast_timeout_seconds: u32,
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_forecast_timeout() -> u32 {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_host: default_host(),
            port: default_port(),
            database_url: None,
            database_name: None,
            forecast_base_url: default_forecast_base_url(),
            forecast_timeout_seconds: default_forecast_timeout(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from the default file and the process environment
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from the given file (or `crclimate.toml`) and the process environment
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        Self::load_with_env(config_path, None)
    }

    /// Load configuration with an explicit environment map instead of the process environment
    pub fn load_with_env(
        config_path: Option<PathBuf>,
        env: Option<Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // PORT, DATABASE_URL and DATABASE_NAME are read unprefixed
        builder = builder.add_source(Environment::default().source(env));

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: GatewayConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.bind_host.is_empty() {
            self.bind_host = default_host();
        }
        if self.forecast_base_url.is_empty() {
            self.forecast_base_url = default_forecast_base_url();
        }
        if self.forecast_timeout_seconds == 0 {
            self.forecast_timeout_seconds = default_forecast_timeout();
        }
        if self.log_level.is_empty() {
            self.log_level = default_log_level();
        }
        if self.log_format.is_empty() {
            self.log_format = default_log_format();
        }
        self.forecast_base_url = self.forecast_base_url.trim_end_matches('/').to_string();
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.forecast_timeout_seconds > 300 {
            return Err(
                GatewayError::config("Forecast timeout cannot exceed 300 seconds").into(),
            );
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(GatewayError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.log_format.as_str()) {
            return Err(GatewayError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.log_format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.forecast_base_url.starts_with("http://")
            && !self.forecast_base_url.starts_with("https://")
        {
            return Err(GatewayError::config(
                "Forecast base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }

    #[must_use]
    pub fn forecast_timeout(&self) -> Duration {
        Duration::from_secs(self.forecast_timeout_seconds.into())
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    /// The database integration is reported as available only when both
    /// `DATABASE_URL` and `DATABASE_NAME` are set to non-empty values.
    #[must_use]
    pub fn database(&self) -> Option<DatabaseDescriptor> {
        match (self.database_url.as_deref(), self.database_name.as_deref()) {
            (Some(url), Some(name)) if !url.is_empty() && !name.is_empty() => {
                Some(DatabaseDescriptor::new(name))
            }
            _ => None,
        }
    }
}
