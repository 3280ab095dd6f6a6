use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to the rental API
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub api_base_url: String,
    /// Per-request timeout applied by the HTTP client
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `stayease.toml` (optional) and `STAYEASE_*` variables
    pub fn load() -> Result<Self> {
        Self::load_from("stayease")
    }

    /// Load configuration using `file_stem` as the optional config file
    pub fn load_from(file_stem: &str) -> Result<Self> {
        tracing::debug!("Loading client configuration from {}", file_stem);

        let settings = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .add_source(File::with_name(file_stem).required(false))
            .add_source(Environment::with_prefix("STAYEASE"))
            .build()
            .context("Failed to read configuration sources")?;

        settings
            .try_deserialize()
            .context("Invalid client configuration")
    }

    /// Override the API base URL, typically from the command line
    pub fn with_api_base_url(mut self, api_base_url: Option<String>) -> Self {
        if let Some(url) = api_base_url {
            self.api_base_url = url;
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
