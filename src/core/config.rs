//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::core::errors::{ClientError, Result};

/// Address `aiwf serve` binds to by default
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Prefix of the environment variables read by [`ClientConfig::load`]
pub const ENV_PREFIX: &str = "AIWF";

/// Configuration for [`crate::AiwfClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Set the key sent as `X-API-Key`
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Load defaults overridden by `AIWF_BASE_URL` / `AIWF_API_KEY`
    pub fn load() -> Result<Self> {
        Self::load_from(None::<&Path>)
    }

    /// Load defaults, then an optional file, then the environment
    pub fn load_from<P: AsRef<Path>>(file: Option<P>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?;

        if let Some(path) = file {
            let path = path.as_ref();
            debug!("Reading client config from {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        Ok(config.normalized())
    }

    /// Drop an empty API key and trailing slashes of the base URL
    pub fn normalized(mut self) -> Self {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if self.api_key.as_deref().map(str::trim).unwrap_or("").is_empty() {
            self.api_key = None;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(ClientError::Config {
                message: "base URL is required".to_string(),
            });
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::Config {
                message: format!("base URL must start with http:// or https://, got {}", base_url),
            });
        }

        Ok(())
    }
}
