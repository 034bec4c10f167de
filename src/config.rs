//! Toolkit configuration
//!
//! Configuration for the finder CLI: service endpoint, timeout and
//! default headers, loaded from a YAML file or assembled in code.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable holding the service endpoint
pub const ENDPOINT_ENV_VAR: &str = "PROVIDER_ENDPOINT";

/// Toolkit configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Base URL of the streaming-service REST API
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Default headers for all requests
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("provider-toolkit/{}", env!("CARGO_PKG_VERSION"))
}

impl ToolkitConfig {
    /// Create a config for the given endpoint with defaults
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            headers: HashMap::new(),
        }
    }

    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Build a config from the `PROVIDER_ENDPOINT` environment variable
    pub fn from_env() -> Result<Self> {
        match std::env::var(ENDPOINT_ENV_VAR) {
            Ok(endpoint) if !endpoint.is_empty() => {
                let config = Self::new(endpoint);
                config.validate()?;
                Ok(config)
            }
            _ => Err(Error::missing_field("endpoint")),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::missing_field("endpoint"));
        }
        Url::parse(&self.endpoint)?;
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
