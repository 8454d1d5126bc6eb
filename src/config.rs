//! Configuration for the fetch step of an audit.
//!
//! Check thresholds are fixed constants in [`crate::checks`] and are not part
//! of the configuration.

use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Generic browser identifier sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Request timeout applied to the whole fetch
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration for the audit process
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Network configuration
    pub network: NetworkConfig,
}

/// Network configuration for the page fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl NetworkConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject settings that would make every fetch fail
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(AuditError::config("timeout_secs must be greater than zero"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(AuditError::config("user_agent must not be empty"));
        }
        Ok(())
    }
}

impl AuditConfig {
    /// Create a new builder for AuditConfig
    pub fn builder() -> AuditConfigBuilder {
        AuditConfigBuilder::default()
    }

    /// Load and validate a configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AuditConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.network.validate()
    }
}

/// Builder for AuditConfig
#[derive(Default)]
pub struct AuditConfigBuilder {
    network: Option<NetworkConfig>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

impl AuditConfigBuilder {
    pub fn network(mut self, network: NetworkConfig) -> Self {
        self.network = Some(network);
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Individual overrides win over a full `network` section
    pub fn build(self) -> AuditConfig {
        let mut network = self.network.unwrap_or_default();
        if let Some(secs) = self.timeout_secs {
            network.timeout_secs = secs;
        }
        if let Some(user_agent) = self.user_agent {
            network.user_agent = user_agent;
        }
        AuditConfig { network }
    }
}
