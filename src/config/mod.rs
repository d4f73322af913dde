//! Configuration management for the task manager client
//!
//! This module handles loading, validation, and management of client configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, TaskManagerError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Service connection settings
    #[serde(default)]
    pub client: ClientConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Membership behaviour settings
    #[serde(default)]
    pub membership: MembershipConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TaskManagerError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| TaskManagerError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self::default().with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Get client configuration
    pub fn client(&self) -> &ClientConfig {
        &self.client
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Get membership configuration
    pub fn membership(&self) -> &MembershipConfig {
        &self.membership
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.client
            .validate()
            .map_err(|e| TaskManagerError::Config(format!("Client config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| TaskManagerError::Config(format!("Logging config error: {}", e)))?;

        self.membership
            .validate()
            .map_err(|e| TaskManagerError::Config(format!("Membership config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.client = self.client.merge(other.client);
        self.logging = self.logging.merge(other.logging);
        self.membership = self.membership.merge(other.membership);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            TaskManagerError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}
