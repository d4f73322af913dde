//! Configuration loading utilities
//!
//! Environment overrides use the `TASKMANAGER_` prefix.

use super::Config;
use crate::auth::rbac::GroupRole;
use crate::utils::error::{Result, TaskManagerError};
use std::collections::HashMap;
use tracing::debug;

pub const ENV_BASE_URL: &str = "TASKMANAGER_BASE_URL";
pub const ENV_TOKEN: &str = "TASKMANAGER_TOKEN";
pub const ENV_USERNAME: &str = "TASKMANAGER_USERNAME";
pub const ENV_TIMEOUT: &str = "TASKMANAGER_TIMEOUT";
pub const ENV_LOG_LEVEL: &str = "TASKMANAGER_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "TASKMANAGER_LOG_JSON";
pub const ENV_PREVIOUS_OWNER_ROLE: &str = "TASKMANAGER_PREVIOUS_OWNER_ROLE";

impl Config {
    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(std::env::vars())
    }

    /// Apply overrides from an explicit set of variables
    pub fn with_overrides<I>(mut self, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .filter(|(key, _)| key.starts_with("TASKMANAGER_"))
            .collect();

        if let Some(base_url) = vars.get(ENV_BASE_URL) {
            self.client.base_url = base_url.clone();
        }
        if let Some(token) = vars.get(ENV_TOKEN) {
            self.client.token = Some(token.clone());
        }
        if let Some(username) = vars.get(ENV_USERNAME) {
            self.client.username = Some(username.clone());
        }
        if let Some(timeout) = vars.get(ENV_TIMEOUT) {
            self.client.timeout = timeout
                .parse()
                .map_err(|e| TaskManagerError::config(format!("Invalid timeout: {}", e)))?;
        }
        if let Some(level) = vars.get(ENV_LOG_LEVEL) {
            self.logging.level = level.clone();
        }
        if let Some(json) = vars.get(ENV_LOG_JSON) {
            self.logging.json = parse_flag(json).ok_or_else(|| {
                TaskManagerError::config(format!("Invalid log json flag: {}", json))
            })?;
        }
        if let Some(role) = vars.get(ENV_PREVIOUS_OWNER_ROLE) {
            self.membership.previous_owner_role = GroupRole::normalize(role).map_err(|e| {
                TaskManagerError::config(format!("Invalid previous owner role: {}", e))
            })?;
        }

        debug!("Applied {} environment overrides", vars.len());
        Ok(self)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
