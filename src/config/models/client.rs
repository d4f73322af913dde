//! HTTP client configuration

use super::*;
use crate::utils::logging::sanitize::mask_secret;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection settings for the task manager service
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service base URL; resource paths start with `/api/...` below it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Bearer token sent with every request
    #[serde(default)]
    pub token: Option<String>,
    /// Login of the acting user
    #[serde(default)]
    pub username: Option<String>,
    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            token: None,
            username: None,
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("token", &self.token.as_deref().map(mask_secret))
            .field("username", &self.username)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Merge client configurations, `other` wins where it differs from defaults
    pub fn merge(mut self, other: Self) -> Self {
        if other.base_url != default_base_url() {
            self.base_url = other.base_url;
        }
        if other.timeout != default_timeout() {
            self.timeout = other.timeout;
        }
        if other.token.is_some() {
            self.token = other.token;
        }
        if other.username.is_some() {
            self.username = other.username;
        }
        if other.user_agent != default_user_agent() {
            self.user_agent = other.user_agent;
        }
        self
    }
}
