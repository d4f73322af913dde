//! Configuration validators

use super::trait_def::Validate;
use crate::auth::rbac::GroupRole;
use crate::config::models::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Upper bound for the request timeout, in seconds
const MAX_TIMEOUT_SECS: u64 = 600;

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating client configuration");

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("base_url has invalid URL format: {}", e))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "base_url must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if url.host_str().is_none() {
            return Err("base_url must have a valid host".to_string());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err("base_url must not carry a query string or fragment".to_string());
        }

        if self.timeout == 0 {
            return Err("timeout must be greater than 0".to_string());
        }

        if self.timeout > MAX_TIMEOUT_SECS {
            return Err(format!(
                "timeout must not exceed {} seconds",
                MAX_TIMEOUT_SECS
            ));
        }

        if let Some(token) = &self.token {
            if token.trim().is_empty() {
                return Err("token must not be blank when set".to_string());
            }
        }

        if let Some(username) = &self.username {
            if username.trim().is_empty() {
                return Err("username must not be blank when set".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("invalid log level '{}': {}", self.level, e))
    }
}

impl Validate for MembershipConfig {
    fn validate(&self) -> Result<(), String> {
        if self.previous_owner_role == GroupRole::Owner {
            return Err(
                "previous_owner_role cannot be OWNER: a group has exactly one owner".to_string(),
            );
        }
        Ok(())
    }
}
