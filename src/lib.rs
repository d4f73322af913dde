//! # taskmanager-rs
//!
//! Client library for the task manager service: work groups, projects,
//! tasks, comments, statuses and priorities, plus the work-group role model
//! that decides which membership actions a user may be offered.
//!
//! ## Features
//!
//! - **Role policy**: `OWNER`/`MODERATOR`/`MEMBER` predicates and a per-row
//!   action table, with localized role aliases folded at deserialization
//! - **Membership flow**: policy gate, single dispatch, refresh on success
//! - **REST client**: typed calls for every service endpoint
//! - **In-memory backend**: the service's membership rules for tests and demos
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taskmanager_rs::{Config, MembershipService, TaskManagerClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/taskmanager.yaml").await?;
//!     let client = TaskManagerClient::new(config.client.clone())?;
//!     let service = MembershipService::new(client);
//!
//!     let outcome = service.promote_to_moderator("alice", 7, "bob").await;
//!     println!("{}", outcome.notification().message);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod sdk;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{Actor, GroupRole, MembershipAction, MembershipTarget, RolePolicy};
pub use config::Config;
pub use sdk::TaskManagerClient;
pub use services::{
    MembershipDispatcher, MembershipRequest, MembershipService, MutationOutcome, Notification,
    NotificationLevel,
};
pub use storage::MemoryMembershipStore;
pub use utils::error::{ErrorCategory, Result, TaskManagerError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (unix seconds)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

impl BuildInfo {
    /// Multi-line text shown by `taskctl --version`
    pub fn long_version(&self) -> String {
        format!(
            "{}\ncommit: {}\nbuilt: {}",
            self.version, self.git_hash, self.build_time
        )
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info() {
        let info = build_info();
        assert!(!info.version.is_empty());
        assert_eq!(info.version, VERSION);
        assert!(!info.git_hash.is_empty());
    }

    #[test]
    fn test_long_version_lists_build_details() {
        let info = BuildInfo {
            version: "1.2.3",
            build_time: "1700000000",
            git_hash: "abc1234",
        };
        assert_eq!(
            info.long_version(),
            "1.2.3\ncommit: abc1234\nbuilt: 1700000000"
        );
        assert!(build_info().long_version().starts_with(VERSION));
    }

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, "taskmanager-rs");
        assert_eq!(DESCRIPTION, env!("CARGO_PKG_DESCRIPTION"));
    }
}
