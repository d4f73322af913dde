//! Configuration data models
//!
//! This module defines all configuration structures used by the client.

#![allow(missing_docs)]

pub mod client;
pub mod logging;
pub mod membership;

// Re-export all configuration types
pub use client::*;
pub use logging::*;
pub use membership::*;

/// Default service base URL, as routed through the gateway
pub fn default_base_url() -> String {
    "http://localhost:8080/services/taskmanager".to_string()
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_user_agent() -> String {
    format!("taskmanager-rs/{}", env!("CARGO_PKG_VERSION"))
}

pub fn default_log_level() -> String {
    "info".to_string()
}
