//! Error types for the task manager client

use crate::auth::rbac::MembershipAction;
use thiserror::Error;

/// Result type alias for the task manager client
pub type Result<T> = std::result::Result<T, TaskManagerError>;

/// Main error type for the task manager client
#[derive(Error, Debug)]
pub enum TaskManagerError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The local role policy refused the action; no request was sent
    #[error("Action '{action}' not permitted: {reason}")]
    PolicyDenied {
        action: MembershipAction,
        reason: String,
    },

    /// A role string that does not fold to OWNER, MODERATOR or MEMBER
    #[error("Unknown group role: {0}")]
    InvalidRole(String),

    /// Client-side input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// The service rejected a well-formed request on a business rule
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Unauthorized errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden errors
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Network errors
    #[error("Network error: {0}")]
    Network(String),

    /// 5xx answers from the service
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),
}
