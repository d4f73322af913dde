//! Type conversions for TaskManagerError

use super::types::TaskManagerError;
use crate::utils::error::utils::ErrorUtils;

impl TaskManagerError {
    /// Classify a `reqwest` failure that happened before any status line arrived
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TaskManagerError::Timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            TaskManagerError::Network(err.to_string())
        } else if err.is_decode() {
            TaskManagerError::Parsing(err.to_string())
        } else {
            TaskManagerError::HttpClient(err)
        }
    }

    /// Build an error from a non-success HTTP status and the raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = ErrorUtils::extract_server_message(body)
            .unwrap_or_else(|| format!("HTTP error {}", status));

        match status {
            401 => TaskManagerError::Unauthorized(message),
            403 => TaskManagerError::Forbidden(message),
            404 => TaskManagerError::NotFound(message),
            408 | 504 => TaskManagerError::Timeout(message),
            409 => TaskManagerError::Conflict(message),
            400..=499 => TaskManagerError::Rejected { status, message },
            _ => TaskManagerError::Server { status, message },
        }
    }
}
