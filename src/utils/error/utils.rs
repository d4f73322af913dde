use super::error::TaskManagerError;
use serde::{Deserialize, Serialize};

/// Failure classes surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    PolicyDenial, // refused locally, nothing sent
    Validation,   // the service refused on a business rule
    Transport,    // network, timeout or 5xx
    Internal,     // configuration, decoding, local IO
}

pub struct ErrorUtils;

impl ErrorUtils {
    /// Pull a human readable message out of a problem+json or plain-text body
    pub fn extract_server_message(body: &str) -> Option<String> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
            for key in ["detail", "title", "message"] {
                if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                    if !text.trim().is_empty() {
                        return Some(text.trim().to_string());
                    }
                }
            }
            return None;
        }

        Some(trimmed.to_string())
    }

    pub fn categorize(error: &TaskManagerError) -> ErrorCategory {
        match error {
            TaskManagerError::PolicyDenied { .. } => ErrorCategory::PolicyDenial,
            TaskManagerError::Rejected { .. }
            | TaskManagerError::Unauthorized(_)
            | TaskManagerError::Forbidden(_)
            | TaskManagerError::NotFound(_)
            | TaskManagerError::Conflict(_)
            | TaskManagerError::Validation(_)
            | TaskManagerError::InvalidRole(_) => ErrorCategory::Validation,
            TaskManagerError::HttpClient(_)
            | TaskManagerError::Timeout(_)
            | TaskManagerError::Network(_)
            | TaskManagerError::Server { .. } => ErrorCategory::Transport,
            TaskManagerError::Config(_)
            | TaskManagerError::Serialization(_)
            | TaskManagerError::Yaml(_)
            | TaskManagerError::Io(_)
            | TaskManagerError::Parsing(_) => ErrorCategory::Internal,
        }
    }
}

impl TaskManagerError {
    pub fn category(&self) -> ErrorCategory {
        ErrorUtils::categorize(self)
    }

    /// Text for a transient notification.
    ///
    /// Business-rule rejections show the service's own message; transport
    /// failures collapse to a generic line.
    pub fn user_message(&self) -> String {
        match self {
            TaskManagerError::PolicyDenied { reason, .. } => reason.clone(),
            TaskManagerError::Rejected { message, .. } => message.clone(),
            TaskManagerError::Unauthorized(msg)
            | TaskManagerError::Forbidden(msg)
            | TaskManagerError::NotFound(msg)
            | TaskManagerError::Conflict(msg)
            | TaskManagerError::Validation(msg) => msg.clone(),
            TaskManagerError::InvalidRole(role) => format!("Unknown group role: {}", role),
            _ if self.category() == ErrorCategory::Transport => {
                "The task manager service could not be reached, please try again".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_first() {
        let body = r#"{"title":"Bad Request","detail":"Cannot remove the group owner","message":"error.cannotremoveowner"}"#;
        assert_eq!(
            ErrorUtils::extract_server_message(body).as_deref(),
            Some("Cannot remove the group owner")
        );
    }

    #[test]
    fn test_extract_falls_back_to_title() {
        let body = r#"{"title":"Cannot remove the group owner","status":400}"#;
        assert_eq!(
            ErrorUtils::extract_server_message(body).as_deref(),
            Some("Cannot remove the group owner")
        );
    }

    #[test]
    fn test_extract_plain_text() {
        assert_eq!(
            ErrorUtils::extract_server_message("  User already belongs to the group.\n").as_deref(),
            Some("User already belongs to the group.")
        );
    }

    #[test]
    fn test_extract_empty_body() {
        assert!(ErrorUtils::extract_server_message("").is_none());
        assert!(ErrorUtils::extract_server_message("{}").is_none());
    }

    #[test]
    fn test_transport_message_is_generic() {
        let err = TaskManagerError::server(503, "upstream connect error");
        assert_eq!(err.category(), ErrorCategory::Transport);
        assert!(!err.user_message().contains("upstream"));
    }
}
