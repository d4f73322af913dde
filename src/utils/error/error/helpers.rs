//! Helper functions for creating specific error types

use super::types::TaskManagerError;
use crate::auth::rbac::MembershipAction;

/// Helper functions for creating specific errors
impl TaskManagerError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn policy_denied<S: Into<String>>(action: MembershipAction, reason: S) -> Self {
        Self::PolicyDenied {
            action,
            reason: reason.into(),
        }
    }

    pub fn invalid_role<S: Into<String>>(role: S) -> Self {
        Self::InvalidRole(role.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn rejected<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn server<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing(message.into())
    }
}
