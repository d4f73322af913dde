//! Membership service types

use crate::auth::rbac::{Actor, MemberRow, MembershipAction};
use crate::core::models::GroupMember;
use crate::utils::error::{ErrorCategory, TaskManagerError};
use serde::{Deserialize, Serialize};

/// A membership mutation together with its argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipRequest {
    AddMember { username: String },
    LeaveGroup,
    TransferOwnership { new_owner: String },
    PromoteToModerator { username: String },
    DemoteModerator { username: String },
    RemoveMember { username: String },
    AddModerator { username: String },
    RemoveModerator { username: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient message shown after a mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    /// Failure class, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ErrorCategory>,
}

/// Result of one mutation attempt
///
/// On failure `members` is the roster as it was before the attempt.
#[derive(Debug)]
pub enum MutationOutcome {
    Succeeded {
        notification: Notification,
        members: Vec<GroupMember>,
    },
    Failed {
        notification: Notification,
        members: Vec<GroupMember>,
        error: TaskManagerError,
    },
}

/// Roster of one group as the acting user sees it
#[derive(Debug, Clone)]
pub struct RosterView {
    pub group_id: i64,
    /// `None` when the acting user is not in the roster
    pub actor: Option<Actor>,
    pub group_actions: Vec<MembershipAction>,
    pub rows: Vec<MemberRow>,
}

impl MembershipRequest {
    pub fn action(&self) -> MembershipAction {
        match self {
            MembershipRequest::AddMember { .. } => MembershipAction::AddMember,
            MembershipRequest::LeaveGroup => MembershipAction::LeaveGroup,
            MembershipRequest::TransferOwnership { .. } => MembershipAction::TransferOwnership,
            MembershipRequest::PromoteToModerator { .. } => MembershipAction::PromoteToModerator,
            MembershipRequest::DemoteModerator { .. } => MembershipAction::DemoteModerator,
            MembershipRequest::RemoveMember { .. } => MembershipAction::RemoveMember,
            MembershipRequest::AddModerator { .. } => MembershipAction::AddModerator,
            MembershipRequest::RemoveModerator { .. } => MembershipAction::RemoveModerator,
        }
    }

    /// The user the request names, if any
    pub fn username(&self) -> Option<&str> {
        match self {
            MembershipRequest::LeaveGroup => None,
            MembershipRequest::TransferOwnership { new_owner } => Some(new_owner),
            MembershipRequest::AddMember { username }
            | MembershipRequest::PromoteToModerator { username }
            | MembershipRequest::DemoteModerator { username }
            | MembershipRequest::RemoveMember { username }
            | MembershipRequest::AddModerator { username }
            | MembershipRequest::RemoveModerator { username } => Some(username),
        }
    }

    pub(super) fn success_message(&self, group_id: i64) -> String {
        match self {
            MembershipRequest::AddMember { username } => {
                format!("{} was added to group {}", username, group_id)
            }
            MembershipRequest::LeaveGroup => format!("You left group {}", group_id),
            MembershipRequest::TransferOwnership { new_owner } => {
                format!("Ownership of group {} transferred to {}", group_id, new_owner)
            }
            MembershipRequest::PromoteToModerator { username } => {
                format!("{} was promoted to moderator", username)
            }
            MembershipRequest::DemoteModerator { username } => {
                format!("{} is now a regular member", username)
            }
            MembershipRequest::RemoveMember { username } => {
                format!("{} was removed from group {}", username, group_id)
            }
            MembershipRequest::AddModerator { username } => {
                format!("{} was added as moderator", username)
            }
            MembershipRequest::RemoveModerator { username } => {
                format!("Moderator {} was removed", username)
            }
        }
    }
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            category: None,
        }
    }

    pub fn from_error(error: &TaskManagerError) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: error.user_message(),
            category: Some(error.category()),
        }
    }
}

impl MutationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MutationOutcome::Succeeded { .. })
    }

    pub fn notification(&self) -> &Notification {
        match self {
            MutationOutcome::Succeeded { notification, .. }
            | MutationOutcome::Failed { notification, .. } => notification,
        }
    }

    pub fn members(&self) -> &[GroupMember] {
        match self {
            MutationOutcome::Succeeded { members, .. }
            | MutationOutcome::Failed { members, .. } => members,
        }
    }

    pub fn error(&self) -> Option<&TaskManagerError> {
        match self {
            MutationOutcome::Succeeded { .. } => None,
            MutationOutcome::Failed { error, .. } => Some(error),
        }
    }

    /// Category of the failure, if the mutation failed
    pub fn category(&self) -> Option<ErrorCategory> {
        self.notification().category
    }
}
