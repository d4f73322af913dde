//! Membership models

use crate::auth::rbac::GroupRole;
use serde::{Deserialize, Serialize};

/// One row of a group's active roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    /// User ID
    #[serde(default)]
    pub id: Option<String>,
    /// User login
    pub login: String,
    /// Role, normalized on the way in
    pub role: GroupRole,
    /// Set by the service on the caller's own row
    #[serde(default)]
    pub current_user: bool,
}

/// Association of one user with one work group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub group_id: i64,
    pub username: String,
    pub role: GroupRole,
}

/// A group as seen by the current user, with the user's role in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupView {
    #[serde(default)]
    pub group_id: Option<i64>,
    pub group_name: String,
    #[serde(default)]
    pub group_description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_in_group: Option<bool>,
    #[serde(default)]
    pub role: Option<GroupRole>,
}

/// Body of add-member, remove-member, promote and demote calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameRequest {
    pub username: String,
}

/// Body of the ownership transfer call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipTransferRequest {
    pub new_owner_username: String,
}

impl GroupMember {
    pub fn new(login: impl Into<String>, role: GroupRole) -> Self {
        Self {
            id: None,
            login: login.into(),
            role,
            current_user: false,
        }
    }
}

impl UsernameRequest {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_member_normalizes_localized_role() {
        let json = r#"{"id":"u-1","login":"alice","role":"propietario","currentUser":true}"#;
        let member: GroupMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.role, GroupRole::Owner);
        assert!(member.current_user);
    }

    #[test]
    fn test_group_member_rejects_unknown_role() {
        let json = r#"{"login":"mallory","role":"SUPERUSER"}"#;
        assert!(serde_json::from_str::<GroupMember>(json).is_err());
    }

    #[test]
    fn test_user_group_view_field_names() {
        let json = r#"{"groupId":7,"groupName":"Core","isActive":true,"isInGroup":true,"role":"MODERATOR"}"#;
        let view: UserGroupView = serde_json::from_str(json).unwrap();
        assert_eq!(view.group_id, Some(7));
        assert_eq!(view.role, Some(GroupRole::Moderator));
        assert_eq!(view.group_description, None);
    }

    #[test]
    fn test_transfer_body_uses_camel_case() {
        let body = OwnershipTransferRequest {
            new_owner_username: "bob".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"newOwnerUsername": "bob"})
        );
    }
}
