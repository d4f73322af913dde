//! RBAC type definitions

use crate::core::models::GroupMember;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role held by one user inside one work group
///
/// Ordered by rank, so `Member < Moderator < Owner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum GroupRole {
    /// Baseline member, may invite others and leave
    Member,
    /// Elevated member, may add, remove and promote regular members
    Moderator,
    /// Sole holder of full control over the group
    Owner,
}

/// The user on whose behalf an action is evaluated or dispatched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Login of the acting user
    pub username: String,
    /// Role of the acting user in the group under consideration
    pub role: GroupRole,
}

/// The member an action is aimed at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipTarget {
    /// Login of the target member
    pub username: String,
    /// Current role of the target member
    pub role: GroupRole,
}

/// Membership mutations a client may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipAction {
    AddMember,
    LeaveGroup,
    TransferOwnership,
    PromoteToModerator,
    DemoteModerator,
    RemoveMember,
    AddModerator,
    RemoveModerator,
}

/// One roster row together with the actions the actor may take on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub member: GroupMember,
    pub is_self: bool,
    pub actions: Vec<MembershipAction>,
}

impl Actor {
    pub fn new(username: impl Into<String>, role: GroupRole) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    /// Find the acting user's own membership in a fetched roster
    pub fn resolve(username: &str, members: &[GroupMember]) -> Option<Self> {
        members
            .iter()
            .find(|m| m.login.eq_ignore_ascii_case(username))
            .map(|m| Self::new(m.login.clone(), m.role))
    }

    pub fn is_same_user(&self, username: &str) -> bool {
        self.username.eq_ignore_ascii_case(username)
    }
}

impl MembershipTarget {
    pub fn new(username: impl Into<String>, role: GroupRole) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    pub fn is_self(&self, actor: &Actor) -> bool {
        actor.is_same_user(&self.username)
    }
}

impl From<&GroupMember> for MembershipTarget {
    fn from(member: &GroupMember) -> Self {
        Self::new(member.login.clone(), member.role)
    }
}

impl MembershipAction {
    pub const ALL: [MembershipAction; 8] = [
        MembershipAction::AddMember,
        MembershipAction::LeaveGroup,
        MembershipAction::TransferOwnership,
        MembershipAction::PromoteToModerator,
        MembershipAction::DemoteModerator,
        MembershipAction::RemoveMember,
        MembershipAction::AddModerator,
        MembershipAction::RemoveModerator,
    ];

    /// Whether the action is aimed at an existing roster row
    pub fn is_target_scoped(&self) -> bool {
        matches!(
            self,
            MembershipAction::TransferOwnership
                | MembershipAction::PromoteToModerator
                | MembershipAction::DemoteModerator
                | MembershipAction::RemoveMember
                | MembershipAction::RemoveModerator
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipAction::AddMember => "add_member",
            MembershipAction::LeaveGroup => "leave_group",
            MembershipAction::TransferOwnership => "transfer_ownership",
            MembershipAction::PromoteToModerator => "promote_to_moderator",
            MembershipAction::DemoteModerator => "demote_moderator",
            MembershipAction::RemoveMember => "remove_member",
            MembershipAction::AddModerator => "add_moderator",
            MembershipAction::RemoveModerator => "remove_moderator",
        }
    }
}

impl fmt::Display for MembershipAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
