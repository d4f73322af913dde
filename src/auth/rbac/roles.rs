//! Role normalization and comparison

use crate::utils::error::{Result, TaskManagerError};
use std::fmt;
use std::str::FromStr;

use super::types::GroupRole;

impl GroupRole {
    pub const ALL: [GroupRole; 3] = [GroupRole::Owner, GroupRole::Moderator, GroupRole::Member];

    /// Fold a role string coming from the service into one of the three roles.
    ///
    /// Matching is case-insensitive and accepts the localized aliases the
    /// service has emitted over time.
    pub fn normalize(raw: &str) -> Result<Self> {
        match raw.trim().to_uppercase().as_str() {
            "OWNER" | "ADMIN" | "PROPIETARIO" => Ok(GroupRole::Owner),
            "MODERATOR" | "MODERADOR" => Ok(GroupRole::Moderator),
            "MEMBER" | "MIEMBRO" => Ok(GroupRole::Member),
            _ => Err(TaskManagerError::invalid_role(raw)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupRole::Owner => "OWNER",
            GroupRole::Moderator => "MODERATOR",
            GroupRole::Member => "MEMBER",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            GroupRole::Member => 0,
            GroupRole::Moderator => 1,
            GroupRole::Owner => 2,
        }
    }

    pub fn outranks(&self, other: GroupRole) -> bool {
        self.rank() > other.rank()
    }

    /// OWNER or MODERATOR
    pub fn is_elevated(&self) -> bool {
        matches!(self, GroupRole::Owner | GroupRole::Moderator)
    }
}

impl FromStr for GroupRole {
    type Err = TaskManagerError;

    fn from_str(s: &str) -> Result<Self> {
        GroupRole::normalize(s)
    }
}

impl TryFrom<String> for GroupRole {
    type Error = TaskManagerError;

    fn try_from(value: String) -> Result<Self> {
        GroupRole::normalize(&value)
    }
}

impl fmt::Display for GroupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
