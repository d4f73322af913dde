//! Membership behaviour configuration

use crate::auth::rbac::GroupRole;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipConfig {
    /// Role the previous owner holds after an ownership transfer
    #[serde(default = "default_previous_owner_role")]
    pub previous_owner_role: GroupRole,
}

fn default_previous_owner_role() -> GroupRole {
    GroupRole::Moderator
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            previous_owner_role: default_previous_owner_role(),
        }
    }
}

impl MembershipConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.previous_owner_role != default_previous_owner_role() {
            self.previous_owner_role = other.previous_owner_role;
        }
        self
    }
}
