//! In-memory membership backend
//!
//! Applies the same rules, with the same messages, as the task manager
//! service. It never consults the client-side role policy.

use crate::auth::rbac::{Actor, GroupRole};
use crate::config::MembershipConfig;
use crate::core::models::{GroupMember, Membership, User, WorkGroup};
use crate::services::MembershipDispatcher;
use crate::utils::error::{Result, TaskManagerError};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
struct StoreState {
    /// Registered users keyed by lower-cased login
    users: HashMap<String, User>,
    groups: HashMap<i64, GroupState>,
    next_group_id: i64,
}

#[derive(Debug)]
struct GroupState {
    group: WorkGroup,
    /// Active memberships in join order
    members: Vec<(String, GroupRole)>,
}

/// Thread-safe membership store
#[derive(Debug)]
pub struct MemoryMembershipStore {
    state: RwLock<StoreState>,
    previous_owner_role: GroupRole,
}

impl Default for MemoryMembershipStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryMembershipStore {
    pub fn new() -> Self {
        Self::with_config(&MembershipConfig::default())
    }

    pub fn with_config(config: &MembershipConfig) -> Self {
        Self {
            state: RwLock::new(StoreState {
                next_group_id: 1,
                ..Default::default()
            }),
            previous_owner_role: config.previous_owner_role,
        }
    }

    /// Make a login known to the store
    pub fn register_user(&self, login: &str) -> User {
        let mut state = self.state.write();
        let next_id = state.users.len() + 1;
        state
            .users
            .entry(login.to_lowercase())
            .or_insert_with(|| User {
                id: Some(format!("user-{}", next_id)),
                login: login.to_string(),
                first_name: None,
                last_name: None,
                email: None,
            })
            .clone()
    }

    /// Create a group with `owner` as its only member
    pub fn create_group(&self, owner: &str, name: &str) -> Result<WorkGroup> {
        let mut state = self.state.write();
        let owner = state
            .users
            .get(&owner.to_lowercase())
            .map(|u| u.login.clone())
            .ok_or_else(|| TaskManagerError::not_found("User not found"))?;

        let id = state.next_group_id;
        state.next_group_id += 1;

        let group = WorkGroup {
            id: Some(id),
            name: name.to_string(),
            description: None,
            is_active: Some(true),
        };
        state.groups.insert(
            id,
            GroupState {
                group: group.clone(),
                members: vec![(owner, GroupRole::Owner)],
            },
        );
        debug!("Created group {} ({})", id, name);
        Ok(group)
    }

    /// Current roles in a group, in join order
    pub fn roles(&self, group_id: i64) -> Vec<(String, GroupRole)> {
        self.state
            .read()
            .groups
            .get(&group_id)
            .map(|g| g.members.clone())
            .unwrap_or_default()
    }

    pub fn role_of(&self, group_id: i64, username: &str) -> Option<GroupRole> {
        self.state
            .read()
            .groups
            .get(&group_id)
            .and_then(|g| g.role_of(username))
    }

    fn with_group<T>(
        &self,
        group_id: i64,
        f: impl FnOnce(&mut GroupState, &HashMap<String, User>) -> Result<T>,
    ) -> Result<T> {
        let mut guard = self.state.write();
        let state = &mut *guard;
        let group = state
            .groups
            .get_mut(&group_id)
            .ok_or_else(|| TaskManagerError::not_found("Group not found"))?;
        f(group, &state.users)
    }
}

impl GroupState {
    fn position(&self, username: &str) -> Option<usize> {
        self.members
            .iter()
            .position(|(login, _)| login.eq_ignore_ascii_case(username))
    }

    fn role_of(&self, username: &str) -> Option<GroupRole> {
        self.position(username).map(|i| self.members[i].1)
    }

    fn caller_role(&self, actor: &Actor) -> Result<GroupRole> {
        self.role_of(&actor.username)
            .ok_or_else(|| TaskManagerError::forbidden("You are not a member of this group."))
    }

    fn assert_owner_or_moderator(&self, actor: &Actor) -> Result<()> {
        if self.caller_role(actor)?.is_elevated() {
            Ok(())
        } else {
            Err(TaskManagerError::forbidden(
                "Only OWNER or MODERATOR can perform this action.",
            ))
        }
    }

    fn assert_owner(&self, actor: &Actor, message: &str) -> Result<()> {
        match self.role_of(&actor.username) {
            Some(GroupRole::Owner) => Ok(()),
            _ => Err(TaskManagerError::forbidden(message)),
        }
    }

    fn member_index(&self, username: &str) -> Result<usize> {
        self.position(username)
            .ok_or_else(|| TaskManagerError::not_found("User not found in group"))
    }

    fn join(
        &mut self,
        users: &HashMap<String, User>,
        username: &str,
        role: GroupRole,
    ) -> Result<String> {
        let login = users
            .get(&username.to_lowercase())
            .map(|u| u.login.clone())
            .ok_or_else(|| TaskManagerError::not_found("User not found"))?;
        if self.position(&login).is_some() {
            return Err(TaskManagerError::rejected(
                400,
                "User already belongs to the group.",
            ));
        }
        self.members.push((login.clone(), role));
        Ok(login)
    }
}

#[async_trait]
impl MembershipDispatcher for MemoryMembershipStore {
    async fn active_members(&self, viewer: &str, group_id: i64) -> Result<Vec<GroupMember>> {
        let state = self.state.read();
        let group = state
            .groups
            .get(&group_id)
            .ok_or_else(|| TaskManagerError::not_found("Group not found"))?;

        Ok(group
            .members
            .iter()
            .map(|(login, role)| GroupMember {
                id: state
                    .users
                    .get(&login.to_lowercase())
                    .and_then(|u| u.id.clone()),
                login: login.clone(),
                role: *role,
                current_user: login.eq_ignore_ascii_case(viewer),
            })
            .collect())
    }

    async fn add_member(
        &self,
        actor: &Actor,
        group_id: i64,
        username: &str,
    ) -> Result<Membership> {
        self.with_group(group_id, |group, users| {
            group.assert_owner_or_moderator(actor)?;
            let login = group.join(users, username, GroupRole::Member)?;
            Ok(Membership {
                group_id,
                username: login,
                role: GroupRole::Member,
            })
        })
    }

    async fn remove_member(&self, actor: &Actor, group_id: i64, username: &str) -> Result<()> {
        self.with_group(group_id, |group, _| {
            group.assert_owner_or_moderator(actor)?;
            let index = group
                .position(username)
                .ok_or_else(|| TaskManagerError::rejected(400, "Membership not found"))?;
            if group.members[index].1 == GroupRole::Owner {
                return Err(TaskManagerError::rejected(400, "Cannot remove the group owner"));
            }
            group.members.remove(index);
            Ok(())
        })
    }

    async fn promote_to_moderator(
        &self,
        actor: &Actor,
        group_id: i64,
        username: &str,
    ) -> Result<()> {
        self.with_group(group_id, |group, _| {
            if !group.caller_role(actor)?.is_elevated() {
                return Err(TaskManagerError::forbidden(
                    "Only the OWNER or MODERATOR can promote to moderator.",
                ));
            }
            let index = group.member_index(username)?;
            if group.members[index].1 != GroupRole::Member {
                return Err(TaskManagerError::rejected(400, "Only members can be promoted."));
            }
            group.members[index].1 = GroupRole::Moderator;
            Ok(())
        })
    }

    async fn demote_moderator(&self, actor: &Actor, group_id: i64, username: &str) -> Result<()> {
        self.with_group(group_id, |group, _| {
            group.assert_owner(actor, "Only the OWNER can remove moderators.")?;
            let index = group.member_index(username)?;
            if group.members[index].1 != GroupRole::Moderator {
                return Err(TaskManagerError::rejected(400, "Only moderators can be demoted."));
            }
            group.members[index].1 = GroupRole::Member;
            Ok(())
        })
    }

    async fn transfer_ownership(
        &self,
        actor: &Actor,
        group_id: i64,
        new_owner_username: &str,
    ) -> Result<()> {
        let previous_owner_role = self.previous_owner_role;
        self.with_group(group_id, |group, _| {
            group.assert_owner(actor, "Only the OWNER can transfer ownership.")?;
            let current = group.member_index(&actor.username)?;
            let next = group
                .position(new_owner_username)
                .ok_or_else(|| TaskManagerError::not_found("New user not found in group"))?;
            if next == current {
                return Err(TaskManagerError::rejected(
                    400,
                    "User is already the owner of the group.",
                ));
            }
            group.members[current].1 = previous_owner_role;
            group.members[next].1 = GroupRole::Owner;
            Ok(())
        })
    }

    async fn leave_group(&self, actor: &Actor, group_id: i64) -> Result<()> {
        self.with_group(group_id, |group, _| {
            let index = group
                .position(&actor.username)
                .ok_or_else(|| TaskManagerError::not_found("You are not a member of this group."))?;
            if group.members[index].1 != GroupRole::Member {
                return Err(TaskManagerError::forbidden(
                    "Only MEMBERS can leave the group themselves.",
                ));
            }
            group.members.remove(index);
            Ok(())
        })
    }

    async fn add_moderator(&self, actor: &Actor, group_id: i64, username: &str) -> Result<()> {
        self.with_group(group_id, |group, users| {
            group.assert_owner(actor, "Only the OWNER can add moderators.")?;
            group.join(users, username, GroupRole::Moderator).map(|_| ())
        })
    }

    async fn remove_moderator(
        &self,
        actor: &Actor,
        group_id: i64,
        username: &str,
    ) -> Result<()> {
        self.with_group(group_id, |group, _| {
            group.assert_owner(actor, "Only the OWNER can remove moderators.")?;
            let index = group.member_index(username)?;
            if group.members[index].1 != GroupRole::Moderator {
                return Err(TaskManagerError::rejected(400, "Only moderators can be removed."));
            }
            group.members.remove(index);
            Ok(())
        })
    }
}
