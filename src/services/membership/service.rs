//! Policy-gated membership mutations

use super::dispatcher::MembershipDispatcher;
use super::types::{MembershipRequest, MutationOutcome, Notification, RosterView};
use crate::auth::rbac::{Actor, MemberRow, MembershipTarget, RolePolicy};
use crate::core::models::GroupMember;
use crate::utils::error::{Result, TaskManagerError};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Runs membership mutations the way a client screen does: check the policy
/// against the last fetched roster, call the backend once, then re-fetch.
///
/// The cached roster is only replaced by a successful fetch. Nothing is
/// retried.
#[derive(Debug)]
pub struct MembershipService<D> {
    dispatcher: D,
    policy: RolePolicy,
    rosters: RwLock<HashMap<i64, Vec<GroupMember>>>,
}

impl<D: MembershipDispatcher> MembershipService<D> {
    pub fn new(dispatcher: D) -> Self {
        Self::with_policy(dispatcher, RolePolicy::new())
    }

    pub fn with_policy(dispatcher: D, policy: RolePolicy) -> Self {
        Self {
            dispatcher,
            policy,
            rosters: RwLock::new(HashMap::new()),
        }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn policy(&self) -> &RolePolicy {
        &self.policy
    }

    /// Last fetched roster of a group, empty if never fetched
    pub fn cached_members(&self, group_id: i64) -> Vec<GroupMember> {
        self.rosters
            .read()
            .get(&group_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Fetch the roster and make it the current one
    pub async fn refresh(&self, acting_user: &str, group_id: i64) -> Result<Vec<GroupMember>> {
        let members = self
            .dispatcher
            .active_members(acting_user, group_id)
            .await?;
        debug!("Fetched {} members of group {}", members.len(), group_id);
        self.rosters.write().insert(group_id, members.clone());
        Ok(members)
    }

    /// The acting user's own membership in the cached roster
    pub fn actor(&self, acting_user: &str, group_id: i64) -> Option<Actor> {
        self.rosters
            .read()
            .get(&group_id)
            .and_then(|members| Actor::resolve(acting_user, members))
    }

    /// Fresh roster with the actions the acting user may take on each row
    pub async fn roster_view(&self, acting_user: &str, group_id: i64) -> Result<RosterView> {
        let members = self.refresh(acting_user, group_id).await?;
        let actor = Actor::resolve(acting_user, &members);

        let (group_actions, rows) = match &actor {
            Some(actor) => (
                self.policy.group_actions(actor),
                self.policy.membership_table(actor, &members),
            ),
            None => (
                Vec::new(),
                members
                    .iter()
                    .map(|member| MemberRow {
                        member: member.clone(),
                        is_self: member.current_user,
                        actions: Vec::new(),
                    })
                    .collect(),
            ),
        };

        Ok(RosterView {
            group_id,
            actor,
            group_actions,
            rows,
        })
    }

    /// Gate, dispatch and refresh one mutation
    pub async fn execute(
        &self,
        acting_user: &str,
        group_id: i64,
        request: MembershipRequest,
    ) -> MutationOutcome {
        let members = match self.current_roster(acting_user, group_id).await {
            Ok(members) => members,
            Err(error) => return Self::failed(error, Vec::new()),
        };

        let actor = match self.authorize(acting_user, group_id, &request, &members) {
            Ok(actor) => actor,
            Err(error) => return Self::failed(error, members),
        };

        if let Err(error) = self.dispatch(&actor, group_id, &request).await {
            warn!(
                "{} by {} in group {} was rejected: {}",
                request.action(),
                actor.username,
                group_id,
                error
            );
            return Self::failed(error, members);
        }

        info!(
            "{} by {} in group {} succeeded",
            request.action(),
            actor.username,
            group_id
        );

        let members = match self.refresh(acting_user, group_id).await {
            Ok(members) => members,
            Err(e) => {
                warn!("Failed to refresh group {} after mutation: {}", group_id, e);
                self.rosters.write().remove(&group_id);
                members
            }
        };

        MutationOutcome::Succeeded {
            notification: Notification::success(request.success_message(group_id)),
            members,
        }
    }

    pub async fn add_member(
        &self,
        acting_user: &str,
        group_id: i64,
        username: &str,
    ) -> MutationOutcome {
        self.execute(
            acting_user,
            group_id,
            MembershipRequest::AddMember {
                username: username.to_string(),
            },
        )
        .await
    }

    pub async fn remove_member(
        &self,
        acting_user: &str,
        group_id: i64,
        username: &str,
    ) -> MutationOutcome {
        self.execute(
            acting_user,
            group_id,
            MembershipRequest::RemoveMember {
                username: username.to_string(),
            },
        )
        .await
    }

    pub async fn promote_to_moderator(
        &self,
        acting_user: &str,
        group_id: i64,
        username: &str,
    ) -> MutationOutcome {
        self.execute(
            acting_user,
            group_id,
            MembershipRequest::PromoteToModerator {
                username: username.to_string(),
            },
        )
        .await
    }

    pub async fn demote_moderator(
        &self,
        acting_user: &str,
        group_id: i64,
        username: &str,
    ) -> MutationOutcome {
        self.execute(
            acting_user,
            group_id,
            MembershipRequest::DemoteModerator {
                username: username.to_string(),
            },
        )
        .await
    }

    pub async fn transfer_ownership(
        &self,
        acting_user: &str,
        group_id: i64,
        new_owner: &str,
    ) -> MutationOutcome {
        self.execute(
            acting_user,
            group_id,
            MembershipRequest::TransferOwnership {
                new_owner: new_owner.to_string(),
            },
        )
        .await
    }

    pub async fn leave_group(&self, acting_user: &str, group_id: i64) -> MutationOutcome {
        self.execute(acting_user, group_id, MembershipRequest::LeaveGroup)
            .await
    }

    pub async fn add_moderator(
        &self,
        acting_user: &str,
        group_id: i64,
        username: &str,
    ) -> MutationOutcome {
        self.execute(
            acting_user,
            group_id,
            MembershipRequest::AddModerator {
                username: username.to_string(),
            },
        )
        .await
    }

    pub async fn remove_moderator(
        &self,
        acting_user: &str,
        group_id: i64,
        username: &str,
    ) -> MutationOutcome {
        self.execute(
            acting_user,
            group_id,
            MembershipRequest::RemoveModerator {
                username: username.to_string(),
            },
        )
        .await
    }

    async fn current_roster(&self, acting_user: &str, group_id: i64) -> Result<Vec<GroupMember>> {
        let cached = self.rosters.read().get(&group_id).cloned();
        match cached {
            Some(members) => Ok(members),
            None => self.refresh(acting_user, group_id).await,
        }
    }

    /// Resolve the actor and target from the roster and consult the policy
    fn authorize(
        &self,
        acting_user: &str,
        group_id: i64,
        request: &MembershipRequest,
        members: &[GroupMember],
    ) -> Result<Actor> {
        let action = request.action();

        let actor = Actor::resolve(acting_user, members).ok_or_else(|| {
            TaskManagerError::policy_denied(
                action,
                format!("{} is not a member of group {}", acting_user, group_id),
            )
        })?;

        let target = if action.is_target_scoped() {
            let username = request.username().unwrap_or_default();
            let member = members
                .iter()
                .find(|m| m.login.eq_ignore_ascii_case(username))
                .ok_or_else(|| {
                    TaskManagerError::policy_denied(
                        action,
                        format!("{} is not an active member of group {}", username, group_id),
                    )
                })?;
            Some(MembershipTarget::from(member))
        } else {
            None
        };

        self.policy.check(&actor, action, target.as_ref())?;
        Ok(actor)
    }

    async fn dispatch(
        &self,
        actor: &Actor,
        group_id: i64,
        request: &MembershipRequest,
    ) -> Result<()> {
        let d = &self.dispatcher;
        match request {
            MembershipRequest::AddMember { username } => {
                d.add_member(actor, group_id, username).await.map(|_| ())
            }
            MembershipRequest::LeaveGroup => d.leave_group(actor, group_id).await,
            MembershipRequest::TransferOwnership { new_owner } => {
                d.transfer_ownership(actor, group_id, new_owner).await
            }
            MembershipRequest::PromoteToModerator { username } => {
                d.promote_to_moderator(actor, group_id, username).await
            }
            MembershipRequest::DemoteModerator { username } => {
                d.demote_moderator(actor, group_id, username).await
            }
            MembershipRequest::RemoveMember { username } => {
                d.remove_member(actor, group_id, username).await
            }
            MembershipRequest::AddModerator { username } => {
                d.add_moderator(actor, group_id, username).await
            }
            MembershipRequest::RemoveModerator { username } => {
                d.remove_moderator(actor, group_id, username).await
            }
        }
    }

    fn failed(error: TaskManagerError, members: Vec<GroupMember>) -> MutationOutcome {
        MutationOutcome::Failed {
            notification: Notification::from_error(&error),
            members,
            error,
        }
    }
}
