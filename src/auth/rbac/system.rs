//! Action eligibility table

use crate::core::models::GroupMember;
use crate::utils::error::{Result, TaskManagerError};
use tracing::debug;

use super::permissions::*;
use super::types::{Actor, GroupRole, MemberRow, MembershipAction, MembershipTarget};

/// Combines the membership predicates into per-page and per-row decisions
#[derive(Debug, Clone, Copy, Default)]
pub struct RolePolicy;

impl RolePolicy {
    pub fn new() -> Self {
        Self
    }

    /// Whether `action` may be offered to `actor`, optionally against `target`
    ///
    /// Target-scoped actions without a target are never allowed.
    pub fn allows(
        &self,
        actor: &Actor,
        action: MembershipAction,
        target: Option<&MembershipTarget>,
    ) -> bool {
        self.denial_reason(actor, action, target).is_none()
    }

    /// Same as [`allows`](Self::allows) but reports why the action is refused
    pub fn check(
        &self,
        actor: &Actor,
        action: MembershipAction,
        target: Option<&MembershipTarget>,
    ) -> Result<()> {
        match self.denial_reason(actor, action, target) {
            None => Ok(()),
            Some(reason) => {
                debug!(
                    "Policy denied {} for {} ({}): {}",
                    action, actor.username, actor.role, reason
                );
                Err(TaskManagerError::policy_denied(action, reason))
            }
        }
    }

    /// Actions that do not point at a roster row
    pub fn group_actions(&self, actor: &Actor) -> Vec<MembershipAction> {
        MembershipAction::ALL
            .into_iter()
            .filter(|action| !action.is_target_scoped())
            .filter(|action| self.allows(actor, *action, None))
            .collect()
    }

    /// Actions available on one roster row
    pub fn row_actions(&self, actor: &Actor, target: &MembershipTarget) -> Vec<MembershipAction> {
        MembershipAction::ALL
            .into_iter()
            .filter(|action| action.is_target_scoped())
            .filter(|action| self.allows(actor, *action, Some(target)))
            .collect()
    }

    /// Evaluate every row of a roster independently
    pub fn membership_table(&self, actor: &Actor, members: &[GroupMember]) -> Vec<MemberRow> {
        members
            .iter()
            .map(|member| {
                let target = MembershipTarget::from(member);
                MemberRow {
                    is_self: member.current_user || target.is_self(actor),
                    actions: self.row_actions(actor, &target),
                    member: member.clone(),
                }
            })
            .collect()
    }

    fn denial_reason(
        &self,
        actor: &Actor,
        action: MembershipAction,
        target: Option<&MembershipTarget>,
    ) -> Option<String> {
        let role = actor.role;

        if !action.is_target_scoped() {
            let allowed = match action {
                MembershipAction::AddMember => can_add_member(role),
                MembershipAction::LeaveGroup => can_leave_group(role),
                MembershipAction::AddModerator => can_add_moderator(role),
                _ => unreachable!("target-scoped actions handled below"),
            };
            return (!allowed).then(|| match action {
                MembershipAction::LeaveGroup => {
                    "The owner must transfer ownership before leaving the group".to_string()
                }
                _ => format!("A {} cannot perform {}", role, action),
            });
        }

        let Some(target) = target else {
            return Some(format!("{} requires a target member", action));
        };
        let is_self = target.is_self(actor);

        let (actor_ok, target_ok) = match action {
            MembershipAction::TransferOwnership => (
                can_transfer_ownership(role),
                can_receive_ownership(target.role, is_self),
            ),
            MembershipAction::PromoteToModerator => (
                can_promote_to_moderator(role),
                can_be_promoted(target.role, is_self),
            ),
            MembershipAction::DemoteModerator => {
                (can_demote_moderator(role), can_be_demoted(target.role))
            }
            MembershipAction::RemoveMember => (
                role.is_elevated(),
                can_remove_member(role, target.role, is_self),
            ),
            MembershipAction::RemoveModerator => (
                role == GroupRole::Owner,
                can_remove_moderator(role, target.role, is_self),
            ),
            _ => unreachable!("group-level actions handled above"),
        };

        if !actor_ok {
            Some(format!("A {} cannot perform {}", role, action))
        } else if !target_ok {
            Some(format!(
                "{} cannot be applied to {} ({})",
                action, target.username, target.role
            ))
        } else {
            None
        }
    }
}
