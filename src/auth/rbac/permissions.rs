//! Membership predicates
//!
//! Pure, total functions deciding whether an action may be offered. They are
//! advisory: the service stays the authority and may still refuse.

use super::types::GroupRole;

/// Any existing member may invite
pub fn can_add_member(actor: GroupRole) -> bool {
    matches!(
        actor,
        GroupRole::Owner | GroupRole::Moderator | GroupRole::Member
    )
}

/// The owner has to hand over ownership before leaving
pub fn can_leave_group(actor: GroupRole) -> bool {
    matches!(actor, GroupRole::Member | GroupRole::Moderator)
}

pub fn can_transfer_ownership(actor: GroupRole) -> bool {
    actor == GroupRole::Owner
}

pub fn can_promote_to_moderator(actor: GroupRole) -> bool {
    actor.is_elevated()
}

/// Row-scoped: only regular members other than the actor
pub fn can_be_promoted(target: GroupRole, is_self: bool) -> bool {
    target == GroupRole::Member && !is_self
}

pub fn can_demote_moderator(actor: GroupRole) -> bool {
    actor == GroupRole::Owner
}

/// Row-scoped
pub fn can_be_demoted(target: GroupRole) -> bool {
    target == GroupRole::Moderator
}

pub fn can_remove_member(actor: GroupRole, target: GroupRole, is_self: bool) -> bool {
    actor.is_elevated() && target != GroupRole::Owner && !is_self
}

/// Direct moderator grant for a user outside the group
pub fn can_add_moderator(actor: GroupRole) -> bool {
    actor == GroupRole::Owner
}

pub fn can_remove_moderator(actor: GroupRole, target: GroupRole, is_self: bool) -> bool {
    actor == GroupRole::Owner && target == GroupRole::Moderator && !is_self
}

/// Row-scoped half of ownership transfer
pub fn can_receive_ownership(target: GroupRole, is_self: bool) -> bool {
    target != GroupRole::Owner && !is_self
}
