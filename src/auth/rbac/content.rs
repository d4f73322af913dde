//! Predicates for task, comment and catalog screens

use super::types::Actor;

/// System authority carried by administrators
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Only the creator edits a task
pub fn can_edit_task(actor: &Actor, creator_login: &str) -> bool {
    actor.is_same_user(creator_login)
}

/// The creator, or a group owner or moderator, may delete a task
pub fn can_delete_task(actor: &Actor, creator_login: &str) -> bool {
    actor.is_same_user(creator_login) || actor.role.is_elevated()
}

pub fn can_edit_comment(actor: &Actor, author_login: &str) -> bool {
    actor.is_same_user(author_login)
}

pub fn can_delete_comment(actor: &Actor, author_login: &str) -> bool {
    actor.is_same_user(author_login)
}

/// Priorities and statuses are administered system-wide
pub fn can_manage_catalog<S: AsRef<str>>(authorities: &[S]) -> bool {
    authorities
        .iter()
        .any(|a| a.as_ref().eq_ignore_ascii_case(ROLE_ADMIN))
}
