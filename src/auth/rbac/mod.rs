//! Work-group role policy
//!
//! Decides which membership actions a client may offer for a given actor and
//! roster row. Role strings are normalized once, at deserialization, into
//! [`GroupRole`]; nothing below compares raw strings.

mod content;
mod permissions;
mod roles;
mod system;
mod types;

// Re-export public types and predicates
pub use content::{
    ROLE_ADMIN, can_delete_comment, can_delete_task, can_edit_comment, can_edit_task,
    can_manage_catalog,
};
pub use permissions::{
    can_add_member, can_add_moderator, can_be_demoted, can_be_promoted, can_demote_moderator,
    can_leave_group, can_promote_to_moderator, can_receive_ownership, can_remove_member,
    can_remove_moderator, can_transfer_ownership,
};
pub use system::RolePolicy;
pub use types::{Actor, GroupRole, MemberRow, MembershipAction, MembershipTarget};
