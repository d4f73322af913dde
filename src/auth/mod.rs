//! Authorization for work-group screens
//!
//! The service owns authentication and enforcement; this module only decides
//! which actions a client should offer.

pub mod rbac;

pub use rbac::{Actor, GroupRole, MembershipAction, MembershipTarget, RolePolicy};
