//! Services module
//!
//! Business flows built on top of the role policy

pub mod membership;

pub use membership::{
    MembershipDispatcher, MembershipRequest, MembershipService, MutationOutcome, Notification,
    NotificationLevel, RosterView,
};
