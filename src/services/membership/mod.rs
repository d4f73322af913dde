//! Work-group membership actions
//!
//! [`MembershipDispatcher`] is the seam to whatever performs the mutation
//! (the REST client or the in-memory store). [`MembershipService`] wraps a
//! dispatcher with the role policy and the refresh-after-success flow.

mod dispatcher;
mod service;
mod types;


pub use dispatcher::MembershipDispatcher;
pub use service::MembershipService;
pub use types::{
    MembershipRequest, MutationOutcome, Notification, NotificationLevel, RosterView,
};
