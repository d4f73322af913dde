//! REST client for the task manager service
//!
//! [`TaskManagerClient`] speaks the service's JSON API and doubles as the
//! networked [`MembershipDispatcher`](crate::services::MembershipDispatcher).

pub mod client;

pub use client::TaskManagerClient;
