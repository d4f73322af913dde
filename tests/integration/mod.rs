//! Integration tests for taskmanager-rs
//!
//! These tests drive the public API end to end: policy, service, store,
//! HTTP client and configuration.

pub mod config_tests;
pub mod http_client_tests;
pub mod membership_flow_tests;
pub mod policy_tests;
