//! Core data structures for the task manager client
//!
//! This module contains the wire models shared by the policy, client and
//! service layers.

pub mod models;
