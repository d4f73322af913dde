//! Common test utilities for taskmanager-rs
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures::GroupFixture;
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let fixture = GroupFixture::alice_and_bob().await;
//!     // ...
//! }
//! ```

pub mod fixtures;

pub use fixtures::{GroupFixture, RosterFactory};
