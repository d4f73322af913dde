//! Error Handling utilities
//!
//! This module provides the crate error type, its HTTP mapping and the
//! user-facing failure taxonomy.

pub mod error;
pub mod utils;

// Re-export commonly used types and functions
pub use error::*;
pub use utils::{ErrorCategory, ErrorUtils};
