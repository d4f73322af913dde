//! Utility modules
//!
//! - **error**: error taxonomy and classification
//! - **logging**: subscriber setup and secret masking

pub mod error;
pub mod logging;

pub use error::{ErrorCategory, ErrorUtils, Result, TaskManagerError};
pub use logging::init_logging;
