//! Storage backends
//!
//! The service itself owns persistence; this module only holds the in-memory
//! stand-in used by tests and offline runs.

pub mod memory;

pub use memory::MemoryMembershipStore;
