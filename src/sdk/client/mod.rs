//! Task manager client module
//!
//! One file per resource family; all of them go through the request helpers
//! in `client.rs`.

mod catalog;
mod client;
mod comments;
mod membership;
mod projects;
mod tasks;
mod work_groups;


pub use client::TaskManagerClient;
