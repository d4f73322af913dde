//! Wire models for the task manager service
//!
//! Field names follow the service's camelCase JSON. Optional fields default so
//! that partially populated payloads still deserialize.

pub mod catalog;
pub mod comment;
pub mod membership;
pub mod project;
pub mod task;
pub mod user;
pub mod work_group;

pub use catalog::{Priority, Status};
pub use comment::Comment;
pub use membership::{
    GroupMember, Membership, OwnershipTransferRequest, UserGroupView, UsernameRequest,
};
pub use project::{MinimalProject, Project, ProjectAssignUsers, ProjectCreate, ProjectUpdate};
pub use task::{EntityRef, Task, TaskAssignment, TaskCreate, TaskUpdate};
pub use user::User;
pub use work_group::WorkGroup;
