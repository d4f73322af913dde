//! Work group endpoints

use super::client::TaskManagerClient;
use crate::core::models::{User, UserGroupView, WorkGroup};
use crate::utils::error::Result;
use reqwest::Method;

impl TaskManagerClient {
    /// Every work group visible to the caller
    pub async fn list_work_groups(&self) -> Result<Vec<WorkGroup>> {
        self.get_json("/api/work-groups").await
    }

    /// Groups the caller belongs to, with the caller's role in each
    pub async fn my_active_groups(&self) -> Result<Vec<UserGroupView>> {
        self.get_json("/api/work-group-memberships/my-active-groups")
            .await
    }

    pub async fn get_work_group(&self, id: i64) -> Result<WorkGroup> {
        self.get_json(&format!("/api/work-groups/{}", id)).await
    }

    /// The creator becomes the group's OWNER
    pub async fn create_work_group(&self, group: &WorkGroup) -> Result<WorkGroup> {
        self.send_json(Method::POST, "/api/work-groups/create-group", group)
            .await
    }

    pub async fn update_work_group(&self, id: i64, group: &WorkGroup) -> Result<WorkGroup> {
        self.send_json(Method::POST, &format!("/api/work-groups/{}", id), group)
            .await
    }

    pub async fn delete_work_group(&self, id: i64) -> Result<()> {
        self.call(Method::DELETE, &format!("/api/work-groups/{}", id))
            .await
    }

    /// Active members of a group as full user records
    pub async fn group_users(&self, group_id: i64) -> Result<Vec<User>> {
        self.get_json(&format!("/api/work-groups/group/{}/members", group_id))
            .await
    }

    /// All registered users, used to pick someone to invite
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.get_json("/api/users").await
    }
}
