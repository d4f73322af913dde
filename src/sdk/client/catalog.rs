//! Status and priority endpoints
//!
//! Statuses live under their group; priorities are global and can be hidden
//! instead of deleted.

use super::client::TaskManagerClient;
use crate::core::models::{Priority, Status};
use crate::utils::error::Result;
use reqwest::Method;

impl TaskManagerClient {
    pub async fn list_statuses(&self, group_id: i64) -> Result<Vec<Status>> {
        self.get_json(&format!("/api/groups/{}/statuses", group_id))
            .await
    }

    pub async fn get_status(&self, group_id: i64, id: i64) -> Result<Status> {
        self.get_json(&format!("/api/groups/{}/statuses/{}", group_id, id))
            .await
    }

    pub async fn create_status(&self, group_id: i64, status: &Status) -> Result<Status> {
        self.send_json(
            Method::POST,
            &format!("/api/groups/{}/statuses", group_id),
            status,
        )
        .await
    }

    pub async fn update_status(&self, group_id: i64, id: i64, status: &Status) -> Result<Status> {
        self.send_json(
            Method::PUT,
            &format!("/api/groups/{}/statuses/{}", group_id, id),
            status,
        )
        .await
    }

    pub async fn delete_status(&self, group_id: i64, id: i64) -> Result<()> {
        self.call(
            Method::DELETE,
            &format!("/api/groups/{}/statuses/{}", group_id, id),
        )
        .await
    }

    pub async fn list_priorities(&self) -> Result<Vec<Priority>> {
        self.get_json("/api/priorities").await
    }

    pub async fn get_priority(&self, id: i64) -> Result<Priority> {
        self.get_json(&format!("/api/priorities/{}", id)).await
    }

    pub async fn create_priority(&self, priority: &Priority) -> Result<Priority> {
        self.send_json(Method::POST, "/api/priorities", priority)
            .await
    }

    pub async fn update_priority(&self, id: i64, priority: &Priority) -> Result<Priority> {
        self.send_json(Method::PUT, &format!("/api/priorities/{}", id), priority)
            .await
    }

    pub async fn delete_priority(&self, id: i64) -> Result<()> {
        self.call(Method::DELETE, &format!("/api/priorities/{}", id))
            .await
    }

    pub async fn hide_priority(&self, id: i64) -> Result<Priority> {
        self.fetch_json(Method::POST, &format!("/api/priorities/{}/hide", id))
            .await
    }

    pub async fn unhide_priority(&self, id: i64) -> Result<Priority> {
        self.fetch_json(Method::POST, &format!("/api/priorities/{}/unhide", id))
            .await
    }
}
