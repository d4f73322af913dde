//! Task endpoints

use super::client::TaskManagerClient;
use crate::core::models::{Task, TaskAssignment, TaskCreate, TaskUpdate};
use crate::utils::error::Result;
use reqwest::Method;

impl TaskManagerClient {
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.get_json("/api/tasks").await
    }

    pub async fn assigned_tasks(&self) -> Result<Vec<Task>> {
        self.get_json("/api/tasks/assigned").await
    }

    pub async fn created_tasks(&self) -> Result<Vec<Task>> {
        self.get_json("/api/tasks/created").await
    }

    pub async fn tasks_in_work_group(&self, work_group_id: i64) -> Result<Vec<Task>> {
        self.get_json(&format!("/api/tasks/work-group/{}/tasks", work_group_id))
            .await
    }

    pub async fn get_task(&self, id: i64) -> Result<Task> {
        self.get_json(&format!("/api/tasks/{}", id)).await
    }

    pub async fn create_task(&self, work_group_id: i64, task: &TaskCreate) -> Result<Task> {
        self.send_json(
            Method::POST,
            &format!("/api/tasks/workgroup/{}/create-task", work_group_id),
            task,
        )
        .await
    }

    /// Create a task attached to a project of the group
    pub async fn create_subtask(
        &self,
        group_id: i64,
        project_id: i64,
        task: &TaskCreate,
    ) -> Result<Task> {
        self.send_json(
            Method::POST,
            &format!(
                "/api/tasks/work-group/{}/project/{}/create-subtask",
                group_id, project_id
            ),
            task,
        )
        .await
    }

    pub async fn update_task(&self, id: i64, task: &TaskUpdate) -> Result<Task> {
        self.send_json(Method::POST, &format!("/api/tasks/{}/update", id), task)
            .await
    }

    /// Soft delete
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        self.call(Method::DELETE, &format!("/api/tasks/{}/delete", id))
            .await
    }

    pub async fn archive_task(&self, id: i64) -> Result<()> {
        self.call(Method::POST, &format!("/api/tasks/{}/archive", id))
            .await
    }

    pub async fn assign_task_members(
        &self,
        group_id: i64,
        assignment: &TaskAssignment,
    ) -> Result<()> {
        self.send_empty(
            Method::POST,
            &format!("/api/tasks/group/{}/assign-member", group_id),
            assignment,
        )
        .await
    }
}
