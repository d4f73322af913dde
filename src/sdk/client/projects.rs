//! Project endpoints

use super::client::{TaskManagerClient, path_segment};
use crate::core::models::{
    MinimalProject, Project, ProjectAssignUsers, ProjectCreate, ProjectUpdate, User,
};
use crate::utils::error::Result;
use reqwest::Method;

impl TaskManagerClient {
    pub async fn assigned_projects(&self) -> Result<Vec<Project>> {
        self.get_json("/api/projects/assigned").await
    }

    pub async fn my_created_projects(&self) -> Result<Vec<MinimalProject>> {
        self.get_json("/api/projects/my-created").await
    }

    pub async fn projects_in_work_group(&self, work_group_id: i64) -> Result<Vec<Project>> {
        self.get_json(&format!("/api/projects/in-work-group/{}", work_group_id))
            .await
    }

    pub async fn active_projects(&self) -> Result<Vec<Project>> {
        self.get_json("/api/projects/active").await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project> {
        self.get_json(&format!("/api/projects/{}", id)).await
    }

    pub async fn create_project(
        &self,
        work_group_id: i64,
        project: &ProjectCreate,
    ) -> Result<Project> {
        self.send_json(
            Method::POST,
            &format!("/api/projects/create-in/work-group/{}", work_group_id),
            project,
        )
        .await
    }

    pub async fn update_project(&self, id: i64, project: &ProjectUpdate) -> Result<Project> {
        self.send_json(Method::POST, &format!("/api/projects/{}/update", id), project)
            .await
    }

    pub async fn delete_project(&self, id: i64) -> Result<()> {
        self.call(Method::DELETE, &format!("/api/projects/{}/delete", id))
            .await
    }

    pub async fn assign_users_to_project(&self, id: i64, user_ids: Vec<String>) -> Result<()> {
        self.send_empty(
            Method::POST,
            &format!("/api/projects/{}/assign-users", id),
            &ProjectAssignUsers { user_ids },
        )
        .await
    }

    pub async fn unassign_user_from_project(&self, project_id: i64, user_id: &str) -> Result<()> {
        self.call(
            Method::DELETE,
            &format!(
                "/api/projects/{}/unassign/{}",
                project_id,
                path_segment(user_id)
            ),
        )
        .await
    }

    pub async fn project_assigned_users(&self, project_id: i64) -> Result<Vec<User>> {
        self.get_json(&format!("/api/projects/{}/assigned-users", project_id))
            .await
    }
}
