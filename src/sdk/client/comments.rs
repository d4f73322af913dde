//! Comment endpoints

use super::client::TaskManagerClient;
use crate::core::models::Comment;
use crate::utils::error::Result;
use reqwest::Method;

impl TaskManagerClient {
    pub async fn comments_for_task(&self, task_id: i64) -> Result<Vec<Comment>> {
        self.get_json(&format!("/api/comments/by-task/{}", task_id))
            .await
    }

    pub async fn create_comment(&self, comment: &Comment) -> Result<Comment> {
        self.send_json(Method::POST, "/api/comments", comment).await
    }

    pub async fn update_comment(&self, id: i64, comment: &Comment) -> Result<Comment> {
        self.send_json(Method::PUT, &format!("/api/comments/{}", id), comment)
            .await
    }

    pub async fn delete_comment(&self, id: i64) -> Result<()> {
        self.call(Method::DELETE, &format!("/api/comments/{}", id))
            .await
    }
}
