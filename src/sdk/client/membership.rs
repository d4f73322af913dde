//! Membership endpoints

use super::client::{TaskManagerClient, path_segment};
use crate::auth::rbac::{Actor, GroupRole};
use crate::core::models::{GroupMember, Membership, OwnershipTransferRequest, UsernameRequest};
use crate::services::MembershipDispatcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

#[async_trait]
impl MembershipDispatcher for TaskManagerClient {
    async fn active_members(&self, _viewer: &str, group_id: i64) -> Result<Vec<GroupMember>> {
        self.get_json(&format!(
            "/api/work-group-memberships/{}/active-members",
            group_id
        ))
        .await
    }

    /// The service answers with an empty body; the returned membership is the
    /// one every new member starts with.
    async fn add_member(
        &self,
        actor: &Actor,
        group_id: i64,
        username: &str,
    ) -> Result<Membership> {
        self.send_empty(
            Method::POST,
            &format!("/api/work-groups/{}/add-member", group_id),
            &UsernameRequest::new(username),
        )
        .await?;
        info!("{} added {} to group {}", actor.username, username, group_id);

        Ok(Membership {
            group_id,
            username: username.to_string(),
            role: GroupRole::Member,
        })
    }

    async fn remove_member(&self, actor: &Actor, group_id: i64, username: &str) -> Result<()> {
        self.send_empty(
            Method::DELETE,
            &format!("/api/work-groups/{}/remove-member", group_id),
            &UsernameRequest::new(username),
        )
        .await?;
        info!("{} removed {} from group {}", actor.username, username, group_id);
        Ok(())
    }

    async fn promote_to_moderator(
        &self,
        actor: &Actor,
        group_id: i64,
        username: &str,
    ) -> Result<()> {
        self.send_empty(
            Method::POST,
            &format!("/api/work-group-memberships/promote-to-moderator/{}", group_id),
            &UsernameRequest::new(username),
        )
        .await?;
        info!("{} promoted {} in group {}", actor.username, username, group_id);
        Ok(())
    }

    async fn demote_moderator(&self, actor: &Actor, group_id: i64, username: &str) -> Result<()> {
        self.send_empty(
            Method::POST,
            &format!("/api/work-group-memberships/demote-moderator/{}", group_id),
            &UsernameRequest::new(username),
        )
        .await?;
        info!("{} demoted {} in group {}", actor.username, username, group_id);
        Ok(())
    }

    async fn transfer_ownership(
        &self,
        actor: &Actor,
        group_id: i64,
        new_owner_username: &str,
    ) -> Result<()> {
        let body = OwnershipTransferRequest {
            new_owner_username: new_owner_username.to_string(),
        };
        self.send_empty(
            Method::POST,
            &format!("/api/work-group-memberships/transfer-ownership/{}", group_id),
            &body,
        )
        .await?;
        info!(
            "{} transferred ownership of group {} to {}",
            actor.username, group_id, new_owner_username
        );
        Ok(())
    }

    async fn leave_group(&self, actor: &Actor, group_id: i64) -> Result<()> {
        self.call(Method::POST, &format!("/api/work-groups/{}/leave", group_id))
            .await?;
        info!("{} left group {}", actor.username, group_id);
        Ok(())
    }

    async fn add_moderator(&self, actor: &Actor, group_id: i64, username: &str) -> Result<()> {
        self.call(
            Method::POST,
            &format!(
                "/api/work-groups/{}/moderator/{}/add",
                group_id,
                path_segment(username)
            ),
        )
        .await?;
        info!("{} added moderator {} to group {}", actor.username, username, group_id);
        Ok(())
    }

    async fn remove_moderator(
        &self,
        actor: &Actor,
        group_id: i64,
        username: &str,
    ) -> Result<()> {
        self.call(
            Method::POST,
            &format!(
                "/api/work-groups/{}/moderator/{}/delete",
                group_id,
                path_segment(username)
            ),
        )
        .await?;
        info!(
            "{} removed moderator {} from group {}",
            actor.username, username, group_id
        );
        Ok(())
    }
}
