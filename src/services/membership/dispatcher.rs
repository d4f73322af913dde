//! Membership mutation seam

use crate::auth::rbac::Actor;
use crate::core::models::{GroupMember, Membership};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Backend that performs membership reads and mutations
///
/// Implementations are the authority: they may refuse a call the role policy
/// would have offered, and callers must surface that refusal as-is.
#[async_trait]
pub trait MembershipDispatcher: Send + Sync {
    /// Active roster of a group as seen by `viewer`
    async fn active_members(&self, viewer: &str, group_id: i64) -> Result<Vec<GroupMember>>;

    /// Invite a user; new memberships start as MEMBER
    async fn add_member(&self, actor: &Actor, group_id: i64, username: &str)
    -> Result<Membership>;

    async fn remove_member(&self, actor: &Actor, group_id: i64, username: &str) -> Result<()>;

    async fn promote_to_moderator(
        &self,
        actor: &Actor,
        group_id: i64,
        username: &str,
    ) -> Result<()>;

    async fn demote_moderator(&self, actor: &Actor, group_id: i64, username: &str) -> Result<()>;

    /// Atomically hand the OWNER role to another member
    async fn transfer_ownership(
        &self,
        actor: &Actor,
        group_id: i64,
        new_owner_username: &str,
    ) -> Result<()>;

    async fn leave_group(&self, actor: &Actor, group_id: i64) -> Result<()>;

    /// Grant MODERATOR directly to a user outside the group
    async fn add_moderator(&self, actor: &Actor, group_id: i64, username: &str) -> Result<()>;

    async fn remove_moderator(&self, actor: &Actor, group_id: i64, username: &str)
    -> Result<()>;
}

#[async_trait]
impl<D: MembershipDispatcher + ?Sized> MembershipDispatcher for Arc<D> {
    async fn active_members(&self, viewer: &str, group_id: i64) -> Result<Vec<GroupMember>> {
        (**self).active_members(viewer, group_id).await
    }

    async fn add_member(
        &self,
        actor: &Actor,
        group_id: i64,
        username: &str,
    ) -> Result<Membership> {
        (**self).add_member(actor, group_id, username).await
    }

    async fn remove_member(&self, actor: &Actor, group_id: i64, username: &str) -> Result<()> {
        (**self).remove_member(actor, group_id, username).await
    }

    async fn promote_to_moderator(
        &self,
        actor: &Actor,
        group_id: i64,
        username: &str,
    ) -> Result<()> {
        (**self).promote_to_moderator(actor, group_id, username).await
    }

    async fn demote_moderator(&self, actor: &Actor, group_id: i64, username: &str) -> Result<()> {
        (**self).demote_moderator(actor, group_id, username).await
    }

    async fn transfer_ownership(
        &self,
        actor: &Actor,
        group_id: i64,
        new_owner_username: &str,
    ) -> Result<()> {
        (**self)
            .transfer_ownership(actor, group_id, new_owner_username)
            .await
    }

    async fn leave_group(&self, actor: &Actor, group_id: i64) -> Result<()> {
        (**self).leave_group(actor, group_id).await
    }

    async fn add_moderator(&self, actor: &Actor, group_id: i64, username: &str) -> Result<()> {
        (**self).add_moderator(actor, group_id, username).await
    }

    async fn remove_moderator(
        &self,
        actor: &Actor,
        group_id: i64,
        username: &str,
    ) -> Result<()> {
        (**self).remove_moderator(actor, group_id, username).await
    }
}
