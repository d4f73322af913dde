//! Membership flows through the service and the in-memory backend

#[cfg(test)]
mod tests {
    use crate::common::GroupFixture;
    use taskmanager_rs::{
        Actor, ErrorCategory, GroupRole, MembershipAction, MembershipDispatcher, NotificationLevel,
    };

    #[tokio::test]
    async fn test_owner_promotes_member() {
        let fx = GroupFixture::alice_and_bob().await;

        let outcome = fx
            .service
            .promote_to_moderator("alice", fx.group_id, "bob")
            .await;

        assert!(outcome.is_success());
        let roles: Vec<_> = outcome
            .members()
            .iter()
            .map(|m| (m.login.as_str(), m.role))
            .collect();
        assert_eq!(
            roles,
            vec![("alice", GroupRole::Owner), ("bob", GroupRole::Moderator)]
        );
    }

    #[tokio::test]
    async fn test_member_removing_owner_sends_nothing() {
        let fx = GroupFixture::alice_and_bob().await;
        let before = fx.store.roles(fx.group_id);

        let outcome = fx.service.remove_member("bob", fx.group_id, "alice").await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.category(), Some(ErrorCategory::PolicyDenial));
        assert_eq!(fx.store.roles(fx.group_id), before);
    }

    #[tokio::test]
    async fn test_transfer_leaves_exactly_one_owner() {
        let fx = GroupFixture::alice_and_bob().await;

        let outcome = fx
            .service
            .transfer_ownership("alice", fx.group_id, "bob")
            .await;
        assert!(outcome.is_success());

        assert_eq!(fx.owners(), vec!["bob".to_string()]);
        assert_eq!(fx.role_of("alice"), Some(GroupRole::Moderator));

        let alice = fx.service.actor("alice", fx.group_id).unwrap();
        assert!(!taskmanager_rs::auth::rbac::can_transfer_ownership(alice.role));

        let retry = fx
            .service
            .transfer_ownership("alice", fx.group_id, "bob")
            .await;
        assert_eq!(retry.category(), Some(ErrorCategory::PolicyDenial));
    }

    #[tokio::test]
    async fn test_member_invite_is_offered_but_refused_by_backend() {
        let fx = GroupFixture::alice_and_bob().await;

        let outcome = fx.service.add_member("bob", fx.group_id, "dave").await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.category(), Some(ErrorCategory::Validation));
        assert_eq!(
            outcome.notification().message,
            "Only OWNER or MODERATOR can perform this action."
        );
        assert_eq!(fx.role_of("dave"), None);
    }

    #[tokio::test]
    async fn test_moderator_leave_is_refused_by_backend() {
        let fx = GroupFixture::with_members(&[("carol", GroupRole::Moderator)]).await;

        let outcome = fx.service.leave_group("carol", fx.group_id).await;

        assert_eq!(outcome.category(), Some(ErrorCategory::Validation));
        assert_eq!(outcome.notification().level, NotificationLevel::Error);
        assert_eq!(fx.role_of("carol"), Some(GroupRole::Moderator));
        assert_eq!(outcome.members().len(), 2);
    }

    #[tokio::test]
    async fn test_member_leaves() {
        let fx = GroupFixture::alice_and_bob().await;

        let outcome = fx.service.leave_group("bob", fx.group_id).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.members().len(), 1);
        assert_eq!(fx.role_of("bob"), None);
    }

    #[tokio::test]
    async fn test_moderator_manages_members_but_not_moderators() {
        let fx = GroupFixture::with_members(&[
            ("carol", GroupRole::Moderator),
            ("bob", GroupRole::Member),
        ])
        .await;
        let view = fx.service.roster_view("carol", fx.group_id).await.unwrap();
        assert!(!view.group_actions.contains(&MembershipAction::AddModerator));

        let added = fx.service.add_member("carol", fx.group_id, "dave").await;
        assert!(added.is_success());

        let demote = fx.service.demote_moderator("carol", fx.group_id, "carol").await;
        assert_eq!(demote.category(), Some(ErrorCategory::PolicyDenial));

        let removed = fx.service.remove_member("carol", fx.group_id, "bob").await;
        assert!(removed.is_success());
        assert_eq!(fx.role_of("bob"), None);
    }

    #[tokio::test]
    async fn test_owner_moderator_lifecycle() {
        let fx = GroupFixture::alice_and_bob().await;

        let added = fx.service.add_moderator("alice", fx.group_id, "erin").await;
        assert!(added.is_success());
        assert_eq!(fx.role_of("erin"), Some(GroupRole::Moderator));

        let demoted = fx.service.demote_moderator("alice", fx.group_id, "erin").await;
        assert!(demoted.is_success());
        assert_eq!(fx.role_of("erin"), Some(GroupRole::Member));

        let not_a_moderator = fx
            .service
            .remove_moderator("alice", fx.group_id, "erin")
            .await;
        assert_eq!(not_a_moderator.category(), Some(ErrorCategory::PolicyDenial));

        fx.service
            .promote_to_moderator("alice", fx.group_id, "erin")
            .await;
        let removed = fx
            .service
            .remove_moderator("alice", fx.group_id, "erin")
            .await;
        assert!(removed.is_success());
        assert_eq!(fx.role_of("erin"), None);
    }

    #[tokio::test]
    async fn test_duplicate_add_shows_server_message() {
        let fx = GroupFixture::alice_and_bob().await;

        let outcome = fx.service.add_member("alice", fx.group_id, "bob").await;

        assert_eq!(outcome.category(), Some(ErrorCategory::Validation));
        assert_eq!(
            outcome.notification().message,
            "User already belongs to the group."
        );
        assert_eq!(outcome.members(), fx.service.cached_members(fx.group_id).as_slice());
    }

    #[tokio::test]
    async fn test_stale_roster_is_settled_by_backend() {
        let fx = GroupFixture::alice_and_bob().await;
        fx.service.refresh("alice", fx.group_id).await.unwrap();

        // Another client promotes bob behind this service's back
        let owner = Actor::new("alice", GroupRole::Owner);
        fx.store
            .promote_to_moderator(&owner, fx.group_id, "bob")
            .await
            .unwrap();

        let outcome = fx
            .service
            .promote_to_moderator("alice", fx.group_id, "bob")
            .await;
        assert_eq!(outcome.category(), Some(ErrorCategory::Validation));
        assert_eq!(outcome.notification().message, "Only members can be promoted.");
    }
}
