//! Membership flows against a mock task manager service

#[cfg(test)]
mod tests {
    use serde_json::json;
    use taskmanager_rs::config::ClientConfig;
    use taskmanager_rs::{ErrorCategory, GroupRole, MembershipService, TaskManagerClient};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ROSTER: &str = "/api/work-group-memberships/7/active-members";

    fn service_for(server: &MockServer) -> MembershipService<TaskManagerClient> {
        let config = ClientConfig {
            base_url: server.uri(),
            token: Some("integration-token".to_string()),
            username: Some("alice".to_string()),
            ..Default::default()
        };
        MembershipService::new(TaskManagerClient::new(config).unwrap())
    }

    async fn mount_roster(server: &MockServer, members: serde_json::Value, times: u64) {
        Mock::given(method("GET"))
            .and(path(ROSTER))
            .respond_with(ResponseTemplate::new(200).set_body_json(members))
            .up_to_n_times(times)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_promote_then_refresh() {
        let server = MockServer::start().await;
        mount_roster(
            &server,
            json!([
                {"login": "alice", "role": "PROPIETARIO"},
                {"login": "bob", "role": "MIEMBRO"}
            ]),
            1,
        )
        .await;
        mount_roster(
            &server,
            json!([
                {"login": "alice", "role": "OWNER"},
                {"login": "bob", "role": "MODERATOR"}
            ]),
            1,
        )
        .await;
        Mock::given(method("POST"))
            .and(path("/api/work-group-memberships/promote-to-moderator/7"))
            .and(body_json(json!({"username": "bob"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = service_for(&server)
            .promote_to_moderator("alice", 7, "bob")
            .await;

        assert!(outcome.is_success());
        assert_eq!(outcome.members()[1].role, GroupRole::Moderator);
    }

    #[tokio::test]
    async fn test_denied_removal_issues_no_request() {
        let server = MockServer::start().await;
        mount_roster(
            &server,
            json!([
                {"login": "alice", "role": "OWNER"},
                {"login": "bob", "role": "MEMBER"}
            ]),
            10,
        )
        .await;
        Mock::given(method("DELETE"))
            .and(path("/api/work-groups/7/remove-member"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let outcome = service_for(&server).remove_member("bob", 7, "alice").await;

        assert_eq!(outcome.category(), Some(ErrorCategory::PolicyDenial));
    }

    #[tokio::test]
    async fn test_server_rejection_keeps_previous_roster() {
        let server = MockServer::start().await;
        mount_roster(
            &server,
            json!([
                {"login": "alice", "role": "ADMIN"},
                {"login": "bob", "role": "MEMBER"}
            ]),
            10,
        )
        .await;
        Mock::given(method("POST"))
            .and(path("/api/work-group-memberships/transfer-ownership/7"))
            .and(body_json(json!({"newOwnerUsername": "bob"})))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "title": "Bad Request",
                "detail": "Ownership transfer is temporarily disabled"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = service_for(&server);
        let outcome = service.transfer_ownership("alice", 7, "bob").await;

        assert_eq!(outcome.category(), Some(ErrorCategory::Validation));
        assert_eq!(
            outcome.notification().message,
            "Ownership transfer is temporarily disabled"
        );
        assert_eq!(outcome.members()[0].role, GroupRole::Owner);
        assert_eq!(service.cached_members(7)[1].role, GroupRole::Member);
    }

    #[tokio::test]
    async fn test_unreadable_roster_fails_without_mutation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ROSTER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"login": "alice", "role": "SUPERUSER"}
            ])))
            .mount(&server)
            .await;

        let outcome = service_for(&server).leave_group("alice", 7).await;

        assert!(!outcome.is_success());
        assert!(outcome.members().is_empty());
        assert_eq!(outcome.category(), Some(ErrorCategory::Internal));
    }
}
