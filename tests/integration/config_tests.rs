//! Configuration loading tests

#[cfg(test)]
mod tests {
    use std::io::Write;
    use taskmanager_rs::config::Config;
    use taskmanager_rs::{ErrorCategory, GroupRole, MemoryMembershipStore, TaskManagerError};
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_example_config_loads() {
        let content = include_str!("../../config/taskmanager.yaml.example");
        let file = write_config(content);

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(
            config.client.base_url,
            "http://localhost:8080/services/taskmanager"
        );
        assert_eq!(config.membership.previous_owner_role, GroupRole::Moderator);
    }

    #[tokio::test]
    async fn test_env_overrides_file() {
        let file =
            write_config("client:\n  base_url: \"https://tasks.example.com\"\n  timeout: 20\n");
        let config = Config::from_file(file.path())
            .await
            .unwrap()
            .with_overrides(vec![
                ("TASKMANAGER_TIMEOUT".to_string(), "45".to_string()),
                ("TASKMANAGER_USERNAME".to_string(), "carol".to_string()),
            ])
            .unwrap();

        assert_eq!(config.client.base_url, "https://tasks.example.com");
        assert_eq!(config.client.timeout, 45);
        assert_eq!(config.client.username.as_deref(), Some("carol"));
    }

    #[tokio::test]
    async fn test_owner_as_previous_owner_role_is_rejected() {
        let file = write_config("membership:\n  previous_owner_role: PROPIETARIO\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, TaskManagerError::Config(_)));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[tokio::test]
    async fn test_unknown_role_in_file_is_rejected() {
        let file = write_config("membership:\n  previous_owner_role: GUEST\n");
        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_membership_config_drives_store() {
        let file = write_config("membership:\n  previous_owner_role: MIEMBRO\n");
        let config = Config::from_file(file.path()).await.unwrap();
        let store = MemoryMembershipStore::with_config(&config.membership);

        store.register_user("alice");
        store.register_user("bob");
        let group = store.create_group("alice", "Docs").unwrap().id.unwrap();

        use taskmanager_rs::{Actor, MembershipDispatcher};
        let alice = Actor::new("alice", GroupRole::Owner);
        store.add_member(&alice, group, "bob").await.unwrap();
        store.transfer_ownership(&alice, group, "bob").await.unwrap();

        assert_eq!(store.role_of(group, "alice"), Some(GroupRole::Member));
    }

    #[test]
    fn test_yaml_round_trip_keeps_canonical_roles() {
        let yaml = Config::default().to_yaml().unwrap();
        let parsed = Config::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.membership.previous_owner_role, GroupRole::Moderator);
        assert!(yaml.contains("MODERATOR"));
    }
}
