//! Test fixtures and data factories
//!
//! All fixtures use the real in-memory store, not mocks.

use std::sync::Arc;
use taskmanager_rs::core::models::GroupMember;
use taskmanager_rs::{
    Actor, GroupRole, MemoryMembershipStore, MembershipDispatcher, MembershipService,
};

/// A seeded group behind a membership service
pub struct GroupFixture {
    pub store: Arc<MemoryMembershipStore>,
    pub service: MembershipService<Arc<MemoryMembershipStore>>,
    pub group_id: i64,
}

impl GroupFixture {
    /// `[{alice, OWNER}, {bob, MEMBER}]`
    pub async fn alice_and_bob() -> Self {
        Self::with_members(&[("bob", GroupRole::Member)]).await
    }

    /// alice owns the group; the others join with the given roles
    pub async fn with_members(members: &[(&str, GroupRole)]) -> Self {
        let store = Arc::new(MemoryMembershipStore::new());
        store.register_user("alice");
        for (login, _) in members {
            store.register_user(login);
        }
        // Spare users who are registered but not in the group
        for login in ["dave", "erin"] {
            store.register_user(login);
        }

        let group_id = store
            .create_group("alice", "Platform team")
            .expect("seed group")
            .id
            .expect("group id");

        let fixture = Self {
            service: MembershipService::new(store.clone()),
            store,
            group_id,
        };
        fixture.seed(members).await;
        fixture
    }

    async fn seed(&self, members: &[(&str, GroupRole)]) {
        let owner = Actor::new("alice", GroupRole::Owner);
        for (login, role) in members {
            match role {
                GroupRole::Member => {
                    self.store
                        .add_member(&owner, self.group_id, login)
                        .await
                        .expect("seed member");
                }
                GroupRole::Moderator => {
                    self.store
                        .add_moderator(&owner, self.group_id, login)
                        .await
                        .expect("seed moderator");
                }
                GroupRole::Owner => panic!("fixture groups have a single owner"),
            }
        }
    }

    pub fn role_of(&self, login: &str) -> Option<GroupRole> {
        self.store.role_of(self.group_id, login)
    }

    pub fn owners(&self) -> Vec<String> {
        self.store
            .roles(self.group_id)
            .into_iter()
            .filter(|(_, role)| *role == GroupRole::Owner)
            .map(|(login, _)| login)
            .collect()
    }
}

/// Builds rosters without a backend
pub struct RosterFactory;

impl RosterFactory {
    pub fn create(members: &[(&str, GroupRole)]) -> Vec<GroupMember> {
        members
            .iter()
            .map(|(login, role)| GroupMember::new(*login, *role))
            .collect()
    }

    /// One member of each role
    pub fn mixed() -> Vec<GroupMember> {
        Self::create(&[
            ("alice", GroupRole::Owner),
            ("carol", GroupRole::Moderator),
            ("bob", GroupRole::Member),
        ])
    }
}
