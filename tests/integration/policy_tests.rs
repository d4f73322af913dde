//! Role policy properties
//!
//! Every assertion here ranges over all role combinations rather than picking
//! examples.

#[cfg(test)]
mod tests {
    use crate::common::RosterFactory;
    use taskmanager_rs::auth::rbac::*;

    const BOOLS: [bool; 2] = [true, false];

    #[test]
    fn test_owner_never_removable() {
        for actor in GroupRole::ALL {
            for is_self in BOOLS {
                assert!(!can_remove_member(actor, GroupRole::Owner, is_self));
            }
        }
    }

    #[test]
    fn test_leave_group_table() {
        assert!(!can_leave_group(GroupRole::Owner));
        assert!(can_leave_group(GroupRole::Member));
        assert!(can_leave_group(GroupRole::Moderator));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for raw in [
            "owner", "ADMIN", "propietario", "Moderator", "MODERADOR", "member", "Miembro",
        ] {
            let once = GroupRole::normalize(raw).unwrap();
            let twice = GroupRole::normalize(once.as_str()).unwrap();
            assert_eq!(once, twice);
        }
        assert_eq!(
            GroupRole::normalize("PROPIETARIO").unwrap(),
            GroupRole::normalize("OWNER").unwrap()
        );
        assert_eq!(GroupRole::normalize("OWNER").unwrap(), GroupRole::Owner);
    }

    #[test]
    fn test_nothing_but_transfer_targets_an_owner() {
        let policy = RolePolicy::new();
        let owner = MembershipTarget::new("zoe", GroupRole::Owner);
        for role in GroupRole::ALL {
            for login in ["zoe", "someone"] {
                let actor = Actor::new(login, role);
                for action in MembershipAction::ALL {
                    if !action.is_target_scoped()
                        || action == MembershipAction::TransferOwnership
                    {
                        continue;
                    }
                    assert!(
                        !policy.allows(&actor, action, Some(&owner)),
                        "{} allowed against an owner for {}",
                        action,
                        role
                    );
                }
            }
        }
    }

    #[test]
    fn test_allows_matches_predicates() {
        let policy = RolePolicy::new();
        for actor_role in GroupRole::ALL {
            for target_role in GroupRole::ALL {
                for is_self in BOOLS {
                    let actor = Actor::new("actor", actor_role);
                    let target = MembershipTarget::new(
                        if is_self { "actor" } else { "target" },
                        target_role,
                    );

                    assert_eq!(
                        policy.allows(&actor, MembershipAction::PromoteToModerator, Some(&target)),
                        can_promote_to_moderator(actor_role)
                            && can_be_promoted(target_role, is_self)
                    );
                    assert_eq!(
                        policy.allows(&actor, MembershipAction::DemoteModerator, Some(&target)),
                        can_demote_moderator(actor_role) && can_be_demoted(target_role)
                    );
                    assert_eq!(
                        policy.allows(&actor, MembershipAction::RemoveMember, Some(&target)),
                        can_remove_member(actor_role, target_role, is_self)
                    );
                    assert_eq!(
                        policy.allows(&actor, MembershipAction::TransferOwnership, Some(&target)),
                        can_transfer_ownership(actor_role)
                            && can_receive_ownership(target_role, is_self)
                    );
                }
            }
        }
    }

    #[test]
    fn test_roster_rows_are_independent() {
        let policy = RolePolicy::new();
        let roster = RosterFactory::mixed();
        let alice = Actor::resolve("alice", &roster).unwrap();
        let rows = policy.membership_table(&alice, &roster);

        let carol = &rows[1];
        let bob = &rows[2];
        assert!(carol.actions.contains(&MembershipAction::DemoteModerator));
        assert!(!carol.actions.contains(&MembershipAction::PromoteToModerator));
        assert!(bob.actions.contains(&MembershipAction::PromoteToModerator));
        assert!(!bob.actions.contains(&MembershipAction::DemoteModerator));
    }

    #[test]
    fn test_scenario_promote_is_offered() {
        let roster =
            RosterFactory::create(&[("alice", GroupRole::Owner), ("bob", GroupRole::Member)]);
        let alice = Actor::resolve("alice", &roster).unwrap();
        let bob = MembershipTarget::from(&roster[1]);

        assert!(can_promote_to_moderator(alice.role));
        assert!(can_be_promoted(bob.role, bob.is_self(&alice)));
    }

    #[test]
    fn test_scenario_member_cannot_remove_owner() {
        assert!(!can_remove_member(GroupRole::Member, GroupRole::Owner, false));
    }
}
