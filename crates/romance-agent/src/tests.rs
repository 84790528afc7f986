//! Unit tests for romance-agent.

#[cfg(test)]
mod builder {
    use romance_core::MapId;

    use crate::AgentStoreBuilder;

    #[test]
    fn correct_count() {
        let (store, rngs) = AgentStoreBuilder::new(500, 1).build();
        assert_eq!(store.count, 500);
        assert_eq!(rngs.len(), 500);
    }

    #[test]
    fn zero_agents() {
        let (store, rngs) = AgentStoreBuilder::new(0, 0).build();
        assert!(store.is_empty());
        assert!(rngs.is_empty());
    }

    #[test]
    fn defaults_are_applied() {
        let (store, _) = AgentStoreBuilder::new(2, 0)
            .default_age(40.0)
            .location(MapId(3))
            .build();
        assert_eq!(store.age_years[1], 40.0);
        assert_eq!(store.location[0], Some(MapId(3)));
        assert!(store.traits[0].as_ref().is_some_and(|t| t.is_empty()));
    }

    #[test]
    fn unspawned_agents_have_no_location() {
        let (store, _) = AgentStoreBuilder::new(2, 0).unspawned().build();
        assert!(store.location.iter().all(Option::is_none));
    }
}

#[cfg(test)]
mod store {
    use romance_core::{AgentId, BedId, MapId, RomanceError, Tick, Trait};

    use crate::{
        ActivityKind, AgentStoreBuilder, BeliefEvent, Memory, MemoryKind, QueuedActivity,
        RelationKind, SocialWorld, SocialWorldMut,
    };

    #[test]
    fn agent_ids_iterator() {
        let (store, _) = AgentStoreBuilder::new(5, 0).build();
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2), AgentId(3), AgentId(4)]);
    }

    #[test]
    fn unknown_agents_read_neutral() {
        let (store, _) = AgentStoreBuilder::new(1, 0).build();
        let ghost = AgentId(9);
        assert!(!store.contains(ghost));
        assert!(store.traits(ghost).is_none());
        assert!(store.relations(ghost).is_empty());
        assert_eq!(store.opinion_of(ghost, AgentId(0)), 0.0);
        assert_eq!(store.location(ghost), None);
    }

    #[test]
    fn writes_to_unknown_agents_fail() {
        let (mut store, _) = AgentStoreBuilder::new(1, 0).build();
        let err = store.gain_trait(AgentId(4), Trait::Gay).unwrap_err();
        assert!(matches!(err, RomanceError::AgentNotFound(AgentId(4))));
    }

    #[test]
    fn opinions_are_directed_and_clamped() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).build();
        store.set_opinion(AgentId(0), AgentId(1), 250.0);
        assert_eq!(store.opinion_of(AgentId(0), AgentId(1)), 100.0);
        assert_eq!(store.opinion_of(AgentId(1), AgentId(0)), 0.0);
    }

    #[test]
    fn relations_are_reciprocal() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).build();
        store.add_relation(AgentId(0), RelationKind::Parent, AgentId(1)).unwrap();
        store.add_relation(AgentId(0), RelationKind::Parent, AgentId(1)).unwrap();
        assert_eq!(store.relations(AgentId(0)).len(), 1);
        assert_eq!(store.relations(AgentId(1))[0].kind, RelationKind::Child);
        assert_eq!(store.relations(AgentId(1))[0].other, AgentId(0));
    }

    #[test]
    fn bed_owners_and_free_colonists() {
        let (mut store, _) = AgentStoreBuilder::new(4, 0).build();
        store.owned_bed[0] = Some(BedId(1));
        store.owned_bed[2] = Some(BedId(1));
        store.status[1].dead = true;
        store.location[3] = Some(MapId(5));
        assert_eq!(store.bed_owners(BedId(1)), vec![AgentId(0), AgentId(2)]);
        assert_eq!(store.free_colonists_at(MapId(0)), vec![AgentId(0), AgentId(2)]);
    }

    #[test]
    fn candidate_list_removal() {
        let (mut store, _) = AgentStoreBuilder::new(3, 0).build();
        store.set_hookup_candidates(AgentId(0), vec![AgentId(1), AgentId(2)]).unwrap();
        assert!(store.remove_hookup_candidate(AgentId(0), AgentId(1)).unwrap());
        assert!(!store.remove_hookup_candidate(AgentId(0), AgentId(1)).unwrap());
        assert_eq!(store.hookup_candidates(AgentId(0)), &[AgentId(2)]);
    }

    #[test]
    fn queue_front_becomes_current_activity() {
        let (mut store, _) = AgentStoreBuilder::new(1, 0).build();
        let lovin = QueuedActivity {
            kind: ActivityKind::CasualLovin, partner: None, bed: None, slot: 0,
        };
        store.enqueue_first(AgentId(0), lovin).unwrap();
        assert_eq!(store.next_queued(AgentId(0)), Some(&lovin));
        store.end_current_activity(AgentId(0)).unwrap();
        assert_eq!(store.current_activity(AgentId(0)), ActivityKind::CasualLovin);
        store.end_current_activity(AgentId(0)).unwrap();
        assert_eq!(store.current_activity(AgentId(0)), ActivityKind::Idle);
    }

    #[test]
    fn memories_and_cooldowns() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).build();
        let m = Memory::about(MemoryKind::RebuffedMyHookupAttempt, AgentId(1), Tick(7));
        store.gain_memory(AgentId(0), m).unwrap();
        store.set_can_lovin_tick(AgentId(0), Tick(90)).unwrap();
        store.set_ordered_hookup_tick(AgentId(1), Tick(45)).unwrap();
        assert_eq!(store.memories(AgentId(0)), &[m]);
        assert_eq!(store.can_lovin_tick(AgentId(0)), Tick(90));
        assert_eq!(store.ordered_hookup_tick(AgentId(1)), Tick(45));
    }

    #[test]
    fn beliefs_limit_partner_count() {
        let (mut store, _) = AgentStoreBuilder::new(1, 0).build();
        let two = BeliefEvent::TakeAdditionalPartner { new_count: 2 };
        assert!(store.willing_to_do(AgentId(0), BeliefEvent::TakeAdditionalPartner { new_count: 1 }));
        assert!(!store.willing_to_do(AgentId(0), two));
        store.beliefs[0].max_partners = None;
        assert!(store.willing_to_do(AgentId(0), two));
    }
}

#[cfg(test)]
mod trait_hooks {
    use std::cell::Cell;
    use std::rc::Rc;

    use romance_core::{AgentId, Trait, TraitSet};

    use crate::{AgentStoreBuilder, SocialWorld, SocialWorldMut, TraitGainHook};

    /// Records the memo round-trip and drops whatever trait it stashed.
    struct ReplaceOrientation {
        calls: Rc<Cell<u32>>,
    }

    impl TraitGainHook for ReplaceOrientation {
        fn before_gain(&self, _: AgentId, traits: &TraitSet, gained: Trait) -> Option<Trait> {
            if gained.is_orientation() { traits.orientation_trait() } else { None }
        }

        fn after_gain(&self, _: AgentId, traits: &mut TraitSet, _: Trait, remembered: Option<Trait>) {
            self.calls.set(self.calls.get() + 1);
            if let Some(old) = remembered {
                if traits.orientation_count() > 1 {
                    traits.remove(old);
                }
            }
        }
    }

    #[test]
    fn hooks_run_around_every_grant() {
        let calls = Rc::new(Cell::new(0));
        let (mut store, _) = AgentStoreBuilder::new(1, 0)
            .trait_hook(Box::new(ReplaceOrientation { calls: calls.clone() }))
            .build();
        let a = AgentId(0);
        store.gain_trait(a, Trait::Gay).unwrap();
        store.gain_trait(a, Trait::Faithful).unwrap();
        store.gain_trait(a, Trait::Straight).unwrap();
        assert_eq!(calls.get(), 3);
        assert!(store.has_trait(a, Trait::Straight));
        assert!(!store.has_trait(a, Trait::Gay));
        assert!(store.has_trait(a, Trait::Faithful));
    }

    #[test]
    fn grant_creates_missing_trait_set() {
        let (mut store, _) = AgentStoreBuilder::new(1, 0).build();
        store.traits[0] = None;
        assert!(store.gain_trait(AgentId(0), Trait::Bisexual).unwrap());
        assert!(store.has_trait(AgentId(0), Trait::Bisexual));
        assert!(!store.gain_trait(AgentId(0), Trait::Bisexual).unwrap());
    }
}

#[cfg(test)]
mod rngs {
    use crate::AgentStoreBuilder;
    use romance_core::AgentId;

    #[test]
    fn per_agent_determinism() {
        let (_, mut rngs1) = AgentStoreBuilder::new(10, 999).build();
        let (_, mut rngs2) = AgentStoreBuilder::new(10, 999).build();
        for i in 0..10u32 {
            let a: f32 = rngs1.get_mut(AgentId(i)).random();
            let b: f32 = rngs2.get_mut(AgentId(i)).random();
            assert_eq!(a, b, "agent {i} RNG should be deterministic");
        }
    }

    #[test]
    fn different_seeds_differ() {
        let (_, mut rngs_a) = AgentStoreBuilder::new(1, 1).build();
        let (_, mut rngs_b) = AgentStoreBuilder::new(1, 2).build();
        let a: u64 = rngs_a.get_mut(AgentId(0)).random();
        let b: u64 = rngs_b.get_mut(AgentId(0)).random();
        assert_ne!(a, b);
    }
}
