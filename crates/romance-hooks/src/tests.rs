//! Unit tests for romance-hooks.

use romance_agent::{AgentStore, AgentStoreBuilder};
use romance_core::{AgentId, Gender, Trait, TraitSet};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn colony(n: usize) -> AgentStore {
    AgentStoreBuilder::new(n, 5).build().0
}

fn person(store: &mut AgentStore, id: u32, gender: Gender, traits: &[Trait]) {
    store.gender[id as usize] = gender;
    store.traits[id as usize] = Some(TraitSet::with(traits));
}

// ── DecisionHook ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod decision {
    use romance_agent::{ActivityKind, QueuedActivity};
    use romance_core::{RomanceSettings, Tick};
    use romance_rules::RomanceContext;

    use super::*;
    use crate::{AsexualLovinBlock, DecisionHook, DecisionHookExt, KeepHostDecision};

    struct AddOne;
    impl DecisionHook<u32> for AddOne {
        fn modify(&self, _: &RomanceContext<'_>, _: AgentId, planned: &u32) -> Option<u32> {
            Some(planned + 1)
        }
    }

    struct DoubleIfEven;
    impl DecisionHook<u32> for DoubleIfEven {
        fn modify(&self, _: &RomanceContext<'_>, _: AgentId, planned: &u32) -> Option<u32> {
            (planned % 2 == 0).then_some(planned * 2)
        }
    }

    fn lovin() -> Option<QueuedActivity> {
        Some(QueuedActivity { kind: ActivityKind::Lovin, partner: Some(AgentId(1)), bed: None, slot: 0 })
    }

    #[test]
    fn keep_host_decision_is_identity() {
        let store = colony(1);
        let settings = RomanceSettings::default();
        let ctx = RomanceContext::new(Tick(0), &settings, &store);
        assert_eq!(KeepHostDecision.decide(&ctx, AgentId(0), 7u32), 7);
    }

    #[test]
    fn chain_feeds_first_output_to_second() {
        let store = colony(1);
        let settings = RomanceSettings::default();
        let ctx = RomanceContext::new(Tick(0), &settings, &store);
        let a = AgentId(0);

        let chain = AddOne.then(DoubleIfEven);
        assert_eq!(chain.decide(&ctx, a, 1), 4);
        // Second declines: the first's replacement still stands.
        assert_eq!(chain.decide(&ctx, a, 2), 3);

        let chain = KeepHostDecision.then(DoubleIfEven);
        assert_eq!(chain.modify(&ctx, a, &3), None);
    }

    #[test]
    fn asexual_agents_do_not_start_lovin() {
        let mut store = colony(2);
        person(&mut store, 0, Gender::Female, &[Trait::BiAce]);
        person(&mut store, 1, Gender::Male, &[Trait::Straight]);
        let settings = RomanceSettings::default();
        let ctx = RomanceContext::new(Tick(0), &settings, &store);

        assert_eq!(AsexualLovinBlock.decide(&ctx, AgentId(0), lovin()), None);
        assert_eq!(AsexualLovinBlock.decide(&ctx, AgentId(1), lovin()), lovin());
        assert_eq!(AsexualLovinBlock.modify(&ctx, AgentId(0), &None), None);
    }
}

// ── Age gates ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod age_gate {
    use romance_core::{RomanceSettings, Tick};
    use romance_rules::RomanceContext;

    use super::*;
    use crate::age_gate::{
        HOST_ADULT_AGE, HOST_GROWTH_TIER_AGE, growth_tier_age_threshold, implant_age_threshold,
        implant_available, old_enough_for_romance, romance_age_threshold, shows_growth_tier,
    };

    #[test]
    fn romance_floor_follows_settings() {
        let mut store = colony(1);
        store.age_years[0] = 17.0;
        let mut settings = RomanceSettings::default();
        settings.default_kind.regular.min_age_for_sex = 18.0;
        let ctx = RomanceContext::new(Tick(0), &settings, &store);

        assert!(store.age_years[0] >= HOST_ADULT_AGE);
        assert_eq!(romance_age_threshold(&ctx, AgentId(0)), 18.0);
        assert!(!old_enough_for_romance(&ctx, AgentId(0)));
    }

    #[test]
    fn implant_uses_whole_years() {
        let mut store = colony(1);
        store.gender[0] = Gender::Female;
        store.age_years[0] = 15.9;
        let mut settings = RomanceSettings::default();
        settings.default_kind.relations.min_female_age_to_have_children = 14.5;
        let ctx = RomanceContext::new(Tick(0), &settings, &store);

        assert_eq!(implant_age_threshold(&ctx, AgentId(0)), 14);
        assert!(implant_available(&ctx, AgentId(0)));
    }

    #[test]
    fn implant_floor_can_exceed_host_constant() {
        let mut store = colony(1);
        store.gender[0] = Gender::Female;
        store.age_years[0] = 17.0;
        let mut settings = RomanceSettings::default();
        settings.default_kind.relations.min_female_age_to_have_children = 20.0;
        let ctx = RomanceContext::new(Tick(0), &settings, &store);
        assert!(!implant_available(&ctx, AgentId(0)));
    }

    #[test]
    fn growth_tier_follows_life_stage_adult_age() {
        let mut store = colony(3);
        store.age_years[0] = 14.0;
        store.age_years[1] = 14.0;
        store.adult_min_age[1] = 14.5;
        store.age_years[2] = 19.0;
        let settings = RomanceSettings::default();
        let ctx = RomanceContext::new(Tick(0), &settings, &store);

        assert!(store.age_years[0] as i32 >= HOST_GROWTH_TIER_AGE);
        assert_eq!(growth_tier_age_threshold(&ctx, AgentId(0)), 18);
        assert!(shows_growth_tier(&ctx, AgentId(0)));
        assert_eq!(growth_tier_age_threshold(&ctx, AgentId(1)), 14);
        assert!(!shows_growth_tier(&ctx, AgentId(1)));
        assert!(!shows_growth_tier(&ctx, AgentId(2)));
    }
}

// ── Generation overrides ──────────────────────────────────────────────────────

#[cfg(test)]
mod generation {
    use romance_agent::{Relation, RelationKind, SocialWorld, SocialWorldMut};
    use romance_core::{AgentRng, RomanceSettings, Tick};

    use super::*;
    use crate::{ParentOverride, create_parent_relation, generate_sexuality_trait};

    #[test]
    fn sexuality_generation_keeps_existing_trait() {
        let (mut store, mut rngs) = AgentStoreBuilder::new(2, 3).build();
        store.traits[0] = Some(TraitSet::with(&[Trait::HomoAce]));
        let settings = RomanceSettings::default();

        let kept = generate_sexuality_trait(&mut store, &settings, AgentId(0), rngs.get_mut(AgentId(0))).unwrap();
        assert_eq!(kept, Some(Trait::HomoAce));

        let fresh = generate_sexuality_trait(&mut store, &settings, AgentId(1), rngs.get_mut(AgentId(1))).unwrap();
        assert!(fresh.is_some_and(Trait::is_orientation));
        assert_eq!(store.traits(AgentId(1)).unwrap().orientation_count(), 1);
    }

    /// 0: new parent, 1: child, 2: the child's existing parent.
    fn family(parent_gender: Gender, parent_trait: Trait) -> AgentStore {
        let mut store = colony(3);
        person(&mut store, 0, parent_gender, &[parent_trait]);
        person(&mut store, 2, Gender::Female, &[Trait::Straight]);
        store.add_relation(AgentId(1), RelationKind::Parent, AgentId(2)).unwrap();
        store
    }

    #[test]
    fn host_handles_compatible_parents() {
        let mut store = family(Gender::Male, Trait::Straight);
        let settings = RomanceSettings::default();
        let mut rng = AgentRng::new(1, AgentId(0));
        let result = create_parent_relation(&mut store, &settings, Tick(0), AgentId(0), AgentId(1), &mut rng).unwrap();
        assert_eq!(result, ParentOverride::HostDefault);
        assert!(store.relations[0].is_empty());
    }

    #[test]
    fn gay_parent_is_not_made_a_spouse() {
        let mut store = family(Gender::Male, Trait::Gay);
        let settings = RomanceSettings::default();
        let mut rng = AgentRng::new(1, AgentId(0));
        let result = create_parent_relation(&mut store, &settings, Tick(0), AgentId(0), AgentId(1), &mut rng).unwrap();

        let ParentOverride::Linked { partner: Some((other, kind)) } = result else {
            panic!("expected a linked partner, got {result:?}");
        };
        assert_eq!(other, AgentId(2));
        assert!(matches!(kind, RelationKind::Lover | RelationKind::ExLover));
        assert!(store.relations[1].contains(&Relation { kind: RelationKind::Parent, other: AgentId(0) }));
        assert!(!store.relations[0].iter().any(|r| r.kind == RelationKind::Spouse));
    }

    #[test]
    fn taken_other_parent_becomes_ex() {
        let mut settings = RomanceSettings::default();
        settings.default_kind.relations.spouses_allowed = false;

        for seed in 0..20 {
            let mut store = colony(4);
            person(&mut store, 0, Gender::Male, &[Trait::Straight]);
            person(&mut store, 2, Gender::Female, &[Trait::Straight]);
            store.add_relation(AgentId(1), RelationKind::Parent, AgentId(2)).unwrap();
            store.add_relation(AgentId(2), RelationKind::Spouse, AgentId(3)).unwrap();
            let mut rng = AgentRng::new(seed, AgentId(0));
            let result = create_parent_relation(&mut store, &settings, Tick(0), AgentId(0), AgentId(1), &mut rng).unwrap();
            assert_eq!(result, ParentOverride::Linked { partner: Some((AgentId(2), RelationKind::ExLover)) });
        }
    }

    #[test]
    fn single_other_parent_usually_stays_lover() {
        let mut settings = RomanceSettings::default();
        settings.default_kind.relations.spouses_allowed = false;
        let n = 2_000;
        let mut lovers = 0;
        for seed in 0..n {
            let mut store = family(Gender::Male, Trait::Straight);
            let mut rng = AgentRng::new(seed, AgentId(0));
            let result = create_parent_relation(&mut store, &settings, Tick(0), AgentId(0), AgentId(1), &mut rng).unwrap();
            if result == (ParentOverride::Linked { partner: Some((AgentId(2), RelationKind::Lover)) }) {
                lovers += 1;
            }
        }
        let rate = lovers as f32 / n as f32;
        assert!((rate - 0.85).abs() < 0.04, "lover rate {rate}");
    }

    #[test]
    fn first_parent_links_alone() {
        let mut store = colony(2);
        person(&mut store, 0, Gender::Female, &[Trait::Straight]);
        let mut settings = RomanceSettings::default();
        settings.default_kind.relations.spouses_allowed = false;
        let mut rng = AgentRng::new(1, AgentId(0));
        let result = create_parent_relation(&mut store, &settings, Tick(0), AgentId(0), AgentId(1), &mut rng).unwrap();
        assert_eq!(result, ParentOverride::Linked { partner: None });
        assert!(store.relations[0].contains(&Relation { kind: RelationKind::Child, other: AgentId(1) }));
    }
}

// ── Affordances ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod affordance {
    use romance_agent::SocialWorldMut;
    use romance_core::{RomanceSettings, TICKS_PER_HOUR, Tick};
    use romance_rules::RomanceContext;

    use super::*;
    use crate::{
        AromanticRomanceBlock, CooldownResetAction, DecisionHook, DecisionHookExt, DevAction,
        SocialAction, TryHookupAffordance, apply_dev_action, hookup_options, hookup_tooltip,
        press_try_hookup, press_try_romance,
    };

    /// 0 straight man; 1, 2 straight women; 3 a straight man.
    fn mixer() -> AgentStore {
        let mut store = colony(4);
        person(&mut store, 0, Gender::Male, &[Trait::Straight]);
        person(&mut store, 1, Gender::Female, &[Trait::Straight]);
        person(&mut store, 2, Gender::Female, &[Trait::Straight]);
        person(&mut store, 3, Gender::Male, &[Trait::Straight]);
        store.set_mutual_opinion(AgentId(0), AgentId(1), 20.0);
        store.set_mutual_opinion(AgentId(0), AgentId(2), 80.0);
        store
    }

    #[test]
    fn buttons_for_ordinary_and_aromantic_agents() {
        let mut store = mixer();
        person(&mut store, 3, Gender::Male, &[Trait::Asexual]);
        let settings = RomanceSettings::default();
        let ctx = RomanceContext::new(Tick(0), &settings, &store);
        let hook = TryHookupAffordance.then(AromanticRomanceBlock);
        let host = vec![SocialAction::TryRomance];

        assert_eq!(hook.decide(&ctx, AgentId(0), host.clone()), vec![
            SocialAction::TryRomance,
            SocialAction::TryHookup,
        ]);
        assert_eq!(hook.decide(&ctx, AgentId(3), host), vec![SocialAction::TryHookup]);
    }

    #[test]
    fn no_hookup_button_for_kinds_that_never_hook_up() {
        let store = mixer();
        let mut settings = RomanceSettings::default();
        settings.default_kind.casual.will_do_hookup = false;
        let ctx = RomanceContext::new(Tick(0), &settings, &store);
        assert_eq!(TryHookupAffordance.modify(&ctx, AgentId(0), &vec![SocialAction::TryRomance]), None);
    }

    #[test]
    fn options_rank_eligible_by_chance() {
        let store = mixer();
        let settings = RomanceSettings::default();
        let ctx = RomanceContext::new(Tick(0), &settings, &store);
        let options = hookup_options(&ctx, AgentId(0));

        let targets: Vec<AgentId> = options.iter().map(|o| o.target).collect();
        assert_eq!(targets, vec![AgentId(2), AgentId(1), AgentId(3)]);
        assert!(options[0].chance > options[1].chance);
        assert!(!options[2].report.accepted);
        assert_eq!(options[2].report.reason.as_deref(), Some("not attracted"));
    }

    #[test]
    fn pressing_try_hookup_on_cooldown() {
        let mut store = mixer();
        store.ordered_hookup_tick[0] = Tick(TICKS_PER_HOUR * 2);
        let settings = RomanceSettings::default();
        let ctx = RomanceContext::new(Tick(0), &settings, &store);
        let msg = press_try_hookup(&ctx, AgentId(0)).unwrap_err();
        assert!(msg.contains("2h"), "{msg}");

        let ctx = RomanceContext::new(Tick(TICKS_PER_HOUR * 2), &settings, &store);
        assert_eq!(press_try_hookup(&ctx, AgentId(0)).unwrap().len(), 3);
    }

    #[test]
    fn pressing_try_romance_as_aromantic() {
        let mut store = mixer();
        store.gain_trait(AgentId(1), Trait::Asexual).unwrap();
        store.remove_trait(AgentId(1), Trait::Straight).unwrap();
        let settings = RomanceSettings::default();
        let ctx = RomanceContext::new(Tick(0), &settings, &store);
        assert!(press_try_romance(&ctx, AgentId(0)).is_ok());
        assert!(press_try_romance(&ctx, AgentId(1)).is_err());
    }

    #[test]
    fn tooltip_explains_chance_or_refusal() {
        let store = mixer();
        let settings = RomanceSettings::default();
        let ctx = RomanceContext::new(Tick(0), &settings, &store);

        let tip = hookup_tooltip(&ctx, AgentId(0), AgentId(2)).unwrap();
        assert!(tip.starts_with("Hookup chance: "), "{tip}");
        assert!(tip.contains("Not partners: x0.50"), "{tip}");

        let tip = hookup_tooltip(&ctx, AgentId(0), AgentId(3)).unwrap();
        assert_eq!(tip, "Hookup chance: can't (not attracted)\n");

        assert_eq!(hookup_tooltip(&ctx, AgentId(0), AgentId(0)), None);
    }

    #[test]
    fn cooldown_reset_offered_only_in_dev_mode_while_waiting() {
        let mut store = mixer();
        store.ordered_hookup_tick[0] = Tick(500);
        let settings = RomanceSettings::default();
        let reset = DevAction::ResetOrderedHookupCooldown;

        let ctx = RomanceContext::new(Tick(100), &settings, &store);
        let dev = CooldownResetAction { dev_mode: true };
        assert_eq!(dev.decide(&ctx, AgentId(0), Vec::new()), vec![reset]);
        assert_eq!(dev.decide(&ctx, AgentId(1), Vec::new()), Vec::new());
        assert_eq!(dev.decide(&ctx, AgentId(0), vec![reset]), vec![reset]);
        let player = CooldownResetAction { dev_mode: false };
        assert_eq!(player.decide(&ctx, AgentId(0), Vec::new()), Vec::new());

        let later = RomanceContext::new(Tick(500), &settings, &store);
        assert_eq!(dev.decide(&later, AgentId(0), Vec::new()), Vec::new());
    }

    #[test]
    fn resetting_the_cooldown_lets_the_agent_ask_again() {
        let mut store = mixer();
        store.ordered_hookup_tick[0] = Tick(TICKS_PER_HOUR * 5);
        apply_dev_action(&mut store, AgentId(0), DevAction::ResetOrderedHookupCooldown).unwrap();
        assert_eq!(store.ordered_hookup_tick[0], Tick::ZERO);
        assert!(DevAction::ResetOrderedHookupCooldown.label().starts_with("DEV: "));

        let settings = RomanceSettings::default();
        let ctx = RomanceContext::new(Tick(TICKS_PER_HOUR), &settings, &store);
        assert!(press_try_hookup(&ctx, AgentId(0)).is_ok());
        assert_eq!(
            CooldownResetAction { dev_mode: true }.modify(&ctx, AgentId(0), &Vec::new()),
            None
        );

        assert!(apply_dev_action(&mut store, AgentId(9), DevAction::ResetOrderedHookupCooldown).is_err());
    }
}

// ── Trait log cache ───────────────────────────────────────────────────────────

#[cfg(test)]
mod trait_log {
    use std::sync::Arc;
    use std::time::Duration;

    use proptest::prelude::*;

    use super::*;
    use crate::TraitLogCache;
    use crate::trait_log::{FLUSH_AGE_MS, sexuality_trait_check};

    #[test]
    fn batches_until_quiet() {
        let cache = TraitLogCache::new();
        let a = AgentId(4);
        cache.write_message_at("gain", a, "first", 0);
        cache.write_message_at("gain", a, "second", 600);
        assert_eq!(cache.pending(), 1);

        // 1000 ms after the first write but only 400 after the latest.
        assert!(cache.sweep_at(1_000).is_empty());

        let flushed = cache.sweep_at(600 + FLUSH_AGE_MS + 1);
        assert_eq!(flushed.len(), 1);
        assert_eq!(flushed[0].0, a);
        assert_eq!(flushed[0].1, "gain - first\ngain - second\n");
        assert_eq!(cache.pending(), 0);
        assert_eq!(cache.peek(a), None);
    }

    #[test]
    fn trait_lines_list_labels() {
        let cache = TraitLogCache::new();
        let traits = TraitSet::with(&[Trait::Gay]);
        cache.write_traits("generate", AgentId(1), Some(&traits));
        let text = cache.peek(AgentId(1)).unwrap();
        assert!(text.starts_with("generate - agent: "), "{text}");
        assert!(text.contains("traits: gay"), "{text}");
    }

    #[test]
    fn sexuality_check_answers_and_logs() {
        let cache = TraitLogCache::new();
        assert!(sexuality_trait_check(&cache, AgentId(0), Trait::BiAce));
        assert!(!sexuality_trait_check(&cache, AgentId(0), Trait::Faithful));
        assert_eq!(cache.peek(AgentId(0)).unwrap().lines().count(), 2);
    }

    #[test]
    fn background_sweeper_flushes() {
        let cache = Arc::new(TraitLogCache::new());
        cache.write_message_at("gain", AgentId(2), "x", 0);
        let handle = cache.spawn_sweeper().unwrap();
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while cache.pending() > 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(20));
        }
        handle.stop();
        // Written at t=0, so stale as soon as the cache is a second old.
        assert_eq!(cache.pending(), 0);
    }

    proptest! {
        #[test]
        fn sweep_never_flushes_fresh_entries(writes in prop::collection::vec((0u32..8, 0u64..5_000), 1..40), now in 0u64..8_000) {
            let cache = TraitLogCache::new();
            let mut latest = std::collections::HashMap::new();
            for (agent, at) in writes {
                cache.write_message_at("m", AgentId(agent), "line", at);
                latest.insert(agent, at);
            }
            let flushed = cache.sweep_at(now);
            for (agent, _) in &flushed {
                prop_assert!(now.saturating_sub(latest[&agent.0]) > FLUSH_AGE_MS);
            }
            for (agent, at) in latest {
                let was_flushed = flushed.iter().any(|(a, _)| a.0 == agent);
                prop_assert_eq!(was_flushed, now.saturating_sub(at) > FLUSH_AGE_MS);
            }
        }
    }
}
