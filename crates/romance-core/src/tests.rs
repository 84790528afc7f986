//! Unit tests for romance-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, BedId, KindId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(BedId::INVALID.0, u32::MAX);
        assert_eq!(KindId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{TICKS_PER_DAY, TICKS_PER_HOUR, Tick, ticks_to_period};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn since_and_until_saturate() {
        assert_eq!(Tick(5).since(Tick(10)), 0);
        assert_eq!(Tick(10).until(Tick(5)), 0);
        assert_eq!(Tick(10).until(Tick(25)), 15);
    }

    #[test]
    fn period_formatting() {
        assert_eq!(ticks_to_period(TICKS_PER_HOUR * 3), "3h");
        assert_eq!(ticks_to_period(TICKS_PER_DAY * 2), "2d");
        assert_eq!(ticks_to_period(TICKS_PER_DAY + TICKS_PER_HOUR), "1d 1h");
    }

    #[test]
    fn partial_hour_before_a_day_boundary_rounds_to_whole_days() {
        assert_eq!(ticks_to_period(TICKS_PER_DAY - 1), "1d");
        assert_eq!(ticks_to_period(TICKS_PER_DAY * 3 - 1), "3d");
        assert_eq!(ticks_to_period(TICKS_PER_DAY + 1), "1d 1h");
        assert_eq!(ticks_to_period(1), "1h");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, stable_unit};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.5), "p is clamped");
    }

    #[test]
    fn choose_weighted_skips_zero_weights() {
        let mut rng = AgentRng::new(3, AgentId(1));
        for _ in 0..500 {
            assert_eq!(rng.choose_weighted(&[0.0, 5.0, 0.0]), Some(1));
        }
        assert_eq!(rng.choose_weighted(&[0.0, 0.0]), None);
        assert_eq!(rng.choose_weighted(&[]), None);
    }

    #[test]
    fn stable_unit_is_stable_and_in_range() {
        for i in 0..200 {
            let a = stable_unit(AgentId(i));
            assert_eq!(a, stable_unit(AgentId(i)));
            assert!((0.0..1.0).contains(&a));
        }
    }
}

#[cfg(test)]
mod curve {
    use proptest::prelude::*;

    use crate::{Curve, inverse_lerp, lerp_double};

    #[test]
    fn inverse_lerp_descending() {
        assert_eq!(inverse_lerp(30.0, -80.0, 30.0), 0.0);
        assert_eq!(inverse_lerp(30.0, -80.0, -80.0), 1.0);
        assert!((inverse_lerp(30.0, -80.0, -25.0) - 0.5).abs() < 1e-6);
        assert_eq!(inverse_lerp(30.0, -80.0, 100.0), 0.0);
    }

    #[test]
    fn lerp_double_does_not_clamp() {
        assert!((lerp_double(0.0, 100.0, 1.0, 1.5, 50.0) - 1.25).abs() < 1e-6);
        assert!((lerp_double(0.0, 100.0, 1.0, 1.5, -100.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn curve_holds_end_values() {
        let c = Curve::from_pairs(&[(14.0, 0.0), (18.0, 1.0), (50.0, 1.0), (90.0, 0.0)]);
        assert_eq!(c.evaluate(0.0), 0.0);
        assert_eq!(c.evaluate(16.0), 0.5);
        assert_eq!(c.evaluate(30.0), 1.0);
        assert_eq!(c.evaluate(70.0), 0.5);
        assert_eq!(c.evaluate(200.0), 0.0);
        assert_eq!(Curve::default().evaluate(5.0), 0.0);
    }

    #[test]
    fn curve_sorts_points() {
        let c = Curve::from_pairs(&[(10.0, 1.0), (0.0, 0.0)]);
        assert_eq!(c.points()[0].x, 0.0);
        assert_eq!(c.evaluate(5.0), 0.5);
    }

    proptest! {
        #[test]
        fn inverse_lerp_in_unit_range(a in -200f32..200.0, b in -200f32..200.0, v in -500f32..500.0) {
            let t = inverse_lerp(a, b, v);
            prop_assert!((0.0..=1.0).contains(&t));
        }
    }
}

#[cfg(test)]
mod orientation {
    use crate::{
        Orientation, OrientationChances, Severity, Trait, TraitSet, is_asexual, orientation_of,
    };

    #[test]
    fn trait_to_orientation() {
        assert_eq!(orientation_of(Some(&TraitSet::with(&[Trait::Gay]))), Orientation::Homo);
        assert_eq!(orientation_of(Some(&TraitSet::with(&[Trait::HomoAce]))), Orientation::Homo);
        assert_eq!(orientation_of(Some(&TraitSet::with(&[Trait::Straight]))), Orientation::Hetero);
        assert_eq!(orientation_of(Some(&TraitSet::with(&[Trait::BiAce]))), Orientation::Bi);
        assert_eq!(orientation_of(Some(&TraitSet::with(&[Trait::Asexual]))), Orientation::None);
        assert_eq!(orientation_of(Some(&TraitSet::new())), Orientation::None);
        assert_eq!(orientation_of(None), Orientation::None);
    }

    #[test]
    fn missing_traits_are_not_asexual() {
        assert!(!is_asexual(None));
        assert!(is_asexual(Some(&TraitSet::with(&[Trait::HeteroAce]))));
        assert!(!is_asexual(Some(&TraitSet::with(&[Trait::Bisexual]))));
    }

    #[test]
    fn default_table_is_valid() {
        let mut table = OrientationChances::default();
        assert!(table.validate("t").is_empty());
    }

    #[test]
    fn zero_ace_table_is_backfilled_with_warning() {
        let mut table = OrientationChances {
            asexual_chance: 10.0,
            bisexual_chance: 30.0,
            gay_chance: 20.0,
            straight_chance: 40.0,
            ace_aro_chance: 0.0,
            ace_bi_chance: 0.0,
            ace_homo_chance: 0.0,
            ace_hetero_chance: 0.0,
        };
        let diags = table.validate("t");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(table.ace_aro_chance, 10.0);
        assert_eq!(table.ace_bi_chance, 30.0);
        assert_eq!(table.ace_homo_chance, 20.0);
        assert_eq!(table.ace_hetero_chance, 40.0);
    }

    #[test]
    fn bad_sums_are_reported_not_fatal() {
        let mut table = OrientationChances { gay_chance: 90.0, ..Default::default() };
        table.ace_bi_chance = 5.0;
        let diags = table.validate("t");
        assert!(diags.iter().all(|d| d.is_error()));
        assert_eq!(diags.len(), 2);
    }
}

#[cfg(test)]
mod settings {
    use crate::{KindId, KindSettings, RomanceSettings};

    #[test]
    fn defaults_validate_cleanly() {
        let mut s = RomanceSettings::default();
        assert!(s.validate().is_empty());
    }

    #[test]
    fn out_of_range_rates_are_clamped() {
        let mut s = RomanceSettings { hookup_rate: 500.0, cheat_chance: -3.0, ..Default::default() };
        let diags = s.validate();
        assert_eq!(diags.len(), 2);
        assert_eq!(s.hookup_rate, 200.99);
        assert_eq!(s.cheat_chance, 0.0);
    }

    #[test]
    fn unknown_kind_falls_back_to_default() {
        let mut kind = KindSettings { name: "elf".into(), ..Default::default() };
        kind.regular.min_age_for_sex = 100.0;
        let s = RomanceSettings { kinds: vec![kind], ..Default::default() };
        assert_eq!(s.kind(KindId(0)).regular.min_age_for_sex, 100.0);
        assert_eq!(s.kind(KindId(9)).regular.min_age_for_sex, 16.0);
    }

    #[test]
    fn global_parent_kind_wins() {
        let mut kind = KindSettings::default();
        kind.relations.children_allowed = false;
        kind.relations.pawn_kind_for_parent_global = Some("colonist".into());
        kind.relations.pawn_kind_for_parent_male = Some("villager".into());
        let diags = kind.validate("k");
        assert_eq!(diags.len(), 1);
        assert!(kind.relations.pawn_kind_for_parent_male.is_none());
        assert_eq!(kind.relations.pawn_kind_for_parent_global.as_deref(), Some("colonist"));
    }

    #[test]
    fn age_orders_are_checked() {
        let mut kind = KindSettings::default();
        kind.regular.min_age_for_sex = 40.0;
        kind.relations.min_male_age_to_have_children = 60.0;
        let diags = kind.validate("k");
        assert!(diags.iter().any(|d| d.message.contains("decline_at_age")));
        assert!(diags.iter().any(|d| d.message.contains("min_male_age_to_have_children")));
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{Trait, load_settings_reader};

    #[test]
    fn partial_json_uses_defaults() {
        let json = r#"{ "cheat_chance": 25, "kinds": [ { "name": "human" } ] }"#;
        let (s, diags) = load_settings_reader(Cursor::new(json)).unwrap();
        assert!(diags.is_empty());
        assert_eq!(s.cheat_chance, 25.0);
        assert_eq!(s.kinds[0].name, "human");
        assert_eq!(s.kinds[0].regular.max_age_gap, 40.0);
    }

    #[test]
    fn triggers_and_curves_deserialize() {
        let json = r#"{
            "kinds": [ { "casual": { "hookup_triggers": { "has_trait": "philanderer", "must_be_fertile": true } },
                         "fertility": { "male": [ { "x": 10, "y": 0 }, { "x": 20, "y": 1 } ] } } ]
        }"#;
        let (s, _) = load_settings_reader(Cursor::new(json)).unwrap();
        let trigger = s.kinds[0].casual.hookup_triggers.as_ref().unwrap();
        assert_eq!(trigger.has_trait, Some(Trait::Philanderer));
        assert!(trigger.must_be_fertile);
        assert_eq!(s.kinds[0].fertility.male.evaluate(15.0), 0.5);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(load_settings_reader(Cursor::new("{ nope")).is_err());
    }
}
