//! Data-driven configuration.
//!
//! `RomanceSettings` is built once at load time (see [`crate::loader`]),
//! validated, and then passed by shared reference to every scoring call.
//! Per-species blocks live in `kinds`, indexed by [`KindId`]; agents whose
//! kind has no block fall back to `default_kind`.
//!
//! Validation is forgiving: out-of-range values are clamped, missing tables
//! derived, and everything else reported as a [`Diagnostic`].

use serde::{Deserialize, Serialize};

use crate::{
    Curve, Diagnostic, KindId, OrientationChances, RelationId, TICKS_PER_DAY, Trait,
};

/// Upper bound (inclusive, with rounding slack) for percentage-like rates
/// that may exceed 100.
const MAX_HOOKUP_RATE: f32 = 200.99;
const MAX_ALIEN_LOVE_CHANCE: f32 = 100.99;

// ── Global settings ───────────────────────────────────────────────────────────

/// Global, user-facing settings plus all per-kind configuration blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RomanceSettings {
    /// Percent scaling applied to how often agents look for hookups.
    pub hookup_rate: f32,

    /// Percent chance factor for pairs of different kinds.
    pub alien_love_chance: f32,

    /// Minimum opinion (−100..100) an agent must hold of another before
    /// agreeing to or seeking a hookup with them.
    pub min_opinion_hookup: f32,

    /// Cheat tolerance in percent.  Zero disables cheating entirely.
    pub cheat_chance: f32,

    /// Ticks an agent must wait after an ordered hookup attempt.
    pub ordered_hookup_cooldown_ticks: u64,

    /// Asexual agents rated below this never consider hookups at all.
    pub sex_aversion_threshold: f32,

    /// Asexual agents rated below this only accept existing partners.
    pub partner_only_threshold: f32,

    /// Configuration-declared relation types and whether they count as
    /// romantic partnerships.
    pub love_relations: Vec<LoveRelationDef>,

    /// Fallback block for agents whose kind has no entry in `kinds`.
    pub default_kind: KindSettings,

    /// Per-kind blocks, indexed by `KindId`.
    pub kinds: Vec<KindSettings>,
}

impl Default for RomanceSettings {
    fn default() -> Self {
        Self {
            hookup_rate:                   100.0,
            alien_love_chance:             33.0,
            min_opinion_hookup:            0.0,
            cheat_chance:                  100.0,
            ordered_hookup_cooldown_ticks: TICKS_PER_DAY / 2,
            sex_aversion_threshold:        0.2,
            partner_only_threshold:        0.5,
            love_relations:                Vec::new(),
            default_kind:                  KindSettings::default(),
            kinds:                         Vec::new(),
        }
    }
}

impl RomanceSettings {
    /// The block for `kind`, or `default_kind` if none is configured.
    pub fn kind(&self, kind: KindId) -> &KindSettings {
        self.kinds.get(kind.index()).unwrap_or(&self.default_kind)
    }

    /// `true` if the custom relation `rel` was declared a love relation.
    pub fn is_love_relation(&self, rel: RelationId) -> bool {
        self.love_relations
            .iter()
            .any(|d| d.relation == rel && d.is_love_relation)
    }

    /// Effective hookup rate for `kind` (kind override or global).
    pub fn hookup_rate(&self, kind: KindId) -> f32 {
        self.kind(kind).casual.hookup_rate.unwrap_or(self.hookup_rate)
    }

    /// Effective alien love chance for `kind` (kind override or global).
    pub fn alien_love_chance(&self, kind: KindId) -> f32 {
        self.kind(kind)
            .casual
            .alien_love_chance
            .unwrap_or(self.alien_love_chance)
    }

    /// Minimum opinion an agent of `kind` needs before a spontaneous hookup.
    pub fn min_opinion_for_hookup(&self, kind: KindId) -> f32 {
        self.kind(kind)
            .casual
            .hookup_triggers
            .as_ref()
            .and_then(|t| t.min_opinion)
            .unwrap_or(self.min_opinion_hookup)
    }

    /// Minimum opinion an agent of `kind` needs before an ordered hookup.
    pub fn min_opinion_for_ordered_hookup(&self, kind: KindId) -> f32 {
        self.kind(kind)
            .casual
            .ordered_hookup_triggers
            .as_ref()
            .and_then(|t| t.min_opinion)
            .unwrap_or(self.min_opinion_hookup)
    }

    /// Check and auto-correct every block.  Never fails.
    pub fn validate(&mut self) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        if !(0.0..=100.0).contains(&self.cheat_chance) {
            out.push(Diagnostic::warning(
                "settings",
                format!("cheat_chance {} clamped into 0..=100", self.cheat_chance),
            ));
            self.cheat_chance = self.cheat_chance.clamp(0.0, 100.0);
        }
        if !(-100.0..=100.0).contains(&self.min_opinion_hookup) {
            out.push(Diagnostic::warning(
                "settings",
                format!("min_opinion_hookup {} clamped into -100..=100", self.min_opinion_hookup),
            ));
            self.min_opinion_hookup = self.min_opinion_hookup.clamp(-100.0, 100.0);
        }
        if self.hookup_rate > MAX_HOOKUP_RATE {
            out.push(Diagnostic::warning("settings", "Hookup rate cannot be higher than 200"));
            self.hookup_rate = MAX_HOOKUP_RATE;
        }
        if self.alien_love_chance > MAX_ALIEN_LOVE_CHANCE {
            out.push(Diagnostic::warning("settings", "Alien love chance cannot be higher than 100"));
            self.alien_love_chance = MAX_ALIEN_LOVE_CHANCE;
        }

        out.extend(self.default_kind.validate("default_kind"));
        for (i, kind) in self.kinds.iter_mut().enumerate() {
            let scope = if kind.name.is_empty() {
                format!("kinds[{i}]")
            } else {
                format!("kinds[{}]", kind.name)
            };
            out.extend(kind.validate(&scope));
        }
        out
    }
}

// ── Love relations ────────────────────────────────────────────────────────────

/// Declares how a custom relation type participates in romance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoveRelationDef {
    pub relation:                  RelationId,
    pub is_love_relation:          bool,
    pub should_break_for_new_lover: bool,
    /// Relation the pair falls back to when this one ends.
    pub ex_relation:               Option<RelationId>,
}

impl Default for LoveRelationDef {
    fn default() -> Self {
        Self {
            relation:                   RelationId::INVALID,
            is_love_relation:           false,
            should_break_for_new_lover: true,
            ex_relation:                None,
        }
    }
}

// ── Per-kind settings ─────────────────────────────────────────────────────────

/// Everything configurable about one kind (species / pawn kind).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindSettings {
    pub name:      String,
    pub sexuality: OrientationChances,
    pub casual:    CasualSexSettings,
    pub regular:   RegularSexSettings,
    pub relations: RelationSettings,
    pub fertility: FertilityCurves,
}

impl KindSettings {
    pub fn validate(&mut self, scope: &str) -> Vec<Diagnostic> {
        let mut out = self.sexuality.validate(&format!("{scope}.sexuality"));
        out.extend(self.casual.validate(&format!("{scope}.casual")));
        out.extend(self.regular.validate(&format!("{scope}.regular")));
        out.extend(self.relations.validate(&format!("{scope}.relations")));
        out
    }
}

/// Conditions an agent must meet before seeking a hookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookupTrigger {
    /// Overrides the global `min_opinion_hookup` when set.
    pub min_opinion:     Option<f32>,
    pub has_trait:       Option<Trait>,
    pub must_be_fertile: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CasualSexSettings {
    pub cares_about_cheating:    bool,
    pub will_do_hookup:          bool,
    /// Overrides the global hookup rate when set.
    pub hookup_rate:             Option<f32>,
    /// Overrides the global alien love chance when set.
    pub alien_love_chance:       Option<f32>,
    pub hookup_triggers:         Option<HookupTrigger>,
    pub ordered_hookup_triggers: Option<HookupTrigger>,
}

impl Default for CasualSexSettings {
    fn default() -> Self {
        Self {
            cares_about_cheating:    true,
            will_do_hookup:          true,
            hookup_rate:             None,
            alien_love_chance:       None,
            hookup_triggers:         None,
            ordered_hookup_triggers: None,
        }
    }
}

impl CasualSexSettings {
    pub fn validate(&mut self, scope: &str) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        if let Some(rate) = self.hookup_rate.as_mut() {
            if *rate > MAX_HOOKUP_RATE {
                *rate = MAX_HOOKUP_RATE;
                out.push(Diagnostic::warning(scope, "Hookup rate cannot be higher than 200"));
            }
        }
        if let Some(chance) = self.alien_love_chance.as_mut() {
            if *chance > MAX_ALIEN_LOVE_CHANCE {
                *chance = MAX_ALIEN_LOVE_CHANCE;
                out.push(Diagnostic::warning(scope, "Alien love chance cannot be higher than 100"));
            }
        }
        out
    }
}

/// Age window for intimacy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegularSexSettings {
    pub min_age_for_sex: f32,
    pub max_age_for_sex: f32,
    pub max_age_gap:     f32,
    pub decline_at_age:  f32,
}

impl Default for RegularSexSettings {
    fn default() -> Self {
        Self {
            min_age_for_sex: 16.0,
            max_age_for_sex: 80.0,
            max_age_gap:     40.0,
            decline_at_age:  30.0,
        }
    }
}

impl RegularSexSettings {
    pub fn validate(&self, scope: &str) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        if self.min_age_for_sex > self.decline_at_age {
            out.push(Diagnostic::error(scope, "min_age_for_sex must be lower than decline_at_age"));
        }
        if self.decline_at_age > self.max_age_for_sex {
            out.push(Diagnostic::error(scope, "decline_at_age must be lower than max_age_for_sex"));
        }
        for (name, v) in [
            ("min_age_for_sex", self.min_age_for_sex),
            ("max_age_for_sex", self.max_age_for_sex),
            ("max_age_gap", self.max_age_gap),
            ("decline_at_age", self.decline_at_age),
        ] {
            if v < 0.0 {
                out.push(Diagnostic::error(scope, format!("{name} must be a positive number")));
            }
        }
        out
    }
}

/// Spouse/children rules and child-bearing age windows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationSettings {
    pub spouses_allowed:                bool,
    pub children_allowed:               bool,
    pub pawn_kind_for_parent_global:    Option<String>,
    pub pawn_kind_for_parent_female:    Option<String>,
    pub pawn_kind_for_parent_male:      Option<String>,
    pub min_female_age_to_have_children:   f32,
    pub usual_female_age_to_have_children: f32,
    pub max_female_age_to_have_children:   f32,
    pub min_male_age_to_have_children:     f32,
    pub usual_male_age_to_have_children:   f32,
    pub max_male_age_to_have_children:     f32,
    pub max_children_desired:           i32,
    pub min_opinion_romance:            f32,
}

impl Default for RelationSettings {
    fn default() -> Self {
        Self {
            spouses_allowed:                   true,
            children_allowed:                  true,
            pawn_kind_for_parent_global:       None,
            pawn_kind_for_parent_female:       None,
            pawn_kind_for_parent_male:         None,
            min_female_age_to_have_children:   16.0,
            usual_female_age_to_have_children: 27.0,
            max_female_age_to_have_children:   45.0,
            min_male_age_to_have_children:     14.0,
            usual_male_age_to_have_children:   30.0,
            max_male_age_to_have_children:     50.0,
            max_children_desired:              3,
            min_opinion_romance:               5.0,
        }
    }
}

impl RelationSettings {
    pub fn validate(&mut self, scope: &str) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        if !self.children_allowed {
            let global = self.pawn_kind_for_parent_global.is_some();
            let female = self.pawn_kind_for_parent_female.is_some();
            let male = self.pawn_kind_for_parent_male.is_some();
            if !global && !female && !male {
                out.push(Diagnostic::error(scope, "Please provide valid pawn kind for parents"));
            } else if global {
                if female || male {
                    self.pawn_kind_for_parent_female = None;
                    self.pawn_kind_for_parent_male = None;
                    out.push(Diagnostic::warning(
                        scope,
                        "Please provide only global or male and female pawn kinds; defaulting to global",
                    ));
                }
            } else if !female || !male {
                out.push(Diagnostic::error(scope, "Please provide both a male and female pawn kind"));
            }
        }

        let ages = [
            ("min_female_age_to_have_children", self.min_female_age_to_have_children),
            ("usual_female_age_to_have_children", self.usual_female_age_to_have_children),
            ("max_female_age_to_have_children", self.max_female_age_to_have_children),
            ("min_male_age_to_have_children", self.min_male_age_to_have_children),
            ("usual_male_age_to_have_children", self.usual_male_age_to_have_children),
            ("max_male_age_to_have_children", self.max_male_age_to_have_children),
        ];
        for (name, v) in ages {
            if v < 0.0 {
                out.push(Diagnostic::error(scope, format!("{name} must be a positive number")));
            }
        }
        if self.max_children_desired < 0 {
            out.push(Diagnostic::error(scope, "max_children_desired must be a positive number"));
        }

        // min < usual < max, per gender.
        for window in [ages[0..3].to_vec(), ages[3..6].to_vec()] {
            for pair in window.windows(2) {
                let ((lo_name, lo), (hi_name, hi)) = (pair[0], pair[1]);
                if lo > hi {
                    out.push(Diagnostic::error(scope, format!("{lo_name} must be lower than {hi_name}")));
                }
            }
        }

        if !(-100.99..=100.99).contains(&self.min_opinion_romance) {
            out.push(Diagnostic::error(scope, "Minimum opinion must be between 100 and -100"));
        }
        out
    }
}

/// Fertility multiplier by age, per gender.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FertilityCurves {
    pub male:   Curve,
    pub female: Curve,
    /// Used for agents without a binary gender.
    pub none:   Curve,
}

impl Default for FertilityCurves {
    fn default() -> Self {
        Self {
            male: Curve::from_pairs(&[(14.0, 0.0), (18.0, 1.0), (50.0, 1.0), (90.0, 0.0)]),
            female: Curve::from_pairs(&[
                (14.0, 0.0),
                (20.0, 1.0),
                (28.0, 1.0),
                (35.0, 0.5),
                (40.0, 0.1),
                (45.0, 0.02),
                (50.0, 0.0),
            ]),
            none: Curve::from_pairs(&[(14.0, 0.0), (18.0, 1.0), (50.0, 1.0), (90.0, 0.0)]),
        }
    }
}
