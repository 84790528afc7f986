//! Orientation categories and the probability table used to assign them.

use serde::{Deserialize, Serialize};

use crate::{Diagnostic, Trait, TraitSet};

/// Sum every chance table must reach.
pub const CHANCE_TOTAL: f32 = 100.0;

/// Float slack when comparing a table sum against [`CHANCE_TOTAL`].
const SUM_EPSILON: f32 = 0.01;

/// The base category drawn from the sexuality table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum OrientationCategory {
    Homosexual,
    Heterosexual,
    Bisexual,
    Asexual,
}

impl OrientationCategory {
    /// Same order as [`OrientationChances::base_weights`].
    pub const ALL: [OrientationCategory; 4] = [
        OrientationCategory::Homosexual,
        OrientationCategory::Heterosexual,
        OrientationCategory::Bisexual,
        OrientationCategory::Asexual,
    ];

    /// Trait granted for a non-asexual draw.  Asexual draws go through the
    /// sub-table instead; this returns the aromantic trait for them.
    pub fn base_trait(self) -> Trait {
        match self {
            OrientationCategory::Homosexual   => Trait::Gay,
            OrientationCategory::Heterosexual => Trait::Straight,
            OrientationCategory::Bisexual     => Trait::Bisexual,
            OrientationCategory::Asexual      => Trait::Asexual,
        }
    }

    /// Category an orientation trait belongs to.
    pub fn of_trait(t: Trait) -> Option<OrientationCategory> {
        match t {
            Trait::Gay      => Some(OrientationCategory::Homosexual),
            Trait::Straight => Some(OrientationCategory::Heterosexual),
            Trait::Bisexual => Some(OrientationCategory::Bisexual),
            Trait::Asexual | Trait::HeteroAce | Trait::HomoAce | Trait::BiAce => {
                Some(OrientationCategory::Asexual)
            }
            _ => None,
        }
    }
}

/// Which genders an agent is romantically drawn to.
///
/// Asexual agents still carry a romantic direction through their sub-trait;
/// plain `Asexual` maps to `None` (aromantic).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Orientation {
    Homo,
    Hetero,
    Bi,
    None,
}

/// Romantic direction of an agent.  A missing trait set counts as `None`.
pub fn orientation_of(traits: Option<&TraitSet>) -> Orientation {
    let Some(traits) = traits else {
        return Orientation::None;
    };
    if traits.has(Trait::Gay) || traits.has(Trait::HomoAce) {
        Orientation::Homo
    } else if traits.has(Trait::Straight) || traits.has(Trait::HeteroAce) {
        Orientation::Hetero
    } else if traits.has(Trait::Bisexual) || traits.has(Trait::BiAce) {
        Orientation::Bi
    } else {
        Orientation::None
    }
}

/// `true` if the agent holds any asexual orientation trait.
pub fn is_asexual(traits: Option<&TraitSet>) -> bool {
    traits.is_some_and(|t| t.iter().any(Trait::is_asexual))
}

/// Classifier handed to compatibility shims that ask "is this a sexuality
/// trait?".
#[inline]
pub fn is_sexuality_trait(t: Trait) -> bool {
    t.is_orientation()
}

// ── OrientationChances ────────────────────────────────────────────────────────

/// Percent weights for base orientation and for the romantic sub-orientation
/// of asexual agents.
///
/// Both groups of four must sum to 100.  An all-zero asexual group means
/// "mirror the base group" and is filled in by [`validate`](Self::validate).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationChances {
    pub asexual_chance:  f32,
    pub bisexual_chance: f32,
    pub gay_chance:      f32,
    pub straight_chance: f32,

    pub ace_aro_chance:    f32,
    pub ace_bi_chance:     f32,
    pub ace_homo_chance:   f32,
    pub ace_hetero_chance: f32,
}

impl Default for OrientationChances {
    fn default() -> Self {
        Self {
            asexual_chance:  10.0,
            bisexual_chance: 50.0,
            gay_chance:      20.0,
            straight_chance: 20.0,

            ace_aro_chance:    10.0,
            ace_bi_chance:     50.0,
            ace_homo_chance:   20.0,
            ace_hetero_chance: 20.0,
        }
    }
}

impl OrientationChances {
    /// Weights in [`OrientationCategory`] declaration order.
    pub fn base_weights(&self) -> [f32; 4] {
        [self.gay_chance, self.straight_chance, self.bisexual_chance, self.asexual_chance]
    }

    /// Asexual sub-table weights mapped to the trait each one grants.
    pub fn ace_weights(&self) -> [(Trait, f32); 4] {
        [
            (Trait::HomoAce,   self.ace_homo_chance),
            (Trait::HeteroAce, self.ace_hetero_chance),
            (Trait::BiAce,     self.ace_bi_chance),
            (Trait::Asexual,   self.ace_aro_chance),
        ]
    }

    fn base_sum(&self) -> f32 {
        self.base_weights().iter().sum()
    }

    fn ace_sum(&self) -> f32 {
        self.ace_weights().iter().map(|(_, w)| w).sum()
    }

    /// Check both groups, back-filling an all-zero asexual group from the
    /// base group.
    ///
    /// Never fails: sums other than 100 are reported as errors and left in
    /// place (weighted draws still work on any positive weights).
    pub fn validate(&mut self, scope: &str) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        if self.base_weights().iter().any(|w| *w < 0.0) {
            out.push(Diagnostic::error(scope, "Sexuality chances cannot be negative"));
        }
        if (self.base_sum() - CHANCE_TOTAL).abs() > SUM_EPSILON {
            out.push(Diagnostic::error(scope, "Sexuality chances must add up to 100"));
        }

        if self.ace_sum() == 0.0 {
            out.push(Diagnostic::warning(
                scope,
                "Romantic orientation chances for asexual agents not found. \
                 Defaulting to match sexual orientation chances.",
            ));
            self.ace_aro_chance = self.asexual_chance;
            self.ace_bi_chance = self.bisexual_chance;
            self.ace_homo_chance = self.gay_chance;
            self.ace_hetero_chance = self.straight_chance;
        } else if (self.ace_sum() - CHANCE_TOTAL).abs() > SUM_EPSILON {
            out.push(Diagnostic::error(
                scope,
                "Asexual romantic orientation chances must add up to 100",
            ));
        }

        out
    }
}
