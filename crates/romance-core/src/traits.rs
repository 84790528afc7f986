//! Personality and orientation traits.
//!
//! Only the traits the decision engine reads are named; everything else the
//! host knows about travels as [`Trait::Other`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A trait an agent may hold.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    Gay,
    Straight,
    Bisexual,
    /// Asexual and aromantic.
    Asexual,
    /// Asexual, romantically attracted to the opposite gender.
    HeteroAce,
    /// Asexual, romantically attracted to the same gender.
    HomoAce,
    /// Asexual, romantically attracted to any gender.
    BiAce,
    /// Never cheats.
    Faithful,
    /// Cheats readily, especially on partners who are elsewhere.
    Philanderer,
    /// A host trait with no meaning to the engine.
    Other(u16),
}

/// Every orientation trait.  An agent holds at most one of these.
pub const ORIENTATION_TRAITS: [Trait; 7] = [
    Trait::Gay,
    Trait::Bisexual,
    Trait::Straight,
    Trait::Asexual,
    Trait::HeteroAce,
    Trait::HomoAce,
    Trait::BiAce,
];

impl Trait {
    /// `true` for the seven orientation traits.
    #[inline]
    pub fn is_orientation(self) -> bool {
        ORIENTATION_TRAITS.contains(&self)
    }

    /// `true` for the four asexual orientation traits.
    #[inline]
    pub fn is_asexual(self) -> bool {
        matches!(self, Trait::Asexual | Trait::HeteroAce | Trait::HomoAce | Trait::BiAce)
    }

    pub fn label(self) -> String {
        match self {
            Trait::Gay         => "gay".into(),
            Trait::Straight    => "straight".into(),
            Trait::Bisexual    => "bisexual".into(),
            Trait::Asexual     => "asexual".into(),
            Trait::HeteroAce   => "heteroromantic asexual".into(),
            Trait::HomoAce     => "homoromantic asexual".into(),
            Trait::BiAce       => "biromantic asexual".into(),
            Trait::Faithful    => "faithful".into(),
            Trait::Philanderer => "philanderer".into(),
            Trait::Other(n)    => format!("trait #{n}"),
        }
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ── TraitSet ──────────────────────────────────────────────────────────────────

/// The traits one agent currently holds, in gain order.
///
/// `TraitSet` itself enforces nothing beyond "no exact duplicates"; the
/// one-orientation invariant is restored by the hooks that run around every
/// gain in the agent store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraitSet {
    traits: Vec<Trait>,
}

impl TraitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(traits: &[Trait]) -> Self {
        let mut set = Self::new();
        for &t in traits {
            set.insert(t);
        }
        set
    }

    #[inline]
    pub fn has(&self, t: Trait) -> bool {
        self.traits.contains(&t)
    }

    /// Add `t`.  Returns `false` if it was already present.
    pub fn insert(&mut self, t: Trait) -> bool {
        if self.has(t) {
            return false;
        }
        self.traits.push(t);
        true
    }

    /// Remove `t`.  Returns `false` if it was not present.
    pub fn remove(&mut self, t: Trait) -> bool {
        match self.traits.iter().position(|&x| x == t) {
            Some(i) => {
                self.traits.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Trait> + '_ {
        self.traits.iter().copied()
    }

    /// The first orientation trait held, if any.
    pub fn orientation_trait(&self) -> Option<Trait> {
        self.iter().find(|t| t.is_orientation())
    }

    /// How many orientation traits are held.  Anything above 1 is a
    /// transient state that hooks must repair.
    pub fn orientation_count(&self) -> usize {
        self.iter().filter(|t| t.is_orientation()).count()
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}
