//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use romance_agent::AgentStoreBuilder;
//! use romance_core::{Gender, MapId};
//!
//! let (mut store, rngs) = AgentStoreBuilder::new(3, /*seed=*/ 42)
//!     .default_age(30.0)
//!     .location(MapId(1))
//!     .build();
//!
//! assert_eq!(store.count, 3);
//! assert_eq!(rngs.len(),  3);
//!
//! // Everything else starts at defaults; write real state afterwards.
//! store.gender[0] = Gender::Female;
//! ```

use romance_core::MapId;

use crate::{AgentRngs, AgentStore, TraitGainHook};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// All arrays are pre-allocated at construction time so later field writes
/// are simple indexed assignments, not pushes.
pub struct AgentStoreBuilder {
    count:       usize,
    seed:        u64,
    age_years:   f32,
    location:    Option<MapId>,
    trait_hooks: Vec<Box<dyn TraitGainHook>>,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            age_years:   25.0,
            location:    Some(MapId(0)),
            trait_hooks: Vec::new(),
        }
    }

    /// Starting age for every agent.  Defaults to 25.
    pub fn default_age(mut self, years: f32) -> Self {
        self.age_years = years;
        self
    }

    /// Map every agent starts on.  Defaults to `MapId(0)`.
    pub fn location(mut self, map: MapId) -> Self {
        self.location = Some(map);
        self
    }

    /// Start every agent off-map.
    pub fn unspawned(mut self) -> Self {
        self.location = None;
        self
    }

    /// Register a hook run around every trait grant.
    pub fn trait_hook(mut self, hook: Box<dyn TraitGainHook>) -> Self {
        self.trait_hooks.push(hook);
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let store = AgentStore::new(self.count, self.age_years, self.location, self.trait_hooks);
        let rngs = AgentRngs::new(self.count, self.seed);
        (store, rngs)
    }
}
