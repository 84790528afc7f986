//! In-memory agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! Scoring and resolution need `&mut AgentRng` for the acting agent while
//! holding `&AgentStore` for the social graph.  Keeping the RNGs in a separate
//! `AgentRngs` struct lets both borrows coexist:
//!
//! ```ignore
//! let rng = rngs.get_mut(initiator);
//! let accepted = rng.gen_bool(score_acceptance(&ctx, target, initiator, true) as f64);
//! ```

use std::collections::VecDeque;

use romance_core::{
    AgentId, AgentRng, BedId, Gender, KindId, MapId, RomanceError, RomanceResult, Tick, Trait,
    TraitSet,
};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::activity::{ActivityKind, QueuedActivity};
use crate::relation::{Memory, Relation, RelationKind};
use crate::trait_hook::TraitGainHook;
use crate::world::{AgentStatus, BeliefEvent, Beliefs, SocialWorld, SocialWorldMut};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] so an
/// agent's RNG can be borrowed mutably alongside a shared store borrow.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Adult age of a baseline human in the host.
pub const DEFAULT_ADULT_MIN_AGE: f32 = 18.0;

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for every agent the engine can see.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them.  Fields are `pub` so hosts and tests can write
/// initial state directly after [`AgentStoreBuilder::build`](crate::AgentStoreBuilder::build).
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Identity ──────────────────────────────────────────────────────────
    pub gender:        Vec<Gender>,
    pub age_years:     Vec<f32>,
    /// Host life-stage adult age; defaults to [`DEFAULT_ADULT_MIN_AGE`].
    pub adult_min_age: Vec<f32>,
    pub kind:          Vec<KindId>,
    /// `None` models a host agent with no trait component.
    pub traits:        Vec<Option<TraitSet>>,
    pub beliefs:       Vec<Beliefs>,

    // ── Social graph ──────────────────────────────────────────────────────
    pub relations: Vec<Vec<Relation>>,
    pub memories:  Vec<Vec<Memory>>,

    // ── Whereabouts & condition ───────────────────────────────────────────
    pub location:  Vec<Option<MapId>>,
    pub owned_bed: Vec<Option<BedId>>,
    pub status:    Vec<AgentStatus>,

    // ── Activity ──────────────────────────────────────────────────────────
    pub current_activity: Vec<ActivityKind>,
    pub queue:            Vec<VecDeque<QueuedActivity>>,

    // ── Cooldowns ─────────────────────────────────────────────────────────
    pub can_lovin_tick:      Vec<Tick>,
    pub ordered_hookup_tick: Vec<Tick>,

    pub hookup_candidates: Vec<Vec<AgentId>>,

    /// Directed opinions; missing entries read as 0.
    opinions:    FxHashMap<(AgentId, AgentId), f32>,
    trait_hooks: Vec<Box<dyn TraitGainHook>>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Set `agent`'s opinion of `other`, clamped to `[-100, 100]`.
    pub fn set_opinion(&mut self, agent: AgentId, other: AgentId, value: f32) {
        self.opinions.insert((agent, other), value.clamp(-100.0, 100.0));
    }

    /// Set both directions of an opinion pair.
    pub fn set_mutual_opinion(&mut self, a: AgentId, b: AgentId, value: f32) {
        self.set_opinion(a, b, value);
        self.set_opinion(b, a, value);
    }

    /// Register a hook run around every [`gain_trait`](SocialWorldMut::gain_trait).
    pub fn add_trait_hook(&mut self, hook: Box<dyn TraitGainHook>) {
        self.trait_hooks.push(hook);
    }

    pub fn trait_hook_count(&self) -> usize {
        self.trait_hooks.len()
    }

    /// Front of `agent`'s activity queue.
    pub fn next_queued(&self, agent: AgentId) -> Option<&QueuedActivity> {
        self.queue.get(agent.index()).and_then(|q| q.front())
    }

    fn check(&self, agent: AgentId) -> RomanceResult<usize> {
        if agent.index() < self.count {
            Ok(agent.index())
        } else {
            Err(RomanceError::AgentNotFound(agent))
        }
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(
        count:       usize,
        age_years:   f32,
        location:    Option<MapId>,
        trait_hooks: Vec<Box<dyn TraitGainHook>>,
    ) -> Self {
        Self {
            count,
            gender:              vec![Gender::None; count],
            age_years:           vec![age_years; count],
            adult_min_age:       vec![DEFAULT_ADULT_MIN_AGE; count],
            kind:                vec![KindId(0); count],
            traits:              vec![Some(TraitSet::new()); count],
            beliefs:             vec![Beliefs::default(); count],
            relations:           vec![Vec::new(); count],
            memories:            vec![Vec::new(); count],
            location:            vec![location; count],
            owned_bed:           vec![None; count],
            status:              vec![AgentStatus::default(); count],
            current_activity:    vec![ActivityKind::Idle; count],
            queue:               vec![VecDeque::new(); count],
            can_lovin_tick:      vec![Tick::ZERO; count],
            ordered_hookup_tick: vec![Tick::ZERO; count],
            hookup_candidates:   vec![Vec::new(); count],
            opinions:            FxHashMap::default(),
            trait_hooks,
        }
    }
}

// ── SocialWorld ───────────────────────────────────────────────────────────────

impl SocialWorld for AgentStore {
    fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    fn gender(&self, agent: AgentId) -> Gender {
        self.gender.get(agent.index()).copied().unwrap_or_default()
    }

    fn age_years(&self, agent: AgentId) -> f32 {
        self.age_years.get(agent.index()).copied().unwrap_or(0.0)
    }

    fn adult_min_age(&self, agent: AgentId) -> f32 {
        self.adult_min_age.get(agent.index()).copied().unwrap_or(DEFAULT_ADULT_MIN_AGE)
    }

    fn kind(&self, agent: AgentId) -> KindId {
        self.kind.get(agent.index()).copied().unwrap_or(KindId::INVALID)
    }

    fn traits(&self, agent: AgentId) -> Option<&TraitSet> {
        self.traits.get(agent.index()).and_then(Option::as_ref)
    }

    fn opinion_of(&self, agent: AgentId, other: AgentId) -> f32 {
        self.opinions.get(&(agent, other)).copied().unwrap_or(0.0)
    }

    fn relations(&self, agent: AgentId) -> &[Relation] {
        self.relations.get(agent.index()).map_or(&[], Vec::as_slice)
    }

    fn memories(&self, agent: AgentId) -> &[Memory] {
        self.memories.get(agent.index()).map_or(&[], Vec::as_slice)
    }

    fn location(&self, agent: AgentId) -> Option<MapId> {
        self.location.get(agent.index()).copied().flatten()
    }

    fn owned_bed(&self, agent: AgentId) -> Option<BedId> {
        self.owned_bed.get(agent.index()).copied().flatten()
    }

    fn bed_owners(&self, bed: BedId) -> Vec<AgentId> {
        self.agent_ids()
            .filter(|a| self.owned_bed[a.index()] == Some(bed))
            .collect()
    }

    fn free_colonists_at(&self, map: MapId) -> Vec<AgentId> {
        self.agent_ids()
            .filter(|a| {
                let s = &self.status[a.index()];
                self.location[a.index()] == Some(map) && s.spawned && s.colonist && !s.dead
            })
            .collect()
    }

    fn status(&self, agent: AgentId) -> AgentStatus {
        self.status.get(agent.index()).copied().unwrap_or_default()
    }

    fn current_activity(&self, agent: AgentId) -> ActivityKind {
        self.current_activity.get(agent.index()).copied().unwrap_or_default()
    }

    fn can_lovin_tick(&self, agent: AgentId) -> Tick {
        self.can_lovin_tick.get(agent.index()).copied().unwrap_or(Tick::ZERO)
    }

    fn ordered_hookup_tick(&self, agent: AgentId) -> Tick {
        self.ordered_hookup_tick.get(agent.index()).copied().unwrap_or(Tick::ZERO)
    }

    fn willing_to_do(&self, agent: AgentId, event: BeliefEvent) -> bool {
        self.beliefs
            .get(agent.index())
            .is_none_or(|b| b.willing_to_do(event))
    }

    fn hookup_candidates(&self, agent: AgentId) -> &[AgentId] {
        self.hookup_candidates.get(agent.index()).map_or(&[], Vec::as_slice)
    }
}

// ── SocialWorldMut ────────────────────────────────────────────────────────────

impl SocialWorldMut for AgentStore {
    fn gain_trait(&mut self, agent: AgentId, t: Trait) -> RomanceResult<bool> {
        let i = self.check(agent)?;
        let traits = self.traits[i].get_or_insert_with(TraitSet::new);

        let remembered: Vec<Option<Trait>> = self
            .trait_hooks
            .iter()
            .map(|h| h.before_gain(agent, traits, t))
            .collect();

        let added = traits.insert(t);

        for (hook, memo) in self.trait_hooks.iter().zip(remembered) {
            hook.after_gain(agent, traits, t, memo);
        }
        trace!(%agent, trait_ = %t, added, "trait gained");
        Ok(added)
    }

    fn remove_trait(&mut self, agent: AgentId, t: Trait) -> RomanceResult<bool> {
        let i = self.check(agent)?;
        Ok(self.traits[i].as_mut().is_some_and(|ts| ts.remove(t)))
    }

    fn gain_memory(&mut self, agent: AgentId, memory: Memory) -> RomanceResult<()> {
        let i = self.check(agent)?;
        self.memories[i].push(memory);
        Ok(())
    }

    fn add_relation(&mut self, a: AgentId, kind: RelationKind, b: AgentId) -> RomanceResult<()> {
        let ia = self.check(a)?;
        let ib = self.check(b)?;
        let forward = Relation { kind, other: b };
        if !self.relations[ia].contains(&forward) {
            self.relations[ia].push(forward);
        }
        let back = Relation { kind: kind.reciprocal(), other: a };
        if !self.relations[ib].contains(&back) {
            self.relations[ib].push(back);
        }
        Ok(())
    }

    fn set_can_lovin_tick(&mut self, agent: AgentId, tick: Tick) -> RomanceResult<()> {
        let i = self.check(agent)?;
        self.can_lovin_tick[i] = tick;
        Ok(())
    }

    fn set_ordered_hookup_tick(&mut self, agent: AgentId, tick: Tick) -> RomanceResult<()> {
        let i = self.check(agent)?;
        self.ordered_hookup_tick[i] = tick;
        Ok(())
    }

    fn set_hookup_candidates(&mut self, agent: AgentId, candidates: Vec<AgentId>) -> RomanceResult<()> {
        let i = self.check(agent)?;
        self.hookup_candidates[i] = candidates;
        Ok(())
    }

    fn remove_hookup_candidate(&mut self, agent: AgentId, other: AgentId) -> RomanceResult<bool> {
        let i = self.check(agent)?;
        let list = &mut self.hookup_candidates[i];
        let before = list.len();
        list.retain(|&c| c != other);
        Ok(list.len() != before)
    }

    fn enqueue_first(&mut self, agent: AgentId, activity: QueuedActivity) -> RomanceResult<()> {
        let i = self.check(agent)?;
        self.queue[i].push_front(activity);
        Ok(())
    }

    fn end_current_activity(&mut self, agent: AgentId) -> RomanceResult<()> {
        let i = self.check(agent)?;
        self.current_activity[i] = match self.queue[i].pop_front() {
            Some(next) => next.kind,
            None => ActivityKind::Idle,
        };
        Ok(())
    }
}
