//! The host collaborator contract.
//!
//! The decision engine never owns agents.  It reads the host's social graph
//! through [`SocialWorld`] and writes side effects through [`SocialWorldMut`].
//! [`AgentStore`](crate::AgentStore) is the in-memory implementation used by
//! tests and headless runs; a game adapter implements the same traits over
//! its own data.
//!
//! Reads on unknown agents return neutral values (empty slices, `None`,
//! opinion 0) rather than failing.  Writes on unknown agents return
//! [`RomanceError::AgentNotFound`].

use romance_core::{AgentId, BedId, Gender, KindId, MapId, RomanceResult, Tick, Trait, TraitSet};

use crate::activity::{ActivityKind, QueuedActivity};
use crate::relation::{Memory, Relation, RelationKind};

// ── Status & beliefs ──────────────────────────────────────────────────────────

/// Host-derived condition flags for one agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AgentStatus {
    pub dead:            bool,
    pub downed:          bool,
    pub awake:           bool,
    pub spawned:         bool,
    /// Under direct player control.
    pub drafted:         bool,
    pub slave:           bool,
    pub colonist:        bool,
    pub flesh:           bool,
    pub in_mental_state: bool,
    pub in_labor:        bool,
    /// Some basic need (food, rest) is about to become critical.
    pub soon_basic_need: bool,
    pub enemies_nearby:  bool,
}

impl Default for AgentStatus {
    fn default() -> Self {
        Self {
            dead:            false,
            downed:          false,
            awake:           true,
            spawned:         true,
            drafted:         false,
            slave:           false,
            colonist:        true,
            flesh:           true,
            in_mental_state: false,
            in_labor:        false,
            soon_basic_need: false,
            enemies_nearby:  false,
        }
    }
}

impl AgentStatus {
    /// Dead or downed.
    pub fn incapacitated(&self) -> bool {
        self.dead || self.downed
    }
}

/// Acts an agent's belief system may accept or reject.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BeliefEvent {
    /// Intimacy with someone who is not a spouse.
    NonSpouseLovin,
    /// Sharing a bed outside a committed relationship.
    SharedBed,
    /// Holding `new_count` romantic partners at once.
    TakeAdditionalPartner { new_count: usize },
}

/// Per-agent belief system, as far as the engine needs to know it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Beliefs {
    pub non_spouse_lovin: bool,
    pub shared_bed:       bool,
    /// `None` means no limit.
    pub max_partners:     Option<usize>,
}

impl Default for Beliefs {
    fn default() -> Self {
        Self { non_spouse_lovin: true, shared_bed: true, max_partners: Some(1) }
    }
}

impl Beliefs {
    pub fn willing_to_do(&self, event: BeliefEvent) -> bool {
        match event {
            BeliefEvent::NonSpouseLovin => self.non_spouse_lovin,
            BeliefEvent::SharedBed      => self.shared_bed,
            BeliefEvent::TakeAdditionalPartner { new_count } => {
                self.max_partners.is_none_or(|max| new_count <= max)
            }
        }
    }
}

// ── Traits ────────────────────────────────────────────────────────────────────

/// Read access to the host's agents and social graph.
pub trait SocialWorld {
    fn contains(&self, agent: AgentId) -> bool;

    fn gender(&self, agent: AgentId) -> Gender;

    /// Biological age in years.
    fn age_years(&self, agent: AgentId) -> f32;

    /// Age at which the host's life stages treat `agent` as an adult.
    fn adult_min_age(&self, agent: AgentId) -> f32;

    /// Creature kind, used to look up per-kind settings.
    fn kind(&self, agent: AgentId) -> KindId;

    /// `None` when the agent has no trait component at all.
    fn traits(&self, agent: AgentId) -> Option<&TraitSet>;

    /// `agent`'s opinion of `other` in `[-100, 100]`.
    fn opinion_of(&self, agent: AgentId, other: AgentId) -> f32;

    /// Outgoing relationship edges of `agent`.
    fn relations(&self, agent: AgentId) -> &[Relation];

    fn memories(&self, agent: AgentId) -> &[Memory];

    /// Map the agent is spawned on, if any.
    fn location(&self, agent: AgentId) -> Option<MapId>;

    fn owned_bed(&self, agent: AgentId) -> Option<BedId>;

    fn bed_owners(&self, bed: BedId) -> Vec<AgentId>;

    /// Spawned, living colonists on `map`, in ascending id order.
    fn free_colonists_at(&self, map: MapId) -> Vec<AgentId>;

    fn status(&self, agent: AgentId) -> AgentStatus;

    fn current_activity(&self, agent: AgentId) -> ActivityKind;

    /// Earliest tick at which `agent` may take part in lovin again.
    fn can_lovin_tick(&self, agent: AgentId) -> Tick;

    /// Earliest tick at which `agent` may be approached for an ordered hookup.
    fn ordered_hookup_tick(&self, agent: AgentId) -> Tick;

    /// Whether `agent`'s belief system tolerates `event`.
    fn willing_to_do(&self, agent: AgentId, event: BeliefEvent) -> bool;

    /// Standing list of people `agent` intends to ask for a hookup.
    fn hookup_candidates(&self, agent: AgentId) -> &[AgentId];

    fn has_trait(&self, agent: AgentId, t: Trait) -> bool {
        self.traits(agent).is_some_and(|ts| ts.has(t))
    }
}

/// Side effects the engine applies to the host.
pub trait SocialWorldMut: SocialWorld {
    /// Grant `t`, running every registered trait-gain hook around the grant.
    /// Returns `false` if the agent already had it.
    fn gain_trait(&mut self, agent: AgentId, t: Trait) -> RomanceResult<bool>;

    fn remove_trait(&mut self, agent: AgentId, t: Trait) -> RomanceResult<bool>;

    fn gain_memory(&mut self, agent: AgentId, memory: Memory) -> RomanceResult<()>;

    /// Add `a -kind-> b` and the reciprocal edge `b -> a`.
    fn add_relation(&mut self, a: AgentId, kind: RelationKind, b: AgentId) -> RomanceResult<()>;

    fn set_can_lovin_tick(&mut self, agent: AgentId, tick: Tick) -> RomanceResult<()>;

    fn set_ordered_hookup_tick(&mut self, agent: AgentId, tick: Tick) -> RomanceResult<()>;

    fn set_hookup_candidates(&mut self, agent: AgentId, candidates: Vec<AgentId>) -> RomanceResult<()>;

    /// Returns `true` if `other` was on the list.
    fn remove_hookup_candidate(&mut self, agent: AgentId, other: AgentId) -> RomanceResult<bool>;

    /// Put `activity` at the front of `agent`'s queue.
    fn enqueue_first(&mut self, agent: AgentId, activity: QueuedActivity) -> RomanceResult<()>;

    /// Stop whatever `agent` is doing and start the next queued activity.
    fn end_current_activity(&mut self, agent: AgentId) -> RomanceResult<()>;
}
