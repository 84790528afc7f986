//! Read-only state passed to every rule.

use romance_agent::SocialWorld;
use romance_core::{AgentId, KindSettings, RomanceSettings, Tick};

/// A read-only view of the world at one tick, plus the session settings.
///
/// Built by the caller whenever a decision is needed.  Every rule reads the
/// social graph through `world` at call time; nothing is cached between
/// calls, so a hook that mutated the graph since the last call is always seen.
pub struct RomanceContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Settings loaded at session start.  Never mutated during a session.
    pub settings: &'a RomanceSettings,

    /// The host's agents and social graph.
    pub world: &'a dyn SocialWorld,
}

impl<'a> RomanceContext<'a> {
    #[inline]
    pub fn new(tick: Tick, settings: &'a RomanceSettings, world: &'a dyn SocialWorld) -> Self {
        Self { tick, settings, world }
    }

    /// Per-kind settings block for `agent`.
    #[inline]
    pub fn kind_settings(&self, agent: AgentId) -> &'a KindSettings {
        self.settings.kind(self.world.kind(agent))
    }

    /// Whether `agent`'s kind is configured to care about fidelity.
    pub fn cares_about_cheating(&self, agent: AgentId) -> bool {
        self.kind_settings(agent).casual.cares_about_cheating
    }
}
