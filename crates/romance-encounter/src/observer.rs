//! Encounter observer trait for play logs and data collection.

use std::fmt;

use romance_core::{AgentId, Tick};

use crate::{EncounterPhase, HookupSession, Outcome};

/// Callbacks invoked by [`EncounterEngine`][crate::EncounterEngine] as a
/// session moves through its phases.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: count refusals
///
/// ```rust
/// use romance_core::Tick;
/// use romance_encounter::{EncounterObserver, HookupSession, Outcome};
///
/// #[derive(Default)]
/// struct Refusals(usize);
///
/// impl EncounterObserver for Refusals {
///     fn on_resolved(&mut self, _session: &HookupSession, outcome: Outcome, _tick: Tick) {
///         if outcome == Outcome::Failure {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait EncounterObserver {
    /// Called on every phase transition, including into `Resolved`.
    fn on_phase_change(&mut self, _session: &HookupSession, _from: EncounterPhase, _to: EncounterPhase) {}

    /// Called once when the session resolves, after its side effects were
    /// applied to the world.
    fn on_resolved(&mut self, _session: &HookupSession, _outcome: Outcome, _tick: Tick) {}
}

/// An [`EncounterObserver`] that does nothing.
pub struct NoopObserver;

impl EncounterObserver for NoopObserver {}

// ── Play log ──────────────────────────────────────────────────────────────────

/// One "tried hookup with" line.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PlayLogEntry {
    pub tick:      Tick,
    pub initiator: AgentId,
    pub target:    AgentId,
    pub outcome:   Outcome,
}

impl fmt::Display for PlayLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = match self.outcome {
            Outcome::Success     => "and succeeded",
            Outcome::Failure     => "and was rebuffed",
            Outcome::Interrupted => "but was interrupted",
        };
        write!(f, "[{}] {} tried hookup with {} {result}", self.tick, self.initiator, self.target)
    }
}

/// Records every resolved attempt as a [`PlayLogEntry`].
#[derive(Default, Debug)]
pub struct LogObserver {
    pub entries: Vec<PlayLogEntry>,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }
}

impl EncounterObserver for LogObserver {
    fn on_resolved(&mut self, session: &HookupSession, outcome: Outcome, tick: Tick) {
        self.entries.push(PlayLogEntry {
            tick,
            initiator: session.initiator,
            target: session.target,
            outcome,
        });
    }
}
