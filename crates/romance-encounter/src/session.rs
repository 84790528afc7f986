//! One hookup attempt and its phase.

use std::fmt;

use romance_core::{AgentId, BedId, Tick};

/// How a resolved attempt ended.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Outcome {
    Success,
    Failure,
    /// Abandoned before the target answered.
    Interrupted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Success     => "success",
            Outcome::Failure     => "failure",
            Outcome::Interrupted => "interrupted",
        })
    }
}

/// ```text
/// Idle ─▶ Approaching ─▶ AwaitingResponse ─▶ Resolved(Success | Failure)
///              │                 │
///              └────────┬────────┘
///                       ▼
///             Resolved(Interrupted)
/// ```
///
/// A session that starts against a busy target never leaves `Idle`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EncounterPhase {
    Idle,
    Approaching,
    AwaitingResponse,
    Resolved(Outcome),
}

impl EncounterPhase {
    #[inline]
    pub fn is_resolved(self) -> bool {
        matches!(self, EncounterPhase::Resolved(_))
    }
}

/// State owned by the engine for the duration of one attempt.
#[derive(Clone, Debug)]
pub struct HookupSession {
    pub initiator: AgentId,
    pub target:    AgentId,
    /// Bed the follow-up lovin happens in, if any.
    pub bed:       Option<BedId>,
    pub started:   Tick,

    phase:           EncounterPhase,
    successful_pass: bool,
    resolved_at:     Option<Tick>,
}

impl HookupSession {
    pub(crate) fn new(initiator: AgentId, target: AgentId, bed: Option<BedId>, started: Tick) -> Self {
        Self {
            initiator,
            target,
            bed,
            started,
            phase:           EncounterPhase::Idle,
            successful_pass: true,
            resolved_at:     None,
        }
    }

    #[inline]
    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    /// Whether the target accepted.  `true` until the response is resolved,
    /// then the actual answer; read it at the moment of use.
    #[inline]
    pub fn was_successful_pass(&self) -> bool {
        self.successful_pass
    }

    /// Fail condition for the await-response step.  Queries current state
    /// on every call.
    #[inline]
    pub fn should_fail(&self) -> bool {
        !self.was_successful_pass()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            EncounterPhase::Resolved(o) => Some(o),
            _ => None,
        }
    }

    pub fn resolved_at(&self) -> Option<Tick> {
        self.resolved_at
    }

    pub(crate) fn advance(&mut self, phase: EncounterPhase) {
        self.phase = phase;
    }

    pub(crate) fn finish(&mut self, outcome: Outcome, tick: Tick) {
        if outcome == Outcome::Failure {
            self.successful_pass = false;
        }
        self.phase = EncounterPhase::Resolved(outcome);
        self.resolved_at = Some(tick);
    }
}
