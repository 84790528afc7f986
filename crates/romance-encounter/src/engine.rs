//! The encounter engine: drives a [`HookupSession`] from first approach to
//! its effects on the world.

use romance_agent::{ActivityKind, Memory, MemoryKind, QueuedActivity, SocialWorld, SocialWorldMut};
use romance_core::{AgentId, AgentRng, BedId, RomanceError, RomanceSettings, Tick};
use romance_rules::{
    RomanceContext, find_candidates, is_free, resolve_continuation, score_acceptance,
    will_consider_hookup,
};
use tracing::debug;

use crate::{EncounterError, EncounterObserver, EncounterPhase, EncounterResult, HookupSession, Outcome};

/// Runs hookup attempts against a host world.
///
/// The engine owns no world state.  Walking, waiting and animation belong
/// to the host's task framework; the host calls [`arrive`](Self::arrive)
/// when the initiator reaches the target and may poll
/// [`target_reachable`](Self::target_reachable) while walking.  Every method
/// reads the world at call time.
///
/// # Example
///
/// ```rust
/// use romance_agent::AgentStoreBuilder;
/// use romance_core::{AgentId, RomanceSettings, Tick};
/// use romance_encounter::{EncounterEngine, EncounterPhase, NoopObserver};
///
/// let (mut store, mut rngs) = AgentStoreBuilder::new(2, 7).build();
/// let settings = RomanceSettings::default();
/// let engine = EncounterEngine::new(&settings);
///
/// let session = engine.attempt(
///     &mut store, Tick(0), AgentId(0), AgentId(1), rngs.get_mut(AgentId(0)), &mut NoopObserver,
/// )?;
/// assert!(session.phase().is_resolved());
/// # Ok::<(), romance_encounter::EncounterError>(())
/// ```
pub struct EncounterEngine<'s> {
    settings: &'s RomanceSettings,
}

impl<'s> EncounterEngine<'s> {
    pub fn new(settings: &'s RomanceSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &'s RomanceSettings {
        self.settings
    }

    fn context<'a>(&'a self, world: &'a dyn SocialWorld, tick: Tick) -> RomanceContext<'a> {
        RomanceContext::new(tick, self.settings, world)
    }

    // ── Target selection ──────────────────────────────────────────────────

    /// Rebuild `agent`'s standing hookup candidate list.  Returns its length.
    pub fn refresh_candidates<W: SocialWorldMut>(
        &self,
        world: &mut W,
        tick:  Tick,
        agent: AgentId,
    ) -> EncounterResult<usize> {
        let found = find_candidates(&self.context(&*world, tick), agent, true);
        let n = found.len();
        world.set_hookup_candidates(agent, found)?;
        debug!(%agent, candidates = n, "hookup candidates refreshed");
        Ok(n)
    }

    /// First standing candidate who is free, open to a hookup, and whom
    /// `agent` is willing to cheat with if it comes to that.
    pub fn pick_target(
        &self,
        world: &dyn SocialWorld,
        tick:  Tick,
        agent: AgentId,
        rng:   &mut AgentRng,
    ) -> Option<AgentId> {
        let ctx = self.context(world, tick);
        if !will_consider_hookup(&ctx, agent) {
            return None;
        }
        world.hookup_candidates(agent).iter().copied().find(|&p| {
            p != agent
                && is_free(&ctx, p)
                && will_consider_hookup(&ctx, p)
                && resolve_continuation(&ctx, agent, p, rng).proceeds
        })
    }

    // ── Phases ────────────────────────────────────────────────────────────

    /// Start an attempt.  The session moves to `Approaching` only if the
    /// target is free; otherwise it stays `Idle` and nothing else happens.
    pub fn begin<O: EncounterObserver + ?Sized>(
        &self,
        world:     &dyn SocialWorld,
        tick:      Tick,
        initiator: AgentId,
        target:    AgentId,
        observer:  &mut O,
    ) -> HookupSession {
        let bed = choose_bed(world, initiator, target);
        let mut session = HookupSession::new(initiator, target, bed, tick);
        if is_free(&self.context(world, tick), target) {
            transition(&mut session, EncounterPhase::Approaching, observer);
        } else {
            debug!(%initiator, %target, "target busy, attempt stays idle");
        }
        session
    }

    /// Whether the initiator can still get to the target: the target is
    /// alive, conscious, spawned and on the initiator's map.
    pub fn target_reachable(&self, world: &dyn SocialWorld, session: &HookupSession) -> bool {
        let status = world.status(session.target);
        world.contains(session.target)
            && !status.dead
            && !status.downed
            && status.spawned
            && world.location(session.target).is_some()
            && world.location(session.target) == world.location(session.initiator)
    }

    /// The initiator reached the target.  An unreachable target interrupts
    /// the attempt; a sleeping one keeps it `Approaching` until the next
    /// call.  Returns the phase after the call.
    pub fn arrive<O: EncounterObserver + ?Sized>(
        &self,
        world:    &dyn SocialWorld,
        tick:     Tick,
        session:  &mut HookupSession,
        observer: &mut O,
    ) -> EncounterResult<EncounterPhase> {
        expect_phase(session, EncounterPhase::Approaching, "arrive in")?;
        if !self.target_reachable(world, session) {
            finish(session, Outcome::Interrupted, tick, observer);
        } else if world.status(session.target).awake {
            transition(session, EncounterPhase::AwaitingResponse, observer);
        }
        Ok(session.phase())
    }

    /// Abandon an attempt that has not been answered yet.  No world state
    /// is touched.
    pub fn interrupt<O: EncounterObserver + ?Sized>(
        &self,
        tick:     Tick,
        session:  &mut HookupSession,
        observer: &mut O,
    ) -> EncounterResult<()> {
        match session.phase() {
            EncounterPhase::Approaching | EncounterPhase::AwaitingResponse => {
                finish(session, Outcome::Interrupted, tick, observer);
                Ok(())
            }
            phase => Err(EncounterError::WrongPhase { action: "interrupt", phase }),
        }
    }

    /// Roll the target's answer and apply its effects.
    ///
    /// A dead or downed target always refuses.  Otherwise the target must
    /// still be free and open to hookups, and one trial is drawn with the
    /// acceptance score times the target's own fidelity factor (0 if they
    /// would not cheat on their partners for this).
    ///
    /// Success queues casual lovin for both, in the session's bed, and ends
    /// their current activities.  Failure drops the target from the
    /// initiator's candidates and leaves a memory with each.  Either way the
    /// initiator's ordered-hookup cooldown restarts.
    pub fn resolve<W: SocialWorldMut, O: EncounterObserver + ?Sized>(
        &self,
        world:    &mut W,
        tick:     Tick,
        session:  &mut HookupSession,
        rng:      &mut AgentRng,
        observer: &mut O,
    ) -> EncounterResult<Outcome> {
        expect_phase(session, EncounterPhase::AwaitingResponse, "resolve")?;
        // Writes below are per-agent; with both agents present none of them
        // can fail halfway.
        if let Some(missing) = [session.initiator, session.target].into_iter().find(|&a| !world.contains(a)) {
            return Err(RomanceError::AgentNotFound(missing).into());
        }
        let accepted = self.target_accepts(&*world, tick, session, rng);
        let (initiator, target) = (session.initiator, session.target);

        let outcome = if accepted {
            for (agent, partner, slot) in [(initiator, target, 0), (target, initiator, 1)] {
                world.enqueue_first(agent, QueuedActivity {
                    kind:    ActivityKind::CasualLovin,
                    partner: Some(partner),
                    bed:     session.bed,
                    slot,
                })?;
            }
            world.end_current_activity(target)?;
            world.end_current_activity(initiator)?;
            Outcome::Success
        } else {
            world.remove_hookup_candidate(initiator, target)?;
            world.gain_memory(initiator, Memory::about(MemoryKind::RebuffedMyHookupAttempt, target, tick))?;
            world.gain_memory(target, Memory::about(MemoryKind::FailedHookupAttemptOnMe, initiator, tick))?;
            Outcome::Failure
        };
        world.set_ordered_hookup_tick(initiator, tick.offset(self.settings.ordered_hookup_cooldown_ticks))?;

        debug!(%initiator, %target, %outcome, "hookup attempt resolved");
        finish(session, outcome, tick, observer);
        Ok(outcome)
    }

    fn target_accepts(
        &self,
        world:   &dyn SocialWorld,
        tick:    Tick,
        session: &HookupSession,
        rng:     &mut AgentRng,
    ) -> bool {
        let (initiator, target) = (session.initiator, session.target);
        let status = world.status(target);
        if status.dead || status.downed {
            return false;
        }
        let ctx = self.context(world, tick);
        if !is_free(&ctx, target) || !will_consider_hookup(&ctx, target) {
            return false;
        }
        let fidelity = if resolve_continuation(&ctx, target, initiator, rng).proceeds { 1.0 } else { 0.0 };
        let p = (score_acceptance(&ctx, target, initiator, true) * fidelity).clamp(0.0, 1.0);
        rng.gen_bool(f64::from(p))
    }

    /// Run a whole attempt in one call: begin, arrive and resolve.  Stops
    /// early when a phase cannot advance yet (busy or sleeping target).
    pub fn attempt<W: SocialWorldMut, O: EncounterObserver + ?Sized>(
        &self,
        world:     &mut W,
        tick:      Tick,
        initiator: AgentId,
        target:    AgentId,
        rng:       &mut AgentRng,
        observer:  &mut O,
    ) -> EncounterResult<HookupSession> {
        let mut session = self.begin(&*world, tick, initiator, target, observer);
        if session.phase() != EncounterPhase::Approaching {
            return Ok(session);
        }
        if self.arrive(&*world, tick, &mut session, observer)? == EncounterPhase::AwaitingResponse {
            self.resolve(world, tick, &mut session, rng, observer)?;
        }
        Ok(session)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The initiator's bed, else the target's.
pub fn choose_bed(world: &dyn SocialWorld, initiator: AgentId, target: AgentId) -> Option<BedId> {
    world.owned_bed(initiator).or_else(|| world.owned_bed(target))
}

fn expect_phase(session: &HookupSession, expected: EncounterPhase, action: &'static str) -> EncounterResult<()> {
    if session.phase() == expected {
        Ok(())
    } else {
        Err(EncounterError::WrongPhase { action, phase: session.phase() })
    }
}

fn transition<O: EncounterObserver + ?Sized>(session: &mut HookupSession, to: EncounterPhase, observer: &mut O) {
    let from = session.phase();
    session.advance(to);
    observer.on_phase_change(session, from, to);
}

fn finish<O: EncounterObserver + ?Sized>(session: &mut HookupSession, outcome: Outcome, tick: Tick, observer: &mut O) {
    let from = session.phase();
    session.finish(outcome, tick);
    observer.on_phase_change(session, from, session.phase());
    observer.on_resolved(session, outcome, tick);
}
