//! `DecisionHook`: replace or augment a decision the host already made.
//!
//! The host computes its own answer at one of its decision points (which
//! job to give, which buttons to show) and passes it through the hook.
//! Returning `Some` replaces the host's answer; returning `None` keeps it.
//!
//! Hooks are composable: chain them with `.then()` so that each one sees the
//! answer left by the previous one.

use romance_agent::QueuedActivity;
use romance_core::{AgentId, is_asexual};
use romance_rules::RomanceContext;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Hook called with the host's `planned` decision of type `D` for `agent`.
///
/// # Contract
///
/// - Reads the world only through `ctx`; never mutates it.
/// - Must be deterministic for the same world state.
/// - Implementations must be `Send + Sync` so one instance can be shared by
///   every call site.
pub trait DecisionHook<D>: Send + Sync {
    /// Optionally replace `planned`.
    fn modify(&self, ctx: &RomanceContext<'_>, agent: AgentId, planned: &D) -> Option<D>;

    /// The final decision: the replacement if there is one, else `planned`.
    fn decide(&self, ctx: &RomanceContext<'_>, agent: AgentId, planned: D) -> D {
        self.modify(ctx, agent, &planned).unwrap_or(planned)
    }
}

// ── No-op ─────────────────────────────────────────────────────────────────────

/// Leaves every decision to the host.
pub struct KeepHostDecision;

impl<D> DecisionHook<D> for KeepHostDecision {
    #[inline]
    fn modify(&self, _ctx: &RomanceContext<'_>, _agent: AgentId, _planned: &D) -> Option<D> {
        None
    }
}

// ── Chained hook ──────────────────────────────────────────────────────────────

/// Applies two hooks in sequence.
///
/// The second hook sees the (possibly replaced) output of the first.
/// Construct chains with `hook_a.then(hook_b)`.
pub struct ChainedHook<A, B> {
    first:  A,
    second: B,
}

impl<D, A: DecisionHook<D>, B: DecisionHook<D>> DecisionHook<D> for ChainedHook<A, B> {
    fn modify(&self, ctx: &RomanceContext<'_>, agent: AgentId, planned: &D) -> Option<D> {
        let after_first = self.first.modify(ctx, agent, planned);
        let candidate = after_first.as_ref().unwrap_or(planned);
        self.second.modify(ctx, agent, candidate).or(after_first)
    }
}

/// Extension trait that adds `.then(other)` to any `DecisionHook`.
pub trait DecisionHookExt<D>: DecisionHook<D> + Sized {
    fn then<B: DecisionHook<D>>(self, other: B) -> ChainedHook<Self, B> {
        ChainedHook { first: self, second: other }
    }
}

impl<D, H: DecisionHook<D>> DecisionHookExt<D> for H {}

// ── Lovin in bed ──────────────────────────────────────────────────────────────

/// Asexual agents never start lovin with a partner they share a bed with.
/// Wraps the host's "give lovin job" decision.
pub struct AsexualLovinBlock;

impl DecisionHook<Option<QueuedActivity>> for AsexualLovinBlock {
    fn modify(
        &self,
        ctx:      &RomanceContext<'_>,
        agent:    AgentId,
        planned:  &Option<QueuedActivity>,
    ) -> Option<Option<QueuedActivity>> {
        (planned.is_some() && is_asexual(ctx.world.traits(agent))).then_some(None)
    }
}
