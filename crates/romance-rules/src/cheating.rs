//! Infidelity detection and the decision to go ahead anyway.

use romance_agent::BeliefEvent;
use romance_core::{AgentId, AgentRng, Trait, inverse_lerp};
use tracing::debug;

use crate::relations::{love_partners, love_relation_exists};
use crate::RomanceContext;

/// Result of [`evaluate_fidelity`].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FidelityReport {
    /// `agent` considers the act cheating.
    pub is_cheating:        bool,
    /// Partners who would feel cheated on, whatever `agent` thinks.
    pub objecting_partners: Vec<AgentId>,
}

/// Would intimacy between `agent` and `target` be cheating?
///
/// Never cheating with an existing partner.  Each current partner judges by
/// their own beliefs whether `agent` taking one more partner is acceptable;
/// those who object and care about fidelity are listed.  `agent` counts it
/// as cheating when their own beliefs reject it and they care about fidelity.
pub fn evaluate_fidelity(ctx: &RomanceContext<'_>, agent: AgentId, target: Option<AgentId>) -> FidelityReport {
    if target.is_some_and(|t| love_relation_exists(ctx, agent, t)) {
        return FidelityReport::default();
    }
    let partners = love_partners(ctx, agent, false, false);
    let event = BeliefEvent::TakeAdditionalPartner { new_count: partners.len() + 1 };

    let objecting_partners = partners
        .into_iter()
        .filter(|&p| !ctx.world.willing_to_do(p, event) && ctx.cares_about_cheating(p))
        .collect();
    let is_cheating = !ctx.world.willing_to_do(agent, event) && ctx.cares_about_cheating(agent);

    FidelityReport { is_cheating, objecting_partners }
}

/// Result of [`resolve_continuation`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Continuation {
    pub proceeds:      bool,
    /// The objecting partner `agent` would feel worst about betraying.
    pub worst_partner: Option<AgentId>,
}

impl Continuation {
    fn go() -> Self {
        Self { proceeds: true, worst_partner: None }
    }

    fn refuse(worst_partner: Option<AgentId>) -> Self {
        Self { proceeds: false, worst_partner }
    }
}

/// How much `agent` minds betraying `partner`, as a proceed threshold in
/// `[0, 1]`.  Philanderers mind less, and less still when the partner is
/// on another map.
pub fn betrayal_factor(ctx: &RomanceContext<'_>, agent: AgentId, partner: AgentId) -> f32 {
    let opinion = ctx.world.opinion_of(agent, partner);
    if ctx.world.has_trait(agent, Trait::Philanderer) {
        if ctx.world.location(agent) == ctx.world.location(partner) {
            inverse_lerp(70.0, 15.0, opinion)
        } else {
            inverse_lerp(100.0, 50.0, opinion)
        }
    } else {
        inverse_lerp(30.0, -80.0, opinion)
    }
}

/// Does `agent` go ahead with `target`?
///
/// Proceeds unless the act is cheating with at least one objecting partner.
/// Then a faithful agent, or a cheat chance of zero, always refuses.
/// Otherwise the partner with the lowest [`betrayal_factor`] is picked and a
/// uniform draw scaled by the cheat chance must land below that factor.
pub fn resolve_continuation(
    ctx:    &RomanceContext<'_>,
    agent:  AgentId,
    target: AgentId,
    rng:    &mut AgentRng,
) -> Continuation {
    let report = evaluate_fidelity(ctx, agent, Some(target));
    if !report.is_cheating || report.objecting_partners.is_empty() {
        return Continuation::go();
    }
    if ctx.world.has_trait(agent, Trait::Faithful) || ctx.settings.cheat_chance <= 0.0 {
        return Continuation::refuse(None);
    }

    let mut worst = None;
    let mut lowest = f32::INFINITY;
    for &p in &report.objecting_partners {
        let factor = betrayal_factor(ctx, agent, p);
        if factor < lowest {
            lowest = factor;
            worst = Some(p);
        }
    }

    let roll = rng.random::<f32>() * (ctx.settings.cheat_chance / 100.0);
    let proceeds = roll < lowest;
    debug!(%agent, %target, worst = ?worst, factor = lowest, roll, proceeds, "cheating resolved");
    Continuation { proceeds, worst_partner: worst }
}
