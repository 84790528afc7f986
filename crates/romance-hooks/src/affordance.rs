//! Social-card affordances: the "Try hookup" option next to "Try romance",
//! its option list, and the acceptance tooltip.

use std::cmp::Ordering;
use std::fmt::Write as _;

use romance_agent::SocialWorldMut;
use romance_core::{AgentId, Orientation, Tick, is_asexual, orientation_of, ticks_to_period};
use romance_rules::{
    AcceptanceReport, RomanceContext, acceptance_breakdown, hookup_eligible, hookup_eligible_pair,
    is_ordered_hookup_on_cooldown,
};

use crate::{DecisionHook, HookResult};
use crate::age_gate::old_enough_for_romance;

/// An action button on an agent's social card.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SocialAction {
    TryRomance,
    TryHookup,
}

/// Agents with no romantic orientation at all.
pub fn is_aromantic(ctx: &RomanceContext<'_>, agent: AgentId) -> bool {
    let traits = ctx.world.traits(agent);
    is_asexual(traits) && orientation_of(traits) == Orientation::None
}

/// Whether "Try hookup" is shown for `agent` at all.  Shown greyed out when
/// the agent is eligible in principle but cannot act right now.
pub fn can_draw_try_hookup(ctx: &RomanceContext<'_>, agent: AgentId) -> bool {
    let status = ctx.world.status(agent);
    status.colonist
        && status.spawned
        && !status.dead
        && ctx.kind_settings(agent).casual.will_do_hookup
        && old_enough_for_romance(ctx, agent)
}

// ── Hooks ─────────────────────────────────────────────────────────────────────

/// Adds [`SocialAction::TryHookup`] to the host's buttons.
pub struct TryHookupAffordance;

impl DecisionHook<Vec<SocialAction>> for TryHookupAffordance {
    fn modify(
        &self,
        ctx:     &RomanceContext<'_>,
        agent:   AgentId,
        planned: &Vec<SocialAction>,
    ) -> Option<Vec<SocialAction>> {
        if planned.contains(&SocialAction::TryHookup) || !can_draw_try_hookup(ctx, agent) {
            return None;
        }
        let mut actions = planned.clone();
        actions.push(SocialAction::TryHookup);
        Some(actions)
    }
}

/// Removes [`SocialAction::TryRomance`] for aromantic agents.
pub struct AromanticRomanceBlock;

impl DecisionHook<Vec<SocialAction>> for AromanticRomanceBlock {
    fn modify(
        &self,
        ctx:     &RomanceContext<'_>,
        agent:   AgentId,
        planned: &Vec<SocialAction>,
    ) -> Option<Vec<SocialAction>> {
        if !planned.contains(&SocialAction::TryRomance) || !is_aromantic(ctx, agent) {
            return None;
        }
        Some(planned.iter().copied().filter(|&a| a != SocialAction::TryRomance).collect())
    }
}

// ── Ordered hookup menu ───────────────────────────────────────────────────────

/// One row of the "Try hookup" menu.
#[derive(Clone, PartialEq, Debug)]
pub struct HookupOption {
    pub target: AgentId,
    /// Acceptance chance; 0 for ineligible rows.
    pub chance: f32,
    pub report: AcceptanceReport,
}

/// Everyone on `initiator`'s map, eligible targets first by descending
/// chance, then ineligible ones with a reason, by id.  Rows rejected
/// silently are left out.
pub fn hookup_options(ctx: &RomanceContext<'_>, initiator: AgentId) -> Vec<HookupOption> {
    let Some(map) = ctx.world.location(initiator) else {
        return Vec::new();
    };
    let (mut eligible, mut ineligible): (Vec<_>, Vec<_>) = ctx
        .world
        .free_colonists_at(map)
        .into_iter()
        .filter(|&p| p != initiator)
        .map(|target| {
            let report = hookup_eligible_pair(ctx, initiator, target);
            let chance = if report.accepted {
                acceptance_breakdown(ctx, target, initiator, true).total
            } else {
                0.0
            };
            HookupOption { target, chance, report }
        })
        .filter(|o| o.report.accepted || o.report.reason.is_some())
        .partition(|o| o.report.accepted);

    eligible.sort_by(|a, b| b.chance.partial_cmp(&a.chance).unwrap_or(Ordering::Equal));
    ineligible.sort_by_key(|o| o.target);
    eligible.extend(ineligible);
    eligible
}

/// Pressing "Try hookup": the menu to open, or the message explaining why
/// nothing opens.
pub fn press_try_hookup(ctx: &RomanceContext<'_>, initiator: AgentId) -> Result<Vec<HookupOption>, String> {
    if is_ordered_hookup_on_cooldown(ctx, initiator) {
        let left = ctx.tick.until(ctx.world.ordered_hookup_tick(initiator));
        return Err(format!("{initiator} can't try a hookup for another {}", ticks_to_period(left)));
    }
    let report = hookup_eligible(ctx, initiator, true);
    if !report.accepted {
        return Err(report.reason.unwrap_or_default());
    }
    let options = hookup_options(ctx, initiator);
    if options.is_empty() {
        return Err(format!("{initiator} has nobody to hook up with"));
    }
    Ok(options)
}

/// Pressing "Try romance": an aromantic agent gets a message instead.
pub fn press_try_romance(ctx: &RomanceContext<'_>, initiator: AgentId) -> Result<(), String> {
    if is_aromantic(ctx, initiator) {
        return Err(format!("{initiator} is aromantic and won't try romance"));
    }
    Ok(())
}

/// Hookup section of the social-card row tooltip for `target`, or `None`
/// when there is nothing to say.
pub fn hookup_tooltip(ctx: &RomanceContext<'_>, initiator: AgentId, target: AgentId) -> Option<String> {
    if !can_draw_try_hookup(ctx, initiator) {
        return None;
    }
    let report = hookup_eligible_pair(ctx, initiator, target);
    if !report.accepted {
        return report.reason.map(|why| format!("Hookup chance: can't ({why})\n"));
    }
    let breakdown = acceptance_breakdown(ctx, target, initiator, true);
    let mut text = String::new();
    let _ = writeln!(text, "Hookup chance: {:.0}%", breakdown.total * 100.0);
    let _ = write!(text, "{breakdown}");
    Some(text)
}

// ── Developer actions ─────────────────────────────────────────────────────────

/// A developer-mode control on an agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DevAction {
    ResetOrderedHookupCooldown,
}

impl DevAction {
    pub fn label(self) -> &'static str {
        match self {
            DevAction::ResetOrderedHookupCooldown => "DEV: Reset ordered hookup cooldown",
        }
    }
}

/// Offers [`DevAction::ResetOrderedHookupCooldown`] while developer controls
/// are shown and the agent is on cooldown.
pub struct CooldownResetAction {
    pub dev_mode: bool,
}

impl DecisionHook<Vec<DevAction>> for CooldownResetAction {
    fn modify(
        &self,
        ctx:     &RomanceContext<'_>,
        agent:   AgentId,
        planned: &Vec<DevAction>,
    ) -> Option<Vec<DevAction>> {
        let action = DevAction::ResetOrderedHookupCooldown;
        if !self.dev_mode || planned.contains(&action) || !is_ordered_hookup_on_cooldown(ctx, agent) {
            return None;
        }
        let mut actions = planned.clone();
        actions.push(action);
        Some(actions)
    }
}

/// Carry out `action` on `agent`.
pub fn apply_dev_action<W: SocialWorldMut>(world: &mut W, agent: AgentId, action: DevAction) -> HookResult<()> {
    match action {
        DevAction::ResetOrderedHookupCooldown => world.set_ordered_hookup_tick(agent, Tick::ZERO)?,
    }
    Ok(())
}
