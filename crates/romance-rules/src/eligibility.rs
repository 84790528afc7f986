//! Availability and pairing predicates.

use std::fmt;

use romance_agent::{ActivityKind, BeliefEvent};
use romance_core::{AgentId, HookupTrigger, Orientation, is_asexual, orientation_of, ticks_to_period};

use crate::age::{fertility_factor, min_age_for_sex};
use crate::appeal::romance_chance_factor;
use crate::orientation::asexual_rating;
use crate::relations::{are_family, share_a_bed};
use crate::RomanceContext;

/// Activities an agent is never pulled out of.
pub const DONT_INTERRUPT: &[ActivityKind] = &[
    // Incapacitated
    ActivityKind::WaitDowned,
    ActivityKind::Vomit,
    ActivityKind::Deathrest,
    ActivityKind::ExtinguishSelf,
    ActivityKind::Flee,
    ActivityKind::FleeAndCower,
    // Ceremonies
    ActivityKind::MarryAdjacent,
    ActivityKind::SpectateCeremony,
    ActivityKind::GiveSpeech,
    ActivityKind::BestowingCeremony,
    ActivityKind::PrepareSkylantern,
    ActivityKind::PrisonerExecution,
    ActivityKind::Sacrifice,
    ActivityKind::Scarify,
    ActivityKind::Blind,
    // Emergency work
    ActivityKind::BeatFire,
    ActivityKind::Arrest,
    ActivityKind::Capture,
    ActivityKind::EscortPrisonerToBed,
    ActivityKind::Rescue,
    ActivityKind::CarryToBiosculpterPod,
    ActivityKind::BringBabyToSafety,
    // Medical work
    ActivityKind::TakeToBedToOperate,
    ActivityKind::TakeWoundedPrisonerToBed,
    ActivityKind::TendPatient,
    ActivityKind::FeedPatient,
    // Romance
    ActivityKind::CasualLovin,
    ActivityKind::Lovin,
    ActivityKind::LeadHookup,
    ActivityKind::DateLead,
    ActivityKind::DateFollow,
    ActivityKind::HangoutLead,
    ActivityKind::HangoutFollow,
    ActivityKind::TryRomance,
    // Player-ordered
    ActivityKind::LayDown,
    ActivityKind::ReleasePrisoner,
    ActivityKind::UseCommsConsole,
    ActivityKind::EnterTransporter,
    ActivityKind::EnterCryptosleepCasket,
    ActivityKind::EnterBiosculpterPod,
    ActivityKind::TradeWithAgent,
    ActivityKind::ApplyTechprint,
    ActivityKind::SocialFight,
    ActivityKind::Breastfeed,
];

// ── AcceptanceReport ──────────────────────────────────────────────────────────

/// Yes/no answer with an optional human-readable reason for a "no".
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AcceptanceReport {
    pub accepted: bool,
    pub reason:   Option<String>,
}

impl AcceptanceReport {
    pub fn accept() -> Self {
        Self { accepted: true, reason: None }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self { accepted: false, reason: Some(reason.into()) }
    }

    /// A "no" that should not be shown to the player.
    pub fn reject_silently() -> Self {
        Self { accepted: false, reason: None }
    }
}

impl fmt::Display for AcceptanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.accepted, &self.reason) {
            (true, _)           => f.write_str("accepted"),
            (false, Some(why))  => write!(f, "rejected: {why}"),
            (false, None)       => f.write_str("rejected"),
        }
    }
}

// ── Availability ──────────────────────────────────────────────────────────────

/// Whether `agent` can be pulled into a social activity right now.
pub fn is_free(ctx: &RomanceContext<'_>, agent: AgentId) -> bool {
    let s = ctx.world.status(agent);
    if s.soon_basic_need || s.enemies_nearby || s.drafted || s.in_labor || s.in_mental_state {
        return false;
    }
    !DONT_INTERRUPT.contains(&ctx.world.current_activity(agent))
}

/// Whether `agent` would take part in a hookup at all.
pub fn will_consider_hookup(ctx: &RomanceContext<'_>, agent: AgentId) -> bool {
    let world = ctx.world;
    if is_asexual(world.traits(agent)) && asexual_rating(agent) < ctx.settings.sex_aversion_threshold {
        return false;
    }
    if !ctx.kind_settings(agent).casual.will_do_hookup {
        return false;
    }
    if !world.willing_to_do(agent, BeliefEvent::SharedBed) {
        return false;
    }
    ctx.tick >= world.can_lovin_tick(agent)
}

/// Structural pairing check.  Both exclusions apply to hookups only.
pub fn can_share_activity(ctx: &RomanceContext<'_>, a: AgentId, b: AgentId, for_hookup: bool) -> bool {
    if !for_hookup {
        return true;
    }
    if share_a_bed(ctx.world, a, b) {
        return false;
    }
    ctx.world.status(a).slave == ctx.world.status(b).slave
}

/// `true` while `agent` may not start another ordered hookup.
pub fn is_ordered_hookup_on_cooldown(ctx: &RomanceContext<'_>, agent: AgentId) -> bool {
    ctx.tick < ctx.world.ordered_hookup_tick(agent)
}

// ── Triggers ──────────────────────────────────────────────────────────────────

/// Check one trigger block.  `other` is the prospective partner, used by the
/// opinion condition; without one, that condition is skipped.
pub fn check_trigger(
    ctx:     &RomanceContext<'_>,
    agent:   AgentId,
    trigger: &HookupTrigger,
    other:   Option<AgentId>,
) -> AcceptanceReport {
    if let (Some(min), Some(other)) = (trigger.min_opinion, other) {
        if ctx.world.opinion_of(agent, other) < min {
            return AcceptanceReport::reject(format!("opinion below {min}"));
        }
    }
    if let Some(t) = trigger.has_trait {
        if !ctx.world.has_trait(agent, t) {
            return AcceptanceReport::reject(format!("lacks {}", t.label()));
        }
    }
    if trigger.must_be_fertile && fertility_factor(ctx, agent) <= 0.0 {
        return AcceptanceReport::reject("not fertile");
    }
    AcceptanceReport::accept()
}

/// Chance in `[0, 1]` that `agent` goes looking for a spontaneous hookup
/// when the opportunity arises.
pub fn spontaneous_hookup_chance(ctx: &RomanceContext<'_>, agent: AgentId) -> f32 {
    if !will_consider_hookup(ctx, agent) {
        return 0.0;
    }
    let kind = ctx.kind_settings(agent);
    if let Some(trigger) = &kind.casual.hookup_triggers {
        if !check_trigger(ctx, agent, trigger, None).accepted {
            return 0.0;
        }
    }
    (ctx.settings.hookup_rate(ctx.world.kind(agent)) / 100.0).clamp(0.0, 1.0)
}

// ── Ordered hookups ───────────────────────────────────────────────────────────

/// Can `agent` take part in an ordered hookup, as `initiator` or as target?
pub fn hookup_eligible(ctx: &RomanceContext<'_>, agent: AgentId, initiator: bool) -> AcceptanceReport {
    let world = ctx.world;
    let status = world.status(agent);
    if status.dead || !status.flesh {
        return AcceptanceReport::reject_silently();
    }
    if world.age_years(agent) < min_age_for_sex(ctx, agent) {
        return AcceptanceReport::reject("too young");
    }
    let kind = ctx.kind_settings(agent);
    if !kind.casual.will_do_hookup {
        return AcceptanceReport::reject(format!("{} do not hook up", display_kind(&kind.name)));
    }
    if initiator && is_ordered_hookup_on_cooldown(ctx, agent) {
        let left = ctx.tick.until(world.ordered_hookup_tick(agent));
        return AcceptanceReport::reject(format!("on cooldown for {}", ticks_to_period(left)));
    }
    if is_asexual(world.traits(agent)) && asexual_rating(agent) < ctx.settings.sex_aversion_threshold {
        return AcceptanceReport::reject("sex-averse");
    }
    if !world.willing_to_do(agent, BeliefEvent::SharedBed) {
        return AcceptanceReport::reject("beliefs forbid it");
    }
    if initiator && orientation_of(world.traits(agent)) == Orientation::None && !is_asexual(world.traits(agent)) {
        return AcceptanceReport::reject("no orientation");
    }
    if let Some(trigger) = &kind.casual.ordered_hookup_triggers {
        let report = check_trigger(ctx, agent, trigger, None);
        if !report.accepted {
            return report;
        }
    }
    AcceptanceReport::accept()
}

/// Can `initiator` order a hookup with `target`?
pub fn hookup_eligible_pair(ctx: &RomanceContext<'_>, initiator: AgentId, target: AgentId) -> AcceptanceReport {
    if initiator == target {
        return AcceptanceReport::reject_silently();
    }
    let own = hookup_eligible(ctx, initiator, true);
    if !own.accepted {
        return own;
    }
    let theirs = hookup_eligible(ctx, target, false);
    if !theirs.accepted {
        return match theirs.reason {
            Some(why) => AcceptanceReport::reject(format!("target {why}")),
            None => theirs,
        };
    }
    let world = ctx.world;
    if are_family(world, initiator, target) {
        return AcceptanceReport::reject("family");
    }
    if share_a_bed(world, initiator, target) {
        return AcceptanceReport::reject("already share a bed");
    }
    if world.status(initiator).slave != world.status(target).slave {
        return AcceptanceReport::reject("slave status differs");
    }
    if romance_chance_factor(ctx, initiator, target) <= 0.0 {
        return AcceptanceReport::reject("not attracted");
    }
    let min = ctx.settings.min_opinion_for_ordered_hookup(world.kind(target));
    if world.opinion_of(target, initiator) < min {
        return AcceptanceReport::reject("target's opinion too low");
    }
    if let Some(trigger) = &ctx.kind_settings(target).casual.ordered_hookup_triggers {
        let report = check_trigger(ctx, target, trigger, Some(initiator));
        if !report.accepted {
            return report;
        }
    }
    AcceptanceReport::accept()
}

fn display_kind(name: &str) -> &str {
    if name.is_empty() { "this kind" } else { name }
}
