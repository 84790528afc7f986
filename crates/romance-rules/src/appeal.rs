//! Appeal scoring: how attractive a partner is, who to ask, and how likely
//! they are to say yes.

use std::fmt;

use romance_agent::{BeliefEvent, MemoryKind, SocialWorld};
use romance_core::{AgentId, Gender, Orientation, inverse_lerp, is_asexual, lerp_double, orientation_of};

use crate::age::age_factor;
use crate::eligibility::can_share_activity;
use crate::orientation::asexual_rating;
use crate::relations::{are_family, are_former_partners, love_partners, love_relation_exists, share_a_bed};
use crate::RomanceContext;

/// Longest list [`find_candidates`] returns.
pub const MAX_CANDIDATES: usize = 5;

/// Starting threshold a hookup candidate's romance factor must beat.
pub const HOOKUP_FACTOR_THRESHOLD: f32 = 0.15;

/// Multiplier on the romance factor when target and asker are not partners.
pub const NON_PARTNER_FACTOR: f32 = 0.5;

/// Multiplier on the romance factor for an ex-spouse or ex-lover.
pub const FORMER_PARTNER_FACTOR: f32 = 0.5;

// ── Romance chance ────────────────────────────────────────────────────────────

/// Whether `a`'s orientation admits `b`'s gender.
pub fn orientation_factor(world: &dyn SocialWorld, a: AgentId, b: AgentId) -> f32 {
    let (ga, gb) = (world.gender(a), world.gender(b));
    let fits = match orientation_of(world.traits(a)) {
        Orientation::Bi     => true,
        Orientation::Homo   => ga == gb && ga != Gender::None,
        Orientation::Hetero => ga != Gender::None && ga.opposite() == gb,
        Orientation::None   => false,
    };
    if fits { 1.0 } else { 0.0 }
}

/// `a`'s attraction to `b` in `[0, 1]`.
///
/// Product of orientation fit, age suitability, relationship history
/// (family never, former partners reduced), `a`'s asexual rating if `a` is
/// asexual, and the alien love chance when the two are different kinds.
pub fn romance_chance_factor(ctx: &RomanceContext<'_>, a: AgentId, b: AgentId) -> f32 {
    let world = ctx.world;
    if a == b || !world.contains(a) || !world.contains(b) {
        return 0.0;
    }
    if are_family(world, a, b) {
        return 0.0;
    }
    let mut factor = orientation_factor(world, a, b) * age_factor(ctx, a, b);
    if factor <= 0.0 {
        return 0.0;
    }
    if are_former_partners(world, a, b) {
        factor *= FORMER_PARTNER_FACTOR;
    }
    if is_asexual(world.traits(a)) {
        factor *= asexual_rating(a);
    }
    let kind_a = world.kind(a);
    if kind_a != world.kind(b) {
        factor *= ctx.settings.alien_love_chance(kind_a) / 100.0;
    }
    factor.clamp(0.0, 1.0)
}

// ── Candidate search ──────────────────────────────────────────────────────────

fn rebuffed_by(world: &dyn SocialWorld, agent: AgentId, other: AgentId, kind: MemoryKind) -> bool {
    world
        .memories(agent)
        .iter()
        .any(|m| m.kind == kind && m.other == Some(other))
}

/// Up to [`MAX_CANDIDATES`] agents `agent` would like to ask, partners first.
///
/// Partners sharing `agent`'s bed are skipped for hookups; other partners
/// are always kept, whatever their slave status.  If `agent`'s
/// beliefs forbid non-spouse lovin, a hookup search stops after the
/// partners.  The rest of the list is filled greedily from free colonists on
/// the same map, best romance factor (hookups) or opinion (dates) first.
/// Hookup candidates who rebuffed `agent` before, or whom `agent` does not
/// like above the configured minimum, are skipped.
pub fn find_candidates(ctx: &RomanceContext<'_>, agent: AgentId, for_hookup: bool) -> Vec<AgentId> {
    let world = ctx.world;
    let mut result: Vec<AgentId> = love_partners(ctx, agent, false, true)
        .into_iter()
        .filter(|&p| p != agent && !(for_hookup && share_a_bed(world, agent, p)))
        .take(MAX_CANDIDATES)
        .collect();

    if for_hookup && !world.willing_to_do(agent, BeliefEvent::NonSpouseLovin) {
        return result;
    }
    let Some(map) = world.location(agent) else {
        return result;
    };

    let pool = world.free_colonists_at(map);
    let min_opinion = ctx.settings.min_opinion_for_hookup(world.kind(agent));
    let rebuff = if for_hookup {
        MemoryKind::RebuffedMyHookupAttempt
    } else {
        MemoryKind::RebuffedMyDateAttempt
    };

    while result.len() < MAX_CANDIDATES {
        let mut threshold = if for_hookup { HOOKUP_FACTOR_THRESHOLD } else { 0.0 };
        let mut best = None;
        for &p in &pool {
            if p == agent || result.contains(&p) || !can_share_activity(ctx, agent, p, for_hookup) {
                continue;
            }
            let factor = if for_hookup {
                romance_chance_factor(ctx, agent, p)
            } else {
                world.opinion_of(agent, p)
            };
            if factor <= threshold {
                continue;
            }
            if for_hookup
                && (rebuffed_by(world, agent, p, rebuff) || world.opinion_of(agent, p) <= min_opinion)
            {
                continue;
            }
            threshold = factor;
            best = Some(p);
        }
        match best {
            Some(p) => result.push(p),
            None => break,
        }
    }
    result
}

// ── Acceptance ────────────────────────────────────────────────────────────────

/// Opinion multiplier: shrinks towards 0 as opinion falls to -100 and grows
/// to 1.5 as it rises to +100.
pub fn opinion_factor(opinion: f32) -> f32 {
    inverse_lerp(-100.0, 0.0, opinion) * lerp_double(0.0, 100.0, 1.0, 1.5, opinion)
}

/// Probability in `[0, 1]` that `target` agrees to `asker`'s advance.
///
/// For hookups, a target whose opinion of `asker` is below the configured
/// minimum always refuses, as does a strongly sex-averse asexual target who
/// is not already `asker`'s partner.  Cheating is not considered here.
pub fn score_acceptance(ctx: &RomanceContext<'_>, target: AgentId, asker: AgentId, for_hookup: bool) -> f32 {
    acceptance_breakdown(ctx, target, asker, for_hookup).total
}

/// Probability that `target` agrees to a date with `asker`.  Partners always
/// agree.
pub fn score_date_acceptance(ctx: &RomanceContext<'_>, target: AgentId, asker: AgentId) -> f32 {
    if love_relation_exists(ctx, target, asker) {
        return 1.0;
    }
    let romance = romance_chance_factor(ctx, target, asker) * NON_PARTNER_FACTOR;
    (romance * inverse_lerp(-100.0, 0.0, ctx.world.opinion_of(target, asker))).clamp(0.0, 1.0)
}

/// Probability that `target` agrees to hang out with `asker`.  Only opinion
/// matters; partners always agree.
pub fn score_hangout_acceptance(ctx: &RomanceContext<'_>, target: AgentId, asker: AgentId) -> f32 {
    if love_relation_exists(ctx, target, asker) {
        return 1.0;
    }
    inverse_lerp(-100.0, 0.0, ctx.world.opinion_of(target, asker))
}

/// Why a floor rejection happened.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Rejection {
    OpinionTooLow,
    SexAverse,
}

/// The factors behind [`score_acceptance`].
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AcceptanceBreakdown {
    pub romance_factor: f32,
    /// 1 for partners, [`NON_PARTNER_FACTOR`] otherwise.
    pub partner_factor: f32,
    pub opinion_factor: f32,
    pub rejection:      Option<Rejection>,
    /// Clamped product, or 0 on a floor rejection.
    pub total:          f32,
}

pub fn acceptance_breakdown(
    ctx:        &RomanceContext<'_>,
    target:     AgentId,
    asker:      AgentId,
    for_hookup: bool,
) -> AcceptanceBreakdown {
    let world = ctx.world;
    let opinion = world.opinion_of(target, asker);
    let partners = love_relation_exists(ctx, target, asker);

    let rejection = if !for_hookup {
        None
    } else if opinion < ctx.settings.min_opinion_for_hookup(world.kind(target)) {
        Some(Rejection::OpinionTooLow)
    } else if !partners
        && is_asexual(world.traits(target))
        && asexual_rating(target) < ctx.settings.partner_only_threshold
    {
        Some(Rejection::SexAverse)
    } else {
        None
    };

    let romance_factor = romance_chance_factor(ctx, target, asker);
    let partner_factor = if partners { 1.0 } else { NON_PARTNER_FACTOR };
    let opinion_factor = opinion_factor(opinion);
    let total = match rejection {
        Some(_) => 0.0,
        None => (romance_factor * partner_factor * opinion_factor).clamp(0.0, 1.0),
    };
    AcceptanceBreakdown { romance_factor, partner_factor, opinion_factor, rejection, total }
}

impl fmt::Display for AcceptanceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rejection {
            Some(Rejection::OpinionTooLow) => return writeln!(f, " - Opinion too low: 0%"),
            Some(Rejection::SexAverse)     => return writeln!(f, " - Sex-averse: 0%"),
            None => {}
        }
        writeln!(f, " - Romance chance factor: x{:.2}", self.romance_factor)?;
        if self.partner_factor != 1.0 {
            writeln!(f, " - Not partners: x{:.2}", self.partner_factor)?;
        }
        writeln!(f, " - Opinion: x{:.2}", self.opinion_factor)
    }
}
