//! Orientation assignment and the single-orientation invariant.

use romance_agent::{SocialWorldMut, TraitGainHook};
use romance_core::{
    AgentId, AgentRng, ORIENTATION_TRAITS, OrientationCategory, OrientationChances,
    RomanceSettings, Trait, TraitSet, stable_unit,
};
use tracing::{debug, error};

use crate::{RulesError, RulesResult};

/// Sex-aversion rating of an asexual agent, in `[0, 1)`.
///
/// Derived from the agent id alone, so it never changes for a given agent.
#[inline]
pub fn asexual_rating(agent: AgentId) -> f32 {
    stable_unit(agent)
}

/// Draw an orientation trait from `table`.
///
/// Returns `None` if the base table has no positive weight.  An asexual draw
/// makes a second draw over the asexual sub-table; an empty sub-table falls
/// back to the aromantic trait.
pub fn draw_orientation(table: &OrientationChances, rng: &mut AgentRng) -> Option<(OrientationCategory, Trait)> {
    let category = OrientationCategory::ALL[rng.choose_weighted(&table.base_weights())?];
    if category != OrientationCategory::Asexual {
        return Some((category, category.base_trait()));
    }
    let sub = table.ace_weights();
    let weights: Vec<f32> = sub.iter().map(|&(_, w)| w).collect();
    let t = rng
        .choose_weighted(&weights)
        .map_or(Trait::Asexual, |i| sub[i].0);
    Some((category, t))
}

/// Give `agent` a freshly drawn orientation from their kind's table,
/// replacing any orientation trait they already hold.
pub fn assign_orientation<W: SocialWorldMut>(
    world:    &mut W,
    settings: &RomanceSettings,
    agent:    AgentId,
    rng:      &mut AgentRng,
) -> RulesResult<OrientationCategory> {
    let kind = world.kind(agent);
    let (category, granted) = draw_orientation(&settings.kind(kind).sexuality, rng)
        .ok_or(RulesError::EmptyOrientationTable { agent, kind })?;

    let held: Vec<Trait> = world
        .traits(agent)
        .map(|ts| ts.iter().filter(|t| t.is_orientation() && *t != granted).collect())
        .unwrap_or_default();
    for old in held {
        world.remove_trait(agent, old)?;
    }
    world.gain_trait(agent, granted)?;
    debug!(%agent, ?category, trait_ = %granted, "orientation assigned");
    Ok(category)
}

/// Assign an orientation only if `agent` has none yet.
pub fn ensure_orientation<W: SocialWorldMut>(
    world:    &mut W,
    settings: &RomanceSettings,
    agent:    AgentId,
    rng:      &mut AgentRng,
) -> RulesResult<Option<OrientationCategory>> {
    if world.traits(agent).and_then(TraitSet::orientation_trait).is_some() {
        return Ok(None);
    }
    assign_orientation(world, settings, agent, rng).map(Some)
}

// ── OrientationGuard ──────────────────────────────────────────────────────────

/// Trait-gain hook that keeps at most one orientation trait per agent.
///
/// Before an orientation trait is granted it remembers the one already held;
/// after the grant, if two are now present, the remembered one is removed.
/// Register it once on the host's store and every grant, from any code path,
/// restores the invariant.
pub struct OrientationGuard;

impl TraitGainHook for OrientationGuard {
    fn before_gain(&self, _agent: AgentId, traits: &TraitSet, gained: Trait) -> Option<Trait> {
        if !gained.is_orientation() {
            return None;
        }
        ORIENTATION_TRAITS.iter().copied().find(|&t| traits.has(t))
    }

    fn after_gain(&self, agent: AgentId, traits: &mut TraitSet, gained: Trait, remembered: Option<Trait>) {
        let Some(old) = remembered else { return };
        if traits.orientation_count() <= 1 {
            return;
        }
        if traits.remove(old) {
            debug!(%agent, removed = %old, kept = %gained, "duplicate orientation trait removed");
        } else {
            error!(%agent, trait_ = %old, "failed to remove duplicate orientation trait");
        }
    }
}
