//! Decision overrides for agent generation: sexuality traits and the
//! relation a newly generated parent gets with the child's other parent.

use romance_agent::{RelationKind, SocialWorld, SocialWorldMut};
use romance_core::{AgentId, AgentRng, RomanceSettings, Tick, Trait, TraitSet};
use romance_rules::relations::has_any_love_partner;
use romance_rules::{RomanceContext, ensure_orientation};
use tracing::debug;

use crate::HookResult;

/// Chance that a generated parent is still with the other parent, when the
/// other parent is single and could be attracted to them.
pub const LOVER_CHANCE: f32 = 0.85;

/// Replaces the host's sexuality-trait generation.  The host routine never
/// runs; an agent who already has an orientation keeps it.  Returns the
/// orientation trait held afterwards.
pub fn generate_sexuality_trait<W: SocialWorldMut>(
    world:    &mut W,
    settings: &RomanceSettings,
    agent:    AgentId,
    rng:      &mut AgentRng,
) -> HookResult<Option<Trait>> {
    ensure_orientation(world, settings, agent, rng)?;
    Ok(world.traits(agent).and_then(TraitSet::orientation_trait))
}

/// What [`create_parent_relation`] did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ParentOverride {
    /// Nothing; the host creates the relation as usual (spouse included).
    HostDefault,
    /// The parent link was made here.  `partner` is the relation given to
    /// the child's other parent, if there is one.
    Linked { partner: Option<(AgentId, RelationKind)> },
}

/// Link a newly generated `parent` to `child`.
///
/// The host would make the two parents spouses.  That is skipped when the
/// parent's kind does not allow spouses, or when the parent's orientation
/// does not fit the other parent's gender.  The two become lovers with
/// [`LOVER_CHANCE`] if the other parent is single and not gay, and
/// ex-lovers otherwise.
pub fn create_parent_relation<W: SocialWorldMut>(
    world:    &mut W,
    settings: &RomanceSettings,
    tick:     Tick,
    parent:   AgentId,
    child:    AgentId,
    rng:      &mut AgentRng,
) -> HookResult<ParentOverride> {
    let (other, partner_kind) = {
        let ctx = RomanceContext::new(tick, settings, &*world);
        let other = other_parent(ctx.world, child, parent);
        let spouses_allowed = ctx.kind_settings(parent).relations.spouses_allowed;
        if spouses_allowed && !other.is_some_and(|o| orientation_mismatch(ctx.world, parent, o)) {
            return Ok(ParentOverride::HostDefault);
        }
        let partner_kind = other.map(|o| {
            let stays = rng.random::<f32>() < LOVER_CHANCE
                && !has_any_love_partner(&ctx, o)
                && !ctx.world.has_trait(o, Trait::Gay);
            if stays { RelationKind::Lover } else { RelationKind::ExLover }
        });
        (other, partner_kind)
    };

    world.add_relation(child, RelationKind::Parent, parent)?;
    let partner = match (other, partner_kind) {
        (Some(o), Some(kind)) => {
            world.add_relation(parent, kind, o)?;
            Some((o, kind))
        }
        _ => None,
    };
    debug!(%parent, %child, ?partner, "parent relation created without spouse");
    Ok(ParentOverride::Linked { partner })
}

fn other_parent(world: &dyn SocialWorld, child: AgentId, parent: AgentId) -> Option<AgentId> {
    world
        .relations(child)
        .iter()
        .find(|r| r.kind == RelationKind::Parent && r.other != parent)
        .map(|r| r.other)
}

fn orientation_mismatch(world: &dyn SocialWorld, parent: AgentId, other: AgentId) -> bool {
    let same_gender = world.gender(parent) == world.gender(other);
    (world.has_trait(parent, Trait::Gay) && !same_gender)
        || (world.has_trait(parent, Trait::Straight) && same_gender)
}
