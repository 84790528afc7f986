//! Queries over the relationship graph.

use romance_agent::{RelationKind, SocialWorld};
use romance_core::{AgentId, RomanceSettings};

use crate::RomanceContext;

/// Built-in partner relations plus custom relations declared as love
/// relations in settings.
pub fn is_love_relation(settings: &RomanceSettings, kind: RelationKind) -> bool {
    match kind {
        RelationKind::Custom(id) => settings.is_love_relation(id),
        other => other.is_builtin_love(),
    }
}

/// `true` if any love relation runs from `a` to `b`.
pub fn love_relation_exists(ctx: &RomanceContext<'_>, a: AgentId, b: AgentId) -> bool {
    ctx.world
        .relations(a)
        .iter()
        .any(|r| r.other == b && is_love_relation(ctx.settings, r.kind))
}

pub fn has_any_love_partner(ctx: &RomanceContext<'_>, agent: AgentId) -> bool {
    !love_partners(ctx, agent, false, false).is_empty()
}

/// Everyone in a love relation with `agent`, each listed once.
///
/// With `on_map`, partners on a different map than `agent` are left out.
/// Agents that are not flesh have no partners.
pub fn love_partners(
    ctx:          &RomanceContext<'_>,
    agent:        AgentId,
    include_dead: bool,
    on_map:       bool,
) -> Vec<AgentId> {
    let world = ctx.world;
    if !world.status(agent).flesh {
        return Vec::new();
    }
    let here = world.location(agent);
    let mut out = Vec::new();
    for rel in world.relations(agent) {
        if !is_love_relation(ctx.settings, rel.kind) || out.contains(&rel.other) {
            continue;
        }
        if !include_dead && world.status(rel.other).dead {
            continue;
        }
        if on_map && world.location(rel.other) != here {
            continue;
        }
        out.push(rel.other);
    }
    out
}

/// Love partners that are neither spouses nor fiancés.
pub fn non_spouse_lovers(ctx: &RomanceContext<'_>, agent: AgentId, include_dead: bool) -> Vec<AgentId> {
    let world = ctx.world;
    if !world.status(agent).flesh {
        return Vec::new();
    }
    let mut out = Vec::new();
    for rel in world.relations(agent) {
        let lover = match rel.kind {
            RelationKind::Lover      => true,
            RelationKind::Custom(id) => ctx.settings.is_love_relation(id),
            _ => false,
        };
        if lover && (include_dead || !world.status(rel.other).dead) && !out.contains(&rel.other) {
            out.push(rel.other);
        }
    }
    out
}

/// First non-spouse lover of the opposite gender, dead or alive.
pub fn first_lover_of_opposite_gender(ctx: &RomanceContext<'_>, agent: AgentId) -> Option<AgentId> {
    let wanted = ctx.world.gender(agent).opposite();
    non_spouse_lovers(ctx, agent, true)
        .into_iter()
        .find(|&l| ctx.world.gender(l) == wanted)
}

/// The agent `agent` likes most among those related by `kind`.
///
/// Only positive opinions count; returns `None` if nobody is liked.
pub fn most_liked_of_relation(
    world:      &dyn SocialWorld,
    agent:      AgentId,
    kind:       RelationKind,
    allow_dead: bool,
) -> Option<AgentId> {
    let mut best = None;
    let mut best_opinion = 0.0;
    for rel in world.relations(agent) {
        if rel.kind != kind || (!allow_dead && world.status(rel.other).dead) {
            continue;
        }
        let opinion = world.opinion_of(agent, rel.other);
        if opinion > best_opinion {
            best_opinion = opinion;
            best = Some(rel.other);
        }
    }
    best
}

/// `true` if `other` is one of the owners of the bed `agent` owns.
pub fn share_a_bed(world: &dyn SocialWorld, agent: AgentId, other: AgentId) -> bool {
    world
        .owned_bed(agent)
        .is_some_and(|bed| world.bed_owners(bed).contains(&other))
}

/// Parent, child or sibling.
pub fn are_family(world: &dyn SocialWorld, a: AgentId, b: AgentId) -> bool {
    world.relations(a).iter().any(|r| r.other == b && r.kind.is_family())
}

/// Ex-spouse or ex-lover.
pub fn are_former_partners(world: &dyn SocialWorld, a: AgentId, b: AgentId) -> bool {
    world.relations(a).iter().any(|r| r.other == b && r.kind.is_former_partner())
}
