//! Age windows, fertility curves and the lovin interval curve.

use romance_core::{AgentId, Curve, Gender, RegularSexSettings, inverse_lerp};

use crate::RomanceContext;

/// Configured age of consent for `agent`'s kind.
pub fn min_age_for_sex(ctx: &RomanceContext<'_>, agent: AgentId) -> f32 {
    ctx.kind_settings(agent).regular.min_age_for_sex
}

/// Youngest age at which `agent` can have children, by gender.  Agents
/// without a binary gender use the lower of the two.
pub fn min_age_to_have_children(ctx: &RomanceContext<'_>, agent: AgentId) -> f32 {
    let rel = &ctx.kind_settings(agent).relations;
    match ctx.world.gender(agent) {
        Gender::Female => rel.min_female_age_to_have_children,
        Gender::Male   => rel.min_male_age_to_have_children,
        Gender::None   => rel
            .min_female_age_to_have_children
            .min(rel.min_male_age_to_have_children),
    }
}

/// Fertility in `[0, 1]` at `agent`'s current age.
///
/// Zero when the kind does not allow children.
pub fn fertility_factor(ctx: &RomanceContext<'_>, agent: AgentId) -> f32 {
    let kind = ctx.kind_settings(agent);
    if !kind.relations.children_allowed {
        return 0.0;
    }
    let curve = match ctx.world.gender(agent) {
        Gender::Female => &kind.fertility.female,
        Gender::Male   => &kind.fertility.male,
        Gender::None   => &kind.fertility.none,
    };
    curve.evaluate(ctx.world.age_years(agent)).clamp(0.0, 1.0)
}

/// Hours between lovin sessions as a function of age.
///
/// Flat at 1.5 h through early adulthood, then rising steeply towards the
/// configured maximum age.
pub fn lovin_curve(regular: &RegularSexSettings) -> Curve {
    let min = regular.min_age_for_sex;
    let max = regular.max_age_for_sex;
    let decline = regular.decline_at_age;
    Curve::from_pairs(&[
        (min, 1.5),
        (decline / 5.0 + min, 1.5),
        (decline, 4.0),
        (max / 4.0 + decline, 12.0),
        (max, 36.0),
    ])
}

pub fn lovin_interval_hours(ctx: &RomanceContext<'_>, agent: AgentId) -> f32 {
    lovin_curve(&ctx.kind_settings(agent).regular).evaluate(ctx.world.age_years(agent))
}

/// How well `b`'s age suits `a`.
///
/// Zero if either is under their kind's age of consent.  Otherwise 1 up to
/// half of `a`'s configured maximum age gap, falling linearly to 0 at the
/// full gap.
pub fn age_factor(ctx: &RomanceContext<'_>, a: AgentId, b: AgentId) -> f32 {
    let age_a = ctx.world.age_years(a);
    let age_b = ctx.world.age_years(b);
    if age_a < min_age_for_sex(ctx, a) || age_b < min_age_for_sex(ctx, b) {
        return 0.0;
    }
    let max_gap = ctx.kind_settings(a).regular.max_age_gap;
    if max_gap <= 0.0 {
        return if age_a == age_b { 1.0 } else { 0.0 };
    }
    inverse_lerp(max_gap, max_gap / 2.0, (age_a - age_b).abs())
}
