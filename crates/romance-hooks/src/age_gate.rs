//! Host age constants replaced by the configured per-kind ages.

use romance_core::AgentId;
use romance_rules::RomanceContext;
use romance_rules::age::{min_age_for_sex, min_age_to_have_children};

/// Age the host hard-codes for both the try-romance button and the
/// contraceptive implant.
pub const HOST_ADULT_AGE: f32 = 16.0;

/// Whole-year age below which the host shows growth-tier controls.
pub const HOST_GROWTH_TIER_AGE: i32 = 13;

/// Replaces the host's age floor for drawing "Try romance".
pub fn romance_age_threshold(ctx: &RomanceContext<'_>, agent: AgentId) -> f32 {
    min_age_for_sex(ctx, agent)
}

pub fn old_enough_for_romance(ctx: &RomanceContext<'_>, agent: AgentId) -> bool {
    ctx.world.age_years(agent) >= romance_age_threshold(ctx, agent)
}

/// Replaces the host's integer age floor for the contraceptive implant.
/// Truncated like the host's whole-year comparison.
pub fn implant_age_threshold(ctx: &RomanceContext<'_>, agent: AgentId) -> i32 {
    min_age_to_have_children(ctx, agent) as i32
}

/// Whether the contraceptive implant may be offered for `agent`, comparing
/// whole biological years against the configured threshold.
pub fn implant_available(ctx: &RomanceContext<'_>, agent: AgentId) -> bool {
    (ctx.world.age_years(agent) as i32) >= implant_age_threshold(ctx, agent)
}

/// Replaces [`HOST_GROWTH_TIER_AGE`] with the adult age of `agent`'s own
/// life stages.
pub fn growth_tier_age_threshold(ctx: &RomanceContext<'_>, agent: AgentId) -> i32 {
    ctx.world.adult_min_age(agent) as i32
}

/// Whether `agent` still gets growth-tier controls.
pub fn shows_growth_tier(ctx: &RomanceContext<'_>, agent: AgentId) -> bool {
    (ctx.world.age_years(agent) as i32) < growth_tier_age_threshold(ctx, agent)
}
