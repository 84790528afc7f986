//! `romance-rules`: the decision rules of the romance engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                          |
//! |-----------------|-------------------------------------------------------------------|
//! | [`context`]     | `RomanceContext<'a>`: tick, settings and world view              |
//! | [`orientation`] | `assign_orientation`, `OrientationGuard`, `asexual_rating`        |
//! | [`eligibility`] | `is_free`, `will_consider_hookup`, `can_share_activity`, ordered-hookup checks |
//! | [`appeal`]      | `romance_chance_factor`, `find_candidates`, `score_acceptance`    |
//! | [`cheating`]    | `evaluate_fidelity`, `resolve_continuation`                       |
//! | [`relations`]   | partner and family queries over the relationship graph            |
//! | [`age`]         | fertility, age-of-consent and lovin interval curves               |
//! | [`error`]       | `RulesError`, `RulesResult<T>`                                    |
//!
//! # Design notes
//!
//! Every rule is a free function over `&RomanceContext`.  Scoring never
//! mutates the world and never fails: unknown agents and missing trait sets
//! score as "no orientation, not asexual".  Functions that roll dice take
//! the acting agent's `AgentRng` explicitly; only orientation assignment
//! writes to the world, through `SocialWorldMut`.

pub mod age;
pub mod appeal;
pub mod cheating;
pub mod context;
pub mod eligibility;
pub mod error;
pub mod orientation;
pub mod relations;


pub use appeal::{
    AcceptanceBreakdown, MAX_CANDIDATES, Rejection, acceptance_breakdown, find_candidates,
    romance_chance_factor, score_acceptance, score_date_acceptance, score_hangout_acceptance,
};
pub use cheating::{Continuation, FidelityReport, evaluate_fidelity, resolve_continuation};
pub use context::RomanceContext;
pub use eligibility::{
    AcceptanceReport, DONT_INTERRUPT, can_share_activity, hookup_eligible, hookup_eligible_pair,
    is_free, is_ordered_hookup_on_cooldown, spontaneous_hookup_chance, will_consider_hookup,
};
pub use error::{RulesError, RulesResult};
pub use orientation::{OrientationGuard, asexual_rating, assign_orientation, ensure_orientation};
