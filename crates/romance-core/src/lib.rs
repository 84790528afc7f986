//! `romance-core`: foundational types for the romance decision engine.
//!
//! This crate is a dependency of every other `romance-*` crate.  It has no
//! `romance-*` dependencies.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `BedId`, `MapId`, `KindId`, `RelationId`   |
//! | [`time`]        | `Tick`, tick-period formatting                        |
//! | [`rng`]         | `AgentRng` (per-agent), `stable_unit`                 |
//! | [`curve`]       | `Curve`, `inverse_lerp`, `lerp_double`                |
//! | [`gender`]      | `Gender`                                              |
//! | [`traits`]      | `Trait`, `TraitSet`, `ORIENTATION_TRAITS`             |
//! | [`orientation`] | `Orientation`, `OrientationCategory`, `OrientationChances` |
//! | [`settings`]    | `RomanceSettings` and the per-kind blocks             |
//! | [`diagnostic`]  | `Diagnostic`, `Severity`                              |
//! | [`loader`]      | `load_settings_json`, `load_settings_reader`          |
//! | [`error`]       | `RomanceError`, `RomanceResult`                       |

pub mod curve;
pub mod diagnostic;
pub mod error;
pub mod gender;
pub mod ids;
pub mod loader;
pub mod orientation;
pub mod rng;
pub mod settings;
pub mod time;
pub mod traits;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use curve::{Curve, CurvePoint, inverse_lerp, lerp_double};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{RomanceError, RomanceResult};
pub use gender::Gender;
pub use ids::{AgentId, BedId, KindId, MapId, RelationId};
pub use loader::{load_settings_json, load_settings_reader};
pub use orientation::{
    Orientation, OrientationCategory, OrientationChances, is_asexual, is_sexuality_trait,
    orientation_of,
};
pub use rng::{AgentRng, stable_unit};
pub use settings::{
    CasualSexSettings, FertilityCurves, HookupTrigger, KindSettings, LoveRelationDef,
    RegularSexSettings, RelationSettings, RomanceSettings,
};
pub use time::{TICKS_PER_DAY, TICKS_PER_HOUR, Tick, ticks_to_period};
pub use traits::{ORIENTATION_TRAITS, Trait, TraitSet};
