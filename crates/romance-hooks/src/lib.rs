//! `romance-hooks`: adapters binding the romance rules to host decision
//! points.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                           |
//! |-----------------|--------------------------------------------------------------------|
//! | [`decision`]    | `DecisionHook` trait, `KeepHostDecision`, `ChainedHook`, `AsexualLovinBlock` |
//! | [`age_gate`]    | configured and life-stage ages in place of the host's constants   |
//! | [`generation`]  | `generate_sexuality_trait`, `create_parent_relation`              |
//! | [`affordance`]  | "Try hookup" / "Try romance" buttons, hookup menu, tooltip, dev actions |
//! | [`trait_log`]   | `TraitLogCache` diagnostics with a background sweeper             |
//! | [`error`]       | `HookError`, `HookResult<T>`                                      |
//!
//! # Hook kinds
//!
//! ```text
//! predicate override   age_gate::*                 host constant → configured value
//! decision override    generation::*               host routine skipped entirely
//! decision hook        DecisionHook::modify        host answer → Some(replacement) | None
//! affordance           TryHookupAffordance.then(AromanticRomanceBlock)
//! ```

pub mod affordance;
pub mod age_gate;
pub mod decision;
pub mod error;
pub mod generation;
pub mod trait_log;

#[cfg(test)]
mod tests;

pub use affordance::{
    AromanticRomanceBlock, CooldownResetAction, DevAction, HookupOption, SocialAction,
    TryHookupAffordance, apply_dev_action, hookup_options, hookup_tooltip, press_try_hookup,
    press_try_romance,
};
pub use decision::{AsexualLovinBlock, ChainedHook, DecisionHook, DecisionHookExt, KeepHostDecision};
pub use error::{HookError, HookResult};
pub use generation::{ParentOverride, create_parent_relation, generate_sexuality_trait};
pub use trait_log::{SweeperHandle, TraitLogCache, sexuality_trait_check};
