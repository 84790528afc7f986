//! `romance-agent`: the host collaborator contract and an in-memory
//! Structure-of-Arrays implementation of it.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`world`]        | `SocialWorld`, `SocialWorldMut`, `AgentStatus`, `Beliefs`  |
//! | [`relation`]     | `RelationKind`, `Relation`, `Memory`, `MemoryKind`         |
//! | [`activity`]     | `ActivityKind`, `QueuedActivity`                           |
//! | [`trait_hook`]   | `TraitGainHook`                                            |
//! | [`store`]        | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG)     |
//! | [`builder`]      | `AgentStoreBuilder` (fluent construction)                  |

pub mod activity;
pub mod builder;
pub mod relation;
pub mod store;
pub mod trait_hook;
pub mod world;

#[cfg(test)]
mod tests;

pub use activity::{ActivityKind, QueuedActivity};
pub use builder::AgentStoreBuilder;
pub use relation::{Memory, MemoryKind, Relation, RelationKind};
pub use store::{AgentRngs, AgentStore, DEFAULT_ADULT_MIN_AGE};
pub use trait_hook::TraitGainHook;
pub use world::{AgentStatus, BeliefEvent, Beliefs, SocialWorld, SocialWorldMut};
