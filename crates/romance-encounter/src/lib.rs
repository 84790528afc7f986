//! `romance-encounter`: the encounter outcome engine.
//!
//! # Session lifecycle
//!
//! ```text
//! refresh_candidates(agent)     find_candidates → standing list
//! pick_target(agent)            first free, willing candidate
//! begin(initiator, target)      Idle → Approaching     (target must be free)
//! arrive(session)               Approaching → AwaitingResponse
//!                               (unreachable target → Resolved(Interrupted))
//! resolve(session)              AwaitingResponse → Resolved(Success | Failure)
//!   Success  → both queue CasualLovin in the bed's two slots
//!   Failure  → target leaves the candidate list, rebuff memories on both
//!   both     → initiator's ordered-hookup cooldown restarts
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`engine`]   | `EncounterEngine`, `choose_bed`                       |
//! | [`session`]  | `HookupSession`, `EncounterPhase`, `Outcome`          |
//! | [`observer`] | `EncounterObserver`, `NoopObserver`, `LogObserver`    |
//! | [`error`]    | `EncounterError`, `EncounterResult<T>`                |

pub mod engine;
pub mod error;
pub mod observer;
pub mod session;


pub use engine::{EncounterEngine, choose_bed};
pub use error::{EncounterError, EncounterResult};
pub use observer::{EncounterObserver, LogObserver, NoopObserver, PlayLogEntry};
pub use session::{EncounterPhase, HookupSession, Outcome};
