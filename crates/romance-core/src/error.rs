//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `RomanceError` as one
//! variant.  Scoring paths never produce errors; these cover loading and
//! lookups that a host asked for explicitly.

use thiserror::Error;

use crate::{AgentId, KindId};

/// The top-level error type for `romance-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RomanceError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("kind {0} not configured")]
    KindNotFound(KindId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `romance-*` crates.
pub type RomanceResult<T> = Result<T, RomanceError>;
