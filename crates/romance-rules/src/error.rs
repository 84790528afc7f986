use romance_core::{AgentId, KindId, RomanceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("orientation table for kind {kind} has no positive weight (agent {agent})")]
    EmptyOrientationTable { agent: AgentId, kind: KindId },

    #[error(transparent)]
    Romance(#[from] RomanceError),
}

pub type RulesResult<T> = Result<T, RulesError>;
