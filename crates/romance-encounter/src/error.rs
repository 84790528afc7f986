use romance_core::RomanceError;
use romance_rules::RulesError;
use thiserror::Error;

use crate::EncounterPhase;

#[derive(Debug, Error)]
pub enum EncounterError {
    #[error("cannot {action} a session in phase {phase:?}")]
    WrongPhase {
        action: &'static str,
        phase:  EncounterPhase,
    },

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error(transparent)]
    Romance(#[from] RomanceError),
}

pub type EncounterResult<T> = Result<T, EncounterError>;
