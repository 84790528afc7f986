use romance_core::RomanceError;
use romance_rules::RulesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error(transparent)]
    Romance(#[from] RomanceError),

    #[error("failed to start diagnostics sweeper: {0}")]
    Sweeper(#[from] std::io::Error),
}

pub type HookResult<T> = Result<T, HookError>;
