//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the progression store and the rules crate so callers
//! can bubble them up with consistent context. A failed bout never leaves a
//! partially-rewarded record behind: rewards are applied in memory and only
//! committed once the whole record is ready.

use thiserror::Error;

use brawl_core::ConfigurationError;

use crate::store::PlayerId;

pub type Result<T> = std::result::Result<T, BoutError>;

/// Progression store failure. Propagated as-is; the engine performs no
/// retries of its own.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o failed")]
    Io(#[from] std::io::Error),

    #[error("store record (de)serialization failed")]
    Serialization(#[from] serde_json::Error),

    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Errors surfaced while serving a bout or a profile mutation.
#[derive(Debug, Error)]
pub enum BoutError {
    #[error("a bout takes at most {max} teammates, got {got}")]
    TooManyTeammates { max: usize, got: usize },

    #[error("player {0} appears more than once in the lineup")]
    DuplicatePlayer(PlayerId),

    #[error("player {0} has not finished the tutorial")]
    TutorialNotFinished(PlayerId),

    #[error("bout service requires a store and content before building")]
    MissingComponents,

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
