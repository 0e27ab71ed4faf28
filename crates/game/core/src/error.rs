//! Errors surfaced by the rules crate.
//!
//! A `ConfigurationError` always means the static tables and the stored
//! player data disagree (or an oracle was missing). The bout being resolved
//! must be aborted with progression untouched; there is nothing to retry.

use crate::env::{BrawlerId, OracleError};

/// Data inconsistency between the static catalogs and a bout's inputs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// A brawler id reached the engine that the catalog does not know.
    /// Usually a stored selection pointing at a renamed or removed brawler.
    #[error("unknown brawler '{0}'")]
    UnknownBrawler(BrawlerId),

    /// The matchmaking roster is empty. Catalog validation is supposed to
    /// reject this at load time.
    #[error("brawler roster is empty")]
    EmptyRoster,

    /// The trophy road table has no row for this game type and trophy count.
    #[error("no trophy road entry for game type '{game_type}' at {trophies} trophies")]
    MissingTrophyBand { game_type: String, trophies: u32 },

    /// The experience table has no row for this account level.
    #[error("no experience table row for level {0}")]
    MissingLevelRow(u8),

    /// A required oracle was not provided in the environment.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}
