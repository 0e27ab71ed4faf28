//! Progression store adapter.
//!
//! Persistence is injected: the engine only assumes a key-value store of one
//! [`PlayerProgression`] record per player. Saving the whole record is the
//! per-player atomic transaction — experience, tokens, bank, trophies, and
//! personal best land together or not at all.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use core::fmt;

use async_trait::async_trait;

use brawl_core::{GameConfig, PlayerProgression};

use crate::error::StoreError;

/// Identity a progression record is keyed by (chat-platform user id or
/// similar).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Injected persistence for progression records.
///
/// `save` must replace the player's record atomically with respect to
/// concurrent `load`s — a reader sees either the old record or the new one,
/// never a blend. Failures propagate as [`StoreError`]; the engine never
/// retries on its own.
#[async_trait]
pub trait ProgressionStore: Send + Sync {
    /// Load a player's record, or `None` for a player the store has never
    /// seen.
    async fn load(&self, player: &PlayerId) -> Result<Option<PlayerProgression>, StoreError>;

    /// Replace a player's record.
    async fn save(
        &self,
        player: &PlayerId,
        progression: &PlayerProgression,
    ) -> Result<(), StoreError>;

    /// Load a player's record, materializing the new-player template on
    /// first contact.
    async fn load_or_create(
        &self,
        player: &PlayerId,
        config: &GameConfig,
    ) -> Result<PlayerProgression, StoreError> {
        if let Some(existing) = self.load(player).await? {
            return Ok(existing);
        }
        let fresh = PlayerProgression::new_player(config);
        self.save(player, &fresh).await?;
        Ok(fresh)
    }
}
