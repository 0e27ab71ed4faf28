//! In-memory implementation of the progression store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use brawl_core::PlayerProgression;

use super::{PlayerId, ProgressionStore};
use crate::error::StoreError;

/// In-memory store for tests and single-process deployments. Whole-record
/// replacement under the write lock gives the required per-player atomicity.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<PlayerId, PlayerProgression>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .map(|records| records.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProgressionStore for MemoryStore {
    async fn load(&self, player: &PlayerId) -> Result<Option<PlayerProgression>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Backend(format!("lock error: {e}")))?;
        Ok(records.get(player).cloned())
    }

    async fn save(
        &self,
        player: &PlayerId,
        progression: &PlayerProgression,
    ) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::Backend(format!("lock error: {e}")))?;
        records.insert(*player, progression.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawl_core::GameConfig;

    #[tokio::test]
    async fn round_trips_a_record() {
        let store = MemoryStore::new();
        let player = PlayerId(7);
        let config = GameConfig::default();

        assert_eq!(store.load(&player).await.unwrap(), None);

        let mut record = PlayerProgression::new_player(&config);
        record.tokens = 55;
        store.save(&player, &record).await.unwrap();

        assert_eq!(store.load(&player).await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn load_or_create_materializes_the_template_once() {
        let store = MemoryStore::new();
        let player = PlayerId(1);
        let config = GameConfig::default();

        let first = store.load_or_create(&player, &config).await.unwrap();
        assert_eq!(first, PlayerProgression::new_player(&config));
        assert_eq!(store.len(), 1);

        // A mutation survives the next load_or_create.
        let mut changed = first;
        changed.gold = 10;
        store.save(&player, &changed).await.unwrap();
        assert_eq!(store.load_or_create(&player, &config).await.unwrap().gold, 10);
        assert_eq!(store.len(), 1);
    }
}
