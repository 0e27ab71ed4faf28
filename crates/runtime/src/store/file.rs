//! File-backed implementation of the progression store.
//!
//! One JSON document per player under a base directory. Writes go through a
//! temp file followed by a rename, so a crash mid-write leaves the previous
//! record intact and a reader never observes a half-written document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use directories::ProjectDirs;

use brawl_core::PlayerProgression;

use super::{PlayerId, ProgressionStore};
use crate::error::StoreError;

/// JSON-per-player store.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at an explicit directory. The directory is created on
    /// first save.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Platform-conventional default location for profile records.
    pub fn default_base_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "brawl-engine")
            .map(|dirs| dirs.data_dir().join("profiles"))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn record_path(&self, player: &PlayerId) -> PathBuf {
        self.base_dir.join(format!("{player}.json"))
    }
}

#[async_trait]
impl ProgressionStore for JsonFileStore {
    async fn load(&self, player: &PlayerId) -> Result<Option<PlayerProgression>, StoreError> {
        let path = self.record_path(player);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn save(
        &self,
        player: &PlayerId,
        progression: &PlayerProgression,
    ) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.base_dir).await?;

        let path = self.record_path(player);
        let tmp_path = self.base_dir.join(format!("{player}.json.tmp"));
        let bytes = serde_json::to_vec_pretty(progression)?;

        tokio::fs::write(&tmp_path, &bytes).await?;
        tokio::fs::rename(&tmp_path, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawl_core::GameConfig;

    #[tokio::test]
    async fn round_trips_a_record_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let player = PlayerId(42);
        let config = GameConfig::default();

        assert_eq!(store.load(&player).await.unwrap(), None);

        let mut record = PlayerProgression::new_player(&config);
        record.experience = 25;
        record.tutorial_finished = true;
        store.save(&player, &record).await.unwrap();

        assert_eq!(store.load(&player).await.unwrap(), Some(record));
        assert!(dir.path().join("42.json").exists());
    }

    #[tokio::test]
    async fn saves_replace_the_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let player = PlayerId(3);
        let config = GameConfig::default();

        let mut record = PlayerProgression::new_player(&config);
        store.save(&player, &record).await.unwrap();

        record.tokens = 99;
        store.save(&player, &record).await.unwrap();

        let loaded = store.load(&player).await.unwrap().unwrap();
        assert_eq!(loaded.tokens, 99);
        // No temp file left behind.
        assert!(!dir.path().join("3.json.tmp").exists());
    }

    #[tokio::test]
    async fn unreadable_documents_surface_as_serialization_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let player = PlayerId(9);

        tokio::fs::write(dir.path().join("9.json"), b"not json")
            .await
            .unwrap();

        let err = store.load(&player).await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
