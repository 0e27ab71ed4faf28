//! Per-player mutual exclusion.
//!
//! One lazily-created async mutex per player id. A bout holds the locks of
//! every participant from resolution through write-back, so two bouts (or a
//! bout and a profile edit) touching the same player never interleave, while
//! bouts over disjoint players run fully in parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::store::PlayerId;

/// Keyed lock table over player ids.
#[derive(Debug, Default)]
pub struct PlayerLocks {
    locks: StdMutex<HashMap<PlayerId, Arc<Mutex<()>>>>,
}

impl PlayerLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to one player's mutex, creating it on first use.
    fn handle(&self, player: &PlayerId) -> Arc<Mutex<()>> {
        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(*player).or_default())
    }

    /// Acquire one player's lock.
    pub async fn acquire(&self, player: &PlayerId) -> OwnedMutexGuard<()> {
        self.handle(player).lock_owned().await
    }

    /// Acquire several players' locks.
    ///
    /// Acquisition is in sorted id order regardless of lineup order, so two
    /// overlapping lineups cannot deadlock each other.
    pub async fn acquire_many(&self, players: &[PlayerId]) -> Vec<OwnedMutexGuard<()>> {
        let mut ids: Vec<PlayerId> = players.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let mut guards = Vec::with_capacity(ids.len());
        for id in ids {
            guards.push(self.handle(&id).lock_owned().await);
        }
        guards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn same_player_is_serialized() {
        let locks = Arc::new(PlayerLocks::new());
        let counter = Arc::new(AtomicU32::new(0));
        let player = PlayerId(1);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let locks = Arc::clone(&locks);
            let counter = Arc::clone(&counter);
            handles.push(tokio::spawn(async move {
                let _guard = locks.acquire(&player).await;
                // Inside the critical section at most one task observes 0.
                let in_flight = counter.fetch_add(1, Ordering::SeqCst);
                assert_eq!(in_flight, 0);
                tokio::task::yield_now().await;
                counter.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
    }

    #[tokio::test]
    async fn overlapping_lineups_do_not_deadlock() {
        let locks = Arc::new(PlayerLocks::new());

        let a = Arc::clone(&locks);
        let first = tokio::spawn(async move {
            for _ in 0..50 {
                let _guards = a.acquire_many(&[PlayerId(1), PlayerId(2), PlayerId(3)]).await;
            }
        });
        let b = Arc::clone(&locks);
        let second = tokio::spawn(async move {
            for _ in 0..50 {
                // Reversed lineup order; sorted acquisition keeps it safe.
                let _guards = b.acquire_many(&[PlayerId(3), PlayerId(2), PlayerId(1)]).await;
            }
        });

        first.await.unwrap();
        second.await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_ids_in_a_lineup_are_collapsed() {
        let locks = PlayerLocks::new();
        let guards = locks.acquire_many(&[PlayerId(5), PlayerId(5)]).await;
        assert_eq!(guards.len(), 1);
    }
}
