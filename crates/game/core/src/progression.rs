//! Persistent player progression and the level-up rules.
//!
//! `PlayerProgression` is the one-record-per-player state the store adapter
//! persists. All mutation goes through typed accessors; the runtime loads a
//! record, lets the engine mutate it in memory, and commits the whole record
//! back as one atomic write.

use std::collections::BTreeMap;

use crate::config::GameConfig;
use crate::env::{BrawlerId, TablesOracle};
use crate::error::ConfigurationError;

/// Per-brawler progression owned by one player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrawlerRecord {
    pub trophies: u32,
    /// Historical trophy maximum. Monotonically non-decreasing, and at least
    /// `trophies` after every reconciliation step.
    pub personal_best: u32,
    pub level: u8,
    pub powerpoints: u32,
    pub skins: Vec<String>,
    pub star_power_1: bool,
    pub star_power_2: bool,
}

impl BrawlerRecord {
    /// Record a freshly unlocked brawler starts with.
    pub fn fresh(skin: &str) -> Self {
        Self {
            trophies: 0,
            personal_best: 0,
            level: 1,
            powerpoints: 0,
            skins: vec![skin.to_owned()],
            star_power_1: false,
            star_power_2: false,
        }
    }
}

/// What the player currently has selected for bouts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    pub brawler: BrawlerId,
    pub skin: String,
    pub game_mode: String,
    /// Selected star power slot (1 or 2), if any is unlocked.
    pub star_power: Option<u8>,
}

/// Notification payload for an account level-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpEvent {
    /// The level just reached.
    pub level: u8,
    /// Tokens granted for the level that was left behind.
    pub token_reward: u32,
}

/// Persistent progression record, one per player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerProgression {
    pub experience: u32,
    pub level: u8,
    pub gold: u32,
    pub starpoints: u32,
    pub startokens: u32,
    /// Spendable token total. Level-up rewards land here uncapped.
    pub tokens: u32,
    /// Remaining bank capacity. Bout token rewards are clamped to this and
    /// drain it; refills are outside the engine.
    pub tokens_in_bank: u32,
    pub tutorial_finished: bool,
    pub brawlers: BTreeMap<BrawlerId, BrawlerRecord>,
    pub selected: Loadout,
}

impl PlayerProgression {
    /// The template every new account starts from.
    pub fn new_player(config: &GameConfig) -> Self {
        let starting = BrawlerId::new(config.starting_brawler.clone());
        let mut brawlers = BTreeMap::new();
        brawlers.insert(starting.clone(), BrawlerRecord::fresh(&config.starting_skin));

        Self {
            experience: 0,
            level: 1,
            gold: 0,
            starpoints: 0,
            startokens: 0,
            tokens: 0,
            tokens_in_bank: config.starting_bank,
            tutorial_finished: false,
            brawlers,
            selected: Loadout {
                brawler: starting,
                skin: config.starting_skin.clone(),
                game_mode: config.starting_game_mode.clone(),
                star_power: None,
            },
        }
    }

    /// Id of the currently selected brawler.
    pub fn selected_brawler_id(&self) -> &BrawlerId {
        &self.selected.brawler
    }

    pub fn brawler(&self, id: &BrawlerId) -> Option<&BrawlerRecord> {
        self.brawlers.get(id)
    }

    pub fn brawler_mut(&mut self, id: &BrawlerId) -> Option<&mut BrawlerRecord> {
        self.brawlers.get_mut(id)
    }

    /// The record behind the current selection.
    ///
    /// # Errors
    ///
    /// A selection pointing at a brawler the player does not own is stored
    /// data gone inconsistent, surfaced as a [`ConfigurationError`].
    pub fn selected_brawler(&self) -> Result<&BrawlerRecord, ConfigurationError> {
        self.brawlers
            .get(&self.selected.brawler)
            .ok_or_else(|| ConfigurationError::UnknownBrawler(self.selected.brawler.clone()))
    }

    /// Overwrite one brawler's trophy count.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] for a brawler the player does not
    /// own.
    pub fn set_brawler_trophies(
        &mut self,
        id: &BrawlerId,
        trophies: u32,
    ) -> Result<(), ConfigurationError> {
        let record = self
            .brawlers
            .get_mut(id)
            .ok_or_else(|| ConfigurationError::UnknownBrawler(id.clone()))?;
        record.trophies = trophies;
        Ok(())
    }

    /// Raise a brawler's personal best to its trophy count if it was
    /// exceeded. Never lowers it. Returns whether it moved.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] for a brawler the player does not
    /// own.
    pub fn reconcile_personal_best(&mut self, id: &BrawlerId) -> Result<bool, ConfigurationError> {
        let record = self
            .brawlers
            .get_mut(id)
            .ok_or_else(|| ConfigurationError::UnknownBrawler(id.clone()))?;
        if record.trophies > record.personal_best {
            record.personal_best = record.trophies;
            return Ok(true);
        }
        Ok(false)
    }

    /// Trophy total across every owned brawler.
    pub fn total_trophies(&self) -> u32 {
        self.brawlers.values().map(|record| record.trophies).sum()
    }

    /// Personal-best total across every owned brawler.
    pub fn total_personal_best(&self) -> u32 {
        self.brawlers
            .values()
            .map(|record| record.personal_best)
            .sum()
    }

    /// Apply accumulated experience against the level table.
    ///
    /// At most one level per call: the threshold for the current level is
    /// consumed, the excess carries forward (never reset to zero), and the
    /// token reward for the vacated level lands in `tokens` — the bank cap
    /// does not apply on this path. A carry that still exceeds the next
    /// threshold waits for the next call.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when the level table has no row for
    /// the current level.
    pub fn apply_experience(
        &mut self,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Result<Option<LevelUpEvent>, ConfigurationError> {
        let threshold = tables
            .xp_threshold(self.level)
            .ok_or(ConfigurationError::MissingLevelRow(self.level))?;

        if self.experience < threshold {
            return Ok(None);
        }

        let token_reward = tables
            .level_token_reward(self.level)
            .ok_or(ConfigurationError::MissingLevelRow(self.level))?;

        self.experience -= threshold;
        self.level += 1;
        self.tokens += token_reward;

        Ok(Some(LevelUpEvent {
            level: self.level,
            token_reward,
        }))
    }
}
