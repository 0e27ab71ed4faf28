//! Opponent selection bounded by the player's skill level.
//!
//! The matchmaker is a pure function of the RNG and the player's brawler
//! level: it never rejects an input (out-of-range levels are clamped) and
//! always produces a valid matchup.

use crate::config::GameConfig;
use crate::env::{BoutEnv, BrawlerId, compute_seed};
use crate::error::ConfigurationError;

/// Roll contexts within the matchmaking seed.
const CONTEXT_BRAWLER: u32 = 0;
const CONTEXT_LEVEL: u32 = 1;
const CONTEXT_STAR_POWER: u32 = 2;

/// An opponent produced by matchmaking.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    pub brawler: BrawlerId,
    /// Always within [1, 10].
    pub level: u8,
    /// Bonus star power slot (1 or 2), granted only when the raw level roll
    /// overflowed past the cap — not merely when it landed on 10.
    pub star_power: Option<u8>,
}

/// Draw an opponent for a player whose selected brawler is at
/// `player_level`.
///
/// The opponent's brawler is uniform over the whole roster; its level is the
/// player's level plus a uniform offset in {-1, 0, +1}, clamped to [1, 10].
///
/// # Errors
///
/// Returns a [`ConfigurationError`] only when the environment is missing an
/// oracle or the roster is empty — both load-time defects, not runtime
/// conditions.
pub fn match_opponent(
    env: &BoutEnv<'_>,
    player_level: u8,
    seed: u64,
) -> Result<Matchup, ConfigurationError> {
    let brawlers = env.brawlers()?;
    let rng = env.rng()?;

    let roster = brawlers.roster();
    if roster.is_empty() {
        return Err(ConfigurationError::EmptyRoster);
    }

    let pick = rng.pick_index(compute_seed(seed, 0, 0, CONTEXT_BRAWLER), roster.len());
    let brawler = roster[pick].clone();

    let offset = rng.pick_index(compute_seed(seed, 0, 0, CONTEXT_LEVEL), 3) as i32 - 1;
    let raw_level = GameConfig::clamp_level(player_level) as i32 + offset;

    let star_power = if raw_level > GameConfig::MAX_BRAWLER_LEVEL as i32 {
        let slot = rng.pick_index(compute_seed(seed, 0, 0, CONTEXT_STAR_POWER), 2) as u8 + 1;
        Some(slot)
    } else {
        None
    };

    let level = raw_level.clamp(
        GameConfig::MIN_BRAWLER_LEVEL as i32,
        GameConfig::MAX_BRAWLER_LEVEL as i32,
    ) as u8;

    Ok(Matchup {
        brawler,
        level,
        star_power,
    })
}
