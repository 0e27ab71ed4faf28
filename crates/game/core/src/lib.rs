//! Deterministic bout resolution and progression rules shared across services.
//!
//! `brawl-core` defines the canonical rules (matchmaking, combat, rewards,
//! leveling) and exposes pure APIs that can be reused by both the runtime and
//! offline balance tools. Every random decision flows through the seed-based
//! [`env::RngOracle`], so a bout replays identically from its seed, and all
//! static data reaches the engine through the oracle traits in [`env`].
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod matchmaker;
pub mod progression;
pub mod rewards;
pub mod stats;

pub use combat::{Combatant, MatchResult, Outcome, resolve_bout};
pub use config::GameConfig;
pub use env::{
    AttackProfile, BoutEnv, BrawlerDefinition, BrawlerId, BrawlerOracle, Env, OracleError, PcgRng,
    Position, RngOracle, TablesOracle, UltimateProfile, compute_seed, trophy_band,
};
pub use error::ConfigurationError;
pub use matchmaker::{Matchup, match_opponent};
pub use progression::{BrawlerRecord, LevelUpEvent, Loadout, PlayerProgression};
pub use rewards::{DEFAULT_GAME_TYPE, RewardGrant, apply_reward, compute_reward, grant_bout_reward};
pub use stats::CombatantStats;
