//! Bout reward calculation and application.
//!
//! Rewards are computed against a loaded progression record and applied to it
//! in memory; the runtime commits the whole record afterwards, so the
//! experience, token, bank, trophy, and personal-best changes of one grant
//! are never visible partially.

use crate::combat::Outcome;
use crate::env::{Position, TablesOracle};
use crate::error::ConfigurationError;
use crate::progression::PlayerProgression;

/// Game type the trophy road is consulted for. Team bouts all score as 3v3
/// in the shipped data.
pub const DEFAULT_GAME_TYPE: &str = "3v3";

/// Extra experience for the bout's star player, independent of position.
const STAR_PLAYER_EXPERIENCE: u32 = 10;

impl From<Outcome> for Position {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Position::Win,
            Outcome::Loss => Position::Loss,
            Outcome::Draw => Position::Draw,
        }
    }
}

/// Base token reward for a finishing position.
const fn position_tokens(position: Position) -> u32 {
    match position {
        Position::Win => 20,
        Position::Draw => 15,
        Position::Loss => 10,
    }
}

/// Base experience reward for a finishing position.
const fn position_experience(position: Position) -> u32 {
    match position {
        Position::Win => 8,
        Position::Draw => 6,
        Position::Loss => 4,
    }
}

/// Everything one bout pays out to one participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardGrant {
    /// Signed trophy movement for the selected brawler.
    pub trophy_delta: i32,
    /// Tokens granted, already clamped to the bank capacity at computation
    /// time.
    pub tokens: u32,
    pub experience: u32,
    pub star_player: bool,
}

/// Compute the grant for one participant. Pure: the record is only read.
///
/// Token rewards are clamped to the remaining bank capacity; the trophy
/// delta comes from the trophy road band of the *selected* brawler's current
/// trophy count.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] when the selection is not owned or the
/// trophy road has no row for the game type and band. The record is
/// untouched either way.
pub fn compute_reward(
    progression: &PlayerProgression,
    outcome: Outcome,
    is_star_player: bool,
    tables: &(impl TablesOracle + ?Sized),
    game_type: &str,
) -> Result<RewardGrant, ConfigurationError> {
    let position = Position::from(outcome);

    let tokens = position_tokens(position).min(progression.tokens_in_bank);

    let mut experience = position_experience(position);
    if is_star_player {
        experience += STAR_PLAYER_EXPERIENCE;
    }

    let trophies = progression.selected_brawler()?.trophies;
    let trophy_delta = tables
        .trophy_reward(game_type, trophies, position)
        .ok_or_else(|| ConfigurationError::MissingTrophyBand {
            game_type: game_type.to_owned(),
            trophies,
        })?;

    Ok(RewardGrant {
        trophy_delta,
        tokens,
        experience,
        star_player: is_star_player,
    })
}

/// Apply a grant computed by [`compute_reward`] against the same record.
///
/// Drains the bank by the granted tokens, credits tokens and experience,
/// moves the selected brawler's trophies (saturating at zero), and
/// reconciles its personal best.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] when the selection is not owned.
pub fn apply_reward(
    progression: &mut PlayerProgression,
    grant: &RewardGrant,
) -> Result<(), ConfigurationError> {
    let granted = grant.tokens.min(progression.tokens_in_bank);
    progression.tokens_in_bank -= granted;
    progression.tokens += granted;
    progression.experience += grant.experience;

    let selected = progression.selected_brawler_id().clone();
    let trophies = progression
        .selected_brawler()?
        .trophies
        .saturating_add_signed(grant.trophy_delta);
    progression.set_brawler_trophies(&selected, trophies)?;
    progression.reconcile_personal_best(&selected)?;

    Ok(())
}

/// Compute and apply one bout's reward in a single step, returning the
/// grant for caller-side notification.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] with the record untouched.
pub fn grant_bout_reward(
    progression: &mut PlayerProgression,
    outcome: Outcome,
    is_star_player: bool,
    tables: &(impl TablesOracle + ?Sized),
    game_type: &str,
) -> Result<RewardGrant, ConfigurationError> {
    let grant = compute_reward(progression, outcome, is_star_player, tables, game_type)?;
    apply_reward(progression, &grant)?;
    Ok(grant)
}
