//! Reward and experience table oracle interface.
//!
//! Two tables drive progression: the trophy road (trophy delta per game type,
//! trophy band, and finishing position) and the experience table (per-level
//! threshold and level-up token reward). Both are loaded once at startup and
//! exposed to the engine through [`TablesOracle`].

use strum::Display;

/// Finishing position of a bout, used to index trophy road reward vectors.
///
/// The numeric values are the table indices: every band maps to a 3-element
/// vector ordered draw, win, loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    Draw = 0,
    Win = 1,
    Loss = 2,
}

impl Position {
    /// Index of this position inside a trophy road reward vector.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Map a trophy count to its trophy road band label.
///
/// Bands are fixed rules, not data: 50-wide up to 100, then 100-wide up to
/// 1200, then open-ended. The labels are the keys the trophy road catalog is
/// written against.
pub fn trophy_band(trophies: u32) -> &'static str {
    match trophies {
        0..=49 => "0-49",
        50..=99 => "50-99",
        100..=199 => "100-199",
        200..=299 => "200-299",
        300..=399 => "300-399",
        400..=499 => "400-499",
        500..=599 => "500-599",
        600..=699 => "600-699",
        700..=799 => "700-799",
        800..=899 => "800-899",
        900..=999 => "900-999",
        1000..=1099 => "1000-1099",
        1100..=1199 => "1100-1199",
        _ => "1200+",
    }
}

/// Read-only access to the trophy road and experience tables.
pub trait TablesOracle: Send + Sync {
    /// Trophy delta for finishing at `position` with the given trophy count,
    /// in the given game type ("3v3" in the shipped data). `None` when the
    /// game type or band is missing from the table.
    fn trophy_reward(&self, game_type: &str, trophies: u32, position: Position) -> Option<i32>;

    /// Experience needed to leave `level`. `None` past the end of the table.
    fn xp_threshold(&self, level: u8) -> Option<u32>;

    /// Tokens granted for leaving `level`. `None` past the end of the table.
    fn level_token_reward(&self, level: u8) -> Option<u32>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_the_documented_ranges() {
        assert_eq!(trophy_band(0), "0-49");
        assert_eq!(trophy_band(49), "0-49");
        assert_eq!(trophy_band(50), "50-99");
        assert_eq!(trophy_band(120), "100-199");
        assert_eq!(trophy_band(199), "100-199");
        assert_eq!(trophy_band(1199), "1100-1199");
        assert_eq!(trophy_band(1200), "1200+");
        assert_eq!(trophy_band(u32::MAX), "1200+");
    }

    #[test]
    fn position_indices_match_reward_vector_order() {
        assert_eq!(Position::Draw.index(), 0);
        assert_eq!(Position::Win.index(), 1);
        assert_eq!(Position::Loss.index(), 2);
    }
}
