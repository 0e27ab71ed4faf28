//! Bout outcome payloads for the presentation layer.
//!
//! The runtime does not render anything; it hands back one report per bout
//! and the embedding application turns it into messages, embeds, or logs.

use brawl_core::{BrawlerId, LevelUpEvent, MatchResult, Matchup, Outcome, RewardGrant};

use crate::store::PlayerId;

/// One participant's slice of a bout.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ParticipantReport {
    pub player: PlayerId,
    /// Brawler the participant fought with (their selection at bout time).
    pub brawler: BrawlerId,
    pub opponent: Matchup,
    /// The participant's own duel result; rewards are paid on the team
    /// outcome, not this.
    pub result: MatchResult,
    pub grant: RewardGrant,
    pub level_up: Option<LevelUpEvent>,
}

/// Everything one resolved bout produced.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BoutReport {
    /// Team outcome: the sign of wins minus losses across participants.
    pub team_outcome: Outcome,
    /// Star player, when the team outcome grants one.
    pub star_player: Option<PlayerId>,
    pub participants: Vec<ParticipantReport>,
}
