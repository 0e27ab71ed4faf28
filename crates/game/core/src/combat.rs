//! Bout resolution state machine.
//!
//! Two combatants trade blows in discrete ticks until at least one drops to
//! zero health. All damage rolls flow through the [`RngOracle`] with seeds
//! derived from the bout seed, the tick number, and the side, so a bout
//! replays identically from its seed.
//!
//! Termination: every shipped definition has strictly positive attack and
//! ultimate damage (the content crate enforces this), so each side keeps
//! landing hits with fixed positive probability and some health total is
//! strictly decreasing over time. There is no tick cap; a catalog that could
//! stall the loop is rejected at load time, not timed out at runtime.

use strum::Display;

use crate::config::GameConfig;
use crate::env::{BoutEnv, BrawlerDefinition, BrawlerId, RngOracle, compute_seed};
use crate::error::ConfigurationError;
use crate::stats::CombatantStats;

/// Seed channels for the two sides' rolls within a tick.
const CHANNEL_SIDE_A: u32 = 0;
const CHANNEL_SIDE_B: u32 = 1;

/// Roll contexts within one side's channel.
const CONTEXT_ATTACK: u32 = 0;
const CONTEXT_ULTIMATE: u32 = 1;

/// Outcome of a bout from one side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// The same bout seen from the other side.
    pub const fn invert(self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Draw => Self::Draw,
        }
    }
}

/// Result of a bout for one side. Consumed immediately by the reward
/// calculator; nothing mid-bout is ever persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub outcome: Outcome,
    /// Absolute health gap at the final tick. Overkill counts: health is not
    /// clamped at zero before the gap is taken.
    pub margin: u32,
}

/// One side of a bout. Created at bout start, discarded after resolution.
#[derive(Clone, Copy, Debug)]
pub struct Combatant {
    stats: CombatantStats,
    charges_per_ultimate: u32,
    /// May go negative on the final tick; the margin uses the raw value.
    health: i32,
    /// Landed attacks accumulated toward the next ultimate.
    charge: u32,
}

impl Combatant {
    pub fn new(def: &BrawlerDefinition, level: u8) -> Self {
        let stats = CombatantStats::at_level(def, level);
        Self {
            stats,
            charges_per_ultimate: def.attack.charges_per_ultimate.max(1),
            health: stats.health as i32,
            charge: 0,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn charge(&self) -> u32 {
        self.charge
    }

    /// Whether the next action is an ultimate instead of a normal attack.
    fn at_ultimate_trigger(&self) -> bool {
        self.charge > 0 && self.charge % self.charges_per_ultimate == 0
    }

    fn roll_attack(&self, rng: &(impl RngOracle + ?Sized), seed: u64) -> u32 {
        if rng.roll_d10(seed) <= GameConfig::ATTACK_HIT_WINDOW {
            self.stats.attack_damage
        } else {
            0
        }
    }

    fn roll_ultimate(&self, rng: &(impl RngOracle + ?Sized), seed: u64) -> u32 {
        if rng.roll_d10(seed) <= GameConfig::ULTIMATE_HIT_WINDOW {
            self.stats.ultimate_damage
        } else {
            0
        }
    }
}

/// Advance the bout by one tick.
///
/// Any side sitting on an ultimate trigger fires its ultimate this tick;
/// normal attacks happen only on ticks where neither side triggers, and both
/// sides then swing simultaneously. A charge counter only advances on hits
/// that dealt damage.
fn step_tick(
    a: &mut Combatant,
    b: &mut Combatant,
    rng: &(impl RngOracle + ?Sized),
    bout_seed: u64,
    tick: u64,
) {
    let a_ult = a.at_ultimate_trigger();
    let b_ult = b.at_ultimate_trigger();

    if a_ult {
        let dealt = a.roll_ultimate(rng, compute_seed(bout_seed, tick, CHANNEL_SIDE_A, CONTEXT_ULTIMATE));
        b.health -= dealt as i32;
        // A landed ultimate also feeds the meter, so the next one triggers
        // after four landed attacks instead of five, and a missed ultimate
        // stays on the trigger and fires again next tick.
        // TODO: confirm with balance whether back-to-back ultimate charging
        // is intended.
        if dealt > 0 {
            a.charge += 1;
        }
    }
    if b_ult {
        let dealt = b.roll_ultimate(rng, compute_seed(bout_seed, tick, CHANNEL_SIDE_B, CONTEXT_ULTIMATE));
        a.health -= dealt as i32;
        if dealt > 0 {
            b.charge += 1;
        }
    }

    if !a_ult && !b_ult {
        let dealt_a = a.roll_attack(rng, compute_seed(bout_seed, tick, CHANNEL_SIDE_A, CONTEXT_ATTACK));
        let dealt_b = b.roll_attack(rng, compute_seed(bout_seed, tick, CHANNEL_SIDE_B, CONTEXT_ATTACK));

        if dealt_a > 0 {
            a.charge += 1;
        }
        if dealt_b > 0 {
            b.charge += 1;
        }

        a.health -= dealt_b as i32;
        b.health -= dealt_a as i32;
    }
}

/// Resolve a bout between two brawlers.
///
/// Returns one [`MatchResult`] per side, in input order. Outcomes are
/// symmetric: a win for one side is a loss for the other, and a draw is a
/// draw for both.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] when either brawler id is missing from
/// the catalog or a required oracle is absent. No state outside the two
/// transient combatants is touched.
pub fn resolve_bout(
    env: &BoutEnv<'_>,
    bout_seed: u64,
    side_a: (&BrawlerId, u8),
    side_b: (&BrawlerId, u8),
) -> Result<(MatchResult, MatchResult), ConfigurationError> {
    let brawlers = env.brawlers()?;
    let rng = env.rng()?;

    let def_a = brawlers
        .definition(side_a.0)
        .ok_or_else(|| ConfigurationError::UnknownBrawler(side_a.0.clone()))?;
    let def_b = brawlers
        .definition(side_b.0)
        .ok_or_else(|| ConfigurationError::UnknownBrawler(side_b.0.clone()))?;

    let mut a = Combatant::new(def_a, side_a.1);
    let mut b = Combatant::new(def_b, side_b.1);

    let mut tick: u64 = 0;
    loop {
        tick += 1;
        step_tick(&mut a, &mut b, rng, bout_seed, tick);

        let margin = a.health.abs_diff(b.health);
        match (a.health <= 0, b.health <= 0) {
            (true, true) => {
                return Ok((
                    MatchResult {
                        outcome: Outcome::Draw,
                        margin,
                    },
                    MatchResult {
                        outcome: Outcome::Draw,
                        margin,
                    },
                ));
            }
            (false, true) => {
                return Ok((
                    MatchResult {
                        outcome: Outcome::Win,
                        margin,
                    },
                    MatchResult {
                        outcome: Outcome::Loss,
                        margin,
                    },
                ));
            }
            (true, false) => {
                return Ok((
                    MatchResult {
                        outcome: Outcome::Loss,
                        margin,
                    },
                    MatchResult {
                        outcome: Outcome::Win,
                        margin,
                    },
                ));
            }
            (false, false) => {}
        }
    }
}
