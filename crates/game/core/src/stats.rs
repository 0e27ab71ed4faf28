//! Level scaling for brawler stats.
//!
//! Definitions store level-1 values; everything else is derived and never
//! stored. Scaling adds 5% of the base per level above 1, in integer
//! arithmetic (a level-10 brawler fields 1.45x its base stats):
//!
//! scaled = base + (base / 20) x (level - 1)

use crate::config::GameConfig;
use crate::env::BrawlerDefinition;

/// Scale a level-1 stat to the given level. Levels outside [1, 10] are
/// clamped before scaling.
pub fn scale_stat(base: u32, level: u8) -> u32 {
    let level = GameConfig::clamp_level(level) as u32;
    base + (base / 20) * (level - 1)
}

/// Level-scaled stat block of one combatant. Computed at bout start from the
/// definition, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatantStats {
    pub health: u32,
    pub attack_damage: u32,
    pub ultimate_damage: u32,
}

impl CombatantStats {
    /// Compute the stat block for a brawler at the given level.
    pub fn at_level(def: &BrawlerDefinition, level: u8) -> Self {
        Self {
            health: scale_stat(def.base_health, level),
            attack_damage: scale_stat(def.attack.damage, level),
            ultimate_damage: scale_stat(def.ultimate.damage, level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AttackProfile, UltimateProfile};

    fn shelly() -> BrawlerDefinition {
        BrawlerDefinition {
            base_health: 3800,
            attack: AttackProfile {
                damage: 1680,
                charges_per_ultimate: 5,
            },
            ultimate: UltimateProfile { damage: 2240 },
        }
    }

    #[test]
    fn level_one_is_the_base() {
        assert_eq!(scale_stat(3800, 1), 3800);
    }

    #[test]
    fn level_ten_is_45_percent_up() {
        assert_eq!(scale_stat(4000, 10), 4000 + 200 * 9);
    }

    #[test]
    fn out_of_range_levels_clamp() {
        assert_eq!(scale_stat(1000, 0), scale_stat(1000, 1));
        assert_eq!(scale_stat(1000, 14), scale_stat(1000, 10));
    }

    #[test]
    fn stat_block_scales_every_field() {
        let stats = CombatantStats::at_level(&shelly(), 5);
        assert_eq!(stats.health, scale_stat(3800, 5));
        assert_eq!(stats.attack_damage, scale_stat(1680, 5));
        assert_eq!(stats.ultimate_damage, scale_stat(2240, 5));
    }
}
