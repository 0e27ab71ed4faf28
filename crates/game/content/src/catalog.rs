//! Validated, in-memory form of the shipped data tables.
//!
//! `BrawlerCatalog` and `GameTables` are what the loaders produce and what
//! the runtime hands to the engine as oracles. Construction validates the
//! data; after that every lookup is infallible-or-`None` and allocation-free.

use std::collections::BTreeMap;

use brawl_core::env::{
    BrawlerDefinition, BrawlerId, BrawlerOracle, Position, TablesOracle, trophy_band,
};

use crate::loaders::LoadResult;

/// Band labels the trophy road must cover, in road order. These mirror the
/// ranges in [`trophy_band`].
pub(crate) const BAND_LABELS: [&str; 14] = [
    "0-49", "50-99", "100-199", "200-299", "300-399", "400-499", "500-599", "600-699", "700-799",
    "800-899", "900-999", "1000-1099", "1100-1199", "1200+",
];

/// The full brawler roster, keyed by id.
#[derive(Clone, Debug)]
pub struct BrawlerCatalog {
    definitions: BTreeMap<BrawlerId, BrawlerDefinition>,
    roster: Vec<BrawlerId>,
}

impl BrawlerCatalog {
    /// Build and validate a catalog from raw `(id, definition)` entries.
    ///
    /// Rejects empty catalogs, duplicate ids, and definitions that could
    /// stall a bout: zero attack or ultimate damage, or a zero ultimate
    /// charge count.
    pub fn new(entries: Vec<(String, BrawlerDefinition)>) -> LoadResult<Self> {
        if entries.is_empty() {
            anyhow::bail!("brawler catalog is empty");
        }

        let mut definitions = BTreeMap::new();
        let mut roster = Vec::with_capacity(entries.len());

        for (id, def) in entries {
            if def.attack.damage == 0 {
                anyhow::bail!("brawler '{}' has zero attack damage", id);
            }
            if def.ultimate.damage == 0 {
                anyhow::bail!("brawler '{}' has zero ultimate damage", id);
            }
            if def.attack.charges_per_ultimate == 0 {
                anyhow::bail!("brawler '{}' has a zero ultimate charge count", id);
            }

            let id = BrawlerId::new(id);
            if definitions.insert(id.clone(), def).is_some() {
                anyhow::bail!("duplicate brawler id '{}'", id);
            }
            roster.push(id);
        }

        Ok(Self { definitions, roster })
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}

impl BrawlerOracle for BrawlerCatalog {
    fn definition(&self, id: &BrawlerId) -> Option<&BrawlerDefinition> {
        self.definitions.get(id)
    }

    fn roster(&self) -> &[BrawlerId] {
        &self.roster
    }
}

/// One row of the experience table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LevelRow {
    pub level: u8,
    /// Experience needed to leave this level.
    pub threshold: u32,
    /// Tokens granted for leaving it.
    pub token_reward: u32,
}

/// Trophy road and experience tables, validated and merged.
#[derive(Clone, Debug)]
pub struct GameTables {
    trophy_road: BTreeMap<String, BTreeMap<String, [i32; 3]>>,
    levels: BTreeMap<u8, LevelRow>,
}

impl GameTables {
    /// Build and validate the tables.
    ///
    /// Every game type must carry all 14 bands, and level rows must start at
    /// 1 and be contiguous — a hole would turn into a spurious
    /// `ConfigurationError` mid-bout.
    pub fn new(
        trophy_road: BTreeMap<String, BTreeMap<String, [i32; 3]>>,
        level_rows: Vec<LevelRow>,
    ) -> LoadResult<Self> {
        if trophy_road.is_empty() {
            anyhow::bail!("trophy road has no game types");
        }
        for (game_type, bands) in &trophy_road {
            for label in BAND_LABELS {
                if !bands.contains_key(label) {
                    anyhow::bail!("game type '{}' is missing trophy band '{}'", game_type, label);
                }
            }
            if bands.len() != BAND_LABELS.len() {
                anyhow::bail!("game type '{}' carries unknown trophy bands", game_type);
            }
        }

        if level_rows.is_empty() {
            anyhow::bail!("experience table is empty");
        }
        let mut levels = BTreeMap::new();
        for row in level_rows {
            if levels.insert(row.level, row).is_some() {
                anyhow::bail!("duplicate experience row for level {}", row.level);
            }
        }
        let mut expected = 1u8;
        for level in levels.keys() {
            if *level != expected {
                anyhow::bail!("experience table is not contiguous at level {}", expected);
            }
            expected += 1;
        }

        Ok(Self { trophy_road, levels })
    }

    /// Highest level the experience table has a row for.
    pub fn max_level(&self) -> u8 {
        *self.levels.keys().last().unwrap_or(&0)
    }
}

impl TablesOracle for GameTables {
    fn trophy_reward(&self, game_type: &str, trophies: u32, position: Position) -> Option<i32> {
        let vector = self.trophy_road.get(game_type)?.get(trophy_band(trophies))?;
        Some(vector[position.index()])
    }

    fn xp_threshold(&self, level: u8) -> Option<u32> {
        self.levels.get(&level).map(|row| row.threshold)
    }

    fn level_token_reward(&self, level: u8) -> Option<u32> {
        self.levels.get(&level).map(|row| row.token_reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawl_core::env::{AttackProfile, UltimateProfile};

    fn definition(damage: u32, ult: u32, charges: u32) -> BrawlerDefinition {
        BrawlerDefinition {
            base_health: 3000,
            attack: AttackProfile {
                damage,
                charges_per_ultimate: charges,
            },
            ultimate: UltimateProfile { damage: ult },
        }
    }

    #[test]
    fn rejects_definitions_that_could_stall_a_bout() {
        for (damage, ult, charges) in [(0, 100, 5), (100, 0, 5), (100, 100, 0)] {
            let result = BrawlerCatalog::new(vec![("Broken".into(), definition(damage, ult, charges))]);
            assert!(result.is_err());
        }
    }

    #[test]
    fn rejects_empty_and_duplicate_catalogs() {
        assert!(BrawlerCatalog::new(vec![]).is_err());
        assert!(
            BrawlerCatalog::new(vec![
                ("Shelly".into(), definition(100, 200, 5)),
                ("Shelly".into(), definition(100, 200, 5)),
            ])
            .is_err()
        );
    }

    #[test]
    fn roster_keeps_catalog_order() {
        let catalog = BrawlerCatalog::new(vec![
            ("Shelly".into(), definition(100, 200, 5)),
            ("Colt".into(), definition(100, 200, 5)),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.roster()[0], BrawlerId::from("Shelly"));
        assert_eq!(catalog.roster()[1], BrawlerId::from("Colt"));
    }

    fn full_road() -> BTreeMap<String, BTreeMap<String, [i32; 3]>> {
        let bands: BTreeMap<String, [i32; 3]> = BAND_LABELS
            .iter()
            .map(|label| (label.to_string(), [2, 8, 0]))
            .collect();
        BTreeMap::from([("3v3".to_string(), bands)])
    }

    fn rows(count: u8) -> Vec<LevelRow> {
        (1..=count)
            .map(|level| LevelRow {
                level,
                threshold: 100,
                token_reward: 100,
            })
            .collect()
    }

    #[test]
    fn rejects_a_road_with_a_missing_band() {
        let mut road = full_road();
        road.get_mut("3v3").unwrap().remove("700-799");
        assert!(GameTables::new(road, rows(5)).is_err());
    }

    #[test]
    fn rejects_a_gappy_experience_table() {
        let mut gappy = rows(5);
        gappy.remove(2);
        assert!(GameTables::new(full_road(), gappy).is_err());
        assert!(GameTables::new(full_road(), vec![]).is_err());
    }

    #[test]
    fn lookups_resolve_band_and_level() {
        let tables = GameTables::new(full_road(), rows(5)).unwrap();
        assert_eq!(tables.trophy_reward("3v3", 120, Position::Win), Some(8));
        assert_eq!(tables.trophy_reward("3v3", 120, Position::Loss), Some(0));
        assert_eq!(tables.trophy_reward("solo", 120, Position::Win), None);
        assert_eq!(tables.xp_threshold(1), Some(100));
        assert_eq!(tables.xp_threshold(6), None);
        assert_eq!(tables.max_level(), 5);
    }
}
