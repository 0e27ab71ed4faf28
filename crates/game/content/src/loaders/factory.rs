//! Factory assembling a full content bundle.

use std::path::Path;

use brawl_core::GameConfig;

use crate::catalog::{BrawlerCatalog, GameTables};
use crate::embedded;
use crate::loaders::{BrawlerLoader, ConfigLoader, LoadResult, TablesLoader};

/// Everything the runtime needs to serve bouts: the brawler catalog, the
/// reward tables, and the game config.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub catalog: BrawlerCatalog,
    pub tables: GameTables,
    pub config: GameConfig,
}

/// Assembles [`ContentBundle`]s from a data directory or the embedded
/// defaults.
pub struct ContentFactory;

impl ContentFactory {
    /// File names expected inside a data directory.
    pub const BRAWLERS_FILE: &'static str = "brawlers.ron";
    pub const TROPHY_ROAD_FILE: &'static str = "trophy_road.ron";
    pub const XP_LEVELS_FILE: &'static str = "xp_levels.ron";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Build the bundle from the data files compiled into this crate.
    pub fn embedded() -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            catalog: BrawlerLoader::parse(embedded::BRAWLERS_RON)?,
            tables: TablesLoader::parse(embedded::TROPHY_ROAD_RON, embedded::XP_LEVELS_RON)?,
            config: ConfigLoader::parse(embedded::CONFIG_TOML)?,
        })
    }

    /// Build the bundle from a data directory using the standard file names.
    pub fn from_dir(dir: &Path) -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            catalog: BrawlerLoader::load(&dir.join(Self::BRAWLERS_FILE))?,
            tables: TablesLoader::load(
                &dir.join(Self::TROPHY_ROAD_FILE),
                &dir.join(Self::XP_LEVELS_FILE),
            )?,
            config: ConfigLoader::load(&dir.join(Self::CONFIG_FILE))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawl_core::env::{BrawlerId, BrawlerOracle, Position, TablesOracle};

    #[test]
    fn embedded_bundle_loads_and_validates() {
        let bundle = ContentFactory::embedded().unwrap();

        assert_eq!(bundle.catalog.len(), 3);
        assert!(bundle.catalog.definition(&BrawlerId::from("Shelly")).is_some());
        assert!(bundle.catalog.definition(&BrawlerId::from("Nita")).is_some());
        assert!(bundle.catalog.definition(&BrawlerId::from("Colt")).is_some());

        // The starting brawler must exist in the catalog.
        let starting = BrawlerId::new(bundle.config.starting_brawler.clone());
        assert!(bundle.catalog.definition(&starting).is_some());
    }

    #[test]
    fn embedded_tables_carry_the_documented_shape() {
        let bundle = ContentFactory::embedded().unwrap();
        let tables = &bundle.tables;

        // 14 bands, three positions, 3v3 game type.
        assert_eq!(tables.trophy_reward("3v3", 120, Position::Win), Some(8));
        assert_eq!(tables.trophy_reward("3v3", 0, Position::Loss), Some(0));
        assert!(tables.trophy_reward("3v3", 1500, Position::Win).is_some());
        assert_eq!(tables.trophy_reward("duo", 0, Position::Win), None);

        // Experience rows are contiguous from level 1.
        assert_eq!(tables.xp_threshold(1), Some(30));
        for level in 1..=tables.max_level() {
            assert!(tables.xp_threshold(level).is_some());
            assert!(tables.level_token_reward(level).is_some());
        }
        assert_eq!(tables.xp_threshold(tables.max_level() + 1), None);
    }

    #[test]
    fn embedded_definitions_satisfy_liveness() {
        let bundle = ContentFactory::embedded().unwrap();
        for id in bundle.catalog.roster() {
            let def = bundle.catalog.definition(id).unwrap();
            assert!(def.attack.damage > 0);
            assert!(def.ultimate.damage > 0);
            assert!(def.attack.charges_per_ultimate >= 1);
        }
    }
}
