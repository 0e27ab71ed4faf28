//! Trophy road and experience table loader.

use std::collections::BTreeMap;
use std::path::Path;

use crate::catalog::{GameTables, LevelRow};
use crate::loaders::{LoadResult, read_file};

/// Loader for the trophy road and experience tables from RON files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load both tables from their RON files.
    ///
    /// RON formats: the trophy road is
    /// `Map<game_type, Map<band_label, (draw, win, loss)>>`; the experience
    /// table is `Vec<LevelRow>`.
    pub fn load(trophy_road_path: &Path, xp_levels_path: &Path) -> LoadResult<GameTables> {
        Self::parse(&read_file(trophy_road_path)?, &read_file(xp_levels_path)?)
    }

    /// Parse both tables from RON text.
    pub fn parse(trophy_road: &str, xp_levels: &str) -> LoadResult<GameTables> {
        let road: BTreeMap<String, BTreeMap<String, [i32; 3]>> = ron::from_str(trophy_road)
            .map_err(|e| anyhow::anyhow!("Failed to parse trophy road RON: {}", e))?;
        let rows: Vec<LevelRow> = ron::from_str(xp_levels)
            .map_err(|e| anyhow::anyhow!("Failed to parse experience table RON: {}", e))?;
        GameTables::new(road, rows)
    }
}
