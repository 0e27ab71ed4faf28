//! Game config loader.
//!
//! The config TOML holds the new-player template knobs; missing keys fall
//! back to the engine defaults.

use std::path::Path;

use brawl_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GameConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        Self::parse(&read_file(path)?)
    }

    /// Parse the config from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse game config TOML: {}", e))
    }
}
