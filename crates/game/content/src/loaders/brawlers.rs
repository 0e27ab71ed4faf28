//! Brawler catalog loader.
//!
//! Loads the brawler roster from RON files as a list of
//! `(id, BrawlerDefinition)` pairs and validates it into a
//! [`BrawlerCatalog`].

use std::path::Path;

use brawl_core::env::BrawlerDefinition;

use crate::catalog::BrawlerCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the brawler catalog from RON files.
pub struct BrawlerLoader;

impl BrawlerLoader {
    /// Load the catalog from a RON file.
    ///
    /// RON format: `Vec<(String, BrawlerDefinition)>`.
    pub fn load(path: &Path) -> LoadResult<BrawlerCatalog> {
        Self::parse(&read_file(path)?)
    }

    /// Parse the catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<BrawlerCatalog> {
        let raw: Vec<(String, BrawlerDefinition)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse brawler catalog RON: {}", e))?;
        BrawlerCatalog::new(raw)
    }
}
