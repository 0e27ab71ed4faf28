//! Content loaders for reading game data from files.
//!
//! Loaders convert RON/TOML files into the validated catalog types in
//! [`crate::catalog`]. The factory assembles a full [`ContentBundle`] from
//! either a data directory or the embedded defaults.

pub mod brawlers;
pub mod config;
pub mod factory;
pub mod tables;

pub use brawlers::BrawlerLoader;
pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
