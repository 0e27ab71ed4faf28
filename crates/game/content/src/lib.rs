//! Static game data for the bout engine.
//!
//! This crate owns the shipped brawler catalog, the trophy road and
//! experience tables, and the game config, and turns RON/TOML files into the
//! oracle implementations `brawl-core` consumes. Everything is validated at
//! load time — in particular the liveness invariant the combat resolver's
//! termination argument depends on — so a bad data drop fails startup
//! instead of a bout.
pub mod catalog;
pub mod embedded;
pub mod loaders;

pub use catalog::{BrawlerCatalog, GameTables, LevelRow};
pub use loaders::{
    BrawlerLoader, ConfigLoader, ContentBundle, ContentFactory, LoadResult, TablesLoader,
};
