//! Default data files compiled into the crate.
//!
//! Embedding the shipped catalog keeps the engine runnable without a data
//! directory (tests, tools, first boot); deployments can still override
//! everything through [`crate::ContentFactory::from_dir`].

pub const BRAWLERS_RON: &str = include_str!("../data/brawlers.ron");
pub const TROPHY_ROAD_RON: &str = include_str!("../data/trophy_road.ron");
pub const XP_LEVELS_RON: &str = include_str!("../data/xp_levels.ron");
pub const CONFIG_TOML: &str = include_str!("../data/config.toml");
