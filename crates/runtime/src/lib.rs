//! Async orchestration around the deterministic bout engine.
//!
//! This crate wires the pure rules in `brawl-core` to the outside world:
//! the [`store::ProgressionStore`] adapter persists one record per player,
//! the [`locks::PlayerLocks`] table serializes mutation per player, and
//! [`service::BoutService`] drives a full bout — matchmaking, combat,
//! rewards, level-ups, and the atomic write-back — returning a
//! [`report::BoutReport`] for whatever presentation layer sits on top.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the orchestrator and its builder
//! - [`store`] provides the persistence adapters
//! - [`locks`] keeps per-player mutual exclusion internal to the crate
//! - [`report`] exposes the types downstream consumers receive
pub mod error;
pub mod locks;
pub mod report;
pub mod service;
pub mod store;

pub use error::{BoutError, Result, StoreError};
pub use locks::PlayerLocks;
pub use report::{BoutReport, ParticipantReport};
pub use service::{BoutService, BoutServiceBuilder};
pub use store::{JsonFileStore, MemoryStore, PlayerId, ProgressionStore};
