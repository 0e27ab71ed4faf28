//! Error type for missing oracles.

/// A required oracle was not provided in the [`Env`](super::Env) aggregate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("brawler oracle not available")]
    BrawlersNotAvailable,

    #[error("tables oracle not available")]
    TablesNotAvailable,

    #[error("rng oracle not available")]
    RngNotAvailable,
}
