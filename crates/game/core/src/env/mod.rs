//! Traits describing read-only rule data.
//!
//! Oracles expose the brawler catalog, the trophy road and experience tables,
//! and seeded randomness. The [`Env`] aggregate bundles them so the engine can
//! access everything it needs without hard coupling to concrete
//! implementations (the content crate provides the shipped ones).
mod brawlers;
mod error;
mod rng;
mod tables;

pub use brawlers::{AttackProfile, BrawlerDefinition, BrawlerId, BrawlerOracle, UltimateProfile};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use tables::{Position, TablesOracle, trophy_band};

/// Aggregates the read-only oracles required by matchmaking and bout
/// resolution.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, B, T, R>
where
    B: BrawlerOracle + ?Sized,
    T: TablesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    brawlers: Option<&'a B>,
    tables: Option<&'a T>,
    rng: Option<&'a R>,
}

pub type BoutEnv<'a> = Env<'a, dyn BrawlerOracle + 'a, dyn TablesOracle + 'a, dyn RngOracle + 'a>;

impl<'a, B, T, R> Env<'a, B, T, R>
where
    B: BrawlerOracle + ?Sized,
    T: TablesOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(brawlers: Option<&'a B>, tables: Option<&'a T>, rng: Option<&'a R>) -> Self {
        Self {
            brawlers,
            tables,
            rng,
        }
    }

    pub fn with_all(brawlers: &'a B, tables: &'a T, rng: &'a R) -> Self {
        Self::new(Some(brawlers), Some(tables), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            brawlers: None,
            tables: None,
            rng: None,
        }
    }

    /// Returns the BrawlerOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::BrawlersNotAvailable` if no brawler oracle was
    /// provided.
    pub fn brawlers(&self) -> Result<&'a B, OracleError> {
        self.brawlers.ok_or(OracleError::BrawlersNotAvailable)
    }

    /// Returns the TablesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TablesNotAvailable` if no tables oracle was
    /// provided.
    pub fn tables(&self) -> Result<&'a T, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}
