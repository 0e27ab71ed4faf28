//! Brawler catalog definitions and oracle interface.
//!
//! `BrawlerDefinition` holds a brawler's level-1 stats in a data-driven way;
//! definitions are loaded from RON catalogs at startup and never mutated at
//! runtime. The `BrawlerOracle` trait lets the engine resolve a definition by
//! id and enumerate the roster for matchmaking without knowing where the data
//! came from.

use core::fmt;

/// Identifier of a brawler in the static catalog (e.g. "Shelly").
///
/// Stored player data references brawlers by this id, so a mismatch between a
/// stored selection and the catalog surfaces as a
/// [`ConfigurationError`](crate::ConfigurationError).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BrawlerId(pub String);

impl BrawlerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrawlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BrawlerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Normal attack profile of a brawler.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackProfile {
    /// Damage dealt by one landed attack, at level 1.
    pub damage: u32,

    /// Landed attacks needed to charge one ultimate. The shipped catalog
    /// uses 5 for every brawler.
    pub charges_per_ultimate: u32,
}

/// Ultimate (super) profile of a brawler.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UltimateProfile {
    /// Damage dealt by one landed ultimate, at level 1.
    pub damage: u32,
}

/// Immutable per-brawler stat block, parameterized by level through
/// [`crate::stats::scale_stat`].
///
/// Liveness: the resolver's termination argument requires `attack.damage`
/// and `ultimate.damage` to be strictly positive and
/// `attack.charges_per_ultimate >= 1`; the content crate rejects catalogs
/// that violate this.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrawlerDefinition {
    pub base_health: u32,
    pub attack: AttackProfile,
    pub ultimate: UltimateProfile,
}

/// Read-only access to the brawler catalog.
pub trait BrawlerOracle: Send + Sync {
    /// Resolve a brawler id to its definition, if the catalog knows it.
    fn definition(&self, id: &BrawlerId) -> Option<&BrawlerDefinition>;

    /// Every brawler id in the catalog, in a stable order. Matchmaking draws
    /// opponents uniformly from this roster.
    fn roster(&self) -> &[BrawlerId];
}
