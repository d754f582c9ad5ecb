//! Enumerated value types shared by records and query options.
//!
//! Each enum serialises to the exact string the registry uses, both in JSON
//! bodies and as a query-parameter value (see [`Self::as_str`] on each type).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Order in which a module listing is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Relevance rank (the registry's default).
    Rank,
    /// Total download count, highest first.
    Downloads,
    /// Date of the most recent release, newest first.
    LatestRelease,
}

impl SortOption {
    /// Returns the wire value used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::Downloads => "downloads",
            Self::LatestRelease => "latest_release",
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Endorsements
// ---------------------------------------------------------------------------

/// Whether a module is endorsed through the Supported, Approved or Partner
/// programs.
///
/// Modules without an endorsement carry `null`; records model that as
/// `Option<Endorsement>`. Values added to the registry later decode as
/// [`Endorsement::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endorsement {
    Supported,
    Approved,
    Partner,
    /// An endorsement this client does not recognise.
    #[serde(other)]
    Unknown,
}

impl Endorsement {
    /// Returns the wire value used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supported => "supported",
            Self::Approved => "approved",
            Self::Partner => "partner",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Endorsement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Module groups
// ---------------------------------------------------------------------------

/// Licensing tier of a module.
///
/// `pe_only` modules are licensed for Puppet Enterprise customers only; every
/// other module is `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleGroup {
    Base,
    PeOnly,
    /// A group this client does not recognise.
    #[serde(other)]
    Unknown,
}

impl ModuleGroup {
    /// Returns the wire value used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::PeOnly => "pe_only",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ModuleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
