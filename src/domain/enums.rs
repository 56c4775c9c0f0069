use anyhow::{anyhow, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// Regions the market-data service aggregates over
pub const REGIONS: &[&str] = &["Japan", "North-America", "Europe", "Oceania"];

/// Data centers as (name, region)
pub const DATA_CENTERS: &[(&str, &str)] = &[
    ("Elemental", "Japan"),
    ("Gaia", "Japan"),
    ("Mana", "Japan"),
    ("Meteor", "Japan"),
    ("Aether", "North-America"),
    ("Crystal", "North-America"),
    ("Dynamis", "North-America"),
    ("Primal", "North-America"),
    ("Chaos", "Europe"),
    ("Light", "Europe"),
    ("Materia", "Oceania"),
];

/// Which servers a price query covers.
///
/// Region and data center tokens aggregate listings across several worlds,
/// so each listing carries the world it came from. A world token covers a
/// single server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarketScope {
    Region(String),
    DataCenter(String),
    World(String),
}

// Scopes travel as their plain token, the same string the service expects
impl Serialize for MarketScope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.token())
    }
}

impl MarketScope {
    /// Parse a region, data center or world token.
    ///
    /// Known regions and data centers are matched case-insensitively and
    /// canonicalised; anything else non-blank is taken as a world name.
    pub fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if token.is_empty() {
            return Err(anyhow!("Empty market scope"));
        }

        if let Some(region) = REGIONS.iter().find(|r| r.eq_ignore_ascii_case(token)) {
            return Ok(MarketScope::Region(region.to_string()));
        }

        if let Some((dc, _)) = DATA_CENTERS.iter().find(|(dc, _)| dc.eq_ignore_ascii_case(token)) {
            return Ok(MarketScope::DataCenter(dc.to_string()));
        }

        Ok(MarketScope::World(token.to_string()))
    }

    /// The token used in the market-data URL path
    pub fn token(&self) -> &str {
        match self {
            MarketScope::Region(name) | MarketScope::DataCenter(name) | MarketScope::World(name) => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MarketScope::Region(_) => "region",
            MarketScope::DataCenter(_) => "data center",
            MarketScope::World(_) => "world",
        }
    }

    /// Whether listings in this scope can come from more than one world
    pub fn spans_worlds(&self) -> bool {
        !matches!(self, MarketScope::World(_))
    }
}

impl fmt::Display for MarketScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.token(), self.kind())
    }
}
