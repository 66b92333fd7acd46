//! Domain data structures for skip offerings and the location they are offered at.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Postcode used when the surrounding application does not supply one.
pub const DEFAULT_POSTCODE: &str = "NR32";
/// Area used when the surrounding application does not supply one.
pub const DEFAULT_AREA: &str = "Lowestoft";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier of a skip offering, stable for the session.
pub struct SkipId(pub u64);

impl fmt::Display for SkipId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Postcode and area a listing is requested for.
pub struct Location {
    /// Outward postcode, e.g. `NR32`.
    pub postcode: String,
    /// Human-readable area name, e.g. `Lowestoft`.
    pub area: String,
}

impl Location {
    /// Construct a location from its parts.
    #[must_use]
    pub fn new<P: Into<String>, A: Into<String>>(postcode: P, area: A) -> Self {
        Self {
            postcode: postcode.into(),
            area: area.into(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(DEFAULT_POSTCODE, DEFAULT_AREA)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", self.postcode, self.area)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A skip size offered at a location. Read-only once loaded.
pub struct SkipOffering {
    /// Unique identifier.
    pub id: SkipId,
    /// Skip size in cubic yards.
    pub size: u32,
    /// Price before VAT, in pounds.
    pub price_before_vat: f64,
    /// VAT in percentage points (20 means 20%).
    pub vat: f64,
    /// Length of the hire in days.
    #[serde(default)]
    pub hire_period_days: u32,
    /// Whether heavy waste such as soil or rubble may go in the skip.
    #[serde(default)]
    pub allows_heavy_waste: bool,
    /// Whether the skip may be placed on a public road.
    #[serde(default = "default_allowed_on_road")]
    pub allowed_on_road: bool,
}

fn default_allowed_on_road() -> bool {
    true
}
