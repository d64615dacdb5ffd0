//! Vendor records as supplied by the catalog.
//!
//! Vendors are immutable from this workspace's perspective: the data source
//! owns them, the computation crates only read them and attach derived
//! fields to fresh copies.

use std::str::FromStr;

use crate::geo::Coordinates;

// ── Vendor ────────────────────────────────────────────────────────────────────

/// A service provider that can be located, ranked, and plotted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vendor {
    pub id:           String,
    pub name:         String,
    pub description:  Option<String>,
    pub services:     Vec<String>,
    pub pricing:      Pricing,
    pub location:     VendorLocation,
    pub rating:       Option<f32>,
    pub review_count: Option<u32>,
    pub availability: Availability,
    pub verified:     bool,
}

/// Where the vendor is.  Unlike [`UserLocation`](crate::UserLocation),
/// coordinates are mandatory.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VendorLocation {
    pub city:        Option<String>,
    pub coordinates: Coordinates,
}

// ── Pricing ───────────────────────────────────────────────────────────────────

/// Published rates.  Every tier is optional; a vendor with none set is the
/// valid "contact for pricing" state, never an error.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pricing {
    pub hourly:   Option<f64>,
    pub daily:    Option<f64>,
    pub project:  Option<f64>,
    pub currency: String,
}

// ── Availability ──────────────────────────────────────────────────────────────

/// Current booking state, as reported by the catalog.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Availability {
    #[default]
    Available,
    Busy,
    Unavailable,
}

impl Availability {
    /// Lowercase label, matching the catalog CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Available   => "available",
            Availability::Busy        => "busy",
            Availability::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available"   => Ok(Availability::Available),
            "busy"        => Ok(Availability::Busy),
            "unavailable" => Ok(Availability::Unavailable),
            other => Err(format!("unknown availability: {other:?}")),
        }
    }
}
