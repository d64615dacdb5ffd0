//! The requesting user: location and matching preferences.
//!
//! A `User` is created once per session by the data source and never mutated
//! by any `vr-*` crate; every downstream computation takes it by shared
//! reference and produces fresh derived records.

use crate::geo::Coordinates;

// ── User ──────────────────────────────────────────────────────────────────────

/// The person vendors are located and ranked for.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id:          String,
    pub email:       String,
    pub location:    UserLocation,
    pub preferences: Preferences,
}

/// Where the user is.  `coordinates` is optional: without it no distance or
/// bearing can be computed and every derived value is absent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserLocation {
    pub city:        Option<String>,
    pub coordinates: Option<Coordinates>,
}

// ── Preferences ───────────────────────────────────────────────────────────────

/// Matching preferences used by the recommendation filter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    /// Maximum acceptable vendor distance, kilometres (non-negative).
    pub max_distance_km:    f64,
    /// Service categories the user cares about.  Informational for ranking;
    /// the recommendation filter is distance + budget only.
    pub preferred_services: Vec<String>,
    pub budget_range:       BudgetRange,
}

/// Acceptable hourly-rate window, in `currency` units.  `min ≤ max`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BudgetRange {
    pub min:      f64,
    pub max:      f64,
    pub currency: String,
}

impl BudgetRange {
    /// `true` if `rate` falls inside the window (inclusive on both ends).
    #[inline]
    pub fn contains(&self, rate: f64) -> bool {
        self.min <= rate && rate <= self.max
    }
}
