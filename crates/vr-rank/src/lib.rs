//! `vr-rank` — distance annotation and recommendation ranking.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`annotated`] | `VendorWithDistance` derived record                     |
//! | [`rank`]      | `annotate`, `filter_by_distance`, `sort_by_distance`, `recommend` |
//!
//! # Pipeline (summary)
//!
//! ```text
//! annotate(user, vendors)          attach distance_km + bearing_deg
//!   └─ filter: distance ≤ max  AND  hourly rate in budget (or no rate)
//!        └─ sort_by_distance      ascending, stable on ties
//! ```
//!
//! Every function is pure: inputs are read by shared reference or consumed
//! by value, and each call produces fresh derived records.  Calling twice
//! with identical inputs yields identical outputs.

pub mod annotated;
pub mod rank;

#[cfg(test)]
mod tests;

pub use annotated::VendorWithDistance;
pub use rank::{annotate, filter_by_distance, recommend, sort_by_distance};
