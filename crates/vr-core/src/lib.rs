//! `vr-core` — foundational types for the `vendor-radar` workspace.
//!
//! This crate is a dependency of every other `vr-*` crate.  It intentionally
//! has no `vr-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`geo`]    | `Coordinates`, haversine distance, forward azimuth      |
//! | [`user`]   | `User`, `Preferences`, `BudgetRange`                    |
//! | [`vendor`] | `Vendor`, `Pricing`, `Availability`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod user;
pub mod vendor;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::Coordinates;
pub use user::{BudgetRange, Preferences, User, UserLocation};
pub use vendor::{Availability, Pricing, Vendor, VendorLocation};
