//! `vr-plot` — radial map projection and display helpers.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`project`] | `MapPosition`, `MapPlacement`, `project`                  |
//! | [`compass`] | `CompassPoint` (8-point rose), `compass_label`            |
//! | [`display`] | scale ticks, proximity bands, distance/price formatting   |
//!
//! # Projection model (summary)
//!
//! The user sits at the plot origin.  Each vendor's angular position encodes
//! its compass bearing (North up) and its radial position encodes distance
//! relative to the farthest vendor in the set:
//!
//! ```text
//! scaled = distance / max_distance · plot_radius · 0.8
//! angle  = radians(bearing − 90°)
//! (x, y) = (cos(angle), sin(angle)) · scaled
//! ```
//!
//! All functions are pure; degenerate inputs (no user coordinates, empty or
//! zero-spread vendor sets) have defined fallbacks, never panics.

pub mod compass;
pub mod display;
pub mod project;


pub use compass::{CompassPoint, compass_label};
pub use display::{
    ProximityBand, distance_scale_km, format_distance, format_pricing, proximity_band,
};
pub use project::{DEFAULT_PLOT_RADIUS, MapPlacement, MapPosition, project};
