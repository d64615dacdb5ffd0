//! Polar-to-Cartesian projection placing vendors on a bounded disc around
//! the user.
//!
//! Plot coordinates are pixel-equivalent units relative to the disc centre;
//! positive `x` is East, positive `y` is *down* (screen convention), so
//! bearing 0° (North) lands at negative `y` after the −90° rotation.
//!
//! Rendering transforms (zoom, pan) are applied by the presentation layer
//! *after* projection and never enter this computation.

use vr_core::User;
use vr_rank::VendorWithDistance;

/// Plot radius used when the caller expresses no preference, in plot units.
pub const DEFAULT_PLOT_RADIUS: f64 = 300.0;

/// Fraction of the plot radius vendors may occupy; the rest is a visual
/// margin at the disc edge.  Design constant, not derived.
const EDGE_MARGIN: f64 = 0.8;

/// A vendor's place on the disc, plus the polar inputs it was computed from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
    /// Bearing the position encodes, degrees in `[0, 360)`.
    pub bearing_deg: f64,
    /// Distance the position encodes, kilometres.
    pub distance_km: f64,
}

impl MapPosition {
    /// The disc centre — where the user sits, and where every vendor
    /// collapses to when the user has no coordinates.
    pub const ORIGIN: MapPosition =
        MapPosition { x: 0.0, y: 0.0, bearing_deg: 0.0, distance_km: 0.0 };
}

/// One projected vendor: the annotated record plus its disc position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPlacement {
    pub vendor:   VendorWithDistance,
    pub position: MapPosition,
}

/// Place every vendor on a disc of radius `plot_radius` around the user.
///
/// Radial position is distance relative to the farthest vendor in `vendors`;
/// angular position is the bearing from the user, recomputed here from the
/// coordinates rather than read from the annotation.  Two vendors at equal
/// distance and bearing map to identical positions.
///
/// Degenerate inputs:
/// - user without coordinates → every vendor at [`MapPosition::ORIGIN`];
/// - empty vendor set → empty output;
/// - zero-spread distances (all vendors equidistant at 0) → the relative
///   scale divides by a fallback max of 1 instead of 0.
pub fn project(
    user: &User,
    vendors: &[VendorWithDistance],
    plot_radius: f64,
) -> Vec<MapPlacement> {
    let Some(origin) = user.location.coordinates else {
        return vendors
            .iter()
            .map(|v| MapPlacement { vendor: v.clone(), position: MapPosition::ORIGIN })
            .collect();
    };

    let max_distance = vendors
        .iter()
        .map(VendorWithDistance::distance_or_zero)
        .fold(0.0_f64, f64::max);
    // Guard the division below; an all-zero spread plots everyone at the centre.
    let max_distance = if max_distance > 0.0 { max_distance } else { 1.0 };

    vendors
        .iter()
        .map(|v| {
            let distance_km = v.distance_or_zero();
            let bearing_deg = origin.bearing_to(v.vendor.location.coordinates);

            let scaled = distance_km / max_distance * plot_radius * EDGE_MARGIN;

            // −90° so bearing 0 (North) plots straight up.
            let angle = (bearing_deg - 90.0).to_radians();
            let position = MapPosition {
                x: angle.cos() * scaled,
                y: angle.sin() * scaled,
                bearing_deg,
                distance_km,
            };

            MapPlacement { vendor: v.clone(), position }
        })
        .collect()
}
