//! Geographic coordinate type and great-circle math.
//!
//! `Coordinates` uses `f64` latitude/longitude so the 2-decimal kilometre
//! rounding below is exact at any realistic distance.
//!
//! Out-of-range latitude/longitude values are *not* validated here: they
//! still produce a mathematically defined (if meaningless) result.  Range
//! checks belong to the data-source layer that produces the records.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6_371.0;

impl Coordinates {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Haversine great-circle distance in kilometres, rounded to two
    /// decimal places.
    ///
    /// `a.distance_km(b) == b.distance_km(a)` up to rounding, and
    /// `a.distance_km(a) == 0.0`.
    pub fn distance_km(self, other: Coordinates) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        let km = EARTH_RADIUS_KM * c;

        (km * 100.0).round() / 100.0
    }

    /// Initial compass bearing along the great circle from `self` to `other`,
    /// in degrees, normalized into `[0, 360)`.  0° is North, clockwise.
    ///
    /// Unlike distance, bearing is direction-dependent:
    /// `a.bearing_to(b)` generally differs from `b.bearing_to(a)`.
    ///
    /// `a.bearing_to(a)` is the degenerate `atan2(0, 0)` case, which is 0
    /// under IEEE semantics — "due North" by convention, not an error.
    pub fn bearing_to(self, other: Coordinates) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let y = d_lng.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

        let deg = y.atan2(x).to_degrees();
        (deg + 360.0) % 360.0
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
