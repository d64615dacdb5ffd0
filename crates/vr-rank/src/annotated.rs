//! The derived vendor record: a vendor plus its distance and bearing
//! relative to a particular user.
//!
//! Recomputed whenever the user location or vendor set changes; never
//! persisted.  Both derived fields are absent together: a user without
//! coordinates makes neither distance nor bearing computable.

use vr_core::Vendor;

/// A vendor annotated with its relation to the requesting user.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VendorWithDistance {
    pub vendor: Vendor,
    /// Great-circle distance to the user, kilometres, 2-decimal precision.
    /// `None` when the user has no coordinates.
    pub distance_km: Option<f64>,
    /// Initial compass bearing from the user, degrees in `[0, 360)`.
    /// `None` when the user has no coordinates.
    pub bearing_deg: Option<f64>,
}

impl VendorWithDistance {
    /// Distance with the permissive absent-as-zero default.
    ///
    /// Policy: a vendor whose distance could not be computed passes every
    /// distance gate rather than being excluded.  Deliberate product
    /// behavior — confirm with stakeholders before tightening.
    #[inline]
    pub fn distance_or_zero(&self) -> f64 {
        self.distance_km.unwrap_or(0.0)
    }
}
