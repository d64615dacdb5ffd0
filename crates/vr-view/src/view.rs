//! The assembled radar view and the post-projection rendering transform.

use vr_core::{User, Vendor};
use vr_plot::{MapPlacement, MapPosition, distance_scale_km, project};
use vr_rank::{VendorWithDistance, annotate, recommend};

/// Everything the presentation layer needs for one render pass: the full
/// annotated list, the recommended subset, disc placements, and legend ticks.
///
/// Built fresh whenever the user or the vendor set changes; holds no state
/// beyond its fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadarView {
    /// All vendors, annotated, in catalog order.
    pub vendors: Vec<VendorWithDistance>,
    /// Vendors passing the distance + budget filters, closest first.
    pub recommended: Vec<VendorWithDistance>,
    /// One placement per catalog vendor, same order as `vendors`.
    pub placements: Vec<MapPlacement>,
    /// Legend tick values, kilometres.
    pub scale_km: [f64; 4],
}

impl RadarView {
    /// Compose the pipeline over the raw catalog.
    ///
    /// `recommend` runs over the original `vendors` slice, never an already
    /// filtered list, so filters cannot compound.
    pub fn build(user: &User, vendors: &[Vendor], plot_radius: f64) -> RadarView {
        let annotated = annotate(user, vendors);
        let recommended = recommend(user, vendors);
        let placements = project(user, &annotated, plot_radius);

        let max_distance = annotated
            .iter()
            .map(VendorWithDistance::distance_or_zero)
            .fold(0.0_f64, f64::max);

        RadarView {
            vendors: annotated,
            recommended,
            placements,
            scale_km: distance_scale_km(max_distance),
        }
    }
}

/// Zoom and pan, owned by the presentation layer and applied to projected
/// positions only.  Keeping it out of [`RadarView::build`] keeps the core
/// math independent of interaction state.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewTransform {
    pub zoom:  f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0 }
    }
}

impl ViewTransform {
    /// Screen-space coordinates for a projected position.
    #[inline]
    pub fn apply(self, position: MapPosition) -> (f64, f64) {
        (position.x * self.zoom + self.pan_x, position.y * self.zoom + self.pan_y)
    }
}
