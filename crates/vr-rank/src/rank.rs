//! Distance pipeline: annotate → filter → sort → recommend.
//!
//! `recommend` always starts from the *original* vendor list, never a
//! previously filtered one, so filters cannot compound across calls.

use vr_core::{User, Vendor};

use crate::annotated::VendorWithDistance;

/// Attach distance and bearing (user → vendor) to every vendor.
///
/// Output order matches input order.  If the user has no coordinates, both
/// derived fields are `None` for every vendor.
pub fn annotate(user: &User, vendors: &[Vendor]) -> Vec<VendorWithDistance> {
    let Some(origin) = user.location.coordinates else {
        return vendors
            .iter()
            .map(|vendor| VendorWithDistance {
                vendor:      vendor.clone(),
                distance_km: None,
                bearing_deg: None,
            })
            .collect();
    };

    vendors
        .iter()
        .map(|vendor| {
            let target = vendor.location.coordinates;
            VendorWithDistance {
                vendor:      vendor.clone(),
                distance_km: Some(origin.distance_km(target)),
                bearing_deg: Some(origin.bearing_to(target)),
            }
        })
        .collect()
}

/// Keep vendors with `distance ≤ max_km`.
///
/// An absent distance counts as 0 and always passes — see
/// [`VendorWithDistance::distance_or_zero`] for the policy note.
pub fn filter_by_distance(
    vendors: Vec<VendorWithDistance>,
    max_km: f64,
) -> Vec<VendorWithDistance> {
    vendors
        .into_iter()
        .filter(|v| v.distance_or_zero() <= max_km)
        .collect()
}

/// Sort ascending by distance, closest first.
///
/// The sort is stable: vendors at equal distance keep their input order.
pub fn sort_by_distance(mut vendors: Vec<VendorWithDistance>) -> Vec<VendorWithDistance> {
    vendors.sort_by(|a, b| a.distance_or_zero().total_cmp(&b.distance_or_zero()));
    vendors
}

/// Vendors within the user's preferred distance and budget, closest first.
///
/// The budget gate applies to the hourly rate only; a vendor without one
/// always passes (no rate means budget fit cannot be evaluated, so the
/// vendor is not excluded).  Returns an empty `Vec` when nothing qualifies.
pub fn recommend(user: &User, vendors: &[Vendor]) -> Vec<VendorWithDistance> {
    let prefs = &user.preferences;

    let matching = annotate(user, vendors)
        .into_iter()
        .filter(|v| {
            let distance_ok = v.distance_or_zero() <= prefs.max_distance_km;
            let price_ok = match v.vendor.pricing.hourly {
                Some(rate) => prefs.budget_range.contains(rate),
                None => true,
            };
            distance_ok && price_ok
        })
        .collect();

    sort_by_distance(matching)
}
