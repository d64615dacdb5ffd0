//! Legend ticks, proximity bands, and display formatting.
//!
//! Everything here produces values for the presentation layer to render;
//! none of it feeds back into distance or projection math.

use vr_core::Vendor;

// ── Legend scale ──────────────────────────────────────────────────────────────

/// Four ascending legend tick values for a map whose farthest vendor is
/// `max_distance_km` away: quarter steps of the maximum, each rounded to the
/// nearest whole kilometre.
pub fn distance_scale_km(max_distance_km: f64) -> [f64; 4] {
    let step = max_distance_km / 4.0;
    [step.round(), (step * 2.0).round(), (step * 3.0).round(), (step * 4.0).round()]
}

// ── Proximity bands ───────────────────────────────────────────────────────────

/// How close a vendor is relative to the user's maximum preferred distance.
/// The presentation layer maps bands to colours; the thresholds live here.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProximityBand {
    /// Within 30 % of the preferred maximum.
    VeryClose,
    /// Within 60 %.
    Close,
    /// Within the preferred maximum.
    InRange,
    /// Beyond the preferred maximum.
    OutOfRange,
}

/// Band for a vendor at `distance_km` given the user's preferred maximum.
pub fn proximity_band(distance_km: f64, max_distance_km: f64) -> ProximityBand {
    if distance_km <= max_distance_km * 0.3 {
        ProximityBand::VeryClose
    } else if distance_km <= max_distance_km * 0.6 {
        ProximityBand::Close
    } else if distance_km <= max_distance_km {
        ProximityBand::InRange
    } else {
        ProximityBand::OutOfRange
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// Human-readable distance: metres below 1 km, one decimal up to 10 km,
/// whole kilometres beyond.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else if km < 10.0 {
        format!("{km:.1}km")
    } else {
        format!("{}km", km.round() as i64)
    }
}

/// Human-readable price: the first published tier in hourly → daily →
/// project order, or a contact prompt when no tier is set.
pub fn format_pricing(vendor: &Vendor) -> String {
    let pricing = &vendor.pricing;
    if let Some(rate) = pricing.hourly {
        format!("{}{}/hr", pricing.currency, rate)
    } else if let Some(rate) = pricing.daily {
        format!("{}{}/day", pricing.currency, rate)
    } else if let Some(rate) = pricing.project {
        format!("{}{}/project", pricing.currency, rate)
    } else {
        "Contact for pricing".to_string()
    }
}
