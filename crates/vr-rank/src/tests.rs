//! Unit tests for the distance pipeline.

use vr_core::{
    Availability, BudgetRange, Coordinates, Preferences, Pricing, User, UserLocation, Vendor,
    VendorLocation,
};

use crate::{VendorWithDistance, annotate, filter_by_distance, recommend, sort_by_distance};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DARMSTADT: Coordinates = Coordinates { lat: 49.8728, lng: 8.6512 };
const FRANKFURT: Coordinates = Coordinates { lat: 50.1109, lng: 8.6821 };
const MAINZ: Coordinates = Coordinates { lat: 49.9929, lng: 8.2473 };

/// A Darmstadt user with a 50 km radius and a 50–200 EUR/h budget.
fn darmstadt_user() -> User {
    User {
        id:    "user_001".into(),
        email: "user@example.com".into(),
        location: UserLocation {
            city:        Some("Darmstadt".into()),
            coordinates: Some(DARMSTADT),
        },
        preferences: Preferences {
            max_distance_km:    50.0,
            preferred_services: vec!["Web Development".into()],
            budget_range:       BudgetRange { min: 50.0, max: 200.0, currency: "EUR".into() },
        },
    }
}

fn located_user(coordinates: Option<Coordinates>) -> User {
    let mut user = darmstadt_user();
    user.location.coordinates = coordinates;
    user
}

fn vendor(id: &str, at: Coordinates, hourly: Option<f64>) -> Vendor {
    Vendor {
        id:           id.into(),
        name:         format!("Vendor {id}"),
        description:  None,
        services:     vec!["Web Development".into()],
        pricing:      Pricing { hourly, daily: None, project: None, currency: "EUR".into() },
        location:     VendorLocation { city: None, coordinates: at },
        rating:       None,
        review_count: None,
        availability: Availability::Available,
        verified:     true,
    }
}

fn with_distance(id: &str, distance_km: Option<f64>) -> VendorWithDistance {
    VendorWithDistance {
        vendor: vendor(id, FRANKFURT, None),
        distance_km,
        bearing_deg: distance_km.map(|_| 0.0),
    }
}

// ── annotate ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod annotate_fn {
    use super::*;

    #[test]
    fn attaches_distance_and_bearing() {
        let out = annotate(&darmstadt_user(), &[vendor("a", FRANKFURT, None)]);
        assert_eq!(out.len(), 1);
        let d = out[0].distance_km.unwrap();
        assert!((26.0..27.5).contains(&d), "got {d}");
        let b = out[0].bearing_deg.unwrap();
        assert!(b < 10.0 || b > 350.0, "got {b}");
    }

    #[test]
    fn preserves_input_order() {
        let vendors = [
            vendor("far", FRANKFURT, None),
            vendor("near", DARMSTADT, None),
            vendor("west", MAINZ, None),
        ];
        let out = annotate(&darmstadt_user(), &vendors);
        let ids: Vec<&str> = out.iter().map(|v| v.vendor.id.as_str()).collect();
        assert_eq!(ids, ["far", "near", "west"]);
    }

    #[test]
    fn unlocated_user_gets_no_annotations() {
        let out = annotate(&located_user(None), &[vendor("a", FRANKFURT, None)]);
        assert_eq!(out[0].distance_km, None);
        assert_eq!(out[0].bearing_deg, None);
    }

    #[test]
    fn same_point_vendor() {
        let out = annotate(&darmstadt_user(), &[vendor("here", DARMSTADT, None)]);
        assert_eq!(out[0].distance_km, Some(0.0));
        assert_eq!(out[0].bearing_deg, Some(0.0));
    }

    #[test]
    fn idempotent() {
        let vendors = [vendor("a", FRANKFURT, None), vendor("b", MAINZ, None)];
        let user = darmstadt_user();
        assert_eq!(annotate(&user, &vendors), annotate(&user, &vendors));
    }
}

// ── filter / sort ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod filter_and_sort {
    use super::*;

    #[test]
    fn filter_keeps_within_radius() {
        let out = filter_by_distance(
            vec![with_distance("a", Some(10.0)), with_distance("b", Some(60.0))],
            50.0,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].vendor.id, "a");
    }

    #[test]
    fn filter_boundary_is_inclusive() {
        let out = filter_by_distance(vec![with_distance("edge", Some(50.0))], 50.0);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn absent_distance_always_passes() {
        // Permissive policy: unknown distance counts as zero.
        let out = filter_by_distance(vec![with_distance("unknown", None)], 5.0);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn sort_is_ascending() {
        let out = sort_by_distance(vec![
            with_distance("c", Some(30.0)),
            with_distance("a", Some(5.0)),
            with_distance("b", Some(12.5)),
        ]);
        let ids: Vec<&str> = out.iter().map(|v| v.vendor.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        for pair in out.windows(2) {
            assert!(pair[0].distance_or_zero() <= pair[1].distance_or_zero());
        }
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let out = sort_by_distance(vec![
            with_distance("first", Some(10.0)),
            with_distance("second", Some(10.0)),
            with_distance("third", Some(10.0)),
        ]);
        let ids: Vec<&str> = out.iter().map(|v| v.vendor.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn absent_distance_sorts_first() {
        let out = sort_by_distance(vec![
            with_distance("known", Some(3.0)),
            with_distance("unknown", None),
        ]);
        assert_eq!(out[0].vendor.id, "unknown");
    }
}

// ── recommend ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod recommend_fn {
    use super::*;

    #[test]
    fn budget_gate_on_hourly_rate() {
        let vendors = [
            vendor("in_budget", FRANKFURT, Some(75.0)),
            vendor("too_cheap", FRANKFURT, Some(30.0)),
            vendor("too_dear", FRANKFURT, Some(250.0)),
        ];
        let out = recommend(&darmstadt_user(), &vendors);
        let ids: Vec<&str> = out.iter().map(|v| v.vendor.id.as_str()).collect();
        assert_eq!(ids, ["in_budget"]);
    }

    #[test]
    fn no_hourly_rate_passes_budget_gate() {
        // Cannot evaluate budget fit without a rate, so do not exclude.
        let out = recommend(&darmstadt_user(), &[vendor("quote_only", FRANKFURT, None)]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn distance_gate_excludes_far_vendors() {
        let berlin = Coordinates::new(52.52, 13.405);
        let out = recommend(
            &darmstadt_user(),
            &[vendor("near", FRANKFURT, Some(75.0)), vendor("far", berlin, Some(75.0))],
        );
        let ids: Vec<&str> = out.iter().map(|v| v.vendor.id.as_str()).collect();
        assert_eq!(ids, ["near"]);
        let max = darmstadt_user().preferences.max_distance_km;
        assert!(out.iter().all(|v| v.distance_or_zero() <= max));
    }

    #[test]
    fn sorted_closest_first() {
        let out = recommend(
            &darmstadt_user(),
            &[
                vendor("frankfurt", FRANKFURT, Some(75.0)),
                vendor("darmstadt", DARMSTADT, Some(75.0)),
                vendor("mainz", MAINZ, Some(75.0)),
            ],
        );
        let ids: Vec<&str> = out.iter().map(|v| v.vendor.id.as_str()).collect();
        assert_eq!(ids, ["darmstadt", "frankfurt", "mainz"]);
    }

    #[test]
    fn empty_when_nothing_qualifies() {
        let out = recommend(&darmstadt_user(), &[vendor("too_cheap", FRANKFURT, Some(10.0))]);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_vendor_list() {
        assert!(recommend(&darmstadt_user(), &[]).is_empty());
    }

    #[test]
    fn subset_of_annotate() {
        let vendors = [
            vendor("a", FRANKFURT, Some(75.0)),
            vendor("b", MAINZ, Some(30.0)),
            vendor("c", DARMSTADT, None),
        ];
        let user = darmstadt_user();
        let all = annotate(&user, &vendors);
        for picked in recommend(&user, &vendors) {
            assert!(all.contains(&picked));
        }
    }
}
