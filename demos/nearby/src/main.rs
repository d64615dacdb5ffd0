//! nearby — end-to-end demo for the vendor-radar workspace.
//!
//! Loads a small Rhein-Main vendor catalog, ranks it for a Darmstadt user,
//! and prints the recommended list plus the radial map placements a UI
//! would render.  Swap the embedded CSV for `load_vendors_csv(path)` to run
//! against a real catalog file.

use anyhow::Result;

use vr_catalog::load_vendors_reader;
use vr_core::{BudgetRange, Coordinates, Preferences, User, UserLocation};
use vr_plot::{compass_label, format_distance, format_pricing, proximity_band};
use vr_view::RadarView;

// ── Constants ─────────────────────────────────────────────────────────────────

const PLOT_RADIUS: f64 = 300.0;

// ── Sample catalog ────────────────────────────────────────────────────────────

const SAMPLE_CSV: &str = "\
id,name,description,services,hourly,daily,project,currency,lat,lng,city,availability,rating,review_count,verified\n\
vendor_001,TechSolutions GmbH,Professional web development and software solutions,Web Development;Software Development;Mobile Apps,75,600,5000,EUR,49.8728,8.6512,Darmstadt,available,4.8,127,true\n\
vendor_002,Digital Marketing Pro,Full-service digital marketing agency,Digital Marketing;SEO;Social Media,65,520,,EUR,50.1109,8.6821,Frankfurt,available,4.6,89,true\n\
vendor_003,Creative Design Studio,UI/UX design and creative services,UI/UX Design;Graphic Design;Branding,55,440,3000,EUR,49.4875,8.4662,Mannheim,busy,4.9,156,true\n\
vendor_004,Cloud Infrastructure Experts,Cloud architecture and DevOps services,Cloud Computing;DevOps;Infrastructure,85,680,8000,EUR,49.3988,8.6724,Heidelberg,available,4.7,94,true\n\
vendor_005,Data Analytics Solutions,Analytics and machine learning consulting,Data Analytics;Business Intelligence;Machine Learning,95,760,12000,EUR,49.0069,8.4037,Karlsruhe,available,4.5,67,true\n";

fn sample_user() -> User {
    User {
        id:    "user_001".into(),
        email: "john.doe@example.com".into(),
        location: UserLocation {
            city:        Some("Darmstadt".into()),
            coordinates: Some(Coordinates::new(49.8728, 8.6512)),
        },
        preferences: Preferences {
            max_distance_km:    50.0,
            preferred_services: vec![
                "Web Development".into(),
                "Software Development".into(),
                "Digital Marketing".into(),
            ],
            budget_range: BudgetRange { min: 50.0, max: 200.0, currency: "EUR".into() },
        },
    }
}

fn main() -> Result<()> {
    let user = sample_user();
    let vendors = load_vendors_reader(SAMPLE_CSV.as_bytes())?;

    println!("=== nearby — vendor-radar demo ===");
    println!(
        "User in {}  |  radius {} km  |  budget {}–{} {}/h",
        user.location.city.as_deref().unwrap_or("?"),
        user.preferences.max_distance_km,
        user.preferences.budget_range.min,
        user.preferences.budget_range.max,
        user.preferences.budget_range.currency,
    );
    println!();

    let view = RadarView::build(&user, &vendors, PLOT_RADIUS);

    println!("Recommended ({} of {} vendors):", view.recommended.len(), vendors.len());
    for v in &view.recommended {
        let distance = v.distance_km.map_or("?".to_string(), format_distance);
        let direction = v.bearing_deg.map_or("?".to_string(), |b| compass_label(b).to_string());
        let band = proximity_band(v.distance_or_zero(), user.preferences.max_distance_km);
        println!(
            "  {:<30} {:>7} {:>2}  {:<22} {} ({:?})",
            v.vendor.name,
            distance,
            direction,
            format_pricing(&v.vendor),
            v.vendor.availability,
            band,
        );
    }
    println!();

    println!("Map placements (plot radius {PLOT_RADIUS}):");
    for p in &view.placements {
        println!(
            "  {:<30} x {:>8.1}  y {:>8.1}  bearing {:>5.1}°",
            p.vendor.vendor.name, p.position.x, p.position.y, p.position.bearing_deg,
        );
    }
    println!();

    println!("Legend ticks (km): {:?}", view.scale_km);

    Ok(())
}
