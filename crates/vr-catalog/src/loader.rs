//! CSV vendor catalog loader.
//!
//! # CSV format
//!
//! One row per vendor.
//!
//! ```csv
//! id,name,description,services,hourly,daily,project,currency,lat,lng,city,availability,rating,review_count,verified
//! vendor_001,TechSolutions GmbH,Web development,Web Development;Mobile Apps,75,600,5000,EUR,49.8728,8.6512,Darmstadt,available,4.8,127,true
//! vendor_004,Startup Consulting,,Consulting,,,,EUR,49.4875,8.4660,Mannheim,busy,,,false
//! ```
//!
//! | Column         | Meaning                                               |
//! |----------------|-------------------------------------------------------|
//! | `services`     | `;`-separated list; empty ⇒ no services               |
//! | `hourly` …     | pricing tiers; empty cell ⇒ tier not published        |
//! | `availability` | `available`, `busy`, or `unavailable`                 |
//! | `rating` …     | empty cell ⇒ not rated / no review count              |
//!
//! Latitude/longitude are passed through as-is; range validation, if a
//! deployment wants it, happens here at the data-source boundary and not in
//! the computation crates.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use vr_core::{Availability, Coordinates, Pricing, Vendor, VendorLocation};

use crate::error::{CatalogError, CatalogResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct VendorRecord {
    id:           String,
    name:         String,
    description:  Option<String>,
    services:     String,
    hourly:       Option<f64>,
    daily:        Option<f64>,
    project:      Option<f64>,
    currency:     String,
    lat:          f64,
    lng:          f64,
    city:         Option<String>,
    availability: String,
    rating:       Option<f32>,
    review_count: Option<u32>,
    verified:     bool,
}

impl VendorRecord {
    fn into_vendor(self) -> CatalogResult<Vendor> {
        let availability: Availability = self
            .availability
            .parse()
            .map_err(CatalogError::Parse)?;

        let services = self
            .services
            .split(';')
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();

        Ok(Vendor {
            id:           self.id,
            name:         self.name,
            description:  self.description,
            services,
            pricing: Pricing {
                hourly:   self.hourly,
                daily:    self.daily,
                project:  self.project,
                currency: self.currency,
            },
            location: VendorLocation {
                city:        self.city,
                coordinates: Coordinates::new(self.lat, self.lng),
            },
            rating:       self.rating,
            review_count: self.review_count,
            availability,
            verified:     self.verified,
        })
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load vendors from a CSV file, preserving row order.
pub fn load_vendors_csv<P: AsRef<Path>>(path: P) -> CatalogResult<Vec<Vendor>> {
    load_vendors_reader(File::open(path)?)
}

/// Load vendors from any reader producing the CSV format above.
pub fn load_vendors_reader<R: Read>(reader: R) -> CatalogResult<Vec<Vendor>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut vendors = Vec::new();
    for record in csv_reader.deserialize::<VendorRecord>() {
        vendors.push(record?.into_vendor()?);
    }
    Ok(vendors)
}
