//! Unit tests for catalog loading.

use vr_core::Availability;

use crate::{CatalogError, load_vendors_reader};

const HEADER: &str = "id,name,description,services,hourly,daily,project,currency,lat,lng,city,availability,rating,review_count,verified\n";

fn csv(rows: &str) -> String {
    format!("{HEADER}{rows}")
}

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn full_row() {
        let data = csv(
            "vendor_001,TechSolutions GmbH,Web development,Web Development;Mobile Apps,75,600,5000,EUR,49.8728,8.6512,Darmstadt,available,4.8,127,true\n",
        );
        let vendors = load_vendors_reader(data.as_bytes()).unwrap();

        assert_eq!(vendors.len(), 1);
        let v = &vendors[0];
        assert_eq!(v.id, "vendor_001");
        assert_eq!(v.services, ["Web Development", "Mobile Apps"]);
        assert_eq!(v.pricing.hourly, Some(75.0));
        assert_eq!(v.pricing.currency, "EUR");
        assert_eq!(v.location.coordinates.lat, 49.8728);
        assert_eq!(v.location.city.as_deref(), Some("Darmstadt"));
        assert_eq!(v.availability, Availability::Available);
        assert_eq!(v.rating, Some(4.8));
        assert!(v.verified);
    }

    #[test]
    fn empty_optional_cells() {
        let data = csv("vendor_004,Startup Consulting,,Consulting,,,,EUR,49.4875,8.4660,,busy,,,false\n");
        let vendors = load_vendors_reader(data.as_bytes()).unwrap();

        let v = &vendors[0];
        assert_eq!(v.description, None);
        assert_eq!(v.pricing.hourly, None);
        assert_eq!(v.pricing.daily, None);
        assert_eq!(v.pricing.project, None);
        assert_eq!(v.location.city, None);
        assert_eq!(v.rating, None);
        assert_eq!(v.review_count, None);
        assert!(!v.verified);
    }

    #[test]
    fn preserves_row_order() {
        let data = csv(
            "b,B,,X,,,,EUR,1.0,1.0,,available,,,true\n\
             a,A,,X,,,,EUR,2.0,2.0,,available,,,true\n",
        );
        let vendors = load_vendors_reader(data.as_bytes()).unwrap();
        let ids: Vec<&str> = vendors.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn unknown_availability_is_a_parse_error() {
        let data = csv("x,X,,X,,,,EUR,1.0,1.0,,on holiday,,,true\n");
        match load_vendors_reader(data.as_bytes()) {
            Err(CatalogError::Parse(msg)) => assert!(msg.contains("on holiday"), "{msg}"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_number_is_a_csv_error() {
        let data = csv("x,X,,X,cheap,,,EUR,1.0,1.0,,available,,,true\n");
        assert!(matches!(load_vendors_reader(data.as_bytes()), Err(CatalogError::Csv(_))));
    }

    #[test]
    fn empty_catalog() {
        let vendors = load_vendors_reader(HEADER.as_bytes()).unwrap();
        assert!(vendors.is_empty());
    }
}
