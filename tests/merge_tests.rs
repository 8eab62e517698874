use ipquery::services::geoip::ProviderRecord;
use ipquery::services::merge::{Field, merge};
use serde_json::{Value, json};

fn record(value: Value) -> ProviderRecord {
    ProviderRecord::from_value(value).unwrap()
}

#[cfg(test)]
mod precedence_tests {
    use super::*;

    #[test]
    fn test_primary_wins_on_non_empty_fields() {
        let primary = record(json!({
            "ip": "8.8.8.8",
            "city": "Mountain View",
            "lat": 37.42,
            "is_eu": true,
        }));
        let secondary = record(json!({
            "ip": "1.1.1.1",
            "city": "Sydney",
            "lat": -33.8,
            "is_eu": false,
        }));

        let merged = merge(&primary, &secondary);

        for (key, value) in primary.fields() {
            assert_eq!(merged.get(key), Some(value), "field {} should come from primary", key);
        }
    }

    #[test]
    fn test_secondary_fills_missing_and_falsy_fields() {
        let primary = record(json!({
            "ip": "8.8.8.8",
            "city": "",
            "zip": null,
            "lat": 0,
            "is_eu": false,
            "tags": [],
        }));
        let secondary = record(json!({
            "city": "Mountain View",
            "zip": "94043",
            "lat": 37.4,
            "is_eu": true,
            "tags": ["dns"],
            "isp": "Google LLC",
        }));

        let merged = merge(&primary, &secondary);

        assert_eq!(merged.get("ip"), Some(&json!("8.8.8.8")));
        for key in ["city", "zip", "lat", "is_eu", "tags", "isp"] {
            assert_eq!(merged.get(key), secondary.get(key), "field {} should be filled", key);
        }
    }

    #[test]
    fn test_falsy_secondary_does_not_override_primary() {
        let primary = record(json!({"city": "Berlin"}));
        let secondary = record(json!({"city": ""}));
        let merged = merge(&primary, &secondary);
        assert_eq!(merged.get("city"), Some(&json!("Berlin")));
    }

    #[test]
    fn test_both_empty_yields_empty() {
        let merged = merge(&ProviderRecord::empty(), &ProviderRecord::empty());
        assert!(merged.is_empty());
    }

    #[test]
    fn test_one_side_empty() {
        let secondary = record(json!({"country": "US", "lat": 37.4, "lon": -122.1}));

        let merged = merge(&ProviderRecord::empty(), &secondary);
        assert!(!merged.is_empty());
        assert_eq!(merged.resolved(Field::Country).as_deref(), Some("US"));

        let merged = merge(&secondary, &ProviderRecord::empty());
        assert_eq!(merged.raw(), secondary.fields());
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_google_dns_scenario() {
        let primary = record(json!({"location": {"country": "United States"}}));
        let secondary = record(json!({"country": "US", "lat": 37.4, "lon": -122.1}));

        let merged = merge(&primary, &secondary);

        let country = merged.field(Field::Country);
        assert_eq!(country.resolved(), Some("United States"));
        assert_eq!(country.fallback.as_deref(), Some("US"));
        assert_eq!(
            merged.coordinates(),
            Some(("37.4".to_string(), "-122.1".to_string()))
        );
    }

    #[test]
    fn test_real_provider_shapes() {
        let primary = record(json!({
            "ip": "8.8.8.8",
            "location": {
                "continent_code": "NA",
                "continent_name": "North America",
                "country_name": "United States",
                "state_prov": "California",
                "state_code": "US-CA",
                "city": "Mountain View",
                "zipcode": "94043-1351",
                "latitude": "37.42240",
                "longitude": "-122.08421",
                "is_eu": false
            },
            "network": {"asn": {"as_number": "AS15169", "organization": "Google LLC"}}
        }));
        let secondary = record(json!({
            "status": "success",
            "country": "美国",
            "regionName": "弗吉尼亚州",
            "city": "Ashburn",
            "zip": "20149",
            "lat": 39.03,
            "lon": -77.5,
            "isp": "Google LLC",
            "query": "8.8.8.8"
        }));

        let merged = merge(&primary, &secondary);

        assert_eq!(merged.resolved(Field::Ip).as_deref(), Some("8.8.8.8"));
        assert_eq!(merged.resolved(Field::Continent).as_deref(), Some("North America"));
        assert_eq!(merged.resolved(Field::RegionCode).as_deref(), Some("US-CA"));
        assert_eq!(merged.resolved(Field::Zipcode).as_deref(), Some("94043-1351"));

        let city = merged.field(Field::City);
        assert_eq!(city.preferred.as_deref(), Some("Mountain View"));
        assert_eq!(city.fallback.as_deref(), Some("Ashburn"));

        let region = merged.field(Field::Region);
        assert_eq!(region.preferred.as_deref(), Some("California"));
        assert_eq!(region.fallback.as_deref(), Some("弗吉尼亚州"));
    }
}
