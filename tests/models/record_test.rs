//! Tests for panel records and reference types

use std::str::FromStr;

use vat_panel::models::{BaseMetrics, DerivedMetrics};
use vat_panel::{CompanyProfile, Country, PanelError, PanelRecord, Sector};

fn base() -> BaseMetrics {
    BaseMetrics {
        vat_paid: 2_100.0,
        revenue: 79_200.0,
        profit: 15_000.0,
        effective_tax_rate: 25.0,
        country_vat_rate: 20.0,
    }
}

#[test]
fn test_derived_metrics() {
    let derived = DerivedMetrics::compute(&base());

    assert!((derived.vat_revenue_ratio - 2.651_515_151_515_151_6).abs() < 1e-12);
    assert!((derived.profit_margin - 15_000.0 / 79_200.0 * 100.0).abs() < 1e-12);
    assert!((derived.tax_paid - 3_750.0).abs() < 1e-9);
    assert!((derived.total_tax_burden - 5_850.0).abs() < 1e-9);
    assert!((derived.total_tax_burden_ratio - 5_850.0 / 79_200.0 * 100.0).abs() < 1e-12);
}

#[test]
fn test_losses_produce_negative_tax_paid() {
    let mut metrics = base();
    metrics.profit = -1_000.0;
    let derived = DerivedMetrics::compute(&metrics);

    assert!(derived.tax_paid < 0.0);
    assert!(derived.profit_margin < 0.0);
    assert!(derived.total_tax_burden < metrics.vat_paid);
}

#[test]
fn test_record_round_trips_base_fields() {
    let profile = CompanyProfile::new("LVMH", Sector::Luxury, Country::France, 380_000.0);
    let record = PanelRecord::assemble(&profile, 2022, base());

    assert_eq!(record.base(), base());
    assert_eq!(record.derived(), DerivedMetrics::compute(&base()));
    assert!(record.is_consistent());
    assert_eq!(record.market_cap, 380_000.0);
}

#[test]
fn test_tampered_record_is_inconsistent() {
    let profile = CompanyProfile::new("LVMH", Sector::Luxury, Country::France, 380_000.0);
    let mut record = PanelRecord::assemble(&profile, 2022, base());
    record.vat_paid += 1.0;
    assert!(!record.is_consistent());
}

#[test]
fn test_labels_parse_back() {
    for sector in Sector::ALL {
        assert_eq!(Sector::from_str(sector.label()).unwrap(), sector);
    }
    for country in Country::ALL {
        assert_eq!(Country::from_str(country.label()).unwrap(), country);
    }
    assert!(matches!(Sector::from_str("Mining"), Err(PanelError::UnknownSector(_))));
    assert!(matches!(Country::from_str("Atlantis"), Err(PanelError::UnknownCountry(_))));
}

#[test]
fn test_record_json_uses_variant_names() {
    let profile = CompanyProfile::new("Airbus", Sector::Aerospace, Country::Netherlands, 120_000.0);
    let record = PanelRecord::assemble(&profile, 2020, base());
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["sector"], "Aerospace");
    assert_eq!(json["country"], "Netherlands");
    assert_eq!(json["year"], 2020);
}
