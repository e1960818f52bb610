//! Tests for panel construction

use vat_panel::models::{FIRST_YEAR, LAST_YEAR, YEAR_COUNT};
use vat_panel::reference::DEFAULT_VAT_RATE;
use vat_panel::{
    CompanyUniverse, Country, HistoricalTables, MetricKind, MetricSeries, PanelBuilder,
    PanelError, PanelRecord, SeriesGenerator, SyntheticModel, VatRateTable,
};

use crate::utils::{TEST_SEED, approx_eq, seeded_config, seeded_panel};

#[test]
fn test_panel_covers_universe_and_years() {
    let panel = seeded_panel();
    let universe = CompanyUniverse::euronext();

    assert_eq!(panel.len(), universe.len() * YEAR_COUNT);
    assert_eq!(panel.companies(), universe.names());
    assert_eq!(panel.years(), (FIRST_YEAR..=LAST_YEAR).collect::<Vec<_>>());
}

#[test]
fn test_records_in_company_then_year_order() {
    let panel = seeded_panel();
    let universe = CompanyUniverse::euronext();

    for (chunk, profile) in panel.records().chunks(YEAR_COUNT).zip(universe.iter()) {
        assert!(chunk.iter().all(|r| r.company == profile.name));
        let years: Vec<i32> = chunk.iter().map(|r| r.year).collect();
        assert_eq!(years, (FIRST_YEAR..=LAST_YEAR).collect::<Vec<_>>());
    }
}

#[test]
fn test_floors_and_tax_rate_bounds_hold() {
    let panel = seeded_panel();
    for record in panel.records() {
        assert!(record.vat_paid >= 10.0, "{} {}: {}", record.company, record.year, record.vat_paid);
        assert!(record.revenue >= 100.0, "{} {}: {}", record.company, record.year, record.revenue);
        assert!(
            (15.0..=50.0).contains(&record.effective_tax_rate),
            "{} {}: {}",
            record.company,
            record.year,
            record.effective_tax_rate
        );
    }
}

#[test]
fn test_derived_fields_recompute_exactly() {
    let panel = seeded_panel();
    assert!(panel.records().iter().all(PanelRecord::is_consistent));
}

#[test]
fn test_seeded_build_is_reproducible() {
    let first = seeded_panel();
    let second = seeded_panel();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_and_sequential_builds_agree() {
    let sequential = PanelBuilder::euronext()
        .with_config(seeded_config(false))
        .build()
        .unwrap();
    let parallel = PanelBuilder::euronext()
        .with_config(seeded_config(true))
        .build()
        .unwrap();
    assert_eq!(sequential.records(), parallel.records());
}

#[test]
fn test_restricted_build_matches_full_build() {
    let full = seeded_panel();
    let subset = PanelBuilder::euronext()
        .with_config(seeded_config(true))
        .with_companies(&["Sanofi", "Airbus"])
        .unwrap()
        .build()
        .unwrap();

    // A company's rows do not depend on which other companies are built
    let full_sanofi: Vec<&PanelRecord> = full.for_company("Sanofi").collect();
    let subset_sanofi: Vec<&PanelRecord> = subset.for_company("Sanofi").collect();
    assert_eq!(full_sanofi, subset_sanofi);
    assert_eq!(subset.companies(), vec!["Sanofi", "Airbus"]);
}

#[test]
fn test_unknown_company_rejected_before_build() {
    let err = PanelBuilder::euronext()
        .with_companies(&["LVMH", "Nokia"])
        .unwrap_err();
    assert!(matches!(err, PanelError::UnknownCompany(name) if name == "Nokia"));
}

#[test]
fn test_literal_ratio_for_lvmh_2022() {
    let panel = seeded_panel();
    let record = panel
        .for_company("LVMH")
        .find(|r| r.year == 2022)
        .unwrap();

    assert_eq!(record.vat_paid, 2100.0);
    assert_eq!(record.revenue, 79200.0);
    assert!(approx_eq(record.vat_revenue_ratio, 2100.0 / 79200.0 * 100.0, 1e-12));
    assert!((record.vat_revenue_ratio - 2.65).abs() < 0.01);
}

#[test]
fn test_country_vat_rates_joined() {
    let panel = seeded_panel();

    let st_2024 = panel
        .for_company("STMicroelectronics")
        .find(|r| r.year == 2024)
        .unwrap();
    assert_eq!(st_2024.country, Country::Switzerland);
    assert_eq!(st_2024.country_vat_rate, 8.1);

    let airbus_2012 = panel.for_company("Airbus").find(|r| r.year == 2012).unwrap();
    assert_eq!(airbus_2012.country_vat_rate, 21.0);

    let lvmh_2005 = panel.for_company("LVMH").find(|r| r.year == 2005).unwrap();
    assert_eq!(lvmh_2005.country_vat_rate, 19.6);
}

#[test]
fn test_missing_rates_fall_back_to_default() {
    let panel = PanelBuilder::new(
        CompanyUniverse::euronext(),
        VatRateTable::empty(),
        SeriesGenerator::euronext(),
    )
    .with_config(seeded_config(false))
    .with_companies(&["Sanofi"])
    .unwrap()
    .build()
    .unwrap();

    assert!(panel.records().iter().all(|r| r.country_vat_rate == DEFAULT_VAT_RATE));
}

#[test]
fn test_panel_remembers_seed() {
    let panel = seeded_panel();
    assert_eq!(panel.random_seed(), Some(TEST_SEED));
}

#[test]
fn test_zero_threads_rejected() {
    let mut config = seeded_config(true);
    config.num_threads = 0;
    let err = PanelBuilder::euronext().with_config(config).build().unwrap_err();
    assert!(matches!(err, PanelError::InvalidConfig(_)));
}

#[test]
fn test_unseeded_entry_point_builds_full_panel() {
    let panel = vat_panel::build_panel().unwrap();
    assert_eq!(panel.len(), CompanyUniverse::euronext().len() * YEAR_COUNT);
    assert_eq!(panel.random_seed(), None);
    assert!(panel.records().iter().all(PanelRecord::is_consistent));
}

#[test]
fn test_partial_literal_series_rejected_on_load() {
    let json = r#"{"kind":"Revenue","values":{"2003":1000.0,"2004":1000.0}}"#;
    let err = serde_json::from_str::<MetricSeries>(json).unwrap_err();
    assert!(err.to_string().contains("Incomplete metric series"), "{err}");
}

#[test]
fn test_loaded_literal_series_joins_on_year() {
    let revenue = MetricSeries::from_fn(MetricKind::Revenue, |year| f64::from(year) * 10.0);
    let loaded: MetricSeries = serde_json::from_str(&serde_json::to_string(&revenue).unwrap()).unwrap();
    let generator = SeriesGenerator::new(
        HistoricalTables::empty().with_series("Sanofi", loaded),
        SyntheticModel::default(),
    );

    let panel = PanelBuilder::new(CompanyUniverse::euronext(), VatRateTable::euronext(), generator)
        .with_config(seeded_config(false))
        .with_companies(&["Sanofi"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(panel.len(), YEAR_COUNT);
    for record in panel.records() {
        assert_eq!(record.revenue, f64::from(record.year) * 10.0);
        assert!(record.profit > 0.0, "{}: {}", record.year, record.profit);
    }
}
