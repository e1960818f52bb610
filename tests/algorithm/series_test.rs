//! Tests for series generation and the synthetic model

use rand::SeedableRng;
use rand::rngs::StdRng;

use vat_panel::algorithm::SeriesSource;
use vat_panel::models::{YEAR_COUNT, years};
use vat_panel::{
    CompanyProfile, CompanyUniverse, Country, HistoricalTables, MetricKind, MetricSeries, Sector,
    SeriesGenerator, SyntheticModel,
};

use crate::utils::TEST_SEED;

fn energy_company() -> CompanyProfile {
    CompanyProfile::new("Test Energy", Sector::Energy, Country::France, 100_000.0)
}

#[test]
fn test_energy_base_values() {
    let model = SyntheticModel::default();
    let profile = energy_company();

    assert!((model.vat_base(&profile) - 150.0).abs() < 1e-9);
    assert!((model.revenue_base(&profile) - 80_000.0).abs() < 1e-9);
}

#[test]
fn test_noiseless_series_start_at_base() {
    let model = SyntheticModel::noiseless();
    let profile = energy_company();
    let mut rng = StdRng::seed_from_u64(TEST_SEED);

    let vat = model.vat_paid(&profile, &mut rng);
    let revenue = model.revenue(&profile, &mut rng);
    assert!((vat.value(2002).unwrap() - 150.0).abs() < 1e-9);
    assert!((revenue.value(2002).unwrap() - 80_000.0).abs() < 1e-9);
}

#[test]
fn test_every_generated_series_is_complete() {
    let generator = SeriesGenerator::euronext().with_seed(Some(TEST_SEED));
    for profile in CompanyUniverse::euronext().iter() {
        let series = generator.generate_company(profile);
        for kind in MetricKind::ALL {
            let s = series.get(kind);
            assert_eq!(s.len(), YEAR_COUNT, "{} {kind}", profile.name);
            assert!(s.years().into_iter().eq(years()), "{} {kind}", profile.name);
        }
    }
}

#[test]
fn test_literal_tables_win_over_synthesis() {
    let generator = SeriesGenerator::euronext().with_seed(Some(TEST_SEED));
    let tables = HistoricalTables::euronext();
    let universe = CompanyUniverse::euronext();
    let total = universe.get("TotalEnergies").unwrap();

    for kind in MetricKind::ALL {
        assert!(matches!(generator.source("TotalEnergies", kind), SeriesSource::Literal(_)));
        assert_eq!(&generator.generate(total, kind), tables.get("TotalEnergies", kind).unwrap());
    }
}

#[test]
fn test_partial_literal_coverage() {
    let generator = SeriesGenerator::euronext().with_seed(Some(TEST_SEED));
    assert!(matches!(generator.source("L'Oréal", MetricKind::VatPaid), SeriesSource::Literal(_)));
    assert_eq!(generator.source("L'Oréal", MetricKind::Revenue), SeriesSource::Synthetic);
    assert_eq!(generator.source("L'Oréal", MetricKind::Profit), SeriesSource::Synthetic);
}

#[test]
fn test_synthetic_profit_follows_literal_revenue() {
    // Literal revenue with no literal profit: profit is synthesized from that revenue
    let revenue = MetricSeries::from_fn(MetricKind::Revenue, |_| 1_000.0);
    let tables = HistoricalTables::empty().with_series("Acme", revenue.clone());
    let generator = SeriesGenerator::new(tables, SyntheticModel::noiseless());
    let profile = CompanyProfile::new("Acme", Sector::Luxury, Country::Belgium, 5_000.0);

    let series = generator.generate_company(&profile);
    assert_eq!(series.revenue, revenue);
    for (year, profit) in series.profit.iter() {
        // Luxury margin 20% without noise
        assert!((profit - 200.0).abs() < 1e-9, "year {year}: {profit}");
    }
}

#[test]
fn test_unseeded_generation_still_respects_bounds() {
    let generator = SeriesGenerator::euronext();
    let profile = energy_company();
    let series = generator.generate_company(&profile);

    assert!(series.vat_paid.values().iter().all(|&v| v >= 10.0));
    assert!(series.revenue.values().iter().all(|&v| v >= 100.0));
    assert!(
        series
            .effective_tax_rate
            .values()
            .iter()
            .all(|v| (15.0..=50.0).contains(v))
    );
}
