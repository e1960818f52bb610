//! Tests for the reporting views over the reference panel

use vat_panel::models::LAST_YEAR;
use vat_panel::report::{Indicator, TOP_N, rank_by_burden};
use vat_panel::{CompanyReport, Comparison, GlobalAnalysis, PanelError, Sector, rank_by_vat};

use crate::utils::{approx_eq, seeded_panel};

#[test]
fn test_global_analysis_shape() {
    let panel = seeded_panel();
    let analysis = GlobalAnalysis::from_panel(&panel).unwrap();

    assert_eq!(analysis.latest_year, LAST_YEAR);
    assert_eq!(analysis.record_count, panel.len());
    assert_eq!(analysis.top_vat.len(), TOP_N);
    assert_eq!(analysis.top_burden.len(), TOP_N);
    assert_eq!(analysis.statistics.len(), Indicator::DESCRIBED.len());

    let sectors = panel
        .records()
        .iter()
        .map(|r| r.sector)
        .collect::<std::collections::BTreeSet<Sector>>();
    assert_eq!(analysis.sector_vat_ratio.len(), sectors.len());
    assert_eq!(analysis.sector_vat_by_year.len(), sectors.len() * panel.years().len());
}

#[test]
fn test_sector_mean_matches_records() {
    let panel = seeded_panel();
    let analysis = GlobalAnalysis::from_panel(&panel).unwrap();

    let luxury_2010: Vec<f64> = panel
        .for_year(2010)
        .filter(|r| r.sector == Sector::Luxury)
        .map(|r| r.vat_paid)
        .collect();
    let expected = luxury_2010.iter().sum::<f64>() / luxury_2010.len() as f64;
    let actual = analysis.sector_mean_vat(Sector::Luxury, 2010).unwrap();
    assert!(approx_eq(actual, expected, 1e-12));
}

#[test]
fn test_statistics_bounds() {
    let panel = seeded_panel();
    let analysis = GlobalAnalysis::from_panel(&panel).unwrap();

    let vat = analysis.column(Indicator::VatPaid).unwrap();
    assert_eq!(vat.count, panel.len());
    assert!(vat.min >= 10.0);
    assert!(vat.min <= vat.q25 && vat.q25 <= vat.median);
    assert!(vat.median <= vat.q75 && vat.q75 <= vat.max);
    assert!(vat.std_dev.unwrap() > 0.0);
}

#[test]
fn test_rankings_are_descending() {
    let panel = seeded_panel();

    let by_vat = rank_by_vat(&panel, TOP_N);
    assert!(by_vat.windows(2).all(|w| w[0].vat_paid >= w[1].vat_paid));
    assert_eq!(by_vat.iter().map(|r| r.rank).collect::<Vec<_>>(), (1..=TOP_N).collect::<Vec<_>>());

    let by_burden = rank_by_burden(&panel, 3);
    assert_eq!(by_burden.len(), 3);
    assert!(
        by_burden
            .windows(2)
            .all(|w| w[0].total_tax_burden_ratio >= w[1].total_tax_burden_ratio)
    );
}

#[test]
fn test_ranking_larger_than_universe() {
    let panel = seeded_panel();
    assert_eq!(rank_by_vat(&panel, 1_000).len(), panel.companies().len());
}

#[test]
fn test_company_report_for_literal_company() {
    let panel = seeded_panel();
    let report = CompanyReport::build(&panel, "LVMH").unwrap();

    assert_eq!(report.latest.year, LAST_YEAR);
    assert_eq!(report.latest.sector, Sector::Luxury);
    // Literal VAT series: maximum in the latest year, minimum in the first
    assert_eq!(report.vat_max.year, LAST_YEAR);
    assert_eq!(report.vat_min.year, 2002);
    assert!(report.vat_min.value <= report.vat_mean && report.vat_mean <= report.vat_max.value);

    let text = report.to_string();
    assert!(text.contains("Detailed VAT report: LVMH"));
    assert!(text.contains("Luxury"));
}

#[test]
fn test_company_report_unknown_company() {
    let panel = seeded_panel();
    let err = CompanyReport::build(&panel, "Nokia").unwrap_err();
    assert!(matches!(err, PanelError::CompanyNotFound(name) if name == "Nokia"));
}

#[test]
fn test_comparison() {
    let panel = seeded_panel();
    let names = ["Sanofi", "LVMH", "TotalEnergies"];
    let comparison = Comparison::build(&panel, &names).unwrap();

    assert_eq!(comparison.latest_year, LAST_YEAR);
    assert_eq!(comparison.table.len(), 3);
    // table rows follow panel order
    assert_eq!(comparison.table[0].company, "LVMH");
    assert_eq!(comparison.indicators.len(), Indicator::COMPARISON.len());

    let vat = comparison.indicator(Indicator::VatPaid).unwrap();
    let companies: Vec<&str> = vat.trajectories.iter().map(|t| t.company.as_str()).collect();
    assert_eq!(companies, names);
    assert!(vat.trajectories.iter().all(|t| t.points.len() == panel.years().len()));
}

#[test]
fn test_comparison_rejects_unknown_company() {
    let panel = seeded_panel();
    let err = Comparison::build(&panel, &["LVMH", "Nokia"]).unwrap_err();
    assert!(matches!(err, PanelError::CompanyNotFound(name) if name == "Nokia"));
}

#[test]
fn test_reports_serialize_to_json() {
    let panel = seeded_panel();
    let analysis = GlobalAnalysis::from_panel(&panel).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["latest_year"], LAST_YEAR);
    assert_eq!(json["top_vat"].as_array().unwrap().len(), TOP_N);
    assert_eq!(json["statistics"][0]["column"], "VatPaid");
}
