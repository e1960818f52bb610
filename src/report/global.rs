//! Panel-wide analysis
//!
//! Sector and country aggregates, descriptive statistics and the latest-year
//! leaders. This is the data behind the global overview; rendering it as
//! charts is left to consumers.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::algorithm::Panel;
use crate::error::{PanelError, Result};
use crate::models::{Country, PanelRecord, Sector};

use super::indicator::Indicator;
use super::ranking::{self, BurdenRanking, RankedCompany};
use super::stats::{self, Describe, FiveNumberSummary};

/// Number of companies in each top list
pub const TOP_N: usize = 10;

/// Mean VAT paid by a sector in one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorYearMean {
    /// Sector
    pub sector: Sector,
    /// Panel year
    pub year: i32,
    /// Mean VAT paid across the sector's companies, M€
    pub mean_vat_paid: f64,
}

/// Distribution of the VAT/revenue ratio within a sector, all years pooled
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorRatioSummary {
    /// Sector
    pub sector: Sector,
    /// Five-number summary of the VAT/revenue ratio, %
    pub summary: FiveNumberSummary,
}

/// Mean total tax burden ratio of a country in one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryYearMean {
    /// Country of listing
    pub country: Country,
    /// Panel year
    pub year: i32,
    /// Mean total tax burden ratio, %
    pub mean_burden_ratio: f64,
}

/// Descriptive statistics of one panel column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStatistics {
    /// Described column
    pub column: Indicator,
    /// Statistics over every record
    pub stats: Describe,
}

/// Panel-wide analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalAnalysis {
    /// Earliest year in the panel
    pub first_year: i32,
    /// Latest year in the panel
    pub latest_year: i32,
    /// Number of panel records
    pub record_count: usize,
    /// Mean VAT paid per (sector, year)
    pub sector_vat_by_year: Vec<SectorYearMean>,
    /// VAT/revenue ratio distribution per sector
    pub sector_vat_ratio: Vec<SectorRatioSummary>,
    /// Largest VAT payers of the latest year
    pub top_vat: Vec<RankedCompany>,
    /// Mean total tax burden ratio per (country, year)
    pub country_burden_by_year: Vec<CountryYearMean>,
    /// Descriptive statistics of the main columns
    pub statistics: Vec<ColumnStatistics>,
    /// Highest total tax burden ratios of the latest year
    pub top_burden: Vec<BurdenRanking>,
}

impl GlobalAnalysis {
    /// Analyse a panel
    ///
    /// Fails with `EmptyPanel` when there is nothing to analyse.
    pub fn from_panel(panel: &Panel) -> Result<Self> {
        let years = panel.years();
        let (Some(&first_year), Some(&latest_year)) = (years.first(), years.last()) else {
            return Err(PanelError::EmptyPanel);
        };
        let records = panel.records();

        let sector_vat_by_year = grouped_means(records, |r| (r.sector, r.year), |r| r.vat_paid)
            .into_iter()
            .map(|((sector, year), mean_vat_paid)| SectorYearMean {
                sector,
                year,
                mean_vat_paid,
            })
            .collect();

        let country_burden_by_year =
            grouped_means(records, |r| (r.country, r.year), |r| r.total_tax_burden_ratio)
                .into_iter()
                .map(|((country, year), mean_burden_ratio)| CountryYearMean {
                    country,
                    year,
                    mean_burden_ratio,
                })
                .collect();

        let sector_vat_ratio = records
            .iter()
            .map(|r| (r.sector, r.vat_revenue_ratio))
            .into_group_map()
            .into_iter()
            .sorted_by_key(|(sector, _)| *sector)
            .filter_map(|(sector, ratios)| {
                Describe::from_values(&ratios).map(|d| SectorRatioSummary {
                    sector,
                    summary: d.five_number(),
                })
            })
            .collect();

        let statistics = Indicator::DESCRIBED
            .iter()
            .filter_map(|&column| {
                let values: Vec<f64> = records.iter().map(|r| column.value(r)).collect();
                Describe::from_values(&values).map(|stats| ColumnStatistics { column, stats })
            })
            .collect();

        Ok(Self {
            first_year,
            latest_year,
            record_count: records.len(),
            sector_vat_by_year,
            sector_vat_ratio,
            top_vat: ranking::rank_by_vat(panel, TOP_N),
            country_burden_by_year,
            statistics,
            top_burden: ranking::rank_by_burden(panel, TOP_N),
        })
    }

    /// Mean VAT paid for a sector in a year
    #[must_use]
    pub fn sector_mean_vat(&self, sector: Sector, year: i32) -> Option<f64> {
        self.sector_vat_by_year
            .iter()
            .find(|m| m.sector == sector && m.year == year)
            .map(|m| m.mean_vat_paid)
    }

    /// Mean burden ratio for a country in a year
    #[must_use]
    pub fn country_mean_burden(&self, country: Country, year: i32) -> Option<f64> {
        self.country_burden_by_year
            .iter()
            .find(|m| m.country == country && m.year == year)
            .map(|m| m.mean_burden_ratio)
    }

    /// Descriptive statistics of a column, if it is described
    #[must_use]
    pub fn column(&self, indicator: Indicator) -> Option<&Describe> {
        self.statistics
            .iter()
            .find(|c| c.column == indicator)
            .map(|c| &c.stats)
    }
}

impl fmt::Display for GlobalAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Descriptive statistics of Euronext VAT data ({}-{}, {} records):",
            self.first_year, self.latest_year, self.record_count
        )?;
        for column in &self.statistics {
            writeln!(f, "  {:<30} {}", column.column.label(), column.stats)?;
        }

        writeln!(f, "\nVAT/Revenue ratio by sector (min / q1 / median / q3 / max):")?;
        for entry in &self.sector_vat_ratio {
            let s = &entry.summary;
            writeln!(
                f,
                "  {:<25} {:.2} / {:.2} / {:.2} / {:.2} / {:.2}",
                entry.sector.label(),
                s.min,
                s.q1,
                s.median,
                s.q3,
                s.max
            )?;
        }

        writeln!(f, "\nHighest VAT paid in {}:", self.latest_year)?;
        for entry in &self.top_vat {
            writeln!(f, "  {entry}")?;
        }

        writeln!(f, "\nHighest total tax burden in {}:", self.latest_year)?;
        for entry in &self.top_burden {
            writeln!(f, "  {entry}")?;
        }
        Ok(())
    }
}

/// Mean of `value` per key, keys ascending
fn grouped_means<K: Ord + Copy>(
    records: &[PanelRecord],
    key: impl Fn(&PanelRecord) -> K,
    value: impl Fn(&PanelRecord) -> f64,
) -> Vec<(K, f64)> {
    let groups = records.iter().sorted_by_key(|r| key(r)).chunk_by(|r| key(r));
    groups
        .into_iter()
        .filter_map(|(k, group)| {
            let values: Vec<f64> = group.map(&value).collect();
            stats::mean(&values).map(|m| (k, m))
        })
        .collect()
}
