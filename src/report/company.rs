//! Per-company report

use std::fmt;

use serde::Serialize;

use crate::algorithm::Panel;
use crate::error::{PanelError, Result};
use crate::models::{FIRST_YEAR, LAST_YEAR, PanelRecord};

use super::stats;

/// A value and the year it was observed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearValue {
    /// Year of the observation
    pub year: i32,
    /// Observed value
    pub value: f64,
}

/// Detailed fiscal report on one company
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyReport {
    /// Latest-year record of the company
    pub latest: PanelRecord,
    /// Mean VAT/revenue ratio of the company's sector in the latest year
    pub sector_avg_vat_ratio: f64,
    /// Mean total tax burden ratio of the company's sector in the latest year
    pub sector_avg_burden_ratio: f64,
    /// Highest VAT paid over the panel years
    pub vat_max: YearValue,
    /// Lowest VAT paid over the panel years
    pub vat_min: YearValue,
    /// Mean VAT paid over the panel years, M€
    pub vat_mean: f64,
}

impl CompanyReport {
    /// Build the report for a company of the panel
    ///
    /// Fails with `CompanyNotFound` if the panel has no rows for `company`.
    pub fn build(panel: &Panel, company: &str) -> Result<Self> {
        let history: Vec<&PanelRecord> = panel.for_company(company).collect();
        let latest = history
            .iter()
            .max_by_key(|r| r.year)
            .copied()
            .ok_or_else(|| PanelError::CompanyNotFound(company.to_string()))?;

        let peers: Vec<&PanelRecord> = panel
            .for_year(latest.year)
            .filter(|r| r.sector == latest.sector)
            .collect();
        let peer_mean = |f: fn(&PanelRecord) -> f64| {
            let values: Vec<f64> = peers.iter().map(|r| f(r)).collect();
            stats::mean(&values).unwrap_or_default()
        };
        let sector_avg_vat_ratio = peer_mean(|r| r.vat_revenue_ratio);
        let sector_avg_burden_ratio = peer_mean(|r| r.total_tax_burden_ratio);

        // history is non-empty here; earliest year wins ties
        let mut vat_max = YearValue { year: latest.year, value: latest.vat_paid };
        let mut vat_min = vat_max;
        for r in history.iter().rev() {
            if r.vat_paid >= vat_max.value {
                vat_max = YearValue { year: r.year, value: r.vat_paid };
            }
            if r.vat_paid <= vat_min.value {
                vat_min = YearValue { year: r.year, value: r.vat_paid };
            }
        }
        let vat: Vec<f64> = history.iter().map(|r| r.vat_paid).collect();
        let vat_mean = stats::mean(&vat).unwrap_or_default();

        Ok(Self {
            latest: latest.clone(),
            sector_avg_vat_ratio,
            sector_avg_burden_ratio,
            vat_max,
            vat_min,
            vat_mean,
        })
    }

    /// Company name
    #[must_use]
    pub fn company(&self) -> &str {
        &self.latest.company
    }
}

impl fmt::Display for CompanyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.latest;
        writeln!(f, "Detailed VAT report: {}", r.company)?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "Sector: {}", r.sector)?;
        writeln!(f, "Country: {}", r.country)?;
        writeln!(f, "Latest year: {}", r.year)?;
        writeln!(f, "VAT paid: {:.0} M€", r.vat_paid)?;
        writeln!(f, "Revenue: {:.0} M€", r.revenue)?;
        writeln!(f, "Profit: {:.0} M€", r.profit)?;
        writeln!(f, "Effective tax rate: {:.1}%", r.effective_tax_rate)?;
        writeln!(f, "Country VAT rate: {:.1}%", r.country_vat_rate)?;
        writeln!(f, "VAT/Revenue ratio: {:.1}%", r.vat_revenue_ratio)?;
        writeln!(f, "Total tax burden: {:.1}%", r.total_tax_burden_ratio)?;

        writeln!(f, "\nCompared with the {} sector average:", r.sector)?;
        writeln!(
            f,
            "  VAT/Revenue ratio: {:.1}% vs {:.1}%",
            r.vat_revenue_ratio, self.sector_avg_vat_ratio
        )?;
        writeln!(
            f,
            "  Total tax burden: {:.1}% vs {:.1}%",
            r.total_tax_burden_ratio, self.sector_avg_burden_ratio
        )?;

        writeln!(f, "\nVAT paid trend:")?;
        writeln!(f, "  Maximum: {:.0} M€ ({})", self.vat_max.value, self.vat_max.year)?;
        writeln!(f, "  Minimum: {:.0} M€ ({})", self.vat_min.value, self.vat_min.year)?;
        writeln!(f, "  Mean ({FIRST_YEAR}-{LAST_YEAR}): {:.0} M€", self.vat_mean)
    }
}
