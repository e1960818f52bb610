//! Side-by-side comparison of selected companies

use std::fmt;

use serde::Serialize;

use crate::algorithm::Panel;
use crate::error::{PanelError, Result};

use super::indicator::Indicator;

/// Latest-year key figures of one company
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Company name
    pub company: String,
    /// VAT paid, M€
    pub vat_paid: f64,
    /// Revenue, M€
    pub revenue: f64,
    /// VAT paid as a share of revenue, %
    pub vat_revenue_ratio: f64,
    /// Corporate tax paid, M€
    pub tax_paid: f64,
    /// VAT plus corporate tax as a share of revenue, %
    pub total_tax_burden_ratio: f64,
}

/// Yearly values of one indicator for one company
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    /// Company name
    pub company: String,
    /// (year, value) pairs in year order
    pub points: Vec<(i32, f64)>,
}

/// One indicator across all compared companies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSeries {
    /// Compared indicator
    pub indicator: Indicator,
    /// One trajectory per company
    pub trajectories: Vec<Trajectory>,
}

/// Comparative analysis of a set of companies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Companies in the requested order
    pub companies: Vec<String>,
    /// Year of the comparison table
    pub latest_year: i32,
    /// Latest-year rows in panel order
    pub table: Vec<ComparisonRow>,
    /// One entry per indicator, trajectories in the requested order
    pub indicators: Vec<IndicatorSeries>,
}

impl Comparison {
    /// Compare the named companies
    ///
    /// Every name must be present in the panel, otherwise `CompanyNotFound`.
    pub fn build<S: AsRef<str>>(panel: &Panel, names: &[S]) -> Result<Self> {
        if names.is_empty() {
            return Err(PanelError::InvalidConfig(
                "comparison needs at least one company".to_string(),
            ));
        }
        if let Some(missing) = names.iter().find(|n| !panel.contains(n.as_ref())) {
            return Err(PanelError::CompanyNotFound(missing.as_ref().to_string()));
        }

        let companies: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        let selected = |company: &str| companies.iter().any(|c| c == company);

        let latest_year = panel
            .records()
            .iter()
            .filter(|r| selected(&r.company))
            .map(|r| r.year)
            .max()
            .ok_or(PanelError::EmptyPanel)?;

        let table = panel
            .for_year(latest_year)
            .filter(|r| selected(&r.company))
            .map(|r| ComparisonRow {
                company: r.company.clone(),
                vat_paid: r.vat_paid,
                revenue: r.revenue,
                vat_revenue_ratio: r.vat_revenue_ratio,
                tax_paid: r.tax_paid,
                total_tax_burden_ratio: r.total_tax_burden_ratio,
            })
            .collect();

        let indicators = Indicator::COMPARISON
            .iter()
            .map(|&indicator| IndicatorSeries {
                indicator,
                trajectories: companies
                    .iter()
                    .map(|company| Trajectory {
                        company: company.clone(),
                        points: panel
                            .for_company(company)
                            .map(|r| (r.year, indicator.value(r)))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            companies,
            latest_year,
            table,
            indicators,
        })
    }

    /// Trajectories of one indicator
    #[must_use]
    pub fn indicator(&self, indicator: Indicator) -> Option<&IndicatorSeries> {
        self.indicators.iter().find(|s| s.indicator == indicator)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comparative analysis: {}", self.companies.join(", "))?;
        writeln!(f, "{}", "=".repeat(70))?;
        writeln!(f, "\nKey fiscal indicators ({}):", self.latest_year)?;
        writeln!(f, "{}", "-".repeat(100))?;
        writeln!(
            f,
            "{:<20} {:<10} {:<12} {:<12} {:<10} {:<15}",
            "Company", "VAT (M€)", "Rev. (M€)", "VAT/Rev.", "Tax (M€)", "Tax burden"
        )?;
        writeln!(f, "{}", "-".repeat(100))?;
        for row in &self.table {
            writeln!(
                f,
                "{:<20} {:<10.0} {:<12.0} {:<12.1} {:<10.0} {:<15.1}",
                row.company,
                row.vat_paid,
                row.revenue,
                row.vat_revenue_ratio,
                row.tax_paid,
                row.total_tax_burden_ratio
            )?;
        }
        Ok(())
    }
}
