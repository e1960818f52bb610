//! Company rankings for a single year

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::algorithm::Panel;
use crate::models::PanelRecord;

use super::indicator::Indicator;

/// One entry of a VAT ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCompany {
    /// Position, starting at 1
    pub rank: usize,
    /// Company name
    pub company: String,
    /// VAT paid, M€
    pub vat_paid: f64,
    /// VAT paid as a share of revenue, %
    pub vat_revenue_ratio: f64,
}

impl fmt::Display for RankedCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {}: {:.0} M€ (Ratio: {:.1}%)",
            self.rank, self.company, self.vat_paid, self.vat_revenue_ratio
        )
    }
}

/// One entry of a total-tax-burden ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurdenRanking {
    /// Position, starting at 1
    pub rank: usize,
    /// Company name
    pub company: String,
    /// VAT plus corporate tax as a share of revenue, %
    pub total_tax_burden_ratio: f64,
    /// VAT paid as a share of revenue, %
    pub vat_revenue_ratio: f64,
    /// Effective corporate tax rate, %
    pub effective_tax_rate: f64,
}

impl fmt::Display for BurdenRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {}: {:.1}% (VAT: {:.1}%, Tax rate: {:.1}%)",
            self.rank,
            self.company,
            self.total_tax_burden_ratio,
            self.vat_revenue_ratio,
            self.effective_tax_rate
        )
    }
}

/// Top `n` records of a year by an indicator, descending
///
/// Ties keep panel order.
#[must_use]
pub fn top_in_year(panel: &Panel, year: i32, indicator: Indicator, n: usize) -> Vec<&PanelRecord> {
    panel
        .for_year(year)
        .sorted_by(|a, b| indicator.value(b).total_cmp(&indicator.value(a)))
        .take(n)
        .collect()
}

/// Top `n` companies by VAT paid in the latest year of the panel
#[must_use]
pub fn rank_by_vat(panel: &Panel, n: usize) -> Vec<RankedCompany> {
    let Some(year) = panel.latest_year() else {
        return Vec::new();
    };
    top_in_year(panel, year, Indicator::VatPaid, n)
        .into_iter()
        .enumerate()
        .map(|(i, r)| RankedCompany {
            rank: i + 1,
            company: r.company.clone(),
            vat_paid: r.vat_paid,
            vat_revenue_ratio: r.vat_revenue_ratio,
        })
        .collect()
}

/// Top `n` companies by total tax burden ratio in the latest year
#[must_use]
pub fn rank_by_burden(panel: &Panel, n: usize) -> Vec<BurdenRanking> {
    let Some(year) = panel.latest_year() else {
        return Vec::new();
    };
    top_in_year(panel, year, Indicator::TotalTaxBurdenRatio, n)
        .into_iter()
        .enumerate()
        .map(|(i, r)| BurdenRanking {
            rank: i + 1,
            company: r.company.clone(),
            total_tax_burden_ratio: r.total_tax_burden_ratio,
            vat_revenue_ratio: r.vat_revenue_ratio,
            effective_tax_rate: r.effective_tax_rate,
        })
        .collect()
}
