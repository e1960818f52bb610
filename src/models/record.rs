//! Panel record model
//!
//! One `PanelRecord` per (company, year). Base fields come from the company
//! profile, the four metric series and the VAT-rate table. The five derived
//! fields are computed from the base fields of the same row when the record
//! is assembled and are never set independently.

use serde::{Deserialize, Serialize};

use super::company::CompanyProfile;
use super::types::{Country, Sector};

/// Base metric values for one company and one year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseMetrics {
    /// VAT paid, M€
    pub vat_paid: f64,
    /// Revenue, M€
    pub revenue: f64,
    /// Net profit, M€
    pub profit: f64,
    /// Effective corporate tax rate, %
    pub effective_tax_rate: f64,
    /// Statutory VAT rate of the country for that year, %
    pub country_vat_rate: f64,
}

/// Fiscal ratios derived from a row's base metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// VAT paid / revenue, %
    pub vat_revenue_ratio: f64,
    /// Profit / revenue, %
    pub profit_margin: f64,
    /// Profit × effective tax rate, M€
    pub tax_paid: f64,
    /// VAT paid + tax paid, M€
    pub total_tax_burden: f64,
    /// Total tax burden / revenue, %
    pub total_tax_burden_ratio: f64,
}

impl DerivedMetrics {
    /// Compute the derived ratios from base metrics
    ///
    /// Revenue is floor-clamped strictly positive upstream, so the divisions
    /// are always defined.
    #[must_use]
    pub fn compute(base: &BaseMetrics) -> Self {
        let tax_paid = base.profit * base.effective_tax_rate / 100.0;
        let total_tax_burden = base.vat_paid + tax_paid;
        Self {
            vat_revenue_ratio: base.vat_paid / base.revenue * 100.0,
            profit_margin: base.profit / base.revenue * 100.0,
            tax_paid,
            total_tax_burden,
            total_tax_burden_ratio: total_tax_burden / base.revenue * 100.0,
        }
    }
}

/// One row of the panel dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRecord {
    /// Company name
    pub company: String,
    /// Industry sector
    pub sector: Sector,
    /// Country of listing
    pub country: Country,
    /// Calendar year
    pub year: i32,
    /// VAT paid, M€
    pub vat_paid: f64,
    /// Revenue, M€
    pub revenue: f64,
    /// Net profit, M€
    pub profit: f64,
    /// Effective corporate tax rate, %
    pub effective_tax_rate: f64,
    /// Statutory VAT rate of the country, %
    pub country_vat_rate: f64,
    /// Market capitalization, M€
    pub market_cap: f64,
    /// VAT paid / revenue, %
    pub vat_revenue_ratio: f64,
    /// Profit / revenue, %
    pub profit_margin: f64,
    /// Profit × effective tax rate, M€
    pub tax_paid: f64,
    /// VAT paid + tax paid, M€
    pub total_tax_burden: f64,
    /// Total tax burden / revenue, %
    pub total_tax_burden_ratio: f64,
}

impl PanelRecord {
    /// Assemble a record from its base fields and compute the derived fields
    #[must_use]
    pub fn assemble(profile: &CompanyProfile, year: i32, base: BaseMetrics) -> Self {
        let derived = DerivedMetrics::compute(&base);
        Self {
            company: profile.name.clone(),
            sector: profile.sector,
            country: profile.country,
            year,
            vat_paid: base.vat_paid,
            revenue: base.revenue,
            profit: base.profit,
            effective_tax_rate: base.effective_tax_rate,
            country_vat_rate: base.country_vat_rate,
            market_cap: profile.market_cap,
            vat_revenue_ratio: derived.vat_revenue_ratio,
            profit_margin: derived.profit_margin,
            tax_paid: derived.tax_paid,
            total_tax_burden: derived.total_tax_burden,
            total_tax_burden_ratio: derived.total_tax_burden_ratio,
        }
    }

    /// Base metrics stored in this row
    #[must_use]
    pub const fn base(&self) -> BaseMetrics {
        BaseMetrics {
            vat_paid: self.vat_paid,
            revenue: self.revenue,
            profit: self.profit,
            effective_tax_rate: self.effective_tax_rate,
            country_vat_rate: self.country_vat_rate,
        }
    }

    /// Derived metrics as stored in this row
    #[must_use]
    pub const fn derived(&self) -> DerivedMetrics {
        DerivedMetrics {
            vat_revenue_ratio: self.vat_revenue_ratio,
            profit_margin: self.profit_margin,
            tax_paid: self.tax_paid,
            total_tax_burden: self.total_tax_burden,
            total_tax_burden_ratio: self.total_tax_burden_ratio,
        }
    }

    /// Whether the stored derived fields match a fresh computation from the base fields
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        DerivedMetrics::compute(&self.base()) == self.derived()
    }
}
