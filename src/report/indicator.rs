//! Panel columns used by the reports

use std::fmt;

use serde::Serialize;

use crate::models::PanelRecord;

/// A numeric column of the panel that reports aggregate over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Indicator {
    VatPaid,
    Revenue,
    Profit,
    VatRevenueRatio,
    EffectiveTaxRate,
    TotalTaxBurdenRatio,
}

impl Indicator {
    /// Indicators plotted side by side in a comparison
    pub const COMPARISON: [Self; 6] = [
        Self::VatPaid,
        Self::Revenue,
        Self::Profit,
        Self::VatRevenueRatio,
        Self::EffectiveTaxRate,
        Self::TotalTaxBurdenRatio,
    ];

    /// Columns covered by the descriptive statistics
    pub const DESCRIBED: [Self; 5] = [
        Self::VatPaid,
        Self::Revenue,
        Self::Profit,
        Self::VatRevenueRatio,
        Self::TotalTaxBurdenRatio,
    ];

    /// Column label with unit
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VatPaid => "VAT Paid (M€)",
            Self::Revenue => "Revenue (M€)",
            Self::Profit => "Profit (M€)",
            Self::VatRevenueRatio => "VAT/Revenue Ratio (%)",
            Self::EffectiveTaxRate => "Effective Tax Rate (%)",
            Self::TotalTaxBurdenRatio => "Total Tax Burden/Revenue (%)",
        }
    }

    /// Read this column from a record
    #[must_use]
    pub const fn value(self, record: &PanelRecord) -> f64 {
        match self {
            Self::VatPaid => record.vat_paid,
            Self::Revenue => record.revenue,
            Self::Profit => record.profit,
            Self::VatRevenueRatio => record.vat_revenue_ratio,
            Self::EffectiveTaxRate => record.effective_tax_rate,
            Self::TotalTaxBurdenRatio => record.total_tax_burden_ratio,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
