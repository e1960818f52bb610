//! Synthetic time-series model
//!
//! Fabricates plausible 2002-2025 trajectories for companies without literal
//! figures. Base values come from the sector and country policy tables;
//! amounts then follow the compounding growth model in [`growth`], profit
//! follows a noisy sector margin on revenue, and the effective tax rate
//! follows a linear trend around a country/sector base.
//!
//! The model never owns a random source: every method takes the generator to
//! draw from, so callers decide between seeded and entropy-backed streams.

pub mod growth;
pub mod policy;

use rand::Rng;

use crate::models::{CompanyProfile, FIRST_YEAR, MetricKind, MetricSeries, Sector};

pub use growth::{CrisisShocks, GrowthParams};
use growth::normal;
use policy::{BASE_TAX_RATE, PROFIT_MARGIN, REVENUE_RATIO, TAX_RATE_SURCHARGE, VAT_BASE_MULTIPLIER};

/// Lowest effective tax rate the model produces, %
pub const MIN_TAX_RATE: f64 = 15.0;
/// Highest effective tax rate the model produces, %
pub const MAX_TAX_RATE: f64 = 50.0;

/// Parameters of the synthetic model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticModel {
    /// Growth model for VAT paid
    pub vat_paid: GrowthParams,
    /// Growth model for revenue
    pub revenue: GrowthParams,
    /// Standard deviation of the yearly margin deviation
    pub margin_std_dev: f64,
    /// Effective tax rate increase per elapsed year, percentage points
    pub tax_rate_trend: f64,
    /// Standard deviation of the yearly tax rate noise, percentage points
    pub tax_rate_std_dev: f64,
}

impl Default for SyntheticModel {
    fn default() -> Self {
        Self {
            vat_paid: GrowthParams::VAT_PAID,
            revenue: GrowthParams::REVENUE,
            margin_std_dev: 0.03,
            tax_rate_trend: 0.2,
            tax_rate_std_dev: 1.0,
        }
    }
}

impl SyntheticModel {
    /// Model with every random component switched off
    ///
    /// Useful for checking the deterministic shape of the trajectories.
    #[must_use]
    pub fn noiseless() -> Self {
        let model = Self::default();
        Self {
            vat_paid: model.vat_paid.without_noise(),
            revenue: model.revenue.without_noise(),
            margin_std_dev: 0.0,
            tax_rate_std_dev: 0.0,
            ..model
        }
    }

    /// VAT paid in the base year before growth and noise
    #[must_use]
    pub fn vat_base(&self, profile: &CompanyProfile) -> f64 {
        profile.market_cap * VAT_BASE_MULTIPLIER.get(profile.sector)
    }

    /// Revenue in the base year before growth and noise
    #[must_use]
    pub fn revenue_base(&self, profile: &CompanyProfile) -> f64 {
        profile.market_cap * REVENUE_RATIO.get(profile.sector)
    }

    /// Typical profit margin of a sector
    #[must_use]
    pub fn profit_margin(&self, sector: Sector) -> f64 {
        PROFIT_MARGIN.get(sector)
    }

    /// Effective tax rate before trend and noise
    #[must_use]
    pub fn base_tax_rate(&self, profile: &CompanyProfile) -> f64 {
        BASE_TAX_RATE.get(profile.country) + TAX_RATE_SURCHARGE.get(profile.sector)
    }

    /// Synthesize VAT paid
    pub fn vat_paid<R: Rng + ?Sized>(&self, profile: &CompanyProfile, rng: &mut R) -> MetricSeries {
        let base = self.vat_base(profile);
        MetricSeries::from_fn(MetricKind::VatPaid, |year| {
            self.vat_paid.value_for_year(base, year, rng)
        })
    }

    /// Synthesize revenue
    pub fn revenue<R: Rng + ?Sized>(&self, profile: &CompanyProfile, rng: &mut R) -> MetricSeries {
        let base = self.revenue_base(profile);
        MetricSeries::from_fn(MetricKind::Revenue, |year| {
            self.revenue.value_for_year(base, year, rng)
        })
    }

    /// Synthesize profit as a noisy sector margin applied to `revenue`
    ///
    /// Profit is not floored; loss years are possible.
    pub fn profit<R: Rng + ?Sized>(
        &self,
        profile: &CompanyProfile,
        revenue: &MetricSeries,
        rng: &mut R,
    ) -> MetricSeries {
        let margin = self.profit_margin(profile.sector);
        revenue.map(MetricKind::Profit, |_, revenue| {
            revenue * normal(rng, margin, self.margin_std_dev)
        })
    }

    /// Synthesize the effective tax rate, clamped to [15, 50]
    pub fn effective_tax_rate<R: Rng + ?Sized>(&self, profile: &CompanyProfile, rng: &mut R) -> MetricSeries {
        let base = self.base_tax_rate(profile);
        MetricSeries::from_fn(MetricKind::EffectiveTaxRate, |year| {
            let trend = f64::from(year - FIRST_YEAR) * self.tax_rate_trend;
            normal(rng, base + trend, self.tax_rate_std_dev).clamp(MIN_TAX_RATE, MAX_TAX_RATE)
        })
    }
}
