//! Series generation
//!
//! Resolves the four metric series of a company. A literal historical series
//! is returned verbatim when one exists; otherwise the synthetic model
//! fabricates it. Profit depends on revenue, so `generate_company` resolves
//! revenue first and hands it to `generate_profit` explicitly.

use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHasher;

use crate::algorithm::synthetic::SyntheticModel;
use crate::models::{CompanyProfile, MetricKind, MetricSeries};
use crate::reference::HistoricalTables;

/// Where a (company, metric) series comes from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesSource<'a> {
    /// A literal historical table covering the full range
    Literal(&'a MetricSeries),
    /// No literal data; the synthetic model fabricates the series
    Synthetic,
}

/// The four resolved metric series of one company
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySeries {
    /// VAT paid
    pub vat_paid: MetricSeries,
    /// Revenue
    pub revenue: MetricSeries,
    /// Profit, resolved after revenue
    pub profit: MetricSeries,
    /// Effective tax rate
    pub effective_tax_rate: MetricSeries,
}

impl CompanySeries {
    /// Series for a metric kind
    #[must_use]
    pub const fn get(&self, kind: MetricKind) -> &MetricSeries {
        match kind {
            MetricKind::VatPaid => &self.vat_paid,
            MetricKind::Revenue => &self.revenue,
            MetricKind::Profit => &self.profit,
            MetricKind::EffectiveTaxRate => &self.effective_tax_rate,
        }
    }
}

/// Produces metric series from literal tables or the synthetic model
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    historical: HistoricalTables,
    model: SyntheticModel,
    random_seed: Option<u64>,
}

impl SeriesGenerator {
    /// Create a generator over the given literal tables and model
    #[must_use]
    pub fn new(historical: HistoricalTables, model: SyntheticModel) -> Self {
        Self {
            historical,
            model,
            random_seed: None,
        }
    }

    /// Generator over the reference literal tables and the default model
    #[must_use]
    pub fn euronext() -> Self {
        Self::new(HistoricalTables::euronext(), SyntheticModel::default())
    }

    /// Fix the base seed of all random streams
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.random_seed = seed;
        self
    }

    /// Base seed, if the generator is seeded
    #[must_use]
    pub const fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    /// The synthetic model used for data gaps
    #[must_use]
    pub const fn model(&self) -> &SyntheticModel {
        &self.model
    }

    /// The literal tables
    #[must_use]
    pub const fn historical(&self) -> &HistoricalTables {
        &self.historical
    }

    /// Decide where a (company, metric) series comes from
    #[must_use]
    pub fn source(&self, company: &str, kind: MetricKind) -> SeriesSource<'_> {
        self.historical
            .get(company, kind)
            .map_or(SeriesSource::Synthetic, SeriesSource::Literal)
    }

    /// Random stream for one (company, metric) pair
    ///
    /// With a base seed the stream depends only on the seed, the company name
    /// and the metric kind, never on generation order.
    #[must_use]
    pub fn rng_for(&self, company: &str, kind: MetricKind) -> StdRng {
        match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(stream_seed(seed, company, kind)),
            None => StdRng::from_os_rng(),
        }
    }

    /// Resolve one metric series for a company
    ///
    /// Profit without a literal table resolves revenue first.
    #[must_use]
    pub fn generate(&self, profile: &CompanyProfile, kind: MetricKind) -> MetricSeries {
        match kind {
            MetricKind::VatPaid | MetricKind::Revenue | MetricKind::EffectiveTaxRate => {
                self.resolve(profile, kind, |rng| match kind {
                    MetricKind::VatPaid => self.model.vat_paid(profile, rng),
                    MetricKind::Revenue => self.model.revenue(profile, rng),
                    _ => self.model.effective_tax_rate(profile, rng),
                })
            }
            MetricKind::Profit => match self.source(&profile.name, MetricKind::Profit) {
                SeriesSource::Literal(series) => series.clone(),
                SeriesSource::Synthetic => {
                    let revenue = self.generate(profile, MetricKind::Revenue);
                    self.generate_profit(profile, &revenue)
                }
            },
        }
    }

    /// Resolve profit given the company's already resolved revenue
    #[must_use]
    pub fn generate_profit(&self, profile: &CompanyProfile, revenue: &MetricSeries) -> MetricSeries {
        self.resolve(profile, MetricKind::Profit, |rng| {
            self.model.profit(profile, revenue, rng)
        })
    }

    /// Resolve all four series of a company, revenue before profit
    #[must_use]
    pub fn generate_company(&self, profile: &CompanyProfile) -> CompanySeries {
        let vat_paid = self.generate(profile, MetricKind::VatPaid);
        let revenue = self.generate(profile, MetricKind::Revenue);
        let profit = self.generate_profit(profile, &revenue);
        let effective_tax_rate = self.generate(profile, MetricKind::EffectiveTaxRate);

        CompanySeries {
            vat_paid,
            revenue,
            profit,
            effective_tax_rate,
        }
    }

    fn resolve(
        &self,
        profile: &CompanyProfile,
        kind: MetricKind,
        synthesize: impl FnOnce(&mut StdRng) -> MetricSeries,
    ) -> MetricSeries {
        match self.source(&profile.name, kind) {
            SeriesSource::Literal(series) => series.clone(),
            SeriesSource::Synthetic => {
                log::debug!("No literal {kind} for {}, synthesizing", profile.name);
                let mut rng = self.rng_for(&profile.name, kind);
                synthesize(&mut rng)
            }
        }
    }
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self::euronext()
    }
}

fn stream_seed(seed: u64, company: &str, kind: MetricKind) -> u64 {
    let mut hasher = FxHasher::default();
    company.hash(&mut hasher);
    kind.tag().hash(&mut hasher);
    seed.wrapping_add(hasher.finish())
}
