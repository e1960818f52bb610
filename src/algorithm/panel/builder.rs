//! Panel builder implementation
//!
//! Joins every company's four metric series with the country VAT-rate table,
//! one record per (company, year), in company-then-year order.

use std::time::Instant;

use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::algorithm::series::SeriesGenerator;
use crate::config::PanelConfig;
use crate::error::{PanelError, Result};
use crate::models::{BaseMetrics, CompanyProfile, MetricKind, PanelRecord, YEAR_COUNT, years};
use crate::reference::{CompanyUniverse, VatRateTable};
use crate::utils::logging::{self, progress};

use super::Panel;

/// Builder for the (company, year) panel dataset
#[derive(Debug, Clone)]
pub struct PanelBuilder {
    universe: CompanyUniverse,
    vat_rates: VatRateTable,
    generator: SeriesGenerator,
    config: PanelConfig,
}

impl PanelBuilder {
    /// Create a builder over a company universe, a VAT-rate table and a series generator
    #[must_use]
    pub fn new(universe: CompanyUniverse, vat_rates: VatRateTable, generator: SeriesGenerator) -> Self {
        Self {
            universe,
            vat_rates,
            generator,
            config: PanelConfig::default(),
        }
    }

    /// Builder over the reference universe, rates and literal tables
    #[must_use]
    pub fn euronext() -> Self {
        Self::new(
            CompanyUniverse::euronext(),
            VatRateTable::euronext(),
            SeriesGenerator::euronext(),
        )
    }

    /// Use the given configuration
    ///
    /// The configured seed replaces any seed already set on the generator.
    #[must_use]
    pub fn with_config(mut self, config: PanelConfig) -> Self {
        self.generator = self.generator.with_seed(config.random_seed);
        self.config = config;
        self
    }

    /// Restrict the build to the named companies
    ///
    /// Fails with `UnknownCompany` for any name outside the universe.
    pub fn with_companies<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self> {
        self.universe = self.universe.restrict(names)?;
        Ok(self)
    }

    /// Companies that will be built
    #[must_use]
    pub const fn universe(&self) -> &CompanyUniverse {
        &self.universe
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Build the panel
    ///
    /// Sequential and parallel builds produce identical records when the
    /// generator is seeded.
    pub fn build(&self) -> Result<Panel> {
        self.config.validate()?;
        if self.universe.is_empty() {
            return Err(PanelError::EmptyPanel);
        }

        let start = Instant::now();
        log::info!(
            "Building panel for {} companies ({} mode)",
            self.universe.len(),
            if self.config.parallel { "parallel" } else { "sequential" }
        );

        let pb = progress::create_main_progress_bar(
            self.universe.len() as u64,
            Some("Generating company series"),
            self.config.show_progress,
        );

        let records = if self.config.parallel {
            self.build_parallel(&pb)?
        } else {
            self.build_sequential(&pb)?
        };

        progress::finish_progress_bar(&pb, Some("Panel complete"));
        logging::log_build_summary(self.universe.len(), records.len(), start.elapsed());

        Ok(Panel::new(records, self.generator.random_seed()))
    }

    fn build_sequential(&self, pb: &ProgressBar) -> Result<Vec<PanelRecord>> {
        let mut records = Vec::with_capacity(self.universe.len() * YEAR_COUNT);
        for profile in self.universe.iter() {
            records.extend(self.build_company(profile)?);
            pb.inc(1);
        }
        Ok(records)
    }

    fn build_parallel(&self, pb: &ProgressBar) -> Result<Vec<PanelRecord>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.num_threads)
            .build()
            .map_err(|e| PanelError::ThreadPool(e.to_string()))?;
        log::info!("Using parallel processing with {} threads", self.config.num_threads);

        // Per-company batches come back in universe order
        let batches: Vec<Vec<PanelRecord>> = pool.install(|| {
            self.universe
                .profiles()
                .par_iter()
                .map(|profile| {
                    let batch = self.build_company(profile);
                    pb.inc(1);
                    batch
                })
                .collect::<Result<_>>()
        })?;

        Ok(batches.into_iter().flatten().collect())
    }

    /// Records of one company, one per year
    ///
    /// The four series are joined on year.
    pub fn build_company(&self, profile: &CompanyProfile) -> Result<Vec<PanelRecord>> {
        log::debug!("Generating series for {}", profile.name);
        let series = self.generator.generate_company(profile);

        let value = |kind: MetricKind, year: i32| {
            series.get(kind).value(year).ok_or_else(|| {
                PanelError::IncompleteSeries(format!("{} {kind} has no value for {year}", profile.name))
            })
        };

        years()
            .map(|year| {
                let base = BaseMetrics {
                    vat_paid: value(MetricKind::VatPaid, year)?,
                    revenue: value(MetricKind::Revenue, year)?,
                    profit: value(MetricKind::Profit, year)?,
                    effective_tax_rate: value(MetricKind::EffectiveTaxRate, year)?,
                    country_vat_rate: self.vat_rates.rate(profile.country, year),
                };
                Ok(PanelRecord::assemble(profile, year, base))
            })
            .collect()
    }
}

impl Default for PanelBuilder {
    fn default() -> Self {
        Self::euronext()
    }
}

/// Build the reference panel with the default configuration and no fixed seed
pub fn build_panel() -> Result<Panel> {
    PanelBuilder::euronext().build()
}
