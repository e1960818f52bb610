//! Panel dataset
//!
//! The materialized (company, year) panel. Read-only once built; reporting
//! views filter, group and reduce it without mutating it.

pub mod builder;

pub use builder::{PanelBuilder, build_panel};

use itertools::Itertools;

use crate::models::PanelRecord;

/// Ordered panel of records, company-then-year
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    records: Vec<PanelRecord>,
    random_seed: Option<u64>,
}

impl Panel {
    /// Wrap already ordered records
    #[must_use]
    pub fn new(records: Vec<PanelRecord>, random_seed: Option<u64>) -> Self {
        Self {
            records,
            random_seed,
        }
    }

    /// All records
    #[must_use]
    pub fn records(&self) -> &[PanelRecord] {
        &self.records
    }

    /// Seed the panel was generated with, if any
    #[must_use]
    pub const fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    /// Company names in panel order
    #[must_use]
    pub fn companies(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.company.as_str())
            .unique()
            .collect()
    }

    /// Distinct years, ascending
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).unique().sorted().collect()
    }

    /// Records of one company in year order
    pub fn for_company<'a>(&'a self, company: &'a str) -> impl Iterator<Item = &'a PanelRecord> + 'a {
        self.records.iter().filter(move |r| r.company == company)
    }

    /// Records of one year in company order
    pub fn for_year(&self, year: i32) -> impl Iterator<Item = &PanelRecord> + '_ {
        self.records.iter().filter(move |r| r.year == year)
    }

    /// Most recent year in the panel
    #[must_use]
    pub fn latest_year(&self) -> Option<i32> {
        self.records.iter().map(|r| r.year).max()
    }

    /// Whether a company is part of the panel
    #[must_use]
    pub fn contains(&self, company: &str) -> bool {
        self.records.iter().any(|r| r.company == company)
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the panel holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Take ownership of the records
    #[must_use]
    pub fn into_records(self) -> Vec<PanelRecord> {
        self.records
    }
}
