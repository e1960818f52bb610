//! Statutory VAT rates
//!
//! Standard VAT rate per (country, year). Pairs missing from the table
//! resolve to `DEFAULT_VAT_RATE` instead of failing.

use rustc_hash::FxHashMap;

use crate::models::Country;

/// Rate used for any (country, year) pair absent from the table, %
pub const DEFAULT_VAT_RATE: f64 = 20.0;

/// Country × year lookup of standard VAT rates
#[derive(Debug, Clone, Default)]
pub struct VatRateTable {
    rates: FxHashMap<(Country, i32), f64>,
}

impl VatRateTable {
    /// Create an empty table; every lookup resolves to the default rate
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard VAT rates of France, the Netherlands and Switzerland, 2002-2025
    #[must_use]
    pub fn euronext() -> Self {
        let mut table = Self::empty();
        for &(country, first, last, rate) in &STATUTORY_RATES {
            table = table.with_rates(country, first..=last, rate);
        }
        table
    }

    /// Set one rate for a span of years
    #[must_use]
    pub fn with_rates(mut self, country: Country, years: impl IntoIterator<Item = i32>, rate: f64) -> Self {
        for year in years {
            self.rates.insert((country, year), rate);
        }
        self
    }

    /// Exact table entry, if any
    #[must_use]
    pub fn lookup(&self, country: Country, year: i32) -> Option<f64> {
        self.rates.get(&(country, year)).copied()
    }

    /// Rate for a (country, year) pair, falling back to `DEFAULT_VAT_RATE`
    #[must_use]
    pub fn rate(&self, country: Country, year: i32) -> f64 {
        self.lookup(country, year).unwrap_or_else(|| {
            log::trace!("No VAT rate for {country} in {year}, using default {DEFAULT_VAT_RATE}");
            DEFAULT_VAT_RATE
        })
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Country, first year, last year (inclusive), rate
const STATUTORY_RATES: [(Country, i32, i32, f64); 8] = [
    (Country::France, 2002, 2013, 19.6),
    (Country::France, 2014, 2025, 20.0),
    (Country::Netherlands, 2002, 2011, 19.0),
    (Country::Netherlands, 2012, 2025, 21.0),
    (Country::Switzerland, 2002, 2010, 7.6),
    (Country::Switzerland, 2011, 2017, 8.0),
    (Country::Switzerland, 2018, 2022, 7.7),
    (Country::Switzerland, 2023, 2025, 8.1),
];
