//! Metric series model
//!
//! A `MetricSeries` maps every year of the panel range to one value of a
//! single metric for a single company. Series are always complete: the
//! constructors fill every year from 2002 through 2025, and deserialization
//! rejects a series with missing or extra years.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// First year of the panel
pub const FIRST_YEAR: i32 = 2002;
/// Last year of the panel (inclusive)
pub const LAST_YEAR: i32 = 2025;
/// Number of years in the panel
pub const YEAR_COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

/// Iterate over the panel years in ascending order
pub fn years() -> impl DoubleEndedIterator<Item = i32> + Clone {
    FIRST_YEAR..=LAST_YEAR
}

/// Kind of financial metric tracked per company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricKind {
    /// VAT paid, M€
    VatPaid,
    /// Revenue, M€
    Revenue,
    /// Net profit, M€
    Profit,
    /// Effective corporate tax rate, %
    EffectiveTaxRate,
}

impl MetricKind {
    /// All metric kinds in resolution order (Revenue precedes Profit)
    pub const ALL: [Self; 4] = [
        Self::VatPaid,
        Self::Revenue,
        Self::Profit,
        Self::EffectiveTaxRate,
    ];

    /// Human readable label including the unit
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VatPaid => "VAT Paid (M€)",
            Self::Revenue => "Revenue (M€)",
            Self::Profit => "Profit (M€)",
            Self::EffectiveTaxRate => "Effective Tax Rate (%)",
        }
    }

    /// Stable numeric tag, used when deriving per-metric random streams
    #[must_use]
    pub const fn tag(self) -> u64 {
        match self {
            Self::VatPaid => 1,
            Self::Revenue => 2,
            Self::Profit => 3,
            Self::EffectiveTaxRate => 4,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Year to value mapping for one metric, covering the full panel range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesData")]
pub struct MetricSeries {
    kind: MetricKind,
    values: BTreeMap<i32, f64>,
}

/// Unchecked wire form of a `MetricSeries`
#[derive(Deserialize)]
struct SeriesData {
    kind: MetricKind,
    values: BTreeMap<i32, f64>,
}

impl TryFrom<SeriesData> for MetricSeries {
    type Error = PanelError;

    fn try_from(data: SeriesData) -> Result<Self, Self::Error> {
        let series = Self {
            kind: data.kind,
            values: data.values,
        };
        if series.is_complete() {
            Ok(series)
        } else {
            Err(PanelError::IncompleteSeries(format!(
                "{} has {} years, expected {FIRST_YEAR}-{LAST_YEAR}",
                series.kind,
                series.len()
            )))
        }
    }
}

impl MetricSeries {
    /// Build a series by evaluating `f` once per year, in ascending year order
    pub fn from_fn(kind: MetricKind, mut f: impl FnMut(i32) -> f64) -> Self {
        Self {
            kind,
            values: years().map(|year| (year, f(year))).collect(),
        }
    }

    /// Build a series from one value per year, starting at `FIRST_YEAR`
    #[must_use]
    pub fn from_values(kind: MetricKind, values: &[f64; YEAR_COUNT]) -> Self {
        Self {
            kind,
            values: years().zip(values.iter().copied()).collect(),
        }
    }

    /// Derive a series of another metric, year by year
    ///
    /// `f` receives each year and this series' value for it, in year order.
    pub fn map(&self, kind: MetricKind, mut f: impl FnMut(i32, f64) -> f64) -> Self {
        Self {
            kind,
            values: self.iter().map(|(year, value)| (year, f(year, value))).collect(),
        }
    }

    /// Metric kind of this series
    #[must_use]
    pub const fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Value for a specific year
    #[must_use]
    pub fn value(&self, year: i32) -> Option<f64> {
        self.values.get(&year).copied()
    }

    /// All years covered by the series
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.values.keys().copied().collect()
    }

    /// All values in year order
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.values.values().copied().collect()
    }

    /// Iterate over `(year, value)` pairs in year order
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.values.iter().map(|(&year, &value)| (year, value))
    }

    /// Number of years in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series is empty (never true for constructed series)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the series covers exactly the panel years
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.len() == YEAR_COUNT && self.values.keys().copied().eq(years())
    }

    /// Mean value across all years
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.values().sum::<f64>() / self.values.len() as f64)
    }

    /// Largest value and the year it occurred (earliest year on ties)
    #[must_use]
    pub fn max_with_year(&self) -> Option<(i32, f64)> {
        self.iter()
            .fold(None, |best, (year, value)| match best {
                Some((_, v)) if v >= value => best,
                _ => Some((year, value)),
            })
    }

    /// Smallest value and the year it occurred (earliest year on ties)
    #[must_use]
    pub fn min_with_year(&self) -> Option<(i32, f64)> {
        self.iter()
            .fold(None, |best, (year, value)| match best {
                Some((_, v)) if v <= value => best,
                _ => Some((year, value)),
            })
    }
}
