//! Descriptive statistics over panel columns

use std::fmt;

use serde::Serialize;

/// Summary statistics of one numeric column
///
/// Quantiles use linear interpolation between closest ranks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Describe {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation; undefined below two observations
    pub std_dev: Option<f64>,
    /// Smallest value
    pub min: f64,
    /// First quartile
    pub q25: f64,
    /// Second quartile
    pub median: f64,
    /// Third quartile
    pub q75: f64,
    /// Largest value
    pub max: f64,
}

impl Describe {
    /// Describe a set of values, `None` when there are none
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = mean(&sorted)?;
        let std_dev = (count > 1).then(|| {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        });

        Some(Self {
            count,
            mean,
            std_dev,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }

    /// Min, quartiles and max
    #[must_use]
    pub const fn five_number(&self) -> FiveNumberSummary {
        FiveNumberSummary {
            min: self.min,
            q1: self.q25,
            median: self.median,
            q3: self.q75,
            max: self.max,
        }
    }
}

impl fmt::Display for Describe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let std_dev = self
            .std_dev
            .map_or_else(|| "n/a".to_string(), |s| format!("{s:.2}"));
        write!(
            f,
            "count {} | mean {:.2} | std {} | min {:.2} | 25% {:.2} | 50% {:.2} | 75% {:.2} | max {:.2}",
            self.count, self.mean, std_dev, self.min, self.q25, self.median, self.q75, self.max
        )
    }
}

/// Box-plot style summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    /// Smallest value
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Second quartile
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Largest value
    pub max: f64,
}

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Quantile of ascending-sorted values by linear interpolation
///
/// `sorted` must be non-empty and `q` within [0, 1].
#[must_use]
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}
