//! Company profile model
//!
//! A `CompanyProfile` carries the static attributes that drive the synthetic
//! model: sector, country of listing and market capitalization.

use serde::{Deserialize, Serialize};

use super::types::{Country, Sector};

/// Static attributes of a listed company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Company name, unique within a universe
    pub name: String,
    /// Industry sector
    pub sector: Sector,
    /// Country of listing
    pub country: Country,
    /// Market capitalization in millions of EUR
    pub market_cap: f64,
}

impl CompanyProfile {
    /// Create a new company profile
    #[must_use]
    pub fn new(name: impl Into<String>, sector: Sector, country: Country, market_cap: f64) -> Self {
        Self {
            name: name.into(),
            sector,
            country,
            market_cap,
        }
    }
}
