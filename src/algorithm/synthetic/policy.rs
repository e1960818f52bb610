//! Sector and country policy tables
//!
//! Lookup tables with an explicit default entry that drive the base values of
//! the synthetic model.

use crate::models::{Country, Sector};

/// Keyed lookup with a default for unlisted keys
#[derive(Debug, Clone, Copy)]
pub struct LookupTable<K: 'static> {
    entries: &'static [(K, f64)],
    default: f64,
}

impl<K: Copy + PartialEq + 'static> LookupTable<K> {
    /// Create a table from explicit entries and a default
    #[must_use]
    pub const fn new(entries: &'static [(K, f64)], default: f64) -> Self {
        Self { entries, default }
    }

    /// Value for a key
    #[must_use]
    pub fn get(&self, key: K) -> f64 {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(self.default, |&(_, value)| value)
    }
}

/// Sector-keyed lookup
pub type SectorTable = LookupTable<Sector>;
/// Country-keyed lookup
pub type CountryTable = LookupTable<Country>;

/// Share of market capitalization paid as VAT in the base year
pub const VAT_BASE_MULTIPLIER: SectorTable = SectorTable::new(
    &[
        (Sector::Energy, 0.0015),
        (Sector::Luxury, 0.0008),
        (Sector::Banking, 0.0003),
        (Sector::Pharmaceuticals, 0.0006),
        (Sector::Aerospace, 0.0007),
    ],
    0.0005,
);

/// Revenue to market capitalization ratio in the base year
pub const REVENUE_RATIO: SectorTable = SectorTable::new(
    &[
        (Sector::Banking, 0.1),
        (Sector::Energy, 0.8),
        (Sector::Luxury, 0.4),
    ],
    0.5,
);

/// Typical net profit margin
pub const PROFIT_MARGIN: SectorTable = SectorTable::new(
    &[
        (Sector::Banking, 0.15),
        (Sector::Luxury, 0.20),
        (Sector::Energy, 0.08),
        (Sector::Pharmaceuticals, 0.18),
    ],
    0.10,
);

/// Sector surcharge on the effective tax rate, percentage points
pub const TAX_RATE_SURCHARGE: SectorTable =
    SectorTable::new(&[(Sector::Energy, 5.0), (Sector::Banking, 3.0)], 0.0);

/// Base effective tax rate by country, %
pub const BASE_TAX_RATE: CountryTable = CountryTable::new(
    &[
        (Country::France, 33.0),
        (Country::Netherlands, 25.0),
        (Country::Switzerland, 18.0),
    ],
    28.0,
);
