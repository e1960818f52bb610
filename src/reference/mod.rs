//! Reference data
//!
//! Static lookup tables: the company universe, statutory VAT rates by
//! country and year, and the literal historical figures.

pub mod companies;
pub mod historical;
pub mod vat_rates;

pub use companies::CompanyUniverse;
pub use historical::HistoricalTables;
pub use vat_rates::{DEFAULT_VAT_RATE, VatRateTable};
