//! Domain models for the VAT panel
//!
//! This module contains the entity models used throughout the crate:
//! company profiles, metric series and the rows of the panel dataset.

pub mod company;
pub mod record;
pub mod series;
pub mod types;

// Re-export commonly used types
pub use company::CompanyProfile;
pub use record::{BaseMetrics, DerivedMetrics, PanelRecord};
pub use series::{FIRST_YEAR, LAST_YEAR, MetricKind, MetricSeries, YEAR_COUNT, years};
pub use types::{Country, Sector};
