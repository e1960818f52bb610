//! Reporting views over a built panel
//!
//! Reports only read the panel. Each one implements `Display` for the
//! console and `Serialize` for JSON export.

pub mod company;
pub mod comparison;
pub mod global;
pub mod indicator;
pub mod ranking;
pub mod stats;

pub use company::{CompanyReport, YearValue};
pub use comparison::{Comparison, ComparisonRow, IndicatorSeries, Trajectory};
pub use global::{GlobalAnalysis, TOP_N};
pub use indicator::Indicator;
pub use ranking::{BurdenRanking, RankedCompany, rank_by_burden, rank_by_vat};
pub use stats::{Describe, FiveNumberSummary};
