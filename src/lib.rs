//! Synthesizes a 2002-2025 fiscal panel for Euronext-listed companies.
//!
//! Literal historical figures are used where known and a seeded synthetic
//! model fills every gap. The resulting (company, year) panel carries derived
//! VAT and tax-burden ratios and feeds the reporting and export layers.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reference;
pub mod report;
pub mod utils;

// Core types
pub use config::{PanelConfig, PanelConfigBuilder};
pub use error::{PanelError, Result};
pub use models::{CompanyProfile, Country, MetricKind, MetricSeries, PanelRecord, Sector};

// Generation
pub use algorithm::{Panel, PanelBuilder, SeriesGenerator, SyntheticModel, build_panel};
pub use reference::{CompanyUniverse, HistoricalTables, VatRateTable};

// Reporting and export
pub use export::{ExportManifest, export_panel, to_record_batch};
pub use report::{CompanyReport, Comparison, GlobalAnalysis, rank_by_vat};
