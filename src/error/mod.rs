//! Error handling for the panel builder.

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use std::io;

/// Specialized error type for panel construction, reporting and export
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// A company was requested that is not part of the reference universe
    #[error("Unknown company: {0} is not present in the reference data")]
    UnknownCompany(String),

    /// A report asked for a company that has no rows in the panel
    #[error("No panel data found for company: {0}")]
    CompanyNotFound(String),

    /// A sector label could not be parsed
    #[error("Unknown sector label: {0}")]
    UnknownSector(String),

    /// A country label could not be parsed
    #[error("Unknown country label: {0}")]
    UnknownCountry(String),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A metric series does not cover exactly the panel years
    #[error("Incomplete metric series: {0}")]
    IncompleteSeries(String),

    /// An operation that needs at least one row received an empty panel
    #[error("Panel contains no records")]
    EmptyPanel,

    /// Error creating or writing an output file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error assembling Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error writing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error converting records to Arrow or JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The rayon thread pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl From<serde_json::Error> for PanelError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<serde_arrow::Error> for PanelError {
    fn from(error: serde_arrow::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Result type for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;
