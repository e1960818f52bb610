//! Logging utilities
//!
//! Consistent log lines for the build and export steps.

use std::path::Path;
use std::time::Duration;

/// Log an export step starting
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an export step finishing
///
/// # Arguments
/// * `operation` - Past-tense description, e.g. "wrote"
/// * `path` - File that was written
/// * `items` - Number of rows written
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, path: &Path, items: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully {} {} rows to {} in {:?}",
            operation,
            items,
            path.display(),
            duration
        );
    } else {
        log::info!("Successfully {} {} rows to {}", operation, items, path.display());
    }
}

/// Log the outcome of a panel build
pub fn log_build_summary(companies: usize, records: usize, elapsed: Duration) {
    log::info!("Built panel of {records} records for {companies} companies in {elapsed:?}");
}
