/// Main test module that includes all sub-modules
/// Run specific tests with `cargo test <module>::<submodule>`
/// For example: `cargo test algorithm::panel_test`
// Utility modules
pub mod utils;

// Generation tests
pub mod algorithm {
    pub mod panel_test;
    pub mod series_test;
}

// Model tests
pub mod models {
    pub mod record_test;
}

// Reporting tests
pub mod report {
    pub mod report_test;
}

// Export tests
pub mod export {
    pub mod export_test;
}
