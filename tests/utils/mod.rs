use vat_panel::{Panel, PanelBuilder, PanelConfig};

/// Seed shared by the deterministic tests
pub const TEST_SEED: u64 = 20_240_101;

/// Configuration with a fixed seed and no progress output
#[must_use]
pub fn seeded_config(parallel: bool) -> PanelConfig {
    PanelConfig::builder()
        .random_seed(TEST_SEED)
        .parallel(parallel)
        .num_threads(4)
        .show_progress(false)
        .build()
        .expect("valid test configuration")
}

/// Full reference panel built with the test seed
#[must_use]
pub fn seeded_panel() -> Panel {
    PanelBuilder::euronext()
        .with_config(seeded_config(false))
        .build()
        .expect("reference panel builds")
}

/// Relative comparison for derived floating point values
#[must_use]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
}
