//! Panel synthesis algorithms
//!
//! The synthetic model fabricates metric series where no literal figures
//! exist, the series generator dispatches between literal and synthetic
//! data, and the panel builder joins everything into (company, year) records.

pub mod panel;
pub mod series;
pub mod synthetic;

pub use panel::{Panel, PanelBuilder, build_panel};
pub use series::{CompanySeries, SeriesGenerator, SeriesSource};
pub use synthetic::SyntheticModel;
