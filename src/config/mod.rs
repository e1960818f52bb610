//! Configuration for panel generation.

use std::fmt;
use std::path::PathBuf;

use crate::error::{PanelError, Result};

/// Configuration for building and exporting the panel
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Optional base seed for reproducible synthetic series
    pub random_seed: Option<u64>,
    /// Whether to generate companies on a rayon thread pool
    pub parallel: bool,
    /// Number of worker threads for parallel generation
    pub num_threads: usize,
    /// Whether to display a progress bar while generating
    pub show_progress: bool,
    /// Directory that receives exported files
    pub output_dir: PathBuf,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            parallel: true,
            num_threads: num_cpus::get(),
            show_progress: false,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl PanelConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a configuration
    #[must_use]
    pub fn builder() -> PanelConfigBuilder {
        PanelConfigBuilder::new()
    }

    /// Check the configuration for values the builder cannot use
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == 0 {
            return Err(PanelError::InvalidConfig(
                "num_threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for PanelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Panel Configuration:")?;
        match self.random_seed {
            Some(seed) => writeln!(f, "  Random Seed: {seed}")?,
            None => writeln!(f, "  Random Seed: none (entropy)")?,
        }
        writeln!(f, "  Parallel: {}", self.parallel)?;
        if self.parallel {
            writeln!(f, "  Threads: {}", self.num_threads)?;
        }
        writeln!(f, "  Show Progress: {}", self.show_progress)?;
        writeln!(f, "  Output Directory: {}", self.output_dir.display())?;
        Ok(())
    }
}

/// Builder for constructing a panel configuration
#[derive(Debug, Clone, Default)]
pub struct PanelConfigBuilder {
    config: PanelConfig,
}

impl PanelConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PanelConfig::default(),
        }
    }

    /// Set the random seed
    #[must_use]
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = Some(seed);
        self
    }

    /// Set whether to use parallel processing
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Set the number of worker threads
    #[must_use]
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.config.num_threads = num_threads;
        self
    }

    /// Set whether to display a progress bar
    #[must_use]
    pub fn show_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<PanelConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PanelConfig::default();
        assert_eq!(config.random_seed, None);
        assert!(config.parallel);
        assert!(config.num_threads >= 1);
        assert!(!config.show_progress);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_builder() {
        let config = PanelConfig::builder()
            .random_seed(42)
            .parallel(false)
            .num_threads(2)
            .output_dir("/tmp/panel")
            .build()
            .unwrap();

        assert_eq!(config.random_seed, Some(42));
        assert!(!config.parallel);
        assert_eq!(config.num_threads, 2);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/panel"));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let result = PanelConfig::builder().num_threads(0).build();
        assert!(matches!(result, Err(PanelError::InvalidConfig(_))));
    }

    #[test]
    fn test_display() {
        let config = PanelConfig::builder().random_seed(7).build().unwrap();
        let text = config.to_string();
        assert!(text.contains("Random Seed: 7"));
        assert!(text.contains("Output Directory: output"));
    }
}
