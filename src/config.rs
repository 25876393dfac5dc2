//! Configuration for the Kohonen tracer.

use crate::error::{Result, TracerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SOM training configuration.
    pub som: SomConfig,

    /// CSV export configuration.
    pub export: ExportConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<()> {
        self.som.validate()?;
        self.export.validate()
    }
}

/// Self-Organizing Map configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SomConfig {
    /// Lower bound of the uniform weight initialization interval.
    /// Default: -1.0.
    pub init_low: f64,

    /// Upper bound of the uniform weight initialization interval.
    /// Default: 1.0.
    pub init_high: f64,

    /// Random seed for reproducibility.
    /// Default: None (random).
    pub seed: Option<u64>,

    /// Evaluate distances and update neighborhoods in parallel over nodes.
    /// Default: false.
    pub parallel: bool,

    /// Number of parallel threads.
    /// Default: 0 (use all available cores).
    pub num_threads: usize,
}

impl Default for SomConfig {
    fn default() -> Self {
        Self {
            init_low: -1.0,
            init_high: 1.0,
            seed: None,
            parallel: false,
            num_threads: 0,
        }
    }
}

impl SomConfig {
    /// Checks the initialization parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.init_low.is_finite() || !self.init_high.is_finite() || self.init_low >= self.init_high {
            return Err(TracerError::Config(format!(
                "Invalid initialization interval [{}, {}]",
                self.init_low, self.init_high
            )));
        }
        Ok(())
    }
}

/// CSV export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Significant digits per value (as in `%.4g`).
    /// Default: 4.
    pub precision: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { precision: 4 }
    }
}

impl ExportConfig {
    /// Checks the export parameters.
    pub fn validate(&self) -> Result<()> {
        if self.precision == 0 || self.precision > 17 {
            return Err(TracerError::Config(format!(
                "Precision must be between 1 and 17, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.som.init_low, -1.0);
        assert_eq!(config.som.init_high, 1.0);
        assert_eq!(config.export.precision, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_init_interval() {
        let config = SomConfig { init_low: 1.0, init_high: 1.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(TracerError::Config(_))));
    }

    #[test]
    fn test_invalid_precision() {
        let config = ExportConfig { precision: 0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "som": {{ "parallel": true, "seed": 7 }} }}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.som.parallel);
        assert_eq!(config.som.seed, Some(7));
        assert_eq!(config.som.init_high, 1.0);
        assert_eq!(config.export.precision, 4);
    }

    #[test]
    fn test_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(TracerError::Serialization(_))
        ));
    }
}
