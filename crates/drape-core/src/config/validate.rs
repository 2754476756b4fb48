//! Configuration validation with range checks.

use crate::error::ConfigError;
use crate::output::OutputFormat;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let min_confidence = self.labels.min_confidence;
        if !(0.0..=1.0).contains(&min_confidence) {
            return Err(ConfigError::ValidationError(
                "labels.min_confidence must be between 0.0 and 1.0".into(),
            ));
        }
        if self.input.parallel_workers == 0 {
            return Err(ConfigError::ValidationError(
                "input.parallel_workers must be > 0".into(),
            ));
        }
        if self.input.extensions.iter().all(|ext| ext.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "input.extensions must list at least one extension".into(),
            ));
        }
        if OutputFormat::parse(&self.output.format).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "output.format must be \"json\" or \"jsonl\", got {:?}",
                self.output.format
            )));
        }
        Ok(())
    }
}
