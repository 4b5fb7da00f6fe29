//! Estimator configuration
//!
//! The configuration surface is small: resample count, confidence level and
//! an optional seed. Missing fields take the documented defaults so a
//! partially specified config deserializes cleanly.

use crate::api::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RESAMPLES};
use crate::ConfidenceLevel;
use eda_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Settings for [`BootstrapMean`](crate::BootstrapMean)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Number of bootstrap resamples (R)
    pub resamples: usize,
    /// Two-sided confidence level
    pub confidence_level: f64,
    /// Seed for reproducible resampling; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            resamples: DEFAULT_RESAMPLES,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            seed: None,
        }
    }
}

impl BootstrapConfig {
    /// Check that the settings describe a runnable bootstrap
    pub fn validate(&self) -> Result<()> {
        if self.resamples < 1 {
            return Err(Error::InvalidInput(
                "Number of resamples must be at least 1".to_string(),
            ));
        }
        ConfidenceLevel::new(self.confidence_level)?;
        Ok(())
    }
}

/// Settings for [`AgrestiCoull`](crate::AgrestiCoull)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinomialConfig {
    /// Two-sided confidence level
    pub confidence_level: f64,
}

impl Default for BinomialConfig {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl BinomialConfig {
    pub fn validate(&self) -> Result<()> {
        ConfidenceLevel::new(self.confidence_level).map(|_| ())
    }
}
