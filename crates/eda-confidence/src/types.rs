//! Common types for confidence intervals

use eda_core::{math::distributions::normal, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point estimate with a two-sided confidence interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalResult {
    /// The point estimate
    pub statistic: f64,
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl IntervalResult {
    /// Create a new interval result
    pub fn new(statistic: f64, lower: f64, upper: f64, confidence_level: f64) -> Self {
        Self {
            statistic,
            lower,
            upper,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &IntervalResult) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }
}

impl fmt::Display for IntervalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} ({:.1}% CI: [{:.4}, {:.4}])",
            self.statistic,
            self.confidence_level * 100.0,
            self.lower,
            self.upper
        )
    }
}

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// Fails with [`Error::InvalidParameter`] unless `level` is in (0, 1).
    pub fn new(level: f64) -> Result<Self> {
        if level > 0.0 && level < 1.0 {
            Ok(Self(level))
        } else {
            Err(Error::invalid_confidence_level(level))
        }
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Two-sided standard normal critical value
    pub fn critical_value(&self) -> Result<f64> {
        normal::critical_value(self.0)
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Bootstrap interval together with the resampling summary behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BootstrapResult {
    /// The bias-adjusted normal interval
    #[serde(flatten)]
    pub interval: IntervalResult,
    /// Mean of the bootstrap distribution minus the original statistic
    pub bias: f64,
    /// Population standard deviation of the bootstrap distribution
    pub standard_error: f64,
    /// Number of bootstrap resamples performed
    pub resamples: usize,
}

/// Binomial proportion interval with the counts it was computed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinomialResult {
    /// Number of successes
    pub successes: usize,
    /// Number of trials
    pub trials: usize,
    /// The adjusted proportion and its interval
    #[serde(flatten)]
    pub interval: IntervalResult,
}

impl BinomialResult {
    /// Raw (unadjusted) proportion `successes / trials`
    pub fn proportion(&self) -> f64 {
        self.successes as f64 / self.trials as f64
    }
}

impl fmt::Display for BinomialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: {}", self.successes, self.trials, self.interval)
    }
}
