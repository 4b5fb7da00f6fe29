//! Interval construction from a bootstrap distribution
//!
//! Only the normal-theory, bias-adjusted interval is provided: the center is
//! corrected by the estimated resampling bias and the spread comes from the
//! bootstrap standard error and a normal critical value.

use crate::{ConfidenceLevel, IntervalResult};
use eda_core::{math::summation, Error, Result};
use tracing::{debug, instrument};

/// Bias and spread of a bootstrap distribution relative to the original estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootstrapSummary {
    /// `mean(distribution) - original`
    pub bias: f64,
    /// Population standard deviation of the distribution (divides by R)
    pub standard_error: f64,
}

/// Bias-adjusted normal bootstrap interval
///
/// `[t0 - bias - z*se, t0 - bias + z*se]`, reported around the unadjusted
/// statistic `t0`. The statistic is not guaranteed to lie inside the
/// interval; `lower <= upper` always holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalBootstrap;

impl NormalBootstrap {
    /// Summarize a bootstrap distribution
    pub fn summarize(&self, bootstrap_estimates: &[f64], original_estimate: f64) -> Result<BootstrapSummary> {
        let center = summation::mean(bootstrap_estimates)
            .ok_or_else(|| Error::InvalidInput("No bootstrap estimates".to_string()))?;
        let standard_error = summation::population_std_dev(bootstrap_estimates)
            .ok_or_else(|| Error::InvalidInput("No bootstrap estimates".to_string()))?;

        if !center.is_finite() || !standard_error.is_finite() {
            return Err(Error::Computation(
                "Bootstrap distribution contains non-finite values".to_string(),
            ));
        }

        Ok(BootstrapSummary {
            bias: center - original_estimate,
            standard_error,
        })
    }

    /// Calculate the confidence interval from a bootstrap distribution
    #[instrument(skip(self, bootstrap_estimates), fields(n_estimates = bootstrap_estimates.len()))]
    pub fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: ConfidenceLevel,
    ) -> Result<(IntervalResult, BootstrapSummary)> {
        let summary = self.summarize(bootstrap_estimates, original_estimate)?;
        let z = confidence_level.critical_value()?;

        debug!(
            "Normal bootstrap: t0={:.6}, bias={:.6}, se={:.6}, z={:.6}",
            original_estimate, summary.bias, summary.standard_error, z
        );

        let center = original_estimate - summary.bias;
        let margin = z * summary.standard_error;

        let interval = IntervalResult::new(
            original_estimate,
            center - margin,
            center + margin,
            confidence_level.value(),
        );
        Ok((interval, summary))
    }

    /// Method name for documentation
    pub fn name(&self) -> &'static str {
        "Normal Bootstrap"
    }
}
