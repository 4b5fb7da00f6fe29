//! Mathematical utilities for interval estimation
//!
//! This module provides the normal-theory critical values used by both
//! interval methods and the compensated reductions used to summarize
//! bootstrap distributions.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use crate::{Error, Result};
        use statrs::distribution::{ContinuousCDF, Normal};

        fn standard() -> Result<Normal> {
            Normal::new(0.0, 1.0).map_err(|e| {
                Error::Computation(format!("Failed to create normal distribution: {}", e))
            })
        }

        /// Cumulative distribution function of the standard normal
        pub fn cdf(x: f64) -> Result<f64> {
            Ok(standard()?.cdf(x))
        }

        /// Quantile function (inverse CDF) of the standard normal
        ///
        /// `p` must lie in the open interval (0, 1).
        pub fn quantile(p: f64) -> Result<f64> {
            if !(p > 0.0 && p < 1.0) {
                return Err(Error::InvalidParameter(format!(
                    "Probability {p} must be in (0, 1)"
                )));
            }
            Ok(standard()?.inverse_cdf(p))
        }

        /// Two-sided critical value `z` for a confidence level
        ///
        /// Returns the `1 - alpha/2` quantile, so that `P(|Z| <= z) = level`.
        /// For `level = 0.95` this is `1.959964`.
        pub fn critical_value(level: f64) -> Result<f64> {
            if !(level > 0.0 && level < 1.0) {
                return Err(Error::invalid_confidence_level(level));
            }
            let alpha = 1.0 - level;
            quantile(1.0 - alpha / 2.0)
        }
    }
}

/// Numerically stable reductions
///
/// All sums go through Neumaier's compensated summation, which keeps the
/// result within a few ulps of the exact sum independent of input order.
pub mod summation {
    /// Running compensated sum
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    pub struct NeumaierSum {
        sum: f64,
        compensation: f64,
    }

    impl NeumaierSum {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a single term
        #[inline]
        pub fn add(&mut self, value: f64) {
            let t = self.sum + value;
            if self.sum.abs() >= value.abs() {
                self.compensation += (self.sum - t) + value;
            } else {
                self.compensation += (value - t) + self.sum;
            }
            self.sum = t;
        }

        /// Current value of the sum
        #[inline]
        pub fn value(&self) -> f64 {
            self.sum + self.compensation
        }
    }

    impl Extend<f64> for NeumaierSum {
        fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
            for value in iter {
                self.add(value);
            }
        }
    }

    /// Compensated sum of a sequence
    pub fn stable_sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
        let mut acc = NeumaierSum::new();
        acc.extend(values);
        acc.value()
    }

    /// Arithmetic mean, `None` for an empty slice
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(stable_sum(values.iter().copied()) / values.len() as f64)
    }

    /// Population variance (divides by `n`), `None` for an empty slice
    ///
    /// Two-pass: deviations are taken from the compensated mean.
    pub fn population_variance(values: &[f64]) -> Option<f64> {
        let m = mean(values)?;
        let ss = stable_sum(values.iter().map(|&x| (x - m) * (x - m)));
        Some(ss / values.len() as f64)
    }

    /// Population standard deviation (divides by `n`)
    pub fn population_std_dev(values: &[f64]) -> Option<f64> {
        population_variance(values).map(f64::sqrt)
    }
}
