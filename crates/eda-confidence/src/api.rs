//! High-level API for mean and proportion intervals
//!
//! Thin wrappers over [`BootstrapMean`] and [`AgrestiCoull`] using the
//! default settings: 1000 resamples and a 95% confidence level.

use crate::{
    binomial::{AgrestiCoull, BinaryOutcome},
    BinomialResult, BootstrapMean, IntervalResult,
};
use eda_core::{Observation, Result};

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 1000;

/// Default two-sided confidence level
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Bootstrap mean with a 95% bias-adjusted normal interval
///
/// Resampling is seeded from entropy, so repeated calls differ slightly in
/// their bounds. Use [`bootstrap_mean_seeded`] for reproducible output.
///
/// # Example
/// ```rust
/// use eda_confidence::api::bootstrap_mean;
///
/// let data = vec![4.2, 5.1, 3.9, 6.0, 5.5, f64::NAN];
/// let ci = bootstrap_mean(&data).unwrap();
/// assert!((ci.statistic - 4.94).abs() < 1e-12);
/// assert!(ci.lower <= ci.upper);
/// ```
pub fn bootstrap_mean<T: Observation>(data: &[T]) -> Result<IntervalResult> {
    BootstrapMean::new().estimate(data)
}

/// Bootstrap mean with a 95% interval from a fixed seed
pub fn bootstrap_mean_seeded<T: Observation>(data: &[T], seed: u64) -> Result<IntervalResult> {
    BootstrapMean::new().with_seed(seed).estimate(data)
}

/// Agresti-Coull 95% interval for the proportion of successes
///
/// # Example
/// ```rust
/// use eda_confidence::api::agresti_coull;
///
/// let outcomes = [true, true, false, true];
/// let result = agresti_coull(&outcomes).unwrap();
/// assert_eq!(result.successes, 3);
/// assert_eq!(result.trials, 4);
/// assert!(result.interval.lower >= 0.0 && result.interval.upper <= 1.0);
/// ```
pub fn agresti_coull<T: BinaryOutcome>(outcomes: &[T]) -> Result<BinomialResult> {
    AgrestiCoull::default().estimate(outcomes)
}

/// Agresti-Coull 95% interval from success and trial counts
pub fn agresti_coull_counts(successes: usize, trials: usize) -> Result<BinomialResult> {
    AgrestiCoull::default().estimate_from_counts(successes, trials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_api_is_reproducible() {
        let data = [1.0, 2.0, 2.5, 4.0, 8.0];
        assert_eq!(
            bootstrap_mean_seeded(&data, 10).unwrap(),
            bootstrap_mean_seeded(&data, 10).unwrap()
        );
    }

    #[test]
    fn test_unseeded_api_shares_statistic() {
        let data = [1.0, 2.0, 2.5, 4.0, 8.0];
        let a = bootstrap_mean(&data).unwrap();
        let b = bootstrap_mean(&data).unwrap();
        assert_eq!(a.statistic, b.statistic);
        assert_eq!(a.confidence_level, DEFAULT_CONFIDENCE_LEVEL);
    }

    #[test]
    fn test_counts_match_outcomes() {
        let outcomes = [1u8, 0, 0, 1, 1, 1, 0];
        assert_eq!(
            agresti_coull(&outcomes).unwrap(),
            agresti_coull_counts(4, 7).unwrap()
        );
    }
}
