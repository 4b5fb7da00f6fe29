//! Bootstrap mean estimator
//!
//! Resamples the input with replacement, takes the mean of every resample and
//! builds a bias-adjusted normal interval from the resulting distribution:
//!
//! - missing values are dropped before any mean is taken, so the statistic
//!   and every resample work on the non-missing values only
//! - every resample has as many draws as there are non-missing values
//! - the random source is injectable, so results are reproducible from a
//!   seed or from any caller-supplied [`Rng`]

use crate::{
    bootstrap_methods::NormalBootstrap, config::BootstrapConfig, BootstrapResult,
    ConfidenceLevel, IntervalResult,
};
use crate::api::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RESAMPLES};
use eda_core::{
    math::summation,
    numeric::{indexed_mean_skip_missing, present_values},
    Error, Observation, Resampler, Result,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, instrument};

/// Bootstrap estimator for the mean with a normal-theory interval
///
/// Settings are validated when an estimate is requested, so a misconfigured
/// estimator reports a typed error instead of panicking at construction.
#[derive(Debug, Clone)]
pub struct BootstrapMean {
    method: NormalBootstrap,
    n_resamples: usize,
    confidence_level: f64,
    seed: Option<u64>,
}

impl Default for BootstrapMean {
    fn default() -> Self {
        Self::new()
    }
}

impl BootstrapMean {
    /// Create an estimator with 1000 resamples at 95% confidence
    pub fn new() -> Self {
        Self {
            method: NormalBootstrap,
            n_resamples: DEFAULT_RESAMPLES,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            seed: None,
        }
    }

    /// Create an estimator from a validated configuration
    pub fn from_config(config: &BootstrapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            method: NormalBootstrap,
            n_resamples: config.resamples,
            confidence_level: config.confidence_level,
            seed: config.seed,
        })
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Set the confidence level
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn resamples(&self) -> usize {
        self.n_resamples
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Estimate the mean and its interval
    ///
    /// Uses the configured seed, or fresh entropy when none is set.
    pub fn estimate<T: Observation>(&self, data: &[T]) -> Result<IntervalResult> {
        self.estimate_detailed(data).map(|result| result.interval)
    }

    /// Estimate the mean and its interval with an explicit random source
    ///
    /// The configured seed is ignored; all randomness comes from `rng`.
    pub fn estimate_with_rng<T, R>(&self, data: &[T], rng: &mut R) -> Result<IntervalResult>
    where
        T: Observation,
        R: Rng + ?Sized,
    {
        self.estimate_detailed_with_rng(data, rng)
            .map(|result| result.interval)
    }

    /// Like [`estimate`](Self::estimate), also reporting bias and standard error
    pub fn estimate_detailed<T: Observation>(&self, data: &[T]) -> Result<BootstrapResult> {
        let mut rng = self.rng();
        self.estimate_detailed_with_rng(data, &mut rng)
    }

    /// Like [`estimate_with_rng`](Self::estimate_with_rng), also reporting
    /// bias and standard error
    #[instrument(skip(self, data, rng),
                 fields(n = data.len(), n_resamples = self.n_resamples, confidence_level = self.confidence_level))]
    pub fn estimate_detailed_with_rng<T, R>(&self, data: &[T], rng: &mut R) -> Result<BootstrapResult>
    where
        T: Observation,
        R: Rng + ?Sized,
    {
        let (level, values) = self.validate(data)?;
        let original = summation::mean(&values).ok_or_else(|| Error::too_few_values(2, 0))?;
        debug!(
            "Original mean {:.6} from {} of {} values",
            original,
            values.len(),
            data.len()
        );

        let distribution = self.resample_means(&values, Resampler::from_rng(rng))?;

        debug!("Bootstrap completed, calculating confidence interval");

        let (interval, summary) = self
            .method
            .calculate_interval(&distribution, original, level)?;

        Ok(BootstrapResult {
            interval,
            bias: summary.bias,
            standard_error: summary.standard_error,
            resamples: distribution.len(),
        })
    }

    /// The bootstrap distribution of resample means, in resample order
    pub fn bootstrap_distribution<T, R>(&self, data: &[T], rng: &mut R) -> Result<Vec<f64>>
    where
        T: Observation,
        R: Rng + ?Sized,
    {
        let (_, values) = self.validate(data)?;
        self.resample_means(&values, Resampler::from_rng(rng))
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Check settings and input, returning the level and the non-missing values
    fn validate<T: Observation>(&self, data: &[T]) -> Result<(ConfidenceLevel, Vec<f64>)> {
        if self.n_resamples < 1 {
            return Err(Error::InvalidInput(
                "Number of resamples must be at least 1".to_string(),
            ));
        }
        let level = ConfidenceLevel::new(self.confidence_level)?;

        let values = present_values(data);
        if values.len() < 2 {
            return Err(Error::too_few_values(2, values.len()));
        }
        Ok((level, values))
    }

    fn resample_means(&self, values: &[f64], resampler: Resampler) -> Result<Vec<f64>> {
        resampler
            .map_resamples(self.n_resamples, values.len(), |i, indices| {
                indexed_mean_skip_missing(values, indices).ok_or_else(|| {
                    Error::Computation(format!("Bootstrap resample {i} is empty"))
                })
            })
            .into_iter()
            .collect()
    }
}
