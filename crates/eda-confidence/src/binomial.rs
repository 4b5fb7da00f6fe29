//! Agresti-Coull binomial proportion interval
//!
//! Adds `z²` pseudo-observations (half of them successes) before computing a
//! Wald interval, then clamps the bounds to [0, 1]. No resampling is
//! involved, so results are fully deterministic.
//!
//! Outcomes are validated element by element through [`BinaryOutcome`];
//! anything other than a boolean or an exact 0/1 is rejected.

use crate::config::BinomialConfig;
use crate::{BinomialResult, ConfidenceLevel, IntervalResult};
use eda_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single binary outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl From<bool> for Outcome {
    fn from(value: bool) -> Self {
        if value {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }
}

/// Values that can be read as a binary outcome
///
/// Returns `None` for values outside {0, 1, true, false}.
pub trait BinaryOutcome {
    fn to_outcome(&self) -> Option<Outcome>;
}

impl BinaryOutcome for Outcome {
    fn to_outcome(&self) -> Option<Outcome> {
        Some(*self)
    }
}

impl BinaryOutcome for bool {
    fn to_outcome(&self) -> Option<Outcome> {
        Some(Outcome::from(*self))
    }
}

macro_rules! impl_binary_outcome_int {
    ($($t:ty),*) => {
        $(
            impl BinaryOutcome for $t {
                fn to_outcome(&self) -> Option<Outcome> {
                    match *self {
                        0 => Some(Outcome::Failure),
                        1 => Some(Outcome::Success),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_binary_outcome_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! impl_binary_outcome_float {
    ($($t:ty),*) => {
        $(
            impl BinaryOutcome for $t {
                fn to_outcome(&self) -> Option<Outcome> {
                    if *self == 0.0 {
                        Some(Outcome::Failure)
                    } else if *self == 1.0 {
                        Some(Outcome::Success)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_binary_outcome_float!(f32, f64);

impl<T: BinaryOutcome + ?Sized> BinaryOutcome for &T {
    fn to_outcome(&self) -> Option<Outcome> {
        (**self).to_outcome()
    }
}

/// Agresti-Coull interval estimator for a binomial proportion
#[derive(Debug, Clone, Copy, Default)]
pub struct AgrestiCoull {
    confidence_level: ConfidenceLevel,
}

impl AgrestiCoull {
    /// Create an estimator for the given confidence level
    pub fn new(confidence_level: f64) -> Result<Self> {
        Ok(Self {
            confidence_level: ConfidenceLevel::new(confidence_level)?,
        })
    }

    /// Create an estimator from a validated configuration
    pub fn from_config(config: &BinomialConfig) -> Result<Self> {
        Self::new(config.confidence_level)
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level.value()
    }

    /// Estimate the proportion of successes and its interval
    ///
    /// Every element is validated before any computation; the first invalid
    /// one fails the whole call with [`Error::InvalidInput`].
    #[instrument(skip(self, outcomes), fields(n = outcomes.len(), confidence_level = self.confidence_level.value()))]
    pub fn estimate<T: BinaryOutcome>(&self, outcomes: &[T]) -> Result<BinomialResult> {
        if outcomes.is_empty() {
            return Err(Error::InvalidInput("Empty outcome sample".to_string()));
        }

        let mut successes = 0usize;
        for (position, value) in outcomes.iter().enumerate() {
            match value.to_outcome() {
                Some(Outcome::Success) => successes += 1,
                Some(Outcome::Failure) => {}
                None => return Err(Error::invalid_outcome(position)),
            }
        }

        self.estimate_from_counts(successes, outcomes.len())
    }

    /// Estimate the proportion from success and trial counts
    pub fn estimate_from_counts(&self, successes: usize, trials: usize) -> Result<BinomialResult> {
        if trials == 0 {
            return Err(Error::InvalidInput(
                "Number of trials must be at least 1".to_string(),
            ));
        }
        if successes > trials {
            return Err(Error::InvalidInput(format!(
                "Successes ({successes}) exceed trials ({trials})"
            )));
        }

        let z = self.confidence_level.critical_value()?;
        let z2 = z * z;
        let adjusted_trials = trials as f64 + z2;
        let adjusted_p = (successes as f64 + z2 / 2.0) / adjusted_trials;
        let half_width = z * (adjusted_p * (1.0 - adjusted_p) / adjusted_trials).sqrt();

        debug!(
            "Agresti-Coull: x={}, n={}, n'={:.4}, p'={:.6}, half-width={:.6}",
            successes, trials, adjusted_trials, adjusted_p, half_width
        );

        Ok(BinomialResult {
            successes,
            trials,
            interval: IntervalResult::new(
                adjusted_p,
                (adjusted_p - half_width).max(0.0),
                (adjusted_p + half_width).min(1.0),
                self.confidence_level.value(),
            ),
        })
    }
}
