//! Interval estimates for exploratory data analysis
//!
//! Facade over the workspace crates:
//!
//! - [`core`] (`eda-core`): errors, missing-value aware observations,
//!   compensated summation, normal critical values, resampling
//! - [`confidence`] (`eda-confidence`): the bootstrap mean and Agresti-Coull
//!   estimators
//!
//! # Example
//!
//! ```rust
//! use eda_intervals::prelude::*;
//!
//! let heights = vec![171.2, 165.0, 180.3, 175.9, f64::NAN, 169.4];
//! let mean = BootstrapMean::new().with_seed(1).estimate(&heights).unwrap();
//! assert!(mean.lower <= mean.upper);
//!
//! let smokers = [false, true, false, false, true];
//! let share = AgrestiCoull::default().estimate(&smokers).unwrap();
//! assert_eq!((share.successes, share.trials), (2, 5));
//! ```

pub use eda_confidence as confidence;
pub use eda_core as core;

pub use eda_confidence::{
    agresti_coull, agresti_coull_counts, bootstrap_mean, bootstrap_mean_seeded, AgrestiCoull,
    BinaryOutcome, BinomialConfig, BinomialResult, BootstrapConfig, BootstrapMean,
    BootstrapResult, ConfidenceLevel, IntervalResult, Outcome, DEFAULT_CONFIDENCE_LEVEL,
    DEFAULT_RESAMPLES,
};
pub use eda_core::{Error, Observation, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AgrestiCoull, BinaryOutcome, BinomialResult, BootstrapMean, BootstrapResult, Error,
        IntervalResult, Observation, Outcome, Result,
    };
}
