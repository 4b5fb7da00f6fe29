//! Confidence intervals for exploratory data analysis
//!
//! This crate provides two independent, stateless estimators:
//!
//! - **Bootstrap mean**: resamples the data with replacement, takes the mean
//!   of each resample and reports a bias-adjusted normal interval
//! - **Agresti-Coull proportion**: closed-form adjusted binomial interval
//!   for a sample of binary outcomes
//!
//! Both are pure functions of their input (and, for the bootstrap, of an
//! injectable random source) and may be called concurrently, e.g. once per
//! group of a partitioned dataset.
//!
//! # Examples
//!
//! ## Bootstrap Mean
//!
//! ```rust
//! use eda_confidence::BootstrapMean;
//!
//! let data = vec![12.1, 9.8, 11.4, 10.2, 13.0, 10.9, f64::NAN];
//!
//! let ci = BootstrapMean::new()
//!     .with_resamples(2000)
//!     .with_seed(42)
//!     .estimate(&data)
//!     .unwrap();
//! println!("mean {:.2}, 95% CI [{:.2}, {:.2}]", ci.statistic, ci.lower, ci.upper);
//! ```
//!
//! ## Agresti-Coull Proportion
//!
//! ```rust
//! use eda_confidence::AgrestiCoull;
//!
//! let outcomes = [1, 1, 0, 1, 0, 1, 1, 1];
//! let result = AgrestiCoull::new(0.95).unwrap().estimate(&outcomes).unwrap();
//! assert_eq!(result.successes, 6);
//! assert!(result.interval.lower <= result.interval.statistic);
//! ```

pub mod api;
mod binomial;
mod bootstrap;
mod bootstrap_methods;
pub mod config;
mod types;


// Re-exports
pub use api::{
    agresti_coull, agresti_coull_counts, bootstrap_mean, bootstrap_mean_seeded,
    DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RESAMPLES,
};
pub use binomial::{AgrestiCoull, BinaryOutcome, Outcome};
pub use bootstrap::BootstrapMean;
pub use bootstrap_methods::{BootstrapSummary, NormalBootstrap};
pub use config::{BinomialConfig, BootstrapConfig};
pub use eda_core::{Error, Observation, Result};
pub use types::{BinomialResult, BootstrapResult, ConfidenceLevel, IntervalResult};
