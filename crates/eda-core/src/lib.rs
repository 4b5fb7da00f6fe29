//! Core types for bootstrap and binomial interval estimation
//!
//! This crate provides the pieces shared by the estimators in
//! `eda-confidence`:
//!
//! - [`Error`] and [`Result`], the error type used across the workspace
//! - [`Observation`], a missing-value aware view of numeric samples
//! - [`math`], normal critical values and compensated summation
//! - [`Resampler`], reproducible bootstrap index generation
//!
//! # Example
//!
//! ```rust
//! use eda_core::{math::distributions::normal, numeric::mean_skip_missing, Resampler};
//!
//! let data = vec![1.0, f64::NAN, 3.0, 5.0];
//! assert_eq!(mean_skip_missing(&data), Some(3.0));
//!
//! let z = normal::critical_value(0.95).unwrap();
//! assert!((z - 1.959964).abs() < 1e-6);
//!
//! let indices = Resampler::new(42).indices(0, data.len());
//! assert_eq!(indices.len(), 4);
//! ```

pub mod error;
pub mod math;
pub mod numeric;
pub mod resample;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::Observation;
pub use resample::Resampler;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Error, Observation, Resampler, Result};
}
