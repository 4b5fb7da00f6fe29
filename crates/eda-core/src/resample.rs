//! Bootstrap resample index generation
//!
//! A [`Resampler`] turns one base seed into an independent index stream per
//! resample: resample `i` is drawn from a generator seeded with
//! `base_seed + i` (wrapping). Any resample can be regenerated on its own,
//! and evaluation order (sequential or on the rayon pool) has no effect on
//! the indices produced.

use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    Rng, SeedableRng,
};
use tracing::debug;

/// Deterministic generator of bootstrap resample indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resampler {
    base_seed: u64,
}

impl Resampler {
    /// Create a resampler from an explicit base seed
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Create a resampler by drawing the base seed from `rng`
    ///
    /// This consumes exactly one `u64` from the supplied source.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen())
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Fill `buffer` with the indices of resample `iteration`
    ///
    /// Indices are uniform over `0..n_samples`, drawn with replacement.
    pub fn fill_indices(&self, iteration: usize, n_samples: usize, buffer: &mut Vec<usize>) {
        buffer.clear();
        if n_samples == 0 {
            return;
        }
        let mut rng = StdRng::seed_from_u64(self.base_seed.wrapping_add(iteration as u64));
        let dist = Uniform::new(0, n_samples);
        buffer.extend((0..n_samples).map(|_| dist.sample(&mut rng)));
    }

    /// Indices of resample `iteration`
    pub fn indices(&self, iteration: usize, n_samples: usize) -> Vec<usize> {
        let mut buffer = Vec::with_capacity(n_samples);
        self.fill_indices(iteration, n_samples, &mut buffer);
        buffer
    }

    /// Evaluate `f` on every resample, returning results in iteration order
    ///
    /// `f` receives the iteration number and that resample's indices. With
    /// the `parallel` feature resamples are evaluated on rayon's pool; the
    /// output is identical either way.
    pub fn map_resamples<R, F>(&self, n_resamples: usize, n_samples: usize, f: F) -> Vec<R>
    where
        F: Fn(usize, &[usize]) -> R + Sync + Send,
        R: Send,
    {
        debug!(
            n_resamples,
            n_samples,
            base_seed = self.base_seed,
            "Generating bootstrap resamples"
        );

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..n_resamples)
                .into_par_iter()
                .map_init(
                    || Vec::with_capacity(n_samples),
                    |buffer, i| {
                        self.fill_indices(i, n_samples, buffer);
                        f(i, buffer)
                    },
                )
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            let mut buffer = Vec::with_capacity(n_samples);
            (0..n_resamples)
                .map(|i| {
                    self.fill_indices(i, n_samples, &mut buffer);
                    f(i, &buffer)
                })
                .collect()
        }
    }
}
