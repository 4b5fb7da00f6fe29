//! Property tests for the compensated reductions and resampling

use approx::assert_relative_eq;
use eda_core::{
    math::summation::{mean, population_std_dev, stable_sum},
    numeric::{indexed_mean_skip_missing, mean_skip_missing},
    Resampler,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn stable_sum_is_order_independent(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let forward = stable_sum(values.iter().copied());
        let backward = stable_sum(values.iter().rev().copied());
        assert_relative_eq!(forward, backward, epsilon = 1e-6, max_relative = 1e-12);
    }

    #[test]
    fn mean_lies_within_range(values in prop::collection::vec(-1e3f64..1e3, 1..100)) {
        let m = mean(&values).unwrap();
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
    }

    #[test]
    fn std_dev_is_non_negative(values in prop::collection::vec(-1e3f64..1e3, 1..100)) {
        prop_assert!(population_std_dev(&values).unwrap() >= 0.0);
    }

    #[test]
    fn identity_resample_reproduces_mean(values in prop::collection::vec(-1e3f64..1e3, 1..100)) {
        let identity: Vec<usize> = (0..values.len()).collect();
        let direct = mean_skip_missing(&values).unwrap();
        let indexed = indexed_mean_skip_missing(&values, &identity).unwrap();
        prop_assert_eq!(direct, indexed);
    }

    #[test]
    fn resample_indices_stay_in_range(seed in any::<u64>(), n in 1usize..64, iteration in 0usize..1000) {
        let idx = Resampler::new(seed).indices(iteration, n);
        prop_assert_eq!(idx.len(), n);
        prop_assert!(idx.iter().all(|&i| i < n));
    }
}
