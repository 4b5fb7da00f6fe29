//! Invariants of both interval methods over generated inputs

use eda_confidence::{AgrestiCoull, BootstrapMean, IntervalResult};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bootstrap_bounds_are_ordered(
        data in prop::collection::vec(-1e4f64..1e4, 2..60),
        seed in any::<u64>(),
        resamples in 1usize..200,
    ) {
        let ci = BootstrapMean::new()
            .with_resamples(resamples)
            .with_seed(seed)
            .estimate(&data)
            .unwrap();
        prop_assert!(ci.lower <= ci.upper);
        prop_assert!(ci.lower.is_finite() && ci.upper.is_finite());
    }

    #[test]
    fn bootstrap_statistic_ignores_resample_count(
        data in prop::collection::vec(-1e3f64..1e3, 2..40),
        seed in any::<u64>(),
    ) {
        let few = BootstrapMean::new().with_resamples(1).with_seed(seed).estimate(&data).unwrap();
        let many = BootstrapMean::new().with_resamples(300).with_seed(seed).estimate(&data).unwrap();
        prop_assert_eq!(few.statistic, many.statistic);
    }

    #[test]
    fn agresti_coull_is_nested_in_unit_interval(trials in 1usize..500, frac in 0.0f64..=1.0) {
        let successes = ((trials as f64) * frac).floor() as usize;
        let ci = AgrestiCoull::default().estimate_from_counts(successes, trials).unwrap().interval;
        prop_assert!(0.0 <= ci.lower);
        prop_assert!(ci.lower <= ci.statistic);
        prop_assert!(ci.statistic <= ci.upper);
        prop_assert!(ci.upper <= 1.0);
    }

    #[test]
    fn agresti_coull_accepts_any_binary_sample(outcomes in prop::collection::vec(any::<bool>(), 1..200)) {
        let result = AgrestiCoull::default().estimate(&outcomes).unwrap();
        prop_assert_eq!(result.trials, outcomes.len());
        prop_assert_eq!(result.successes, outcomes.iter().filter(|&&b| b).count());
    }

    #[test]
    fn agresti_coull_rejects_non_binary_values(
        mut outcomes in prop::collection::vec(0i64..=1, 1..50),
        bad in 2i64..100,
        position in any::<prop::sample::Index>(),
    ) {
        let i = position.index(outcomes.len());
        outcomes[i] = bad;
        let err = AgrestiCoull::default().estimate(&outcomes).unwrap_err();
        prop_assert!(err.is_invalid_input());
    }
}

fn normal_sample(n: usize, mean: f64, sd: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(mean, sd).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

#[test]
fn bootstrap_width_tracks_standard_error() {
    // For the mean, the bootstrap SE approaches sd / sqrt(n)
    let data = normal_sample(400, 100.0, 15.0, 42);
    let result = BootstrapMean::new()
        .with_resamples(2000)
        .with_seed(7)
        .estimate_detailed(&data)
        .unwrap();

    let expected_se = 15.0 / 20.0;
    assert!(result.standard_error > 0.8 * expected_se);
    assert!(result.standard_error < 1.2 * expected_se);
    assert!(result.bias.abs() < 0.2);
    assert!(result.interval.contains(result.interval.statistic));
}

#[test]
fn bootstrap_is_reproducible_with_injected_source() {
    let data = normal_sample(50, 0.0, 1.0, 3);
    let estimator = BootstrapMean::new().with_resamples(500);

    let run = |seed: u64| -> IntervalResult {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        estimator.estimate_with_rng(&data, &mut rng).unwrap()
    };

    let a = run(1);
    let b = run(1);
    assert_eq!(a.lower.to_bits(), b.lower.to_bits());
    assert_eq!(a.upper.to_bits(), b.upper.to_bits());
}

#[test]
fn estimators_are_shareable_across_threads() {
    let groups: Vec<Vec<f64>> = (0..4).map(|g| normal_sample(30, g as f64, 1.0, g)).collect();
    let estimator = BootstrapMean::new().with_resamples(200).with_seed(99);

    let sequential: Vec<_> = groups
        .iter()
        .map(|g| estimator.estimate(g).unwrap())
        .collect();

    let estimator = &estimator;
    let threaded: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = groups
            .iter()
            .map(|g| s.spawn(move || estimator.estimate(g).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, threaded);
}
