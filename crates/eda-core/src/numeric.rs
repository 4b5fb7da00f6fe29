//! Missing-value aware observations
//!
//! Numeric samples are generic over [`Observation`], which distinguishes a
//! usable value from a missing one. `None` and non-finite floats (NaN, ±∞)
//! count as missing and are skipped by every reduction in this workspace.

use crate::math::summation::NeumaierSum;

/// A single entry of a numeric sample that may be missing
pub trait Observation: Copy + Send + Sync {
    /// The finite value, or `None` if this entry is missing
    fn value(&self) -> Option<f64>;

    /// Whether this entry is missing
    #[inline]
    fn is_missing(&self) -> bool {
        self.value().is_none()
    }
}

impl Observation for f64 {
    #[inline]
    fn value(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl Observation for f32 {
    #[inline]
    fn value(&self) -> Option<f64> {
        self.is_finite().then_some(f64::from(*self))
    }
}

impl<T: Observation> Observation for Option<T> {
    #[inline]
    fn value(&self) -> Option<f64> {
        self.as_ref().and_then(Observation::value)
    }
}

/// Number of non-missing entries
pub fn count_present<T: Observation>(sample: &[T]) -> usize {
    sample.iter().filter(|x| !x.is_missing()).count()
}

/// The non-missing entries, in input order
pub fn present_values<T: Observation>(sample: &[T]) -> Vec<f64> {
    sample.iter().filter_map(Observation::value).collect()
}

/// Mean of the non-missing entries, `None` if every entry is missing
pub fn mean_skip_missing<T: Observation>(sample: &[T]) -> Option<f64> {
    mean_over(sample.iter().copied())
}

/// Mean of the non-missing entries selected by `indices`
///
/// Indices may repeat; each occurrence contributes once.
pub fn indexed_mean_skip_missing<T: Observation>(sample: &[T], indices: &[usize]) -> Option<f64> {
    mean_over(indices.iter().map(|&i| sample[i]))
}

fn mean_over<T: Observation, I: Iterator<Item = T>>(values: I) -> Option<f64> {
    let mut sum = NeumaierSum::new();
    let mut count = 0usize;
    for value in values.filter_map(|x| x.value()) {
        sum.add(value);
        count += 1;
    }
    (count > 0).then(|| sum.value() / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_float_missing_values() {
        assert_eq!(1.5f64.value(), Some(1.5));
        assert!(f64::NAN.is_missing());
        assert!(f64::INFINITY.is_missing());
        assert!(f64::NEG_INFINITY.is_missing());
        assert_eq!(2.5f32.value(), Some(2.5));
        assert!(f32::NAN.is_missing());
    }

    #[test]
    fn test_option_missing_values() {
        assert_eq!(Some(3.0f64).value(), Some(3.0));
        assert!(None::<f64>.is_missing());
        assert!(Some(f64::NAN).is_missing());
    }

    #[test]
    fn test_mean_skips_missing() {
        let data = [1.0, f64::NAN, 3.0, f64::INFINITY, 5.0];
        assert_eq!(count_present(&data), 3);
        assert_relative_eq!(mean_skip_missing(&data).unwrap(), 3.0);

        let data = [Some(2.0), None, Some(4.0)];
        assert_eq!(count_present(&data), 2);
        assert_relative_eq!(mean_skip_missing(&data).unwrap(), 3.0);
    }

    #[test]
    fn test_present_values_keep_order() {
        let data = [Some(3.0), None, Some(1.0), Some(f64::NAN), Some(2.0)];
        assert_eq!(present_values(&data), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_all_missing_has_no_mean() {
        assert_eq!(mean_skip_missing(&[f64::NAN, f64::NAN]), None);
        assert_eq!(mean_skip_missing::<f64>(&[]), None);
    }

    #[test]
    fn test_indexed_mean_counts_repeats() {
        let data = [1.0, 2.0, f64::NAN, 10.0];
        // 1 + 1 + 10, the missing slot is skipped
        let mean = indexed_mean_skip_missing(&data, &[0, 0, 2, 3]).unwrap();
        assert_relative_eq!(mean, 4.0);
        assert_eq!(indexed_mean_skip_missing(&data, &[2, 2]), None);
    }
}
