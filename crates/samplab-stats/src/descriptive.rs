//! Point statistics over raw sample values.
//!
//! Every function returns `None` when the statistic is undefined for its
//! input rather than coercing to a default: an undefined statistic must be
//! filtered by the caller, never silently turned into zero.

/// Arithmetic mean. `None` for an empty sample.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median: the middle value, or the average of the two middle values for an
/// even count. `None` for an empty sample.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Sample standard deviation with denominator `n - 1`.
///
/// Defined only for two or more values; returns `None` otherwise. This is
/// the *sample* statistic, distinct from the population standard deviation
/// in [`crate::weighted`] which divides by the total weight.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Fraction of values strictly greater than `threshold`. `None` for an
/// empty sample.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn proportion_above(values: &[f64], threshold: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let above = values.iter().filter(|&&v| v > threshold).count();
    Some(above as f64 / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_undefined() {
        assert_eq!(mean(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(sample_std_dev(&[]), None);
        assert_eq!(proportion_above(&[], 0.5), None);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[0.5]), Some(0.5));
        assert_eq!(mean(&[0.0, 1.0]), Some(0.5));
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[0.9, 0.1, 0.5]), Some(0.5));
    }

    #[test]
    fn test_median_even_count_averages_middle_pair() {
        assert_eq!(median(&[0.8, 0.2, 0.4, 0.6]), Some(0.5));
    }

    #[test]
    fn test_std_dev_requires_two_values() {
        assert_eq!(sample_std_dev(&[0.5]), None);
        assert!(sample_std_dev(&[0.4, 0.6]).is_some());
    }

    #[test]
    fn test_std_dev_uses_n_minus_one() {
        // Variance of {0, 1} with denominator n - 1 is 0.5.
        let sd = sample_std_dev(&[0.0, 1.0]).unwrap();
        assert!((sd - 0.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_proportion_is_strictly_above() {
        // Values equal to the threshold do not count.
        let values = [0.5, 0.5, 0.6, 0.4];
        assert_eq!(proportion_above(&values, 0.5), Some(0.25));
    }
}
