//! Summaries over binned (histogram) weights.
//!
//! These run in O(bins) regardless of the total weight, which is what makes
//! live population editing cheap: every edit only re-walks the bin array.
//! The standard deviation here divides by the total weight — the
//! *population* parameter — as opposed to the `n - 1` sample statistic in
//! [`crate::descriptive`].

/// Weighted summary of a binned distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSummary {
    /// Total weight across all bins.
    pub total: u64,
    /// Weighted mean of the bin values.
    pub mean: f64,
    /// Population standard deviation (denominator = total weight).
    pub std_dev: f64,
    /// Weighted median: the value of the first bin where the cumulative
    /// weight reaches half of the total.
    pub median: f64,
}

impl WeightedSummary {
    /// Computes a summary over bin weights, with `value_of` giving the value
    /// each bin represents (typically its center).
    ///
    /// Returns `None` when the total weight is zero.
    #[must_use]
    pub fn from_bins<F>(weights: &[u32], value_of: F) -> Option<Self>
    where
        F: Fn(usize) -> f64,
    {
        let total = weights.iter().map(|&w| u64::from(w)).sum::<u64>();
        if total == 0 {
            return None;
        }

        #[expect(clippy::cast_precision_loss)]
        let total_f = total as f64;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for (bin, &weight) in weights.iter().enumerate() {
            let value = value_of(bin);
            let weight = f64::from(weight);
            sum += weight * value;
            sum_sq += weight * value * value;
        }
        let mean = sum / total_f;
        let variance = (sum_sq / total_f - mean * mean).max(0.0);

        let half = total_f / 2.0;
        let mut cumulative = 0.0;
        let mut median = value_of(weights.len() - 1);
        for (bin, &weight) in weights.iter().enumerate() {
            cumulative += f64::from(weight);
            if cumulative >= half {
                median = value_of(bin);
                break;
            }
        }

        Some(Self {
            total,
            mean,
            std_dev: variance.sqrt(),
            median,
        })
    }
}

/// Fraction of the total weight lying in bins whose value is strictly
/// greater than `threshold`. `None` when the total weight is zero.
#[must_use]
pub fn proportion_above<F>(weights: &[u32], value_of: F, threshold: f64) -> Option<f64>
where
    F: Fn(usize) -> f64,
{
    let total = weights.iter().map(|&w| u64::from(w)).sum::<u64>();
    if total == 0 {
        return None;
    }
    let above = weights
        .iter()
        .enumerate()
        .filter(|&(bin, _)| value_of(bin) > threshold)
        .map(|(_, &w)| u64::from(w))
        .sum::<u64>();
    #[expect(clippy::cast_precision_loss)]
    let fraction = above as f64 / total as f64;
    Some(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::cast_precision_loss)]
    fn unit_center(bins: usize) -> impl Fn(usize) -> f64 {
        move |bin| (bin as f64 + 0.5) / bins as f64
    }

    #[test]
    fn test_zero_total_weight_is_undefined() {
        assert_eq!(WeightedSummary::from_bins(&[0, 0, 0], unit_center(3)), None);
        assert_eq!(proportion_above(&[0, 0], unit_center(2), 0.5), None);
    }

    #[test]
    fn test_uniform_weights_center_on_half() {
        let weights = [10; 10];
        let summary = WeightedSummary::from_bins(&weights, unit_center(10)).unwrap();
        assert_eq!(summary.total, 100);
        assert!((summary.mean - 0.5).abs() < 1e-12);
        // Cumulative weight reaches half at bin 4 (center 0.45).
        assert!((summary.median - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_single_loaded_bin_has_zero_spread() {
        let mut weights = [0_u32; 8];
        weights[3] = 500;
        let summary = WeightedSummary::from_bins(&weights, unit_center(8)).unwrap();
        assert!((summary.mean - unit_center(8)(3)).abs() < 1e-12);
        assert!(summary.std_dev.abs() < 1e-9);
        assert!((summary.median - unit_center(8)(3)).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_divides_by_total_weight() {
        // Two bins with equal weight at 0.25 and 0.75: population SD is 0.25.
        let weights = [100, 100];
        let summary = WeightedSummary::from_bins(&weights, unit_center(2)).unwrap();
        assert!((summary.std_dev - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_median_skewed_weights() {
        // Half the total is reached in the first bin.
        let weights = [60, 30, 10];
        let summary = WeightedSummary::from_bins(&weights, unit_center(3)).unwrap();
        assert!((summary.median - unit_center(3)(0)).abs() < 1e-12);
    }

    #[test]
    fn test_proportion_above_is_strict() {
        // Centers are 0.125, 0.375, 0.625, 0.875; threshold at an exact
        // center must exclude that bin.
        let weights = [1, 1, 1, 1];
        let p = proportion_above(&weights, unit_center(4), 0.625).unwrap();
        assert!((p - 0.25).abs() < 1e-12);
    }
}
