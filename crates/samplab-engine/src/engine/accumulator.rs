use samplab_stats::{domain::Domain, weighted::WeightedSummary};

use crate::core::histogram::BinCounts;

/// Accumulated sampling distribution of the chosen statistic.
///
/// A fixed number of bins over the statistic's domain. Each completed sample
/// contributes exactly one increment; the histogram persists across samples
/// until an explicit reset. Undefined statistic values must be filtered by
/// the caller before they reach [`Self::record`].
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingDistribution {
    counts: BinCounts,
    domain: Domain,
}

impl SamplingDistribution {
    /// Creates an empty distribution with `bins` bins over `domain`.
    #[must_use]
    pub fn new(bins: usize, domain: Domain) -> Self {
        Self {
            counts: BinCounts::new(bins),
            domain,
        }
    }

    /// The domain the statistic is binned over.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Per-bin observation counts.
    #[must_use]
    pub fn counts(&self) -> &BinCounts {
        &self.counts
    }

    /// Total number of recorded observations.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    /// Resolves the bin a statistic value falls into: normalized into the
    /// domain, clamped, scaled by the bin count, floored, and clamped into
    /// range.
    #[must_use]
    pub fn bin_of(&self, value: f64) -> usize {
        self.domain.bin_of(value, self.counts.bins())
    }

    /// Records one statistic observation.
    pub fn record(&mut self, value: f64) {
        let bin = self.bin_of(value);
        self.counts.increment(bin);
    }

    /// Weighted mean and standard deviation of the accumulated histogram,
    /// recomputed on demand from bin-center values mapped back into the
    /// domain. `None` when nothing has been recorded.
    #[must_use]
    pub fn mean_and_spread(&self) -> Option<(f64, f64)> {
        let bins = self.counts.bins();
        let summary = WeightedSummary::from_bins(self.counts.counts(), |bin| {
            self.domain.center_of(bin, bins)
        })?;
        Some((summary.mean, summary.std_dev))
    }

    /// Drops every observation, keeping the domain.
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Drops every observation and switches to a new domain (used when the
    /// chosen statistic changes).
    pub fn reset_domain(&mut self, domain: Domain) {
        self.domain = domain;
        self.counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_maps_into_domain_bins() {
        let mut distribution = SamplingDistribution::new(10, Domain::UNIT);
        distribution.record(0.05);
        distribution.record(0.55);
        distribution.record(0.999);
        assert_eq!(distribution.counts().count(0), 1);
        assert_eq!(distribution.counts().count(5), 1);
        assert_eq!(distribution.counts().count(9), 1);
        assert_eq!(distribution.total(), 3);
    }

    #[test]
    fn test_record_clamps_out_of_domain_values() {
        let mut distribution = SamplingDistribution::new(8, Domain::new(0.0, 0.5));
        distribution.record(-1.0);
        distribution.record(0.5);
        distribution.record(2.0);
        assert_eq!(distribution.counts().count(0), 1);
        assert_eq!(distribution.counts().count(7), 2);
    }

    #[test]
    fn test_mean_and_spread_recomputed_from_centers() {
        let mut distribution = SamplingDistribution::new(4, Domain::UNIT);
        assert_eq!(distribution.mean_and_spread(), None);
        // Two observations in opposite outer bins: centers 0.125 and 0.875.
        distribution.record(0.1);
        distribution.record(0.9);
        let (mean, spread) = distribution.mean_and_spread().unwrap();
        assert!((mean - 0.5).abs() < 1e-12);
        assert!((spread - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_clear_keeps_the_domain() {
        let mut distribution = SamplingDistribution::new(6, Domain::new(0.0, 0.5));
        distribution.record(0.25);
        distribution.clear();
        assert_eq!(distribution.total(), 0);
        assert_eq!(distribution.domain(), Domain::new(0.0, 0.5));
    }

    #[test]
    fn test_reset_domain_switches_and_clears() {
        let mut distribution = SamplingDistribution::new(6, Domain::UNIT);
        distribution.record(0.5);
        distribution.reset_domain(Domain::new(0.0, 0.5));
        assert_eq!(distribution.total(), 0);
        assert_eq!(distribution.domain(), Domain::new(0.0, 0.5));
    }
}
