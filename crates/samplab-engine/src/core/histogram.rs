/// Fixed-width bin counts backing one tray.
///
/// All three trays (population, sample tray, sampling distribution) keep
/// their per-bin counts in this structure. Counts only grow, except through
/// [`Self::clear`]; out-of-range bin indices are ignored rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinCounts {
    counts: Vec<u32>,
}

impl BinCounts {
    /// Creates `bins` empty bins.
    #[must_use]
    pub fn new(bins: usize) -> Self {
        Self {
            counts: vec![0; bins],
        }
    }

    /// Number of bins.
    #[must_use]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Per-bin counts.
    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Count in one bin; zero for out-of-range indices.
    #[must_use]
    pub fn count(&self, bin: usize) -> u32 {
        self.counts.get(bin).copied().unwrap_or(0)
    }

    /// Sum of all bin counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Largest single bin count.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Adds one to a bin. Out-of-range indices are ignored; counts saturate.
    pub fn increment(&mut self, bin: usize) {
        if let Some(count) = self.counts.get_mut(bin) {
            *count = count.saturating_add(1);
        }
    }

    /// Overwrites one bin count. Out-of-range indices are ignored.
    pub fn set(&mut self, bin: usize, count: u32) {
        if let Some(slot) = self.counts.get_mut(bin) {
            *slot = count;
        }
    }

    /// Zeroes every bin.
    pub fn clear(&mut self) {
        self.counts.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bins_are_empty() {
        let counts = BinCounts::new(5);
        assert_eq!(counts.bins(), 5);
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.max(), 0);
    }

    #[test]
    fn test_increment_and_total() {
        let mut counts = BinCounts::new(3);
        counts.increment(0);
        counts.increment(2);
        counts.increment(2);
        assert_eq!(counts.counts(), &[1, 0, 2]);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.max(), 2);
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let mut counts = BinCounts::new(2);
        counts.increment(2);
        counts.set(5, 10);
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.count(99), 0);
    }

    #[test]
    fn test_clear_zeroes_every_bin() {
        let mut counts = BinCounts::new(4);
        for bin in 0..4 {
            counts.increment(bin);
        }
        counts.clear();
        assert_eq!(counts.counts(), &[0, 0, 0, 0]);
    }
}
