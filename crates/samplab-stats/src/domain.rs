//! Value ranges and fixed-width bin mapping.
//!
//! A [`Domain`] describes the closed range a statistic (or the population
//! values themselves) can fall into. The same mapping is used by the engine
//! to resolve histogram bins and by the renderer to place bins on screen, so
//! it lives here rather than in either of them.

/// A closed value range divided into fixed-width bins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Lower bound of the range.
    pub min: f64,
    /// Upper bound of the range.
    pub max: f64,
}

impl Domain {
    /// The unit interval `[0, 1]`, the domain of population values and of
    /// every statistic except the sample standard deviation.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    /// Creates a domain over `[min, max]`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Maps a value to its bin index among `bins` equal-width bins.
    ///
    /// The value is normalized into `[0, 1]` (clamping anything outside the
    /// domain), scaled by the bin count, floored, and the index clamped into
    /// `[0, bins - 1]` so the upper bound lands in the last bin.
    ///
    /// # Panics
    ///
    /// Panics if `bins` is zero.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn bin_of(&self, value: f64, bins: usize) -> usize {
        assert!(bins > 0, "domain must have at least one bin");
        let normalized = ((value - self.min) / self.width()).clamp(0.0, 1.0);
        let index = (normalized * bins as f64).floor() as usize;
        index.min(bins - 1)
    }

    /// Returns the value at the center of a bin.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn center_of(&self, bin: usize, bins: usize) -> f64 {
        assert!(bins > 0, "domain must have at least one bin");
        self.min + (bin as f64 + 0.5) / bins as f64 * self.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_of_interior_values() {
        let domain = Domain::UNIT;
        assert_eq!(domain.bin_of(0.0, 10), 0);
        assert_eq!(domain.bin_of(0.05, 10), 0);
        assert_eq!(domain.bin_of(0.1, 10), 1);
        assert_eq!(domain.bin_of(0.95, 10), 9);
    }

    #[test]
    fn test_bin_of_clamps_out_of_range() {
        let domain = Domain::UNIT;
        assert_eq!(domain.bin_of(-0.5, 10), 0);
        assert_eq!(domain.bin_of(1.0, 10), 9);
        assert_eq!(domain.bin_of(2.5, 10), 9);
    }

    #[test]
    fn test_bin_of_non_unit_domain() {
        let domain = Domain::new(0.0, 0.5);
        assert_eq!(domain.bin_of(0.0, 5), 0);
        assert_eq!(domain.bin_of(0.25, 5), 2);
        assert_eq!(domain.bin_of(0.49, 5), 4);
        assert_eq!(domain.bin_of(0.5, 5), 4);
    }

    #[test]
    fn test_bin_of_matches_clamp_floor_formula() {
        // The resolved bin must equal clamp(floor((v - min) / (max - min) * B), 0, B - 1).
        let domain = Domain::new(0.2, 0.8);
        let bins = 13;
        for i in 0..100 {
            let v = f64::from(i) / 100.0;
            let expected = (((v - domain.min) / domain.width() * f64::from(bins)).floor())
                .clamp(0.0, f64::from(bins - 1)) as usize;
            assert_eq!(domain.bin_of(v, bins as usize), expected, "value {v}");
        }
    }

    #[test]
    fn test_center_of_round_trips_through_bin_of() {
        let domain = Domain::new(0.0, 0.5);
        for bin in 0..20 {
            let center = domain.center_of(bin, 20);
            assert_eq!(domain.bin_of(center, 20), bin);
        }
    }
}
