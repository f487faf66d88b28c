use std::str::FromStr;

use samplab_stats::weighted::{self, WeightedSummary};
use serde::{Deserialize, Serialize};

use crate::{ParseShapeError, core::histogram::BinCounts};

/// Weight given to the densest bin when a generator shape is applied.
const PEAK_WEIGHT: f64 = 1000.0;

/// Analytic shapes used to fill the population histogram.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorShape {
    /// Peaked, normal-like bell centered on 0.5.
    #[display("normal")]
    Normal,
    /// Flat weights across every bin.
    #[display("uniform")]
    Uniform,
    /// Two peaks at 0.25 and 0.75.
    #[display("bimodal")]
    Bimodal,
    /// Right-skewed, lognormal-like bulk near 0.25.
    #[display("skewed")]
    Skewed,
}

impl GeneratorShape {
    /// All shapes, in UI cycling order.
    pub const ALL: [Self; 4] = [Self::Normal, Self::Uniform, Self::Bimodal, Self::Skewed];

    /// Relative (unnormalized) density at `x` in `(0, 1)`.
    fn density(self, x: f64) -> f64 {
        match self {
            Self::Normal => bell(x, 0.5, 0.12),
            Self::Uniform => 1.0,
            Self::Bimodal => bell(x, 0.25, 0.08) + bell(x, 0.75, 0.08),
            Self::Skewed => {
                // Lognormal density with median 0.25; bin centers are
                // strictly positive so the log is always defined.
                let sigma = 0.6;
                let z = (x.ln() - 0.25_f64.ln()) / sigma;
                (-0.5 * z * z).exp() / x
            }
        }
    }

    /// The next shape in cycling order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

fn bell(x: f64, mu: f64, sigma: f64) -> f64 {
    let z = (x - mu) / sigma;
    (-0.5 * z * z).exp()
}

impl FromStr for GeneratorShape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "uniform" => Ok(Self::Uniform),
            "bimodal" => Ok(Self::Bimodal),
            "skewed" => Ok(Self::Skewed),
            _ => Err(ParseShapeError {
                name: s.to_owned(),
            }),
        }
    }
}

/// Weighted summary statistics of the population.
///
/// The standard deviation here is the *population* parameter (denominator =
/// total weight), deliberately distinct from the per-sample statistic with
/// denominator n - 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationSummary {
    /// Weighted mean of the bin midpoints.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Weighted median (first bin where cumulative weight reaches half).
    pub median: f64,
    /// Proportion of weight strictly above the threshold.
    pub proportion_above: f64,
}

/// The editable population value distribution.
///
/// A fixed number of equal-width bins over `[0, 1)`, each holding a bounded
/// non-negative integer weight. Weights come from a generator shape or from
/// per-bin edits; a total weight of zero is valid and makes the sampler fall
/// back to uniform bin selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationModel {
    weights: BinCounts,
    max_weight: u32,
}

impl PopulationModel {
    /// Creates an empty population with `bins` bins and per-bin weights
    /// clamped to `max_weight`.
    #[must_use]
    pub fn new(bins: usize, max_weight: u32) -> Self {
        Self {
            weights: BinCounts::new(bins),
            max_weight,
        }
    }

    /// Number of bins.
    #[must_use]
    pub fn bins(&self) -> usize {
        self.weights.bins()
    }

    /// Per-bin weights.
    #[must_use]
    pub fn weights(&self) -> &BinCounts {
        &self.weights
    }

    /// Total weight across all bins.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.weights.total()
    }

    /// Upper bound for a single bin weight.
    #[must_use]
    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    /// Midpoint value represented by a bin.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn value_of(&self, bin: usize) -> f64 {
        (bin as f64 + 0.5) / self.bins() as f64
    }

    /// Fills every bin from an analytic shape evaluated at the bin centers,
    /// scaled so the densest bin gets a fixed peak weight and rounded to
    /// integers. Replaces any previous weights.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn apply_generator(&mut self, shape: GeneratorShape) {
        let densities = (0..self.bins())
            .map(|bin| shape.density(self.value_of(bin)))
            .collect::<Vec<_>>();
        let peak = densities.iter().copied().fold(0.0_f64, f64::max);
        for (bin, density) in densities.into_iter().enumerate() {
            let weight = if peak > 0.0 {
                (density / peak * PEAK_WEIGHT).round() as u32
            } else {
                0
            };
            self.weights.set(bin, weight.min(self.max_weight));
        }
    }

    /// Adjusts one bin weight by `delta`, clamping into `[0, max_weight]`.
    /// Out-of-range bins are ignored.
    pub fn modify(&mut self, bin: usize, delta: i32) {
        if bin >= self.bins() {
            return;
        }
        let current = i64::from(self.weights.count(bin));
        let adjusted = (current + i64::from(delta)).clamp(0, i64::from(self.max_weight));
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        self.weights.set(bin, adjusted as u32);
    }

    /// Weighted summary of the current weights, in O(bins).
    ///
    /// Returns `None` when the total weight is zero.
    #[must_use]
    pub fn summary(&self, threshold: f64) -> Option<PopulationSummary> {
        let value_of = |bin| self.value_of(bin);
        let summary = WeightedSummary::from_bins(self.weights.counts(), value_of)?;
        let proportion_above =
            weighted::proportion_above(self.weights.counts(), value_of, threshold)?;
        Some(PopulationSummary {
            mean: summary.mean,
            std_dev: summary.std_dev,
            median: summary.median,
            proportion_above,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(shape: GeneratorShape) -> PopulationModel {
        let mut population = PopulationModel::new(33, 10_000);
        population.apply_generator(shape);
        population
    }

    #[test]
    fn test_generators_fill_with_bounded_weights() {
        for shape in GeneratorShape::ALL {
            let population = populated(shape);
            assert!(population.total() > 0, "{shape} produced no weight");
            assert!(population.weights().max() <= 10_000);
        }
    }

    #[test]
    fn test_generator_is_deterministic() {
        assert_eq!(
            populated(GeneratorShape::Bimodal),
            populated(GeneratorShape::Bimodal)
        );
    }

    #[test]
    fn test_uniform_shape_is_flat() {
        let population = populated(GeneratorShape::Uniform);
        let first = population.weights().count(0);
        assert!(population.weights().counts().iter().all(|&w| w == first));
    }

    #[test]
    fn test_normal_shape_peaks_in_the_middle() {
        let population = populated(GeneratorShape::Normal);
        let middle = population.weights().count(16);
        assert!(middle > population.weights().count(0));
        assert!(middle > population.weights().count(32));
        let summary = population.summary(0.5).unwrap();
        assert!((summary.mean - 0.5).abs() < 0.02);
    }

    #[test]
    fn test_skewed_shape_leans_right() {
        let population = populated(GeneratorShape::Skewed);
        let summary = population.summary(0.5).unwrap();
        // Mass concentrates below 0.5 with a long right tail.
        assert!(summary.median < 0.5);
        assert!(summary.mean > summary.median);
    }

    #[test]
    fn test_modify_clamps_into_bounds() {
        let mut population = PopulationModel::new(10, 100);
        population.modify(3, 5);
        assert_eq!(population.weights().count(3), 5);
        population.modify(3, -50);
        assert_eq!(population.weights().count(3), 0);
        population.modify(3, 1000);
        assert_eq!(population.weights().count(3), 100);
        // Out-of-range bins are a no-op.
        population.modify(10, 5);
        assert_eq!(population.total(), 100);
    }

    #[test]
    fn test_summary_of_empty_population_is_undefined() {
        let population = PopulationModel::new(10, 100);
        assert_eq!(population.summary(0.5), None);
    }

    #[test]
    fn test_uniform_summary_values() {
        let population = populated(GeneratorShape::Uniform);
        let summary = population.summary(0.5).unwrap();
        assert!((summary.mean - 0.5).abs() < 1e-9);
        // 16 of 33 bin centers lie strictly above 0.5.
        assert!((summary.proportion_above - 16.0 / 33.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_round_trip() {
        for shape in GeneratorShape::ALL {
            let parsed: GeneratorShape = shape.to_string().parse().unwrap();
            assert_eq!(parsed, shape);
        }
        assert!("triangular".parse::<GeneratorShape>().is_err());
    }
}
