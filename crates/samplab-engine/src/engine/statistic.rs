use std::str::FromStr;

use samplab_stats::{descriptive, domain::Domain};
use serde::{Deserialize, Serialize};

use crate::ParseStatisticError;

/// Point statistic computed over one sample.
///
/// The chosen statistic also determines the domain the sampling distribution
/// is binned over: the sample standard deviation lives in `[0, 0.5]`, all
/// other statistics in `[0, 1]` (population values are unit-interval bin
/// midpoints by construction).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Statistic {
    /// Arithmetic mean.
    #[display("mean")]
    Mean,
    /// Middle value (average of the middle pair for even counts).
    #[display("median")]
    Median,
    /// Sample standard deviation (denominator n - 1).
    #[display("std-dev")]
    StdDev,
    /// Fraction of values strictly above the configured threshold.
    #[display("proportion")]
    Proportion,
}

impl Statistic {
    /// All statistics, in UI cycling order.
    pub const ALL: [Self; 4] = [Self::Mean, Self::Median, Self::StdDev, Self::Proportion];

    /// Domain over which this statistic is binned in the sampling
    /// distribution.
    #[must_use]
    pub fn domain(self) -> Domain {
        match self {
            Self::StdDev => Domain::new(0.0, 0.5),
            Self::Mean | Self::Median | Self::Proportion => Domain::UNIT,
        }
    }

    /// Computes the statistic over a sample of values.
    ///
    /// Returns `None` when the statistic is undefined for the input: empty
    /// samples for every statistic, and fewer than two values for the
    /// sample standard deviation. Callers must filter `None` before the
    /// accumulator — it is never coerced to zero.
    #[must_use]
    pub fn compute(self, values: &[f64], threshold: f64) -> Option<f64> {
        match self {
            Self::Mean => descriptive::mean(values),
            Self::Median => descriptive::median(values),
            Self::StdDev => descriptive::sample_std_dev(values),
            Self::Proportion => descriptive::proportion_above(values, threshold),
        }
    }

    /// The next statistic in cycling order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl FromStr for Statistic {
    type Err = ParseStatisticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            "std-dev" | "sd" => Ok(Self::StdDev),
            "proportion" => Ok(Self::Proportion),
            _ => Err(ParseStatisticError {
                name: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_mean_and_median() {
        let values = [0.1, 0.3, 0.5];
        assert_eq!(Statistic::Mean.compute(&values, 0.5), Some(0.3));
        assert_eq!(Statistic::Median.compute(&values, 0.5), Some(0.3));
    }

    #[test]
    fn test_std_dev_undefined_below_two_values() {
        assert_eq!(Statistic::StdDev.compute(&[0.5], 0.5), None);
        assert!(Statistic::StdDev.compute(&[0.4, 0.6], 0.5).is_some());
    }

    #[test]
    fn test_empty_sample_is_undefined_for_every_statistic() {
        for statistic in Statistic::ALL {
            assert_eq!(statistic.compute(&[], 0.5), None);
        }
    }

    #[test]
    fn test_proportion_uses_the_threshold() {
        let values = [0.2, 0.4, 0.6, 0.8];
        assert_eq!(Statistic::Proportion.compute(&values, 0.5), Some(0.5));
        assert_eq!(Statistic::Proportion.compute(&values, 0.7), Some(0.25));
    }

    #[test]
    fn test_domains() {
        assert_eq!(Statistic::StdDev.domain(), Domain::new(0.0, 0.5));
        for statistic in [Statistic::Mean, Statistic::Median, Statistic::Proportion] {
            assert_eq!(statistic.domain(), Domain::UNIT);
        }
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut statistic = Statistic::Mean;
        for _ in 0..Statistic::ALL.len() {
            statistic = statistic.next();
        }
        assert_eq!(statistic, Statistic::Mean);
    }

    #[test]
    fn test_parse_round_trip() {
        for statistic in Statistic::ALL {
            let parsed: Statistic = statistic.to_string().parse().unwrap();
            assert_eq!(parsed, statistic);
        }
        assert!("variance".parse::<Statistic>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&Statistic::StdDev).unwrap();
        assert_eq!(json, "\"std-dev\"");
        let back: Statistic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Statistic::StdDev);
    }
}
