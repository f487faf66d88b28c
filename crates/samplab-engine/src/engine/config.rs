use serde::{Deserialize, Serialize};

use crate::{
    core::{geometry::Geometry, rng::Seed},
    engine::{population::GeneratorShape, statistic::Statistic},
};

/// Animation pacing mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SpeedMode {
    /// Normal particle acceleration.
    #[default]
    #[display("normal")]
    Normal,
    /// Double particle acceleration.
    #[display("fast")]
    Fast,
}

impl SpeedMode {
    /// Multiplier applied to the particle acceleration.
    #[must_use]
    pub fn acceleration_factor(self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::Fast => 2.0,
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Fast,
            Self::Fast => Self::Normal,
        }
    }
}

/// Engine construction parameters.
///
/// Owned by the caller and handed to [`crate::Simulation::new`]; there is no
/// hidden global configuration. Durations are in seconds, distances in the
/// pixel space described by [`Geometry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of population (and sample tray) bins over `[0, 1)`.
    pub population_bins: usize,
    /// Number of sampling-distribution bins over the statistic's domain.
    pub distribution_bins: usize,
    /// Upper bound for a single population bin weight.
    pub max_bin_weight: u32,
    /// Seed for the deterministic sampling stream.
    pub seed: Seed,
    /// Statistic accumulated in the sampling distribution.
    pub statistic: Statistic,
    /// Shape applied to the population at construction.
    pub generator: GeneratorShape,
    /// Threshold for the proportion statistic.
    pub threshold: f64,
    /// Animation pacing mode.
    pub speed: SpeedMode,
    /// Emission plan window: time over which a sample's particles are
    /// released.
    pub emission_duration: f64,
    /// Duration of the gather convergence animation.
    pub gather_duration: f64,
    /// Pause between a completed gather and the next queued emission.
    pub post_gather_delay: f64,
    /// Constant downward particle acceleration, px/s^2.
    pub gravity: f64,
    /// Pixel layout shared with the renderer.
    pub geometry: Geometry,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_bins: 33,
            distribution_bins: 33,
            max_bin_weight: 10_000,
            seed: Seed(1),
            statistic: Statistic::Mean,
            generator: GeneratorShape::Normal,
            threshold: 0.5,
            speed: SpeedMode::Normal,
            emission_duration: 0.8,
            gather_duration: 0.5,
            post_gather_delay: 0.25,
            gravity: 2400.0,
            geometry: Geometry::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_mode_doubles_acceleration() {
        assert_eq!(SpeedMode::Normal.acceleration_factor(), 1.0);
        assert_eq!(SpeedMode::Fast.acceleration_factor(), 2.0);
        assert_eq!(SpeedMode::Normal.toggled(), SpeedMode::Fast);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = EngineConfig {
            seed: Seed(1234),
            statistic: Statistic::Proportion,
            generator: GeneratorShape::Skewed,
            ..EngineConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
