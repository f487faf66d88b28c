use samplab_stats::domain::Domain;

use crate::{
    core::{geometry::Geometry, rng::Seed},
    engine::{
        choreography::{Particle, Phase},
        config::SpeedMode,
        population::PopulationSummary,
        statistic::Statistic,
    },
};

/// Read-only view of the engine for one rendered frame.
///
/// Borrowed from [`crate::Simulation`] via [`crate::Simulation::snapshot`];
/// the renderer draws entirely from this view and never mutates engine
/// state. Gather positions are materialized here because they are computed
/// lazily from the gather's eased progress.
#[derive(Debug, Clone)]
pub struct EngineSnapshot<'a> {
    /// Population bin weights.
    pub population: &'a [u32],
    /// Largest population weight, for bar scaling.
    pub max_population_weight: u32,
    /// Sample tray counts (landed values only).
    pub tray: &'a [u32],
    /// Sampling-distribution counts.
    pub distribution: &'a [u32],
    /// Particles currently falling toward the tray.
    pub particles: &'a [Particle],
    /// The gathered observation falling into the distribution, if any.
    pub settling: Option<Particle>,
    /// Interpolated positions of a gather in progress, empty otherwise.
    pub gather_positions: Vec<(f64, f64)>,
    /// Current animation phase.
    pub phase: Phase,
    /// Statistic being accumulated.
    pub statistic: Statistic,
    /// Threshold for the proportion statistic.
    pub threshold: f64,
    /// Domain the sampling distribution is binned over.
    pub domain: Domain,
    /// Pixel layout shared with the engine.
    pub geometry: Geometry,
    /// Seed of the sampling stream.
    pub seed: Seed,
    /// Animation pacing mode.
    pub speed: SpeedMode,
    /// Size of the current uncommitted sample.
    pub sample_len: usize,
    /// Observations recorded in the sampling distribution.
    pub observations: u64,
    /// Population parameters under the current threshold, `None` while the
    /// population is empty.
    pub population_summary: Option<PopulationSummary>,
    /// Mean and spread of the accumulated distribution, `None` while empty.
    pub distribution_summary: Option<(f64, f64)>,
}
