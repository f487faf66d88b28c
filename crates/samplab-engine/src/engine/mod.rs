//! Simulation logic and state management.
//!
//! This module provides the high-level simulation that orchestrates the core
//! data structures into the Central Limit Theorem demonstration:
//!
//! - [`PopulationModel`] - editable population value distribution
//! - [`Sampler`] - deterministic weighted draws from the population
//! - [`Statistic`] - the point statistic computed per sample
//! - [`SamplingDistribution`] - accumulated histogram of sample statistics
//! - [`Simulation`] - the tick-driven engine facade and animation scheduler
//! - [`EngineSnapshot`] - read-only per-frame view for the renderer
//!
//! # Simulation Flow
//!
//! A typical run progresses as follows:
//!
//! 1. Construct a [`Simulation`] from an [`EngineConfig`]
//! 2. Draw a sample: particles fall from the population into the sample tray
//! 3. Gather: the tray converges into one statistic observation which drops
//!    into the sampling distribution
//! 4. Repeat (animated, or synchronously in turbo mode)
//!
//! The simulation is single-threaded and cooperatively scheduled: all state
//! changes happen inside [`Simulation::tick`] or inside direct mutator calls
//! triggered by UI events.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use samplab_engine::{EngineConfig, Simulation};
//!
//! let mut sim = Simulation::new(EngineConfig::default());
//! sim.draw_sample(10);
//! while sim.is_animating() {
//!     sim.tick(Duration::from_millis(16));
//! }
//! assert_eq!(sim.tray().total(), 10);
//! ```

pub use self::{
    accumulator::*, choreography::*, config::*, population::*, sampler::*, simulation::*,
    snapshot::*, statistic::*,
};

mod accumulator;
mod choreography;
mod config;
mod population;
mod sampler;
mod simulation;
mod snapshot;
mod statistic;
