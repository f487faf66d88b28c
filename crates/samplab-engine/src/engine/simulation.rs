use std::{collections::VecDeque, time::Duration};

use crate::{
    core::{histogram::BinCounts, rng::Seed},
    engine::{
        accumulator::SamplingDistribution,
        choreography::{EmissionPlan, GatherOperation, Particle, Phase},
        config::{EngineConfig, SpeedMode},
        population::{GeneratorShape, PopulationModel},
        sampler::{Drawn, Sampler},
        snapshot::EngineSnapshot,
        statistic::Statistic,
    },
};

/// A queued animation request.
///
/// Requests arriving while an emission or gather is active are queued in
/// order, never merged: at most one emission plan and one gather operation
/// run at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    Draw(usize),
    Gather,
}

/// The tick-driven simulation engine.
///
/// Owns the population, sample tray, and sampling-distribution histograms
/// plus the animation state machine that moves values between them. All
/// mutation happens inside [`Self::tick`] or inside the synchronous mutators
/// called from UI events; there is no hidden global state and no internal
/// threading.
///
/// Rendering is decoupled through [`Self::snapshot`] and the dirty flag:
/// the renderer repaints only when [`Self::take_dirty`] reports a change or
/// an animation is active.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: EngineConfig,
    population: PopulationModel,
    sampler: Sampler,
    tray: BinCounts,
    sample: Vec<Drawn>,
    distribution: SamplingDistribution,
    phase: Phase,
    emission: Option<EmissionPlan>,
    in_flight: Vec<Particle>,
    gather: Option<GatherOperation>,
    settling: Option<Particle>,
    pending: VecDeque<Request>,
    delay: f64,
    dirty: bool,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Simulation {
    /// Creates an engine from a configuration, applying the configured
    /// generator shape to the population.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut population = PopulationModel::new(config.population_bins, config.max_bin_weight);
        population.apply_generator(config.generator);
        let sampler = Sampler::with_seed(config.seed);
        let tray = BinCounts::new(config.population_bins);
        let distribution =
            SamplingDistribution::new(config.distribution_bins, config.statistic.domain());
        Self {
            config,
            population,
            sampler,
            tray,
            sample: Vec::new(),
            distribution,
            phase: Phase::Idle,
            emission: None,
            in_flight: Vec::new(),
            gather: None,
            settling: None,
            pending: VecDeque::new(),
            delay: 0.0,
            dirty: true,
        }
    }

    /// The configuration this engine was built from (kept current as
    /// mutators change statistic, threshold, seed, and speed).
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The population model.
    #[must_use]
    pub fn population(&self) -> &PopulationModel {
        &self.population
    }

    /// The sample tray histogram (values that have landed).
    #[must_use]
    pub fn tray(&self) -> &BinCounts {
        &self.tray
    }

    /// The current uncommitted sample, in draw order.
    #[must_use]
    pub fn current_sample(&self) -> &[Drawn] {
        &self.sample
    }

    /// The accumulated sampling distribution.
    #[must_use]
    pub fn distribution(&self) -> &SamplingDistribution {
        &self.distribution
    }

    /// Current animation phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether any animation, queued request, or inter-phase delay is
    /// outstanding. While true, the renderer should keep ticking.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.phase.is_idle() || !self.pending.is_empty() || self.delay > 0.0
    }

    /// Returns and clears the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Read-only view of the engine state for one rendered frame.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot<'_> {
        EngineSnapshot {
            population: self.population.weights().counts(),
            max_population_weight: self.population.weights().max(),
            tray: self.tray.counts(),
            distribution: self.distribution.counts().counts(),
            particles: &self.in_flight,
            settling: self.settling,
            gather_positions: self
                .gather
                .as_ref()
                .map(|gather| gather.positions().collect())
                .unwrap_or_default(),
            phase: self.phase,
            statistic: self.config.statistic,
            threshold: self.config.threshold,
            domain: self.distribution.domain(),
            geometry: self.config.geometry,
            seed: self.config.seed,
            speed: self.config.speed,
            sample_len: self.sample.len(),
            observations: self.distribution.total(),
            population_summary: self.population.summary(self.config.threshold),
            distribution_summary: self.distribution.mean_and_spread(),
        }
    }

    /// Replaces the population weights with a generator shape.
    pub fn set_generator(&mut self, shape: GeneratorShape) {
        self.population.apply_generator(shape);
        self.config.generator = shape;
        self.dirty = true;
    }

    /// Adjusts one population bin weight by `delta`, clamped into bounds.
    pub fn modify_population(&mut self, bin: usize, delta: i32) {
        self.population.modify(bin, delta);
        self.dirty = true;
    }

    /// Switches the accumulated statistic.
    ///
    /// The sampling distribution is reset — its domain and meaning change
    /// with the statistic — and any in-progress animation is aborted along
    /// with the uncommitted sample.
    pub fn set_statistic(&mut self, statistic: Statistic) {
        if statistic == self.config.statistic {
            return;
        }
        self.abort_animations();
        self.config.statistic = statistic;
        self.distribution.reset_domain(statistic.domain());
        self.dirty = true;
    }

    /// Sets the threshold for the proportion statistic. Accumulated
    /// proportion observations are dropped since they were computed against
    /// the old threshold.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.config.threshold = threshold;
        if self.config.statistic == Statistic::Proportion {
            self.distribution.clear();
        }
        self.dirty = true;
    }

    /// Reseeds the sampling stream, discarding its previous state.
    pub fn set_seed(&mut self, seed: Seed) {
        self.sampler.reseed(seed);
        self.config.seed = seed;
    }

    /// Sets the animation pacing mode.
    pub fn set_speed(&mut self, speed: SpeedMode) {
        self.config.speed = speed;
    }

    /// Requests an animated draw of `n` values.
    ///
    /// If the tray holds an uncommitted sample, a full gather cycle runs
    /// first (auto-gather-before-redraw) and the draw starts after the
    /// configured delay.
    pub fn draw_sample(&mut self, n: usize) {
        self.pending.push_back(Request::Draw(n));
        self.dirty = true;
        self.pump();
    }

    /// Requests a gather of the current tray into the sampling
    /// distribution. A no-op when the tray is empty.
    pub fn gather(&mut self) {
        self.pending.push_back(Request::Gather);
        self.dirty = true;
        self.pump();
    }

    /// Turbo mode: synchronously repeats draw → statistic → record `count`
    /// times with no animation and no particles. Undefined statistics are
    /// filtered, never recorded.
    pub fn repeat(&mut self, n: usize, count: usize) {
        for _ in 0..count {
            let sample = self.sampler.draw(n, &self.population);
            let values = sample.iter().map(|d| d.value).collect::<Vec<_>>();
            if let Some(value) = self.config.statistic.compute(&values, self.config.threshold) {
                self.distribution.record(value);
            }
        }
        self.dirty = true;
    }

    /// Clears the sample tray, aborting any in-flight animation and queued
    /// requests without committing partial histogram increments.
    pub fn clear_tray(&mut self) {
        self.abort_animations();
        self.pending.clear();
        self.delay = 0.0;
        self.dirty = true;
    }

    /// Full reset: clears the sampling distribution and the tray, aborting
    /// everything in flight.
    pub fn reset(&mut self) {
        self.distribution.clear();
        self.clear_tray();
    }

    /// Advances the state machine by `dt` of wall-clock time.
    ///
    /// This is the only place particles move and the only place queued
    /// requests are started (besides the synchronous request calls
    /// themselves when the engine is idle).
    pub fn tick(&mut self, dt: Duration) {
        let dt = dt.as_secs_f64();
        if dt <= 0.0 {
            return;
        }
        if self.is_animating() {
            self.dirty = true;
        }
        if self.delay > 0.0 {
            self.delay = (self.delay - dt).max(0.0);
        }

        match self.phase {
            Phase::Idle => {}
            Phase::Emitting => {
                if let Some(mut plan) = self.emission.take() {
                    let released = plan.advance(dt).to_vec();
                    for drawn in released {
                        self.spawn_tray_particle(drawn);
                    }
                    if plan.is_complete() {
                        self.phase = Phase::Settling;
                    } else {
                        self.emission = Some(plan);
                    }
                } else {
                    self.phase = Phase::Settling;
                }
                self.step_in_flight(dt);
            }
            Phase::Settling => self.step_in_flight(dt),
            Phase::Gathering => {
                if let Some(gather) = self.gather.as_mut() {
                    gather.advance(dt);
                    if gather.is_complete() {
                        self.finish_gather();
                    }
                } else {
                    self.phase = Phase::Idle;
                }
            }
            Phase::GatherSettling => self.step_settling(dt),
        }

        if self.phase.is_settling() && self.in_flight.is_empty() {
            self.phase = Phase::Idle;
        }
        self.pump();
    }

    fn acceleration(&self) -> f64 {
        self.config.gravity * self.config.speed.acceleration_factor()
    }

    /// Whether the tray still holds an uncommitted sample.
    fn tray_occupied(&self) -> bool {
        self.tray.total() > 0 || !self.sample.is_empty() || !self.in_flight.is_empty()
    }

    /// Starts the next queued request if the engine is idle and the
    /// post-gather delay has elapsed.
    fn pump(&mut self) {
        if !self.phase.is_idle() || self.delay > 0.0 {
            return;
        }
        let Some(&request) = self.pending.front() else {
            return;
        };
        match request {
            Request::Draw(n) => {
                if self.tray_occupied() {
                    // Auto-gather before redraw; the draw stays queued and
                    // starts after the gather cycle and delay complete.
                    self.begin_gather();
                } else {
                    self.pending.pop_front();
                    self.begin_emission(n);
                }
            }
            Request::Gather => {
                self.pending.pop_front();
                if self.tray_occupied() {
                    self.begin_gather();
                }
            }
        }
    }

    fn begin_emission(&mut self, n: usize) {
        let sample = self.sampler.draw(n, &self.population);
        self.emission = Some(EmissionPlan::new(
            sample.clone(),
            self.config.emission_duration,
        ));
        self.sample = sample;
        self.phase = Phase::Emitting;
        self.dirty = true;
    }

    fn begin_gather(&mut self) {
        let geometry = self.config.geometry;
        let bins = self.tray.bins();
        let mut starts = Vec::with_capacity(self.sample.len());
        for (bin, &count) in self.tray.counts().iter().enumerate() {
            for level in 0..count {
                starts.push((
                    geometry.bin_center_x(bin, bins),
                    geometry.rest_y(geometry.tray_base(), level),
                ));
            }
        }
        let values = self.sample.iter().map(|d| d.value).collect::<Vec<_>>();
        let outcome = self.config.statistic.compute(&values, self.config.threshold);
        self.gather = Some(GatherOperation::new(
            starts,
            geometry.convergence_point(),
            self.config.gather_duration,
            outcome,
        ));
        self.phase = Phase::Gathering;
        self.dirty = true;
    }

    /// Completes a gather: clears the tray and, when the statistic was
    /// defined, drops one particle from the convergence point into the
    /// resolved sampling-distribution bin. The accumulator increment only
    /// happens when that particle lands.
    fn finish_gather(&mut self) {
        let Some(gather) = self.gather.take() else {
            self.phase = Phase::Idle;
            return;
        };
        self.tray.clear();
        self.sample.clear();
        if let Some(value) = gather.outcome() {
            let geometry = self.config.geometry;
            let bins = self.distribution.counts().bins();
            let bin = self.distribution.bin_of(value);
            let (_, start_y) = gather.target();
            let target_y =
                geometry.rest_y(geometry.distribution_base(), self.distribution.counts().count(bin));
            self.settling = Some(Particle::new(
                bin,
                value,
                geometry.bin_center_x(bin, bins),
                start_y,
                target_y,
            ));
            self.phase = Phase::GatherSettling;
        } else {
            // Undefined statistic: nothing to record, the gather only
            // cleared the tray.
            self.phase = Phase::Idle;
            self.delay = self.config.post_gather_delay;
        }
    }

    fn spawn_tray_particle(&mut self, drawn: Drawn) {
        let geometry = self.config.geometry;
        let bins = self.population.bins();
        let bar = geometry.scaled_bar_height(
            self.population.weights().count(drawn.bin),
            self.population.weights().max(),
        );
        let start_y = geometry.population_base() - bar;
        // Reserve a stack slot above both landed values and particles
        // already falling toward this bin so stacks never visually overlap.
        #[expect(clippy::cast_possible_truncation)]
        let inbound = self
            .in_flight
            .iter()
            .filter(|p| p.bin == drawn.bin)
            .count() as u32;
        let level = self.tray.count(drawn.bin) + inbound;
        let target_y = geometry.rest_y(geometry.tray_base(), level);
        self.in_flight.push(Particle::new(
            drawn.bin,
            drawn.value,
            geometry.bin_center_x(drawn.bin, bins),
            start_y,
            target_y,
        ));
    }

    fn step_in_flight(&mut self, dt: f64) {
        let acceleration = self.acceleration();
        let mut landed = Vec::new();
        self.in_flight.retain_mut(|particle| {
            if particle.step(dt, acceleration) {
                landed.push(particle.bin);
                false
            } else {
                true
            }
        });
        for bin in landed {
            self.tray.increment(bin);
        }
    }

    fn step_settling(&mut self, dt: f64) {
        let acceleration = self.acceleration();
        if let Some(mut particle) = self.settling.take() {
            if particle.step(dt, acceleration) {
                self.distribution.record(particle.value);
                self.phase = Phase::Idle;
                self.delay = self.config.post_gather_delay;
            } else {
                self.settling = Some(particle);
            }
        } else {
            self.phase = Phase::Idle;
        }
    }

    fn abort_animations(&mut self) {
        self.tray.clear();
        self.sample.clear();
        self.in_flight.clear();
        self.emission = None;
        self.gather = None;
        self.settling = None;
        self.phase = Phase::Idle;
    }
}
