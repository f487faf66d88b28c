use crate::engine::sampler::Drawn;

/// Animation phase of the simulation state machine.
///
/// At most one emission plan and one gather operation exist at any time;
/// requests arriving while a phase is active are queued by the simulation,
/// never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    /// Nothing animating; queued requests start from here.
    Idle,
    /// An emission plan is releasing particles into flight.
    Emitting,
    /// All particles released, some still falling toward the tray.
    Settling,
    /// Tray values converging toward the gather point.
    Gathering,
    /// The gathered observation falling into the sampling distribution.
    GatherSettling,
}

/// A value in flight between trays.
///
/// Created by an emission plan (falling into the sample tray) or by a
/// completed gather (falling into the sampling distribution). Destroyed
/// exactly once, on landing, where it converts into exactly one histogram
/// increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Destination bin index.
    pub bin: usize,
    /// Value carried by this particle.
    pub value: f64,
    /// Horizontal position (constant while falling).
    pub x: f64,
    /// Current vertical position.
    pub y: f64,
    /// Current downward velocity.
    pub velocity: f64,
    /// Vertical position of the landing spot.
    pub target_y: f64,
}

impl Particle {
    /// Creates a particle at rest at its source position.
    #[must_use]
    pub fn new(bin: usize, value: f64, x: f64, y: f64, target_y: f64) -> Self {
        Self {
            bin,
            value,
            x,
            y,
            velocity: 0.0,
            target_y,
        }
    }

    /// Advances the particle by `dt` seconds under constant `acceleration`
    /// and reports whether it has landed.
    ///
    /// The position is clamped at the target so the particle moves
    /// monotonically toward it and never overshoots.
    pub fn step(&mut self, dt: f64, acceleration: f64) -> bool {
        self.velocity += acceleration * dt;
        self.y = (self.y + self.velocity * dt).min(self.target_y);
        self.y >= self.target_y
    }
}

/// Time-windowed release schedule for one sample's particles.
///
/// Holds the sample's ordered bin assignments and releases them into flight
/// proportionally to the elapsed fraction of the window. Once the window
/// closes, everything still pending is released at once.
#[derive(Debug, Clone)]
pub struct EmissionPlan {
    assignments: Vec<Drawn>,
    emitted: usize,
    elapsed: f64,
    duration: f64,
}

impl EmissionPlan {
    /// Creates a plan releasing `assignments` over `duration` seconds.
    #[must_use]
    pub fn new(assignments: Vec<Drawn>, duration: f64) -> Self {
        Self {
            assignments,
            emitted: 0,
            elapsed: 0.0,
            duration,
        }
    }

    /// Total number of particles in the plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.assignments.len()
    }

    /// Number of particles released so far.
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Whether every particle has been released.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.emitted >= self.assignments.len()
    }

    /// Advances the plan clock by `dt` and returns the assignments due for
    /// release this tick: `floor(fraction * total) - emitted`, and all
    /// remaining ones once the fraction reaches 1.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[expect(clippy::cast_precision_loss)]
    pub fn advance(&mut self, dt: f64) -> &[Drawn] {
        self.elapsed += dt;
        let fraction = if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let due = if fraction >= 1.0 {
            self.total()
        } else {
            ((fraction * self.total() as f64).floor() as usize).min(self.total())
        };
        let released = &self.assignments[self.emitted..due];
        self.emitted = due;
        released
    }
}

/// Transient aggregation of the tray into one statistic observation.
///
/// Snapshots every tray value's resting position and moves all of them
/// toward one shared convergence point with an eased, non-physical
/// interpolation over a fixed duration.
#[derive(Debug, Clone)]
pub struct GatherOperation {
    starts: Vec<(f64, f64)>,
    target: (f64, f64),
    elapsed: f64,
    duration: f64,
    outcome: Option<f64>,
}

impl GatherOperation {
    /// Creates a gather from the snapshotted `starts` toward `target`.
    ///
    /// `outcome` is the statistic computed over the full sample at gather
    /// start; `None` means the statistic was undefined and no observation
    /// will be recorded when the gather completes.
    #[must_use]
    pub fn new(
        starts: Vec<(f64, f64)>,
        target: (f64, f64),
        duration: f64,
        outcome: Option<f64>,
    ) -> Self {
        Self {
            starts,
            target,
            elapsed: 0.0,
            duration,
            outcome,
        }
    }

    /// The statistic value this gather resolves to, if defined.
    #[must_use]
    pub fn outcome(&self) -> Option<f64> {
        self.outcome
    }

    /// The shared convergence point.
    #[must_use]
    pub fn target(&self) -> (f64, f64) {
        self.target
    }

    /// Advances the gather clock by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
    }

    /// Whether the interpolation has reached 1.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Eased interpolation progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        smoothstep((self.elapsed / self.duration).clamp(0.0, 1.0))
    }

    /// Current interpolated positions of the gathered values.
    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let t = self.progress();
        let (tx, ty) = self.target;
        self.starts
            .iter()
            .map(move |&(x, y)| (x + (tx - x) * t, y + (ty - y) * t))
    }
}

/// Smoothstep easing: zero slope at both ends, monotone in between.
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}
