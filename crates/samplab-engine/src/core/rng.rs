use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Seed for the deterministic sampling stream.
///
/// The same seed always produces the same draw sequence, across runs and
/// platforms, which enables:
///
/// - Reproducible classroom scenarios
/// - Golden-value regression tests
/// - Comparing two engine instances bit for bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub u32);

/// Deterministic stream of values in `[0, 1)`.
///
/// Backed by a PCG-32 generator: the state transition is pure integer
/// mixing, so the stream is identical on every platform. The conversion to
/// `f64` is a fixed bit-level mapping of the generator output and consumes
/// exactly one generator step per value.
///
/// # Example
///
/// ```
/// use samplab_engine::{Seed, UnitRng};
///
/// let mut a = UnitRng::with_seed(Seed(42));
/// let mut b = UnitRng::with_seed(Seed(42));
/// assert_eq!(a.next_unit(), b.next_unit());
/// ```
#[derive(Debug, Clone)]
pub struct UnitRng {
    rng: Pcg32,
}

impl UnitRng {
    /// Creates a stream from a seed, discarding any previous state.
    #[must_use]
    pub fn with_seed(seed: Seed) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(u64::from(seed.0)),
        }
    }

    /// Returns the next value in `[0, 1)`, consuming exactly one draw.
    pub fn next_unit(&mut self) -> f64 {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = UnitRng::with_seed(Seed(1234));
        let mut b = UnitRng::with_seed(Seed(1234));
        for _ in 0..100 {
            assert_eq!(a.next_unit().to_bits(), b.next_unit().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = UnitRng::with_seed(Seed(1));
        let mut b = UnitRng::with_seed(Seed(2));
        let diverged = (0..10).any(|_| a.next_unit() != b.next_unit());
        assert!(diverged);
    }

    #[test]
    fn test_values_are_in_unit_interval() {
        let mut rng = UnitRng::with_seed(Seed(7));
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v), "value {v} outside [0, 1)");
        }
    }

    #[test]
    fn test_reseeding_restarts_the_stream() {
        let mut rng = UnitRng::with_seed(Seed(9));
        let first = rng.next_unit();
        for _ in 0..50 {
            rng.next_unit();
        }
        rng = UnitRng::with_seed(Seed(9));
        assert_eq!(rng.next_unit().to_bits(), first.to_bits());
    }

    #[test]
    fn test_seed_serializes_as_plain_number() {
        let seed = Seed(1234);
        assert_eq!(serde_json::to_string(&seed).unwrap(), "1234");
        let back: Seed = serde_json::from_str("1234").unwrap();
        assert_eq!(back, seed);
    }
}
