//! Random source used by the engine.
//!
//! The engine only needs two things from randomness: Bernoulli trials on an
//! exact [`Rational`] and plate strings.  Both sit behind [`RandomSource`] so
//! tests can script outcomes; [`SimRng`] is the seeded production source.
//!
//! # Determinism
//!
//! `SimRng` wraps `SmallRng` seeded from a `u64`.  A run is fully determined
//! by its seed and configuration: the engine draws from a single source in a
//! fixed order every tick.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Rational;

/// Characters used for generated plates.
const PLATE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// The randomness the simulation engine depends on.
pub trait RandomSource {
    /// Bernoulli trial: `true` with probability `probability`.
    ///
    /// Zero is never true and anything ≥ 1 is always true; implementations
    /// must not consume randomness in either case.
    fn event_occurred(&mut self, probability: Rational) -> bool;

    /// A random string of exactly `len` characters.  Collisions are allowed.
    fn random_string(&mut self, len: usize) -> String;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded simulation RNG.
///
/// Used only in single-threaded contexts: one run owns one `SimRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    fn event_occurred(&mut self, probability: Rational) -> bool {
        if probability.is_zero() {
            return false;
        }
        if probability.is_certain() {
            return true;
        }
        self.0.gen_range(0..probability.denominator()) < probability.numerator()
    }

    fn random_string(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| PLATE_ALPHABET[self.0.gen_range(0..PLATE_ALPHABET.len())] as char)
            .collect()
    }
}
