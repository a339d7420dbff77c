//! Fluent builder for constructing a [`Simulator`].

use pl_core::{
    FifoQueue, RandomSource, Rational, SECONDS_PER_HOUR, SimClock, SimConfig, SimRng,
    TriangularDistribution,
};
use pl_lot::ParkingLot;

use crate::{SimError, SimResult, Simulator};

/// Fluent builder for [`Simulator<L, G>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — arrival rate, step count, max parking duration, seed, …
/// - `L: ParkingLot` — the lot being simulated (e.g. [`pl_lot::CapacityLot`])
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                       |
/// |-----------------------|-------------------------------|
/// | `.random_source(g)`   | `SimRng::new(config.seed)`    |
///
/// # Example
///
/// ```rust,ignore
/// let config = SimConfig::with_rate(20, SIMULATION_DURATION);
/// let mut sim = SimBuilder::new(config, CapacityLot::new(10)).build()?;
/// sim.simulate(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<L: ParkingLot, G: RandomSource = SimRng> {
    config: SimConfig,
    lot:    L,
    rng:    G,
}

impl<L: ParkingLot> SimBuilder<L, SimRng> {
    /// Create a builder drawing randomness from a `SimRng` seeded with
    /// `config.seed`.
    pub fn new(config: SimConfig, lot: L) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, lot, rng }
    }
}

impl<L: ParkingLot, G: RandomSource> SimBuilder<L, G> {
    /// Replace the random source, e.g. with a scripted one in tests.
    pub fn random_source<H: RandomSource>(self, rng: H) -> SimBuilder<L, H> {
        SimBuilder {
            config: self.config,
            lot:    self.lot,
            rng,
        }
    }

    /// Validate the configuration, derive the probability model, and return
    /// a ready-to-run [`Simulator`].
    pub fn build(self) -> SimResult<Simulator<L, G>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let arrival_probability =
            Rational::new(u64::from(self.config.arrivals_per_hour), SECONDS_PER_HOUR)?;
        let departure_pdf = TriangularDistribution::symmetric(self.config.max_parking_duration)?;

        Ok(Simulator {
            clock:     SimClock::new(),
            config:    self.config,
            arrival_probability,
            departure_pdf,
            lot:       self.lot,
            rng:       self.rng,
            incoming:  FifoQueue::new(),
            outgoing:  FifoQueue::new(),
            simulated: false,
        })
    }
}
