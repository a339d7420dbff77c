//! Simulation-wide constants and the run configuration.

use crate::{CoreError, CoreResult, Tick};

/// Length of generated car plates.
pub const PLATE_NUM_LENGTH: usize = 3;

/// Number of seconds (ticks) in one simulated hour.
pub const SECONDS_PER_HOUR: u64 = 3_600;

/// Longest a car may stay parked before it is forced out.
pub const MAX_PARKING_DURATION: u64 = 8 * SECONDS_PER_HOUR;

/// Default length of a run: one simulated day.
pub const SIMULATION_DURATION: u64 = 24 * SECONDS_PER_HOUR;

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Construction-time parameters for one simulation run.
///
/// The lot and the random source are supplied separately to the builder;
/// this struct only carries plain values so it can be loaded from JSON by
/// the application crate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Mean number of cars arriving per simulated hour.  At most
    /// [`SECONDS_PER_HOUR`], since at most one car arrives per tick.
    pub arrivals_per_hour: u32,

    /// Total ticks to simulate.  The run ends when `clock == total_steps`.
    pub total_steps: u64,

    /// A car parked this many ticks departs unconditionally.  Also the upper
    /// bound of the triangular departure density.
    pub max_parking_duration: u64,

    /// Number of characters in a generated plate.
    pub plate_len: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Write a tick summary every N ticks.  0 disables periodic summaries.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arrivals_per_hour:     3,
            total_steps:           SIMULATION_DURATION,
            max_parking_duration:  MAX_PARKING_DURATION,
            plate_len:             PLATE_NUM_LENGTH,
            seed:                  42,
            output_interval_ticks: 60,
        }
    }
}

impl SimConfig {
    /// Default configuration with the given arrival rate and step count.
    pub fn with_rate(arrivals_per_hour: u32, total_steps: u64) -> Self {
        Self {
            arrivals_per_hour,
            total_steps,
            ..Self::default()
        }
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_steps)
    }

    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> CoreResult<()> {
        if u64::from(self.arrivals_per_hour) > SECONDS_PER_HOUR {
            return Err(CoreError::Config(format!(
                "arrivals_per_hour {} exceeds one arrival per tick ({SECONDS_PER_HOUR})",
                self.arrivals_per_hour
            )));
        }
        if self.max_parking_duration < 2 {
            return Err(CoreError::Config(format!(
                "max_parking_duration must be at least 2 ticks, got {}",
                self.max_parking_duration
            )));
        }
        if self.plate_len == 0 {
            return Err(CoreError::Config("plate_len must be at least 1".into()));
        }
        Ok(())
    }
}
