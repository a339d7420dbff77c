//! `pl-core` — foundational types for the parking-lot simulator.
//!
//! This crate is a dependency of every other `pl-*` crate.  It has no `pl-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig` and the simulation-wide constants         |
//! | [`probability`] | `Rational`, `TriangularDistribution`                  |
//! | [`rng`]         | `RandomSource` trait, `SimRng` (seeded `SmallRng`)    |
//! | [`queue`]       | `FifoQueue<T>`                                        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Tick` and `SimConfig`.  |

pub mod config;
pub mod error;
pub mod probability;
pub mod queue;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    MAX_PARKING_DURATION, PLATE_NUM_LENGTH, SECONDS_PER_HOUR, SIMULATION_DURATION, SimConfig,
};
pub use error::{CoreError, CoreResult};
pub use probability::{Rational, TriangularDistribution};
pub use queue::FifoQueue;
pub use rng::{RandomSource, SimRng};
pub use time::{SimClock, Tick};
