//! `pl-sim` — the parking-lot simulation engine.
//!
//! # Tick loop
//!
//! ```text
//! for clock in 0..config.total_steps:
//!   ① Arrival    — Bernoulli(arrivals_per_hour / 3600); new car → incoming tail.
//!   ② Admission  — peek incoming head; if the lot admits it, dequeue + park.
//!                  Otherwise it blocks everyone behind it.
//!   ③ Departures — for each parked car: parked_for == max → leave;
//!                  else leave with probability pdf(parked_for).
//!                  Leavers move from the lot to the outgoing tail.
//!   ④ Exit gate  — dequeue at most one car from outgoing.
//!   ⑤ clock += 1
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pl_core::SimConfig;
//! use pl_lot::CapacityLot;
//! use pl_sim::{SimBuilder, StatsObserver};
//!
//! let mut sim = SimBuilder::new(SimConfig::with_rate(20, 86_400), CapacityLot::new(10))
//!     .build()?;
//! let mut stats = StatsObserver::new();
//! sim.simulate(&mut stats)?;
//! println!("{:?}", stats.stats());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{DepartureCause, LotObserver, NoopObserver, TickSummary};
pub use sim::Simulator;
pub use stats::{RunStats, StatsObserver};
