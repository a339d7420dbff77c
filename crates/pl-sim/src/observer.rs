//! Simulation observer trait for progress reporting and data collection.

use pl_core::Tick;
use pl_lot::Spot;

/// Why a car left its spot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DepartureCause {
    /// Parked for the maximum allowed duration.
    MaxDuration,
    /// The departure density trial succeeded.
    Random,
}

impl DepartureCause {
    pub fn as_str(self) -> &'static str {
        match self {
            DepartureCause::MaxDuration => "max_duration",
            DepartureCause::Random      => "random",
        }
    }
}

/// Per-tick counters handed to [`LotObserver::on_tick_end`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TickSummary {
    pub tick:      Tick,
    /// Lot occupancy after the departure scan.
    pub occupancy: usize,
    /// Incoming queue length at end of tick.
    pub incoming:  usize,
    /// Outgoing queue length at end of tick.
    pub outgoing:  usize,
    pub arrived:   bool,
    pub parked:    bool,
    /// Cars that left the lot during this tick's scan.
    pub departed:  usize,
    /// Whether a car passed the exit gate this tick.
    pub exited:    bool,
}

/// Callbacks invoked by [`Simulator`][crate::Simulator] while it runs.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Every spot passed in is borrowed from the
/// container that holds the car at that moment, so its timestamp follows that
/// container's meaning.
pub trait LotObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A car arrived and joined the incoming queue.
    fn on_arrival(&mut self, _tick: Tick, _spot: &Spot) {}

    /// The incoming head was admitted; `arrived_at` is when it joined the queue.
    fn on_parked(&mut self, _tick: Tick, _spot: &Spot, _arrived_at: Tick) {}

    /// A car left its spot and joined the outgoing queue.
    fn on_departure(
        &mut self,
        _tick:      Tick,
        _spot:      &Spot,
        _parked_at: Tick,
        _cause:     DepartureCause,
    ) {}

    /// A car passed the exit gate and left the simulation.
    fn on_exit(&mut self, _tick: Tick, _spot: &Spot) {}

    /// Called at the end of each tick, before the clock advances.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`LotObserver`] that does nothing.
pub struct NoopObserver;

impl LotObserver for NoopObserver {}

/// Fan out to two observers, first `A` then `B`.
impl<A: LotObserver, B: LotObserver> LotObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_arrival(&mut self, tick: Tick, spot: &Spot) {
        self.0.on_arrival(tick, spot);
        self.1.on_arrival(tick, spot);
    }

    fn on_parked(&mut self, tick: Tick, spot: &Spot, arrived_at: Tick) {
        self.0.on_parked(tick, spot, arrived_at);
        self.1.on_parked(tick, spot, arrived_at);
    }

    fn on_departure(&mut self, tick: Tick, spot: &Spot, parked_at: Tick, cause: DepartureCause) {
        self.0.on_departure(tick, spot, parked_at, cause);
        self.1.on_departure(tick, spot, parked_at, cause);
    }

    fn on_exit(&mut self, tick: Tick, spot: &Spot) {
        self.0.on_exit(tick, spot);
        self.1.on_exit(tick, spot);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.0.on_tick_end(summary);
        self.1.on_tick_end(summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}
