//! Aggregate run statistics collected through the observer hooks.

use pl_core::Tick;
use pl_lot::Spot;

use crate::{DepartureCause, LotObserver, TickSummary};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks:              u64,
    pub arrivals:           u64,
    pub admissions:         u64,
    pub departures:         u64,
    pub forced_departures:  u64,
    pub exits:              u64,
    pub peak_occupancy:     usize,
    pub peak_incoming:      usize,
    pub peak_outgoing:      usize,
    /// Sum over admitted cars of (park tick − arrival tick).
    pub total_admission_wait: u64,
    pub max_admission_wait:   u64,
}

impl RunStats {
    /// Mean ticks an admitted car spent in the incoming queue.
    pub fn mean_admission_wait(&self) -> f64 {
        if self.admissions == 0 {
            return 0.0;
        }
        self.total_admission_wait as f64 / self.admissions as f64
    }
}

/// Observer that accumulates a [`RunStats`].
#[derive(Default)]
pub struct StatsObserver {
    stats: RunStats,
}

impl StatsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn into_stats(self) -> RunStats {
        self.stats
    }
}

impl LotObserver for StatsObserver {
    fn on_arrival(&mut self, _tick: Tick, _spot: &Spot) {
        self.stats.arrivals += 1;
    }

    fn on_parked(&mut self, tick: Tick, _spot: &Spot, arrived_at: Tick) {
        let wait = tick.since(arrived_at);
        self.stats.admissions += 1;
        self.stats.total_admission_wait += wait;
        self.stats.max_admission_wait = self.stats.max_admission_wait.max(wait);
    }

    fn on_departure(&mut self, _tick: Tick, _spot: &Spot, _parked_at: Tick, cause: DepartureCause) {
        self.stats.departures += 1;
        if cause == DepartureCause::MaxDuration {
            self.stats.forced_departures += 1;
        }
    }

    fn on_exit(&mut self, _tick: Tick, _spot: &Spot) {
        self.stats.exits += 1;
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        let s = &mut self.stats;
        s.ticks += 1;
        s.peak_occupancy = s.peak_occupancy.max(summary.occupancy);
        s.peak_incoming = s.peak_incoming.max(summary.incoming);
        s.peak_outgoing = s.peak_outgoing.max(summary.outgoing);
    }
}
