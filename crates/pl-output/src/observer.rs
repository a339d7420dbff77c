//! `SimOutputObserver<W>`: bridges `LotObserver` to an `OutputWriter`.

use log::warn;
use pl_core::{SimConfig, Tick};
use pl_lot::Spot;
use pl_sim::{DepartureCause, LotObserver, TickSummary};

use crate::row::{CarEventKind, CarEventRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`LotObserver`] that writes car events and periodic tick summaries to
/// any [`OutputWriter`] backend.
///
/// Car events are buffered during a tick and written as one batch at the end
/// of it.  Tick summaries are written every `config.output_interval_ticks`
/// ticks (tick 0 included); an interval of 0 disables them.
///
/// Errors from the writer are stored internally because `LotObserver` methods
/// have no return value.  After `sim.simulate()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:          W,
    output_interval: u64,
    pending:         Vec<CarEventRow>,
    last_error:      Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            output_interval: config.output_interval_ticks,
            pending:         Vec::new(),
            last_error:      None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn push(&mut self, tick: Tick, spot: &Spot, kind: CarEventKind, waited: u64) {
        self.pending.push(CarEventRow {
            tick: tick.0,
            plate: spot.car().plate().to_string(),
            kind,
            waited,
        });
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("output writer failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> LotObserver for SimOutputObserver<W> {
    fn on_arrival(&mut self, tick: Tick, spot: &Spot) {
        self.push(tick, spot, CarEventKind::Arrive, 0);
    }

    fn on_parked(&mut self, tick: Tick, spot: &Spot, arrived_at: Tick) {
        self.push(tick, spot, CarEventKind::Park, tick.since(arrived_at));
    }

    fn on_departure(&mut self, tick: Tick, spot: &Spot, parked_at: Tick, cause: DepartureCause) {
        let kind = match cause {
            DepartureCause::MaxDuration => CarEventKind::DepartForced,
            DepartureCause::Random      => CarEventKind::DepartRandom,
        };
        self.push(tick, spot, kind, tick.since(parked_at));
    }

    fn on_exit(&mut self, tick: Tick, spot: &Spot) {
        self.push(tick, spot, CarEventKind::Exit, tick.since(spot.timestamp()));
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        if !self.pending.is_empty() {
            let rows = std::mem::take(&mut self.pending);
            let result = self.writer.write_car_events(&rows);
            self.store_err(result);
        }

        if self.output_interval > 0 && summary.tick.0.is_multiple_of(self.output_interval) {
            let row = TickSummaryRow {
                tick:      summary.tick.0,
                occupancy: summary.occupancy as u64,
                incoming:  summary.incoming as u64,
                outgoing:  summary.outgoing as u64,
                departed:  summary.departed as u64,
            };
            let result = self.writer.write_tick_summary(&row);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
