//! The `Simulator` struct and its per-second tick loop.

use log::{debug, info, trace};

use pl_core::{
    FifoQueue, RandomSource, Rational, SimClock, SimConfig, Tick, TriangularDistribution,
};
use pl_lot::{Car, ParkingLot, Plate, Spot};

use crate::{DepartureCause, LotObserver, SimError, SimResult, TickSummary};

// ── Simulator ─────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// `Simulator<L, G>` owns the clock, both queues, the lot and the random
/// source, and drives the five-phase tick loop:
///
/// 1. **Arrival**: one Bernoulli trial on the arrival probability; a new car
///    joins the tail of the incoming queue.
/// 2. **Admission**: the incoming head (and only the head) is offered to the
///    lot.  If refused it stays at the head; nobody overtakes it.
/// 3. **Departure scan**: every parked car is visited once.  Cars parked for
///    the maximum duration always leave; others leave on a trial against the
///    triangular departure density.  Leavers move to the outgoing queue.
/// 4. **Exit gate**: at most one car is dequeued from the outgoing queue.
/// 5. **Clock**: advance by one tick.
///
/// An engine is single-use: [`simulate`][Self::simulate] only runs from
/// tick 0 and only once.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulator<L: ParkingLot, G: RandomSource> {
    pub(crate) config:              SimConfig,
    pub(crate) clock:               SimClock,
    /// `arrivals_per_hour / 3600`, exact.
    pub(crate) arrival_probability: Rational,
    /// Triangular density over `[0, max_parking_duration]`.
    pub(crate) departure_pdf:       TriangularDistribution,
    pub(crate) lot:                 L,
    pub(crate) rng:                 G,
    /// Cars waiting to enter; spot timestamps are arrival ticks.
    pub(crate) incoming:            FifoQueue<Spot>,
    /// Cars waiting at the exit gate; spot timestamps are departure ticks.
    pub(crate) outgoing:            FifoQueue<Spot>,
    pub(crate) simulated:           bool,
}

impl<L: ParkingLot, G: RandomSource> Simulator<L, G> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the whole simulation, from tick 0 until `clock == total_steps`.
    ///
    /// # Errors
    /// - [`SimError::ClockNotZero`] if the clock has already moved (e.g. after
    ///   a previous run or manual [`step`][Self::step]s).
    /// - [`SimError::AlreadySimulated`] if a previous zero-step run completed.
    /// - Any lot or queue error raised mid-run; the run stops there.
    pub fn simulate<O: LotObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if !self.clock.is_at_start() {
            return Err(SimError::ClockNotZero(self.clock.current_tick));
        }
        if self.simulated {
            return Err(SimError::AlreadySimulated);
        }
        self.simulated = true;

        info!(
            "simulating {} ticks: arrival p={} ({:.5}), max stay {} ticks, lot capacity {}",
            self.config.total_steps,
            self.arrival_probability,
            self.arrival_probability.to_f64(),
            self.config.max_parking_duration,
            self.lot.capacity(),
        );

        let end = self.config.end_tick();
        while self.clock.current_tick < end {
            self.process_tick(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);

        info!(
            "finished at {}: occupancy {}, incoming {}, outgoing {}",
            self.clock,
            self.lot.occupancy(),
            self.incoming.len(),
            self.outgoing.len(),
        );
        Ok(())
    }

    /// Run exactly one tick.
    ///
    /// Useful for tests and incremental stepping.  Once any tick has been
    /// stepped, [`simulate`][Self::simulate] is no longer available.
    ///
    /// # Errors
    /// [`SimError::Finished`] if the clock has already reached `total_steps`.
    pub fn step<O: LotObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.is_finished() {
            return Err(SimError::Finished { steps: self.config.total_steps });
        }
        self.process_tick(observer)?;
        if self.is_finished() {
            observer.on_sim_end(self.clock.current_tick);
        }
        Ok(())
    }

    /// `true` once `clock == total_steps`.
    pub fn is_finished(&self) -> bool {
        self.clock.current_tick >= self.config.end_tick()
    }

    pub fn clock(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn steps(&self) -> u64 {
        self.config.total_steps
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn arrival_probability(&self) -> Rational {
        self.arrival_probability
    }

    pub fn departure_pdf(&self) -> &TriangularDistribution {
        &self.departure_pdf
    }

    pub fn lot(&self) -> &L {
        &self.lot
    }

    /// Consume the engine and hand the lot back.
    pub fn into_lot(self) -> L {
        self.lot
    }

    pub fn incoming(&self) -> &FifoQueue<Spot> {
        &self.incoming
    }

    pub fn outgoing(&self) -> &FifoQueue<Spot> {
        &self.outgoing
    }

    pub fn incoming_queue_size(&self) -> usize {
        self.incoming.len()
    }

    pub fn outgoing_queue_size(&self) -> usize {
        self.outgoing.len()
    }

    /// Mutable access to the random source, e.g. to re-script it between
    /// [`step`][Self::step]s.
    pub fn random_source_mut(&mut self) -> &mut G {
        &mut self.rng
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: LotObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let arrived = self.sample_arrival(now, observer);
        let parked = self.admit_head(now, observer)?;
        let departed = self.scan_departures(now, observer)?;
        let exited = self.retire_one(now, observer)?;

        observer.on_tick_end(&TickSummary {
            tick:      now,
            occupancy: self.lot.occupancy(),
            incoming:  self.incoming.len(),
            outgoing:  self.outgoing.len(),
            arrived,
            parked,
            departed,
            exited,
        });

        self.clock.advance();
        Ok(())
    }

    /// Phase 1: maybe enqueue a new car, tagged with its arrival tick.
    fn sample_arrival<O: LotObserver>(&mut self, now: Tick, observer: &mut O) -> bool {
        if !self.rng.event_occurred(self.arrival_probability) {
            return false;
        }
        let plate = Plate::new(self.rng.random_string(self.config.plate_len));
        let spot = Spot::new(Car::new(plate), now);
        debug!("{now}: {} arrives", spot.car());
        observer.on_arrival(now, &spot);
        self.incoming.enqueue(spot);
        true
    }

    /// Phase 2: offer the incoming head to the lot.
    fn admit_head<O: LotObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<bool> {
        if self.incoming.is_empty() {
            return Ok(false);
        }
        let head = self.incoming.peek()?;
        if !self.lot.attempt_parking(head.car(), now) {
            trace!("{now}: {} blocked at entrance ({} queued)", head.car(), self.incoming.len());
            return Ok(false);
        }

        let spot = self.incoming.dequeue()?;
        let arrived_at = spot.timestamp();
        let parked = self.lot.park(spot.into_car(), now)?;
        debug!("{now}: {} parks after waiting {} ticks", parked.car(), now.since(arrived_at));
        observer.on_parked(now, parked, arrived_at);
        Ok(true)
    }

    /// Phase 3: decide departures for every parked car, then move the leavers
    /// to the outgoing queue.
    ///
    /// Decisions are collected in one forward pass and applied afterwards, so
    /// removals never shift an unvisited car under the scan position.
    fn scan_departures<O: LotObserver>(
        &mut self,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<usize> {
        let max_stay = self.config.max_parking_duration;
        let mut leaving: Vec<(usize, DepartureCause)> = Vec::new();

        for index in 0..self.lot.occupancy() {
            let Some(spot) = self.lot.spot_at(index) else {
                continue;
            };
            let parked_for = now.since(spot.timestamp());
            let cause = if parked_for >= max_stay {
                Some(DepartureCause::MaxDuration)
            } else if self.rng.event_occurred(self.departure_pdf.pdf(parked_for)) {
                Some(DepartureCause::Random)
            } else {
                None
            };
            if let Some(cause) = cause {
                leaving.push((index, cause));
            }
        }

        // Remove back-to-front so the collected indices stay valid.
        let mut removed = Vec::with_capacity(leaving.len());
        for &(index, cause) in leaving.iter().rev() {
            removed.push((self.lot.remove(index)?, cause));
        }

        let count = removed.len();
        for (spot, cause) in removed.into_iter().rev() {
            let parked_at = spot.timestamp();
            let spot = Spot::new(spot.into_car(), now);
            debug!(
                "{now}: {} leaves after {} ticks ({})",
                spot.car(),
                now.since(parked_at),
                cause.as_str()
            );
            observer.on_departure(now, &spot, parked_at, cause);
            self.outgoing.enqueue(spot);
        }
        Ok(count)
    }

    /// Phase 4: the exit gate lets at most one car out per tick.
    fn retire_one<O: LotObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<bool> {
        if self.outgoing.is_empty() {
            return Ok(false);
        }
        let spot = self.outgoing.dequeue()?;
        debug!("{now}: {} exits", spot.car());
        observer.on_exit(now, &spot);
        Ok(true)
    }
}
