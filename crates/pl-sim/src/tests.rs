//! Integration tests for pl-sim.

use std::collections::{HashMap, HashSet};

use pl_core::{RandomSource, Rational, SimConfig, Tick};
use pl_lot::{CapacityLot, Car, LotResult, ParkingLot, Spot};

use crate::{
    DepartureCause, LotObserver, NoopObserver, SimBuilder, SimError, StatsObserver, TickSummary,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Random source whose outcomes are set by the test.
///
/// Certain probabilities (arrivals at 3600/h) answer `arrive`; every other
/// non-zero probability (departure densities) answers `depart`.  Plates are
/// sequential: "001", "002", …
struct Scripted {
    arrive: bool,
    depart: bool,
    issued: u32,
}

impl Scripted {
    fn new(arrive: bool, depart: bool) -> Self {
        Self { arrive, depart, issued: 0 }
    }
}

impl RandomSource for Scripted {
    fn event_occurred(&mut self, probability: Rational) -> bool {
        if probability.is_zero() {
            false
        } else if probability.is_certain() {
            self.arrive
        } else {
            self.depart
        }
    }

    fn random_string(&mut self, len: usize) -> String {
        self.issued += 1;
        format!("{:0width$}", self.issued, width = len)
    }
}

/// Observer that records everything it sees.
#[derive(Default)]
struct Recorder {
    log:        Vec<String>,
    summaries:  Vec<TickSummary>,
    departures: Vec<(Tick, String, Tick, DepartureCause)>,
    exits:      Vec<(Tick, String)>,
    ended_at:   Option<Tick>,
}

impl LotObserver for Recorder {
    fn on_arrival(&mut self, tick: Tick, spot: &Spot) {
        self.log.push(format!("{tick} arrive {}", spot.car().plate()));
    }

    fn on_parked(&mut self, tick: Tick, spot: &Spot, arrived_at: Tick) {
        self.log
            .push(format!("{tick} park {} (arrived {arrived_at})", spot.car().plate()));
    }

    fn on_departure(&mut self, tick: Tick, spot: &Spot, parked_at: Tick, cause: DepartureCause) {
        let plate = spot.car().plate().to_string();
        self.log.push(format!("{tick} depart {plate} {}", cause.as_str()));
        self.departures.push((tick, plate, parked_at, cause));
    }

    fn on_exit(&mut self, tick: Tick, spot: &Spot) {
        let plate = spot.car().plate().to_string();
        self.log.push(format!("{tick} exit {plate}"));
        self.exits.push((tick, plate));
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.summaries.push(*summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended_at = Some(final_tick);
    }
}

fn scripted_config(total_steps: u64) -> SimConfig {
    SimConfig::with_rate(3_600, total_steps)
}

fn plates_in_lot<L: ParkingLot>(lot: &L) -> Vec<String> {
    (0..lot.occupancy())
        .filter_map(|i| lot.spot_at(i))
        .map(|s| s.car().plate().to_string())
        .collect()
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(SimConfig::default(), CapacityLot::new(4))
            .build()
            .unwrap();
        assert_eq!(sim.clock(), Tick::ZERO);
        assert_eq!(sim.steps(), 86_400);
        assert_eq!(sim.incoming_queue_size(), 0);
        assert_eq!(sim.outgoing_queue_size(), 0);
        assert_eq!(sim.lot().capacity(), 4);
    }

    #[test]
    fn arrival_probability_is_exact() {
        let sim = SimBuilder::new(SimConfig::with_rate(20, 10), CapacityLot::new(1))
            .build()
            .unwrap();
        assert_eq!(sim.arrival_probability(), Rational::new(1, 180).unwrap());
    }

    #[test]
    fn departure_density_spans_max_stay() {
        let config = SimConfig { max_parking_duration: 600, ..SimConfig::default() };
        let sim = SimBuilder::new(config, CapacityLot::new(1)).build().unwrap();
        let pdf = sim.departure_pdf();
        assert_eq!((pdf.lower(), pdf.mode(), pdf.upper()), (0, 300, 600));
    }

    #[test]
    fn invalid_config_rejected() {
        let result = SimBuilder::new(SimConfig::with_rate(3_601, 10), CapacityLot::new(1)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Clock and run lifecycle ───────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn runs_exactly_total_steps() {
        let mut sim = SimBuilder::new(SimConfig::with_rate(120, 500), CapacityLot::new(3))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.simulate(&mut rec).unwrap();

        assert_eq!(sim.clock(), Tick(500));
        assert!(sim.is_finished());
        assert_eq!(rec.summaries.len(), 500);
        for (i, s) in rec.summaries.iter().enumerate() {
            assert_eq!(s.tick, Tick(i as u64));
        }
        assert_eq!(rec.ended_at, Some(Tick(500)));
    }

    #[test]
    fn second_simulate_fails() {
        let mut sim = SimBuilder::new(SimConfig::with_rate(60, 10), CapacityLot::new(1))
            .build()
            .unwrap();
        sim.simulate(&mut NoopObserver).unwrap();
        assert_eq!(
            sim.simulate(&mut NoopObserver),
            Err(SimError::ClockNotZero(Tick(10)))
        );
        assert_eq!(sim.clock(), Tick(10));
    }

    #[test]
    fn zero_step_run_is_still_single_use() {
        let mut sim = SimBuilder::new(SimConfig::with_rate(60, 0), CapacityLot::new(1))
            .build()
            .unwrap();
        sim.simulate(&mut NoopObserver).unwrap();
        assert_eq!(sim.clock(), Tick::ZERO);
        assert_eq!(sim.simulate(&mut NoopObserver), Err(SimError::AlreadySimulated));
    }

    #[test]
    fn simulate_after_step_fails() {
        let mut sim = SimBuilder::new(SimConfig::with_rate(60, 10), CapacityLot::new(1))
            .build()
            .unwrap();
        sim.step(&mut NoopObserver).unwrap();
        assert_eq!(
            sim.simulate(&mut NoopObserver),
            Err(SimError::ClockNotZero(Tick(1)))
        );
    }

    #[test]
    fn step_past_end_fails() {
        let mut sim = SimBuilder::new(SimConfig::with_rate(60, 2), CapacityLot::new(1))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();
        assert_eq!(rec.ended_at, None);
        sim.step(&mut rec).unwrap();
        assert_eq!(rec.ended_at, Some(Tick(2)));
        assert_eq!(sim.step(&mut rec), Err(SimError::Finished { steps: 2 }));
    }
}

// ── Queueing discipline ───────────────────────────────────────────────────────

#[cfg(test)]
mod queue_tests {
    use super::*;

    #[test]
    fn single_spot_lot_two_ticks() {
        // Arrival probability 1: a car every tick.  Tick 0's car parks at once;
        // tick 1's car finds the lot full and waits.
        let mut sim = SimBuilder::new(SimConfig::with_rate(3_600, 2), CapacityLot::new(1))
            .build()
            .unwrap();
        sim.simulate(&mut NoopObserver).unwrap();
        assert_eq!(sim.lot().occupancy(), 1);
        assert_eq!(sim.incoming_queue_size(), 1);
        assert_eq!(sim.lot().spot_at(0).map(Spot::timestamp), Some(Tick(0)));
        assert_eq!(sim.incoming().peek().map(Spot::timestamp), Ok(Tick(1)));
    }

    #[test]
    fn exit_gate_releases_one_car_per_tick() {
        let mut sim = SimBuilder::new(scripted_config(100), CapacityLot::new(3))
            .random_source(Scripted::new(true, false))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        for _ in 0..3 {
            sim.step(&mut rec).unwrap();
        }
        assert_eq!(plates_in_lot(sim.lot()), vec!["001", "002", "003"]);

        // All three leave in the same scan.
        *sim.random_source_mut() = Scripted { arrive: false, depart: true, issued: 3 };
        sim.step(&mut rec).unwrap();
        assert_eq!(sim.lot().occupancy(), 0);
        assert_eq!(rec.summaries[3].departed, 3);
        assert_eq!(sim.outgoing_queue_size(), 2);
        assert_eq!(rec.exits.len(), 1);

        sim.random_source_mut().depart = false;
        sim.step(&mut rec).unwrap();
        assert_eq!(sim.outgoing_queue_size(), 1);
        sim.step(&mut rec).unwrap();
        assert_eq!(sim.outgoing_queue_size(), 0);
        sim.step(&mut rec).unwrap();

        let exits: Vec<_> = rec.exits.iter().map(|(t, p)| (t.0, p.as_str())).collect();
        assert_eq!(exits, vec![(3, "001"), (4, "002"), (5, "003")]);
    }

    #[test]
    fn departures_are_tagged_with_departure_tick() {
        let mut sim = SimBuilder::new(scripted_config(100), CapacityLot::new(2))
            .random_source(Scripted::new(true, false))
            .build()
            .unwrap();
        sim.step(&mut NoopObserver).unwrap();
        sim.step(&mut NoopObserver).unwrap();
        *sim.random_source_mut() = Scripted { arrive: false, depart: true, issued: 2 };
        sim.step(&mut NoopObserver).unwrap();
        // "001" already went through the gate; "002" waits, tagged with tick 2.
        let waiting = sim.outgoing().peek().unwrap();
        assert_eq!(waiting.car().plate().as_str(), "002");
        assert_eq!(waiting.timestamp(), Tick(2));
    }

    /// Refuses one specific plate, admits everything else while there is room.
    struct PickyLot {
        inner:   CapacityLot,
        refuses: &'static str,
    }

    impl ParkingLot for PickyLot {
        fn capacity(&self) -> usize { self.inner.capacity() }
        fn occupancy(&self) -> usize { self.inner.occupancy() }
        fn spot_at(&self, index: usize) -> Option<&Spot> { self.inner.spot_at(index) }
        fn attempt_parking(&mut self, car: &Car, now: Tick) -> bool {
            car.plate().as_str() != self.refuses && self.inner.attempt_parking(car, now)
        }
        fn park(&mut self, car: Car, now: Tick) -> LotResult<&Spot> { self.inner.park(car, now) }
        fn remove(&mut self, index: usize) -> LotResult<Spot> { self.inner.remove(index) }
    }

    #[test]
    fn blocked_head_holds_back_the_queue() {
        let lot = PickyLot { inner: CapacityLot::new(10), refuses: "001" };
        let mut sim = SimBuilder::new(scripted_config(5), lot)
            .random_source(Scripted::new(true, false))
            .build()
            .unwrap();
        sim.simulate(&mut NoopObserver).unwrap();

        assert_eq!(sim.lot().occupancy(), 0);
        assert_eq!(sim.incoming_queue_size(), 5);
        let queued: Vec<_> = sim
            .incoming()
            .iter()
            .map(|s| s.car().plate().to_string())
            .collect();
        assert_eq!(queued, vec!["001", "002", "003", "004", "005"]);
    }

    /// Refuses every attempt before `opens_at`.
    struct OpensLater {
        inner:    CapacityLot,
        opens_at: Tick,
    }

    impl ParkingLot for OpensLater {
        fn capacity(&self) -> usize { self.inner.capacity() }
        fn occupancy(&self) -> usize { self.inner.occupancy() }
        fn spot_at(&self, index: usize) -> Option<&Spot> { self.inner.spot_at(index) }
        fn attempt_parking(&mut self, car: &Car, now: Tick) -> bool {
            now >= self.opens_at && self.inner.attempt_parking(car, now)
        }
        fn park(&mut self, car: Car, now: Tick) -> LotResult<&Spot> { self.inner.park(car, now) }
        fn remove(&mut self, index: usize) -> LotResult<Spot> { self.inner.remove(index) }
    }

    #[test]
    fn admits_in_arrival_order_one_per_tick() {
        let lot = OpensLater { inner: CapacityLot::new(10), opens_at: Tick(3) };
        let mut sim = SimBuilder::new(scripted_config(6), lot)
            .random_source(Scripted::new(true, false))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.simulate(&mut rec).unwrap();

        assert_eq!(plates_in_lot(sim.lot()), vec!["001", "002", "003"]);
        assert_eq!(sim.incoming_queue_size(), 3);
        assert!(rec.log.contains(&"T3 park 001 (arrived T0)".to_string()));
        assert!(rec.log.contains(&"T5 park 003 (arrived T2)".to_string()));
    }
}

// ── Departure model ───────────────────────────────────────────────────────────

#[cfg(test)]
mod departure_tests {
    use super::*;

    #[test]
    fn forced_out_at_max_duration() {
        let config = SimConfig { max_parking_duration: 10, ..scripted_config(20) };
        let mut sim = SimBuilder::new(config, CapacityLot::new(1))
            .random_source(Scripted::new(true, false))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();
        sim.random_source_mut().arrive = false;
        for _ in 1..10 {
            sim.step(&mut rec).unwrap();
        }
        assert_eq!(sim.lot().occupancy(), 1, "still parked at tick 9");

        sim.step(&mut rec).unwrap();
        assert_eq!(sim.lot().occupancy(), 0);
        assert_eq!(
            rec.departures,
            vec![(Tick(10), "001".to_string(), Tick(0), DepartureCause::MaxDuration)]
        );
        assert_eq!(rec.exits, vec![(Tick(10), "001".to_string())]);
    }

    #[test]
    fn no_car_outstays_the_maximum() {
        let config = SimConfig {
            arrivals_per_hour:    1_800,
            total_steps:          5_000,
            max_parking_duration: 120,
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(config, CapacityLot::new(8)).build().unwrap();
        let mut rec = Recorder::default();
        sim.simulate(&mut rec).unwrap();

        assert!(!rec.departures.is_empty());
        for (tick, plate, parked_at, cause) in &rec.departures {
            let stay = tick.since(*parked_at);
            assert!(stay <= 120, "{plate} stayed {stay}");
            assert!(stay > 0, "{plate} left in the tick it parked");
            if *cause == DepartureCause::MaxDuration {
                assert_eq!(stay, 120);
            }
        }
    }

    #[test]
    fn scan_visits_every_car_once() {
        // Every car departs; none may be skipped when earlier ones are removed.
        let mut sim = SimBuilder::new(scripted_config(100), CapacityLot::new(5))
            .random_source(Scripted::new(true, false))
            .build()
            .unwrap();
        for _ in 0..5 {
            sim.step(&mut NoopObserver).unwrap();
        }
        *sim.random_source_mut() = Scripted { arrive: false, depart: true, issued: 5 };
        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();

        let order: Vec<_> = rec.departures.iter().map(|d| d.1.as_str()).collect();
        assert_eq!(order, vec!["001", "002", "003", "004", "005"]);
        assert_eq!(sim.lot().occupancy(), 0);
    }
}

// ── Whole-run properties ──────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    fn day_config(seed: u64) -> SimConfig {
        SimConfig { arrivals_per_hour: 12, seed, plate_len: 8, ..SimConfig::default() }
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed| {
            let mut sim = SimBuilder::new(day_config(seed), CapacityLot::new(6))
                .build()
                .unwrap();
            let mut rec = Recorder::default();
            sim.simulate(&mut rec).unwrap();
            (rec.log, sim.lot().occupancy(), sim.incoming_queue_size())
        };
        let first = run(7);
        assert!(!first.0.is_empty());
        assert_eq!(first, run(7));
    }

    #[test]
    fn cars_are_conserved() {
        let mut sim = SimBuilder::new(day_config(11), CapacityLot::new(6))
            .build()
            .unwrap();
        let mut stats = StatsObserver::new();
        sim.simulate(&mut stats).unwrap();
        let s = stats.stats();

        assert_eq!(s.ticks, 86_400);
        assert!(s.arrivals > 0);
        assert_eq!(s.arrivals, s.admissions + sim.incoming_queue_size() as u64);
        assert_eq!(s.admissions, s.departures + sim.lot().occupancy() as u64);
        assert_eq!(s.departures, s.exits + sim.outgoing_queue_size() as u64);
        assert!(s.peak_occupancy <= 6);
        assert!(s.mean_admission_wait() <= s.max_admission_wait as f64);
    }

    #[test]
    fn plate_identity_survives_the_round_trip() {
        let mut sim = SimBuilder::new(day_config(3), CapacityLot::new(4))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.simulate(&mut rec).unwrap();

        let mut arrived: HashMap<String, Tick> = HashMap::new();
        let mut parked: HashMap<String, Tick> = HashMap::new();
        for line in &rec.log {
            let parts: Vec<&str> = line.split(' ').collect();
            let tick = Tick(parts[0][1..].parse().unwrap());
            match parts[1] {
                "arrive" => { arrived.insert(parts[2].to_string(), tick); }
                "park"   => { parked.insert(parts[2].to_string(), tick); }
                _ => {}
            }
        }

        let departed: HashSet<&str> = rec.departures.iter().map(|d| d.1.as_str()).collect();
        assert!(!rec.exits.is_empty());
        for (exit_tick, plate) in &rec.exits {
            assert!(departed.contains(plate.as_str()));
            let parked_at = parked[plate];
            assert!(arrived[plate] <= parked_at);
            assert!(parked_at < *exit_tick);
        }
    }

    #[test]
    fn tuple_observer_fans_out() {
        let mut sim = SimBuilder::new(SimConfig::with_rate(600, 1_000), CapacityLot::new(2))
            .build()
            .unwrap();
        let mut both = (StatsObserver::new(), Recorder::default());
        sim.simulate(&mut both).unwrap();
        let (stats, rec) = both;
        assert_eq!(stats.stats().ticks, rec.summaries.len() as u64);
        assert_eq!(stats.stats().exits, rec.exits.len() as u64);
    }
}
