//! day — simulate one day of a single parking lot.
//!
//! Usage: `day [config.json]`
//!
//! Without an argument the default `SimConfig` is used (24 h, 8 h max stay,
//! seed 42) with `ARRIVALS_PER_HOUR`.  A JSON file may override any subset of
//! `SimConfig` fields, e.g. `{"arrivals_per_hour": 30, "seed": 7}`.
//!
//! Set `RUST_LOG=debug` to see every car event.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use pl_core::{SimClock, SimConfig};
use pl_lot::{CapacityLot, ParkingLot};
use pl_output::{CsvWriter, SimOutputObserver};
use pl_sim::{SimBuilder, StatsObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const LOT_CAPACITY:      usize = 10;
const ARRIVALS_PER_HOUR: u32   = 3;
const OUTPUT_DIR:        &str  = "output/day";

fn load_config() -> Result<SimConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            let config: SimConfig = serde_json::from_str(&text)
                .with_context(|| format!("parsing config {path}"))?;
            Ok(config)
        }
        None => Ok(SimConfig {
            arrivals_per_hour: ARRIVALS_PER_HOUR,
            ..SimConfig::default()
        }),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    info!(
        "lot capacity {LOT_CAPACITY}, {} arrivals/h, {} ticks, seed {}",
        config.arrivals_per_hour, config.total_steps, config.seed
    );

    let mut sim = SimBuilder::new(config.clone(), CapacityLot::new(LOT_CAPACITY)).build()?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = (StatsObserver::new(), SimOutputObserver::new(writer, &config));

    let t0 = Instant::now();
    sim.simulate(&mut obs)?;
    let elapsed = t0.elapsed();

    let (stats, mut output) = obs;
    if let Some(e) = output.take_error() {
        eprintln!("output error: {e}");
    }
    let stats = stats.into_stats();

    let end = SimClock { current_tick: sim.clock() };

    println!("Simulation complete in {:.3} s, clock {end}", elapsed.as_secs_f64());
    println!("{:<24} {:>8}", "arrivals", stats.arrivals);
    println!("{:<24} {:>8}", "admissions", stats.admissions);
    println!("{:<24} {:>8}", "departures", stats.departures);
    println!("{:<24} {:>8}", "  forced (max stay)", stats.forced_departures);
    println!("{:<24} {:>8}", "exits", stats.exits);
    println!("{:<24} {:>8}", "peak occupancy", stats.peak_occupancy);
    println!("{:<24} {:>8}", "peak incoming queue", stats.peak_incoming);
    println!("{:<24} {:>8.1}", "mean entry wait (s)", stats.mean_admission_wait());
    println!("{:<24} {:>8}", "max entry wait (s)", stats.max_admission_wait);
    println!("{}", "-".repeat(33));
    println!("{:<24} {:>8}", "still parked", sim.lot().occupancy());
    println!("{:<24} {:>8}", "still queued to enter", sim.incoming_queue_size());
    println!("{:<24} {:>8}", "refused entry attempts", sim.lot().refused_attempts());
    println!("CSV written to {OUTPUT_DIR}/");

    Ok(())
}
