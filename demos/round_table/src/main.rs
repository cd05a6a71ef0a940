//! round_table — console host for the dine simulator.
//!
//! Seats the philosophers, drives the table from a background tick thread,
//! prints a status table at intervals and records every tick to CSV under
//! `output/round_table`.
//!
//! Usage: `round_table [config.json]`.  The JSON file holds a `TableConfig`;
//! missing fields fall back to the defaults (5 seats, limits 1000/1000/1500).

mod status;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use dine_core::{TableConfig, Tick};
use dine_output::{CsvWriter, OutputWriter, SimOutputObserver};
use dine_sim::{LifecycleEvent, SharedSimulation, SimBuilder, SimObserver, TickDriver, TickReport};
use dine_table::Seating;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:        &str     = "output/round_table";
const RUN_TICKS:         u64      = 20_000;
const STATUS_EVERY:      u64      = 2_500;
const SNAPSHOT_INTERVAL: u64      = 100;
const TICK_PERIOD:       Duration = Duration::from_micros(20);

// ── Observer wrapper: CSV output plus console status lines ────────────────────

struct ConsoleObserver<W: OutputWriter> {
    inner:   SimOutputObserver<W>,
    meals:   u64,
    gave_up: u64,
}

impl<W: OutputWriter> ConsoleObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, meals: 0, gave_up: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ConsoleObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        self.meals += report.meals_started() as u64;
        self.gave_up += report.gave_up() as u64;
        self.inner.on_tick_end(tick, report);
    }

    fn on_snapshot(&mut self, tick: Tick, seating: &Seating) {
        self.inner.on_snapshot(tick, seating);
    }

    fn on_lifecycle(&mut self, event: LifecycleEvent) {
        let message = match event {
            LifecycleEvent::Started => "Simulation started",
            LifecycleEvent::Paused  => "Simulation paused",
            LifecycleEvent::Resumed => "Simulation resumed",
            LifecycleEvent::Stopped => "Simulation stopped",
            LifecycleEvent::Reset   => "Table reset",
        };
        println!("[status] {message}");
        self.inner.on_lifecycle(event);
    }
}

fn load_config(path: Option<&str>) -> Result<TableConfig> {
    let Some(path) = path else {
        return Ok(TableConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {path}"))?;
    let config: TableConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;

    println!("=== round_table — dining philosophers ===");
    println!(
        "Seats: {}  |  limits think/hunger/eat: {}/{}/{}  |  order: {:?}",
        config.seats, config.think_limit, config.hunger_limit, config.eat_limit, config.order,
    );
    println!();

    // 1. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let observer = ConsoleObserver::new(SimOutputObserver::new(writer));

    // 2. Simulation behind a shared handle.
    let sim = SimBuilder::new(config)
        .observer(observer)
        .snapshot_interval(SNAPSHOT_INTERVAL)
        .build()?;
    let ring = sim.scheduler().ring();
    let shared = SharedSimulation::new(sim);

    // 3. Run the tick loop on its own thread; report from this one.
    let t0 = Instant::now();
    shared.start()?;
    let driver = TickDriver::spawn(shared.clone(), TICK_PERIOD);

    let mut next_status = STATUS_EVERY;
    let mut paused_once = false;
    loop {
        thread::sleep(Duration::from_millis(5));
        let snapshot = shared.snapshot();
        if snapshot.tick.0 >= next_status {
            print!("{}", status::render(&snapshot, ring));
            next_status += STATUS_EVERY;

            // Show that a paused table holds still.
            if !paused_once {
                paused_once = true;
                shared.pause()?;
                thread::sleep(Duration::from_millis(20));
                let held = shared.snapshot();
                println!("[status] still at {} after 20 ms paused", held.tick);
                shared.resume()?;
            }
        }
        if snapshot.tick.0 >= RUN_TICKS || driver.is_finished() {
            break;
        }
    }

    // 4. Final table, then stop (which resets) and collect the output.
    let (final_snapshot, meals, gave_up) = {
        let sim = shared.lock();
        (sim.snapshot(), sim.observer().meals, sim.observer().gave_up)
    };
    shared.stop();
    let ran = driver.join()?;
    let elapsed = t0.elapsed();

    println!();
    print!("{}", status::render(&final_snapshot, ring));
    println!();
    println!("Ran {ran} ticks in {:.3} s", elapsed.as_secs_f64());
    println!("  meals started : {meals}");
    println!("  gave up       : {gave_up}");

    let mut sim = shared.lock();
    sim.observer_mut().inner.finish()?;
    println!("  output        : {OUTPUT_DIR}/");

    Ok(())
}
