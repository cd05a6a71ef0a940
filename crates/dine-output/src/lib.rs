//! `dine-output` — simulation recorders for the dine simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | Files created                                              |
//! |-----------|-------------|------------------------------------------------------------|
//! | *(none)*  | CSV         | `philosopher_snapshots.csv`, `tick_summaries.csv`          |
//! | `sqlite`  | SQLite      | `output.db`                                                |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `dine_sim::SimObserver`.  Every row carries a `run`
//! number that goes up each time the simulation is reset, since tick numbers
//! start again from 1 after a reset.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dine_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut sim = SimBuilder::new(config).observer(SimOutputObserver::new(writer)).build()?;
//! sim.start()?;
//! sim.run_ticks(10_000)?;
//! let mut obs = sim.into_observer();
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{PhilosopherSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
