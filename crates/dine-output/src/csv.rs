//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `philosopher_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PhilosopherSnapshotRow, TickSummaryRow};

pub const SNAPSHOT_HEADER: [&str; 6] =
    ["run", "tick", "philosopher_id", "state", "holds_left", "holds_right"];

pub const SUMMARY_HEADER: [&str; 8] = [
    "run", "tick", "thinking", "hungry", "eating", "forks_held", "meals_started", "gave_up",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("philosopher_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self { snapshots, summaries })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[PhilosopherSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.run.to_string(),
                row.tick.to_string(),
                row.philosopher_id.to_string(),
                row.state.as_str().to_owned(),
                (row.holds_left as u8).to_string(),
                (row.holds_right as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.run.to_string(),
            row.tick.to_string(),
            row.thinking.to_string(),
            row.hungry.to_string(),
            row.eating.to_string(),
            row.forks_held.to_string(),
            row.meals_started.to_string(),
            row.gave_up.to_string(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
