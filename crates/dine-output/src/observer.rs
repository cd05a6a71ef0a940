//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use dine_core::Tick;
use dine_sim::{LifecycleEvent, SimObserver, TickReport};
use dine_table::Seating;

use crate::row::{PhilosopherSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes philosopher snapshots and tick summaries to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  Check for them with [`take_error`][Self::take_error]
/// or [`finish`][Self::finish].  The writer is flushed whenever the
/// simulation is stopped.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    run:        u32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, run: 0, last_error: None }
    }

    /// Current run number: 0 until the first reset, then +1 per reset.
    pub fn run(&self) -> u32 {
        self.run
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer and report the first error seen, if any.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.writer.flush();
        self.store_err(result);
        match self.last_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        let row = TickSummaryRow {
            run:           self.run,
            tick:          tick.0,
            thinking:      report.thinking as u32,
            hungry:        report.hungry as u32,
            eating:        report.eating as u32,
            forks_held:    report.forks_held as u32,
            meals_started: report.meals_started() as u32,
            gave_up:       report.gave_up() as u32,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, seating: &Seating) {
        let rows: Vec<PhilosopherSnapshotRow> = seating
            .philosophers()
            .iter()
            .map(|p| PhilosopherSnapshotRow {
                run:            self.run,
                tick:           tick.0,
                philosopher_id: p.id().0,
                state:          p.state(),
                holds_left:     p.holds_left(),
                holds_right:    p.holds_right(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_lifecycle(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Stopped => {
                let result = self.writer.flush();
                self.store_err(result);
            }
            LifecycleEvent::Reset => self.run = self.run.saturating_add(1),
            _ => {}
        }
    }
}
