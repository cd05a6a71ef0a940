//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `philosopher_snapshots` and `tick_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, PhilosopherSnapshotRow, TickSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS philosopher_snapshots (
                 run            INTEGER NOT NULL,
                 tick           INTEGER NOT NULL,
                 philosopher_id INTEGER NOT NULL,
                 state          TEXT    NOT NULL,
                 holds_left     INTEGER NOT NULL,
                 holds_right    INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 run           INTEGER NOT NULL,
                 tick          INTEGER NOT NULL,
                 thinking      INTEGER NOT NULL,
                 hungry        INTEGER NOT NULL,
                 eating        INTEGER NOT NULL,
                 forks_held    INTEGER NOT NULL,
                 meals_started INTEGER NOT NULL,
                 gave_up       INTEGER NOT NULL,
                 PRIMARY KEY (run, tick)
             );",
        )?;

        Ok(Self { conn })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[PhilosopherSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO philosopher_snapshots \
                 (run, tick, philosopher_id, state, holds_left, holds_right) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.run,
                    row.tick as i64,
                    row.philosopher_id,
                    row.state.as_str(),
                    row.holds_left as i64,
                    row.holds_right as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries \
             (run, tick, thinking, hungry, eating, forks_held, meals_started, gave_up) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                row.run,
                row.tick as i64,
                row.thinking,
                row.hungry,
                row.eating,
                row.forks_held,
                row.meals_started,
                row.gave_up,
            ],
        )?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
