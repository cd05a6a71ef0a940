//! Integration tests for dine-output.

#[cfg(test)]
mod csv_tests {
    use dine_table::PhilState;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{PhilosopherSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(philosopher_id: u32, tick: u64) -> PhilosopherSnapshotRow {
        PhilosopherSnapshotRow {
            run: 0,
            tick,
            philosopher_id,
            state:       PhilState::Eating,
            holds_left:  true,
            holds_right: true,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            run:           0,
            tick,
            thinking:      3,
            hungry:        0,
            eating:        2,
            forks_held:    4,
            meals_started: 1,
            gave_up:       0,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("philosopher_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("philosopher_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["run", "tick", "philosopher_id", "state", "holds_left", "holds_right"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["run", "tick", "thinking", "hungry", "eating", "forks_held", "meals_started", "gave_up"]
        );
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(2, 5)]).unwrap();
        w.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("philosopher_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "5");      // tick
        assert_eq!(&rows[1][2], "2");      // philosopher_id
        assert_eq!(&rows[0][3], "eating"); // state
        assert_eq!(&rows[0][4], "1");      // holds_left
    }

    #[test]
    fn csv_tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "3"); // tick
        assert_eq!(&rows[0][5], "4"); // forks_held
    }

    #[test]
    fn csv_flush_idempotent_and_writable_after() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.flush().unwrap();
        w.flush().unwrap();
        w.write_tick_summary(&summary_row(1)).unwrap();
        w.flush().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use dine_core::TableConfig;
    use dine_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::{CsvWriter, OutputError, OutputResult, OutputWriter, SimOutputObserver};
    use crate::row::{PhilosopherSnapshotRow, TickSummaryRow};

    fn fast_config() -> TableConfig {
        TableConfig { think_limit: 3, hunger_limit: 5, eat_limit: 2, ..TableConfig::default() }
    }

    #[test]
    fn integration_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut sim = SimBuilder::new(fast_config())
            .observer(SimOutputObserver::new(writer))
            .snapshot_interval(2)
            .build()
            .unwrap();
        sim.start().unwrap();
        sim.run_ticks(10).unwrap();
        let mut obs = sim.into_observer();
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 10);
        // Tick 5: P0 and P2 start eating.
        assert_eq!(&summaries[4][1], "5");
        assert_eq!(&summaries[4][4], "2"); // eating
        assert_eq!(&summaries[4][6], "2"); // meals_started

        let mut rdr = csv::Reader::from_path(dir.path().join("philosopher_snapshots.csv")).unwrap();
        let snaps: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(snaps.len(), 5 * 5, "5 snapshots (ticks 2,4,6,8,10) × 5 philosophers");
    }

    #[test]
    fn run_number_advances_on_reset() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut sim = SimBuilder::new(fast_config())
            .observer(SimOutputObserver::new(writer))
            .snapshot_interval(0)
            .build()
            .unwrap();
        sim.start().unwrap();
        sim.run_ticks(3).unwrap();
        sim.stop();
        assert_eq!(sim.observer().run(), 1);
        sim.start().unwrap();
        sim.run_ticks(2).unwrap();
        sim.into_observer().finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let keys: Vec<(String, String)> = rdr
            .records()
            .map(|r| r.unwrap())
            .map(|r| (r[0].to_owned(), r[1].to_owned()))
            .collect();
        let expected: Vec<(String, String)> = [("0", "1"), ("0", "2"), ("0", "3"), ("1", "1"), ("1", "2")]
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        assert_eq!(keys, expected);
    }

    /// Writer whose every call fails.
    struct Broken;
    impl OutputWriter for Broken {
        fn write_snapshots(&mut self, _rows: &[PhilosopherSnapshotRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn flush(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_are_kept_for_later() {
        let mut sim = SimBuilder::new(fast_config())
            .observer(SimOutputObserver::new(Broken))
            .build()
            .unwrap();
        sim.start().unwrap();
        sim.run_ticks(3).unwrap();
        let mut obs = sim.into_observer();
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none(), "only the first error is stored");
        assert!(obs.finish().is_ok());
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use dine_core::TableConfig;
    use dine_sim::SimBuilder;

    use crate::{SimOutputObserver, SqliteWriter};

    #[test]
    fn integration_sqlite() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SqliteWriter::new(dir.path()).unwrap();
        let config = TableConfig { think_limit: 3, hunger_limit: 5, eat_limit: 2, ..TableConfig::default() };
        let mut sim = SimBuilder::new(config)
            .observer(SimOutputObserver::new(writer))
            .snapshot_interval(5)
            .build()
            .unwrap();
        sim.start().unwrap();
        sim.run_ticks(10).unwrap();
        // Tick numbers restart after a reset; (run, tick) must stay unique.
        sim.stop();
        sim.start().unwrap();
        sim.run_ticks(10).unwrap();
        sim.into_observer().finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let summaries: i64 = conn
            .query_row("SELECT COUNT(*) FROM tick_summaries", [], |r| r.get(0))
            .unwrap();
        assert_eq!(summaries, 20);
        let eating: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM philosopher_snapshots WHERE run = 0 AND tick = 5 AND state = 'eating'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(eating, 2);
    }
}
