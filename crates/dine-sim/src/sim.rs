//! The `Simulation` controller: lifecycle plus the tick trigger.

use dine_core::{TableConfig, Tick};
use dine_table::Seating;

use crate::{
    ControlError, ControlResult, LifecycleEvent, NoopObserver, Scheduler, SimObserver,
    SimResult, TableSnapshot, TickReport,
};

/// Owns the table and drives the scheduler.
///
/// # Lifecycle
///
/// ```text
///            start              pause
///  stopped ─────────▶ running ─────────▶ paused
///     ▲                 │  ▲               │
///     │      stop       │  └───resume──────┘
///     └─────────────────┴──────────────────┘   (stop also resets)
/// ```
///
/// Calls that make no sense in the current state (`start` while running,
/// `resume` while not paused, …) change nothing and return a
/// [`ControlError`] naming the reason.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<O: SimObserver = NoopObserver> {
    pub(crate) config:            TableConfig,
    pub(crate) seating:           Seating,
    pub(crate) scheduler:         Scheduler,
    pub(crate) tick:              Tick,
    pub(crate) running:           bool,
    pub(crate) paused:            bool,
    pub(crate) generation:        u64,
    pub(crate) snapshot_interval: u64,
    pub(crate) observer:          O,
}

impl<O: SimObserver> Simulation<O> {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Begin accepting ticks.  Clears any pause.
    pub fn start(&mut self) -> ControlResult {
        if self.running {
            return Err(ControlError::AlreadyRunning);
        }
        self.running = true;
        self.paused = false;
        self.observer.on_lifecycle(LifecycleEvent::Started);
        Ok(())
    }

    /// Stop accepting ticks until [`resume`](Self::resume).
    pub fn pause(&mut self) -> ControlResult {
        if !self.running {
            return Err(ControlError::NotRunning);
        }
        if self.paused {
            return Err(ControlError::AlreadyPaused);
        }
        self.paused = true;
        self.observer.on_lifecycle(LifecycleEvent::Paused);
        Ok(())
    }

    pub fn resume(&mut self) -> ControlResult {
        if !self.running {
            return Err(ControlError::NotRunning);
        }
        if !self.paused {
            return Err(ControlError::NotPaused);
        }
        self.paused = false;
        self.observer.on_lifecycle(LifecycleEvent::Resumed);
        Ok(())
    }

    /// Stop accepting ticks and reset the table.
    ///
    /// Always succeeds: stopping a stopped simulation just resets it again.
    /// `Stopped` is only reported if the simulation was running.  Bumps
    /// [`generation`](Self::generation), which ends any driver loop started
    /// before this call even if the simulation is started again.
    pub fn stop(&mut self) {
        let was_running = self.running;
        self.running = false;
        self.paused = false;
        self.generation = self.generation.wrapping_add(1);
        if was_running {
            self.observer.on_lifecycle(LifecycleEvent::Stopped);
        }
        self.reset();
    }

    /// Everyone back to thinking with zero timers, all forks free, tick 0.
    ///
    /// Leaves the running and paused flags alone.
    pub fn reset(&mut self) {
        self.seating.reset();
        self.tick = Tick::ZERO;
        self.observer.on_lifecycle(LifecycleEvent::Reset);
    }

    // ── Ticking ───────────────────────────────────────────────────────────

    /// The host's periodic trigger.
    ///
    /// Runs one tick if the simulation is running and not paused; otherwise
    /// does nothing and returns `Ok(None)`.
    pub fn advance(&mut self) -> SimResult<Option<TickReport>> {
        if !self.running || self.paused {
            return Ok(None);
        }
        self.step().map(Some)
    }

    /// Fire the trigger `n` times.  Returns how many ticks actually ran.
    pub fn run_ticks(&mut self, n: u64) -> SimResult<u64> {
        let mut ran = 0;
        for _ in 0..n {
            if self.advance()?.is_some() {
                ran += 1;
            }
        }
        Ok(ran)
    }

    /// Run one tick regardless of the lifecycle flags.
    ///
    /// Useful for tests and single-stepping tools.
    pub fn step(&mut self) -> SimResult<TickReport> {
        let now = self.tick.next();
        self.tick = now;

        self.observer.on_tick_start(now);
        let report = self.scheduler.run_tick(now, &mut self.seating, &mut self.observer)?;
        self.observer.on_tick_end(now, &report);
        if self.snapshot_interval > 0 && now.0.is_multiple_of(self.snapshot_interval) {
            self.observer.on_snapshot(now, &self.seating);
        }
        Ok(report)
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of `stop` calls so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The last completed tick; `Tick::ZERO` right after build or reset.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[inline]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[inline]
    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(self.tick, &self.seating)
    }

    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[inline]
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Unwrap the observer (e.g. to flush an output writer after the run).
    pub fn into_observer(self) -> O {
        self.observer
    }
}
