//! Fluent builder for constructing a [`Simulation`].

use dine_core::{TableConfig, Tick};
use dine_table::Seating;

use crate::{NoopObserver, Scheduler, SimObserver, SimResult, Simulation};

/// Fluent builder for [`Simulation<O>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default          |
/// |---------------------------|------------------|
/// | `.observer(o)`            | `NoopObserver`   |
/// | `.snapshot_interval(n)`   | 1 (every tick)   |
///
/// # Example
///
/// ```rust
/// use dine_core::{TableConfig, TickOrder};
/// use dine_sim::{NoopObserver, SimBuilder};
///
/// let config = TableConfig { seats: 8, order: TickOrder::Shuffled, seed: 7, ..TableConfig::default() };
/// let sim = SimBuilder::new(config)
///     .observer(NoopObserver)
///     .snapshot_interval(100)
///     .build()
///     .unwrap();
/// assert_eq!(sim.seating().philosophers().len(), 8);
/// ```
pub struct SimBuilder<O: SimObserver = NoopObserver> {
    config:            TableConfig,
    observer:          O,
    snapshot_interval: u64,
}

impl SimBuilder<NoopObserver> {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            observer:          NoopObserver,
            snapshot_interval: 1,
        }
    }
}

impl<O: SimObserver> SimBuilder<O> {
    /// Attach the observer that receives tick, transition, snapshot and
    /// lifecycle callbacks.
    pub fn observer<P: SimObserver>(self, observer: P) -> SimBuilder<P> {
        SimBuilder {
            config:            self.config,
            observer,
            snapshot_interval: self.snapshot_interval,
        }
    }

    /// Call `on_snapshot` every `n` ticks.  0 disables snapshots.
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate the config, seat everyone, and return a stopped simulation
    /// at tick 0.
    pub fn build(self) -> SimResult<Simulation<O>> {
        let scheduler = Scheduler::new(&self.config)?;
        let seating = Seating::new(scheduler.ring());

        Ok(Simulation {
            config:            self.config,
            seating,
            scheduler,
            tick:              Tick::ZERO,
            running:           false,
            paused:            false,
            generation:        0,
            snapshot_interval: self.snapshot_interval,
            observer:          self.observer,
        })
    }
}
