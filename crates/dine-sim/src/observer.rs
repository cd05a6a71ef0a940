//! Simulation observer trait for status reporting and data collection.

use dine_core::Tick;
use dine_table::Seating;

use crate::{TickReport, Transition};

/// Lifecycle changes reported through [`SimObserver::on_lifecycle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifecycleEvent {
    Started,
    Paused,
    Resumed,
    Stopped,
    Reset,
}

/// Callbacks invoked by [`Simulation`][crate::Simulation] at key points.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers only ever see the table between
/// philosopher updates, never in the middle of one, and must not format
/// anything back into the simulation: they are read-only.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct MealCounter { meals: u64 }
///
/// impl SimObserver for MealCounter {
///     fn on_tick_end(&mut self, _tick: Tick, report: &TickReport) {
///         self.meals += report.meals_started() as u64;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any philosopher moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for each state change, right after it happened.
    fn on_transition(&mut self, _tick: Tick, _transition: &Transition) {}

    /// Called once every philosopher has been updated.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called at snapshot intervals with read-only access to the whole table.
    fn on_snapshot(&mut self, _tick: Tick, _seating: &Seating) {}

    /// Called after a lifecycle call took effect.
    fn on_lifecycle(&mut self, _event: LifecycleEvent) {}
}

/// A [`SimObserver`] that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
