//! `dine-sim` — tick scheduler and lifecycle controller.
//!
//! # One tick
//!
//! ```text
//! tick += 1
//! for philosopher in order:                 (TickOrder, fixed at build time)
//!   Thinking: thought += 1; thought > think_limit  → Hungry
//!   Hungry:   try_acquire_pair(lo, hi)
//!               ok                            → Eating
//!               taken: waited += 1; waited > hunger_limit → Thinking
//!   Eating:   eaten += 1; eaten > eat_limit    → release_pair(lo, hi), Thinking
//! ```
//!
//! `lo`/`hi` are the philosopher's two forks lowest index first.  Because
//! every philosopher requests forks in that one global order, and picks both
//! up in a single step, no circular wait can form.
//!
//! # Driving
//!
//! The host owns the clock.  It calls [`Simulation::advance`] from whatever
//! periodic trigger it has (a frame callback, a timer, a test loop); a tick
//! runs only while the simulation is started and not paused.  For a threaded
//! host, [`SharedSimulation`] serialises whole tick passes behind one mutex
//! and [`TickDriver`] runs the trigger loop on its own thread.
//!
//! # Quick-start
//!
//! ```rust
//! use dine_core::TableConfig;
//! use dine_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new(TableConfig::default()).build().unwrap();
//! sim.start().unwrap();
//! sim.run_ticks(5_000).unwrap();
//! assert!(sim.snapshot().forks_held() % 2 == 0);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod scheduler;
pub mod shared;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{ControlError, ControlResult, SimError, SimResult};
pub use observer::{LifecycleEvent, NoopObserver, SimObserver};
pub use report::{TickReport, Transition, TransitionKind};
pub use scheduler::Scheduler;
pub use shared::{SharedSimulation, TickDriver};
pub use sim::Simulation;
pub use snapshot::{PhilosopherView, TableSnapshot};
