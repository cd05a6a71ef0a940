//! Thread-safe handle and background tick loop.
//!
//! The scheduler is single-threaded.  When a host wants to drive it from one
//! thread and read it from others, every tick pass runs under a single
//! mutex around the whole [`Simulation`]: the unit of atomicity is a tick,
//! not a fork, so there is no per-fork locking.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::{ControlResult, SimObserver, SimResult, Simulation, TableSnapshot, TickReport};

/// Cloneable, lock-protected handle to a [`Simulation`].
pub struct SharedSimulation<O: SimObserver> {
    inner: Arc<Mutex<Simulation<O>>>,
}

impl<O: SimObserver> Clone for SharedSimulation<O> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<O: SimObserver> SharedSimulation<O> {
    pub fn new(sim: Simulation<O>) -> Self {
        Self { inner: Arc::new(Mutex::new(sim)) }
    }

    /// Lock the simulation.
    ///
    /// A tick that panicked mid-pass poisons the mutex; the guard is returned
    /// anyway so the host can inspect or [`stop`](Simulation::stop) it.
    pub fn lock(&self) -> MutexGuard<'_, Simulation<O>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start(&self) -> ControlResult {
        self.lock().start()
    }

    pub fn pause(&self) -> ControlResult {
        self.lock().pause()
    }

    pub fn resume(&self) -> ControlResult {
        self.lock().resume()
    }

    /// Stop and reset.  A tick already in progress on another thread
    /// finishes first.
    pub fn stop(&self) {
        self.lock().stop();
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn advance(&self) -> SimResult<Option<TickReport>> {
        self.lock().advance()
    }

    pub fn is_running(&self) -> bool {
        self.lock().is_running()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        self.lock().snapshot()
    }
}

/// A thread firing [`Simulation::advance`] once per `period`.
///
/// The loop ends when it finds the simulation no longer running or stopped
/// since the driver was spawned, so [`SharedSimulation::stop`] cancels it
/// even when the host calls `start` again before the loop wakes up.  Start
/// the simulation before spawning the driver.
pub struct TickDriver {
    handle: JoinHandle<SimResult<u64>>,
}

impl TickDriver {
    pub fn spawn<O>(shared: SharedSimulation<O>, period: Duration) -> Self
    where
        O: SimObserver + Send + 'static,
    {
        let generation = shared.lock().generation();
        let handle = thread::spawn(move || -> SimResult<u64> {
            let mut ticks = 0u64;
            loop {
                {
                    let mut sim = shared.lock();
                    if !sim.is_running() || sim.generation() != generation {
                        return Ok(ticks);
                    }
                    if sim.advance()?.is_some() {
                        ticks += 1;
                    }
                }
                thread::sleep(period);
            }
        });
        Self { handle }
    }

    /// `true` once the loop has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the loop to exit.  Returns the number of ticks it ran.
    pub fn join(self) -> SimResult<u64> {
        match self.handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
