//! Owned, read-only copies of the table for observers that outlive a borrow
//! (other threads, recorded histories).

use dine_core::{PhilosopherId, Tick};
use dine_table::{PhilState, Seating};

/// What a renderer or status line needs to know about one philosopher.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhilosopherView {
    pub id:          PhilosopherId,
    pub state:       PhilState,
    pub holds_left:  bool,
    pub holds_right: bool,
}

/// The table as of the end of `tick`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSnapshot {
    pub tick:         Tick,
    pub philosophers: Vec<PhilosopherView>,
    /// `held` flag per fork, indexed by `ForkId`.
    pub forks:        Vec<bool>,
}

impl TableSnapshot {
    pub fn capture(tick: Tick, seating: &Seating) -> Self {
        Self {
            tick,
            philosophers: seating
                .philosophers()
                .iter()
                .map(|p| PhilosopherView {
                    id:          p.id(),
                    state:       p.state(),
                    holds_left:  p.holds_left(),
                    holds_right: p.holds_right(),
                })
                .collect(),
            forks: seating.forks().iter_held().collect(),
        }
    }

    pub fn forks_held(&self) -> usize {
        self.forks.iter().filter(|&&h| h).count()
    }

    pub fn count_in(&self, state: PhilState) -> usize {
        self.philosophers.iter().filter(|p| p.state == state).count()
    }
}
