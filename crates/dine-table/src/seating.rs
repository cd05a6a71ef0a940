//! `Seating` — the ring of philosophers and the forks between them.

use dine_core::{PhilosopherId, Ring};

use crate::{ForkTable, PhilState, Philosopher, TableError, TableResult};

/// All mutable table state: one [`Philosopher`] per seat and one
/// [`ForkTable`] slot per fork, both indexed by seat.
///
/// # Why `split_mut`?
///
/// A tick needs `&mut Philosopher` and `&mut ForkTable` at the same time.
/// [`split_mut`](Self::split_mut) hands out both as disjoint field borrows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Seating {
    ring:         Ring,
    philosophers: Vec<Philosopher>,
    forks:        ForkTable,
}

impl Seating {
    /// Seat `ring.seats()` thinking philosophers at a table with every fork
    /// free.
    pub fn new(ring: Ring) -> Self {
        Self {
            ring,
            philosophers: ring.philosophers().map(Philosopher::new).collect(),
            forks:        ForkTable::new(ring.seats()),
        }
    }

    #[inline]
    pub fn ring(&self) -> Ring {
        self.ring
    }

    #[inline]
    pub fn philosophers(&self) -> &[Philosopher] {
        &self.philosophers
    }

    #[inline]
    pub fn philosopher(&self, id: PhilosopherId) -> Option<&Philosopher> {
        self.philosophers.get(id.index())
    }

    #[inline]
    pub fn forks(&self) -> &ForkTable {
        &self.forks
    }

    /// Disjoint mutable access for the scheduler.
    #[inline]
    pub fn split_mut(&mut self) -> (&mut [Philosopher], &mut ForkTable) {
        (&mut self.philosophers, &mut self.forks)
    }

    /// How many philosophers are currently in `state`.
    pub fn count_in(&self, state: PhilState) -> usize {
        self.philosophers.iter().filter(|p| p.state() == state).count()
    }

    /// Everyone back to thinking with zero timers, every fork on the table.
    pub fn reset(&mut self) {
        for p in &mut self.philosophers {
            p.reset();
        }
        self.forks.clear();
    }

    /// Cross-check the philosopher flags against the fork table.
    ///
    /// - each philosopher holds both forks or neither, and holds them exactly
    ///   while eating;
    /// - each held fork is held by an eating philosopher that uses it;
    /// - each eating philosopher is the recorded holder of both its forks.
    pub fn check_invariants(&self) -> TableResult<()> {
        for p in &self.philosophers {
            let eating = p.state() == PhilState::Eating;
            if p.holds_left() != eating || p.holds_right() != eating {
                return Err(TableError::PairingBroken {
                    philosopher: p.id(),
                    state:       p.state(),
                    left:        p.holds_left(),
                    right:       p.holds_right(),
                });
            }
            if eating {
                let (lo, hi) = self.ring.ordered_forks(p.id());
                for fork in [lo, hi] {
                    if self.forks.holder(fork) != Some(p.id()) {
                        return Err(TableError::HolderMismatch {
                            fork,
                            holder: self.forks.holder(fork),
                        });
                    }
                }
            }
        }
        for fork in self.ring.forks() {
            let Some(holder) = self.forks.holder(fork) else { continue };
            let (left_user, right_user) = self.ring.sharers(fork);
            let eating = self
                .philosopher(holder)
                .is_some_and(|p| p.state() == PhilState::Eating);
            if (holder != left_user && holder != right_user) || !eating {
                return Err(TableError::HolderMismatch { fork, holder: Some(holder) });
            }
        }
        Ok(())
    }
}
