//! Seat and fork adjacency around a round table.
//!
//! ```text
//!            fork 0
//!      P4 ─────────── P0
//!  fork 4               fork 1
//!     P3                 P1
//!       fork 3 ─ P2 ─ fork 2
//! ```
//!
//! Philosopher `i` uses fork `i` as its left fork and fork `(i + 1) % n` as
//! its right fork.  [`Ring::ordered_forks`] returns the pair lowest index
//! first: every philosopher requests forks in that one global order, which is
//! what rules out a circular wait.

use crate::{ForkId, PhilosopherId};

/// Adjacency helper for a ring of `seats` philosophers and `seats` forks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ring {
    seats: u32,
}

impl Ring {
    /// A ring of `seats` places.  Outside this crate, rings come from
    /// [`TableConfig::ring`][crate::TableConfig::ring], which validates the
    /// seat count.
    pub(crate) fn new(seats: u32) -> Self {
        Self { seats }
    }

    #[inline]
    pub fn seats(self) -> usize {
        self.seats as usize
    }

    /// Fork on the philosopher's left: same index as the seat.
    #[inline]
    pub fn left_fork(self, p: PhilosopherId) -> ForkId {
        ForkId(p.0)
    }

    /// Fork on the philosopher's right: the next seat's left fork.
    #[inline]
    pub fn right_fork(self, p: PhilosopherId) -> ForkId {
        ForkId((p.0 + 1) % self.seats)
    }

    /// `(lo, hi)` — the philosopher's two forks in global acquisition order.
    #[inline]
    pub fn ordered_forks(self, p: PhilosopherId) -> (ForkId, ForkId) {
        let left = self.left_fork(p);
        let right = self.right_fork(p);
        (left.min(right), left.max(right))
    }

    /// The two philosophers that share `fork`: `(left user, right user)`.
    ///
    /// The left user is the philosopher in the seat of the same index; the
    /// right user sits one seat counter-clockwise.
    #[inline]
    pub fn sharers(self, fork: ForkId) -> (PhilosopherId, PhilosopherId) {
        let left_user = PhilosopherId(fork.0);
        let right_user = match fork.0 {
            0 => PhilosopherId(self.seats - 1),
            i => PhilosopherId(i - 1),
        };
        (left_user, right_user)
    }

    /// All seats in ascending order.
    pub fn philosophers(self) -> impl Iterator<Item = PhilosopherId> {
        (0..self.seats).map(PhilosopherId)
    }

    /// All forks in ascending order.
    pub fn forks(self) -> impl Iterator<Item = ForkId> {
        (0..self.seats).map(ForkId)
    }
}
