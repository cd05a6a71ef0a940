//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  Tick 0 is the state
//! right after construction or reset; the first processed tick is tick 1.
//! There is no wall-clock mapping: one tick is one pass of the scheduler over
//! every philosopher, however often the host decides to trigger it.

use std::fmt;

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at 60 ticks per second a u64 lasts ~9.7 billion years.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0.saturating_add(1))
    }

    /// Ticks elapsed from `earlier` to `self`, zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
