//! `ForkTable` — the only shared mutable resource of the simulation.
//!
//! Each slot records which philosopher currently holds the fork, if any.
//! Forks are only ever taken and put down in pairs, so a philosopher never
//! holds exactly one fork and the number of held forks is always even.

use dine_core::{ForkId, PhilosopherId};

use crate::{TableError, TableResult};

/// Per-fork holder, indexed by `ForkId`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ForkTable {
    holders: Vec<Option<PhilosopherId>>,
}

impl ForkTable {
    /// `count` forks, all on the table.
    pub fn new(count: usize) -> Self {
        Self { holders: vec![None; count] }
    }

    pub fn len(&self) -> usize {
        self.holders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    /// `true` while some philosopher holds `fork`.  Out-of-range forks are
    /// reported as free.
    #[inline]
    pub fn is_held(&self, fork: ForkId) -> bool {
        self.holder(fork).is_some()
    }

    /// The philosopher holding `fork`, if any.
    #[inline]
    pub fn holder(&self, fork: ForkId) -> Option<PhilosopherId> {
        self.holders.get(fork.index()).copied().flatten()
    }

    /// Number of forks currently picked up.
    pub fn held_count(&self) -> usize {
        self.holders.iter().filter(|h| h.is_some()).count()
    }

    /// `held` flag per fork, in index order.
    pub fn iter_held(&self) -> impl Iterator<Item = bool> + '_ {
        self.holders.iter().map(Option::is_some)
    }

    /// Pick up `a` and `b` for `who` iff both are free.
    ///
    /// Both forks are checked before either is marked, so a failed attempt
    /// leaves the table untouched.  Returns `Ok(false)` when either fork is
    /// taken; errors only for malformed pairs.
    pub fn try_acquire_pair(
        &mut self,
        who: PhilosopherId,
        a:   ForkId,
        b:   ForkId,
    ) -> TableResult<bool> {
        self.check_pair(a, b)?;
        if self.is_held(a) || self.is_held(b) {
            return Ok(false);
        }
        self.holders[a.index()] = Some(who);
        self.holders[b.index()] = Some(who);
        Ok(true)
    }

    /// Put down `a` and `b`.  Both must be held by `who`; otherwise nothing
    /// changes and the offending fork is reported.
    pub fn release_pair(
        &mut self,
        who: PhilosopherId,
        a:   ForkId,
        b:   ForkId,
    ) -> TableResult<()> {
        self.check_pair(a, b)?;
        for fork in [a, b] {
            let holder = self.holder(fork);
            if holder != Some(who) {
                return Err(TableError::NotHolder { fork, who, holder });
            }
        }
        self.holders[a.index()] = None;
        self.holders[b.index()] = None;
        Ok(())
    }

    /// Put every fork back on the table.
    pub fn clear(&mut self) {
        self.holders.fill(None);
    }

    fn check_pair(&self, a: ForkId, b: ForkId) -> TableResult<()> {
        for fork in [a, b] {
            if fork.index() >= self.holders.len() {
                return Err(TableError::ForkOutOfRange { fork, forks: self.holders.len() });
            }
        }
        if a == b {
            return Err(TableError::SameFork(a));
        }
        Ok(())
    }
}
