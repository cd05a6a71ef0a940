use dine_core::{ForkId, PhilosopherId};
use thiserror::Error;

/// Contract violations on the fork table.
///
/// None of these occur in a correctly driven simulation.  They are reported
/// instead of absorbed because silently ignoring them could break mutual
/// exclusion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("{fork} is out of range for a table of {forks} forks")]
    ForkOutOfRange { fork: ForkId, forks: usize },

    #[error("a fork pair must name two distinct forks, got {0} twice")]
    SameFork(ForkId),

    #[error("{who} released {fork} but it is held by {holder:?}")]
    NotHolder {
        fork:   ForkId,
        who:    PhilosopherId,
        holder: Option<PhilosopherId>,
    },

    #[error("{philosopher} is {state} but holds left={left} right={right}")]
    PairingBroken {
        philosopher: PhilosopherId,
        state:       crate::PhilState,
        left:        bool,
        right:       bool,
    },

    #[error("{fork} is recorded as held by {holder:?}, which disagrees with its users")]
    HolderMismatch {
        fork:   ForkId,
        holder: Option<PhilosopherId>,
    },
}

pub type TableResult<T> = Result<T, TableError>;
