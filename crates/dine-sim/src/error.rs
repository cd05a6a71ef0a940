use dine_core::CoreError;
use dine_table::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("fork table invariant broken: {0}")]
    Table(#[from] TableError),
}

pub type SimResult<T> = Result<T, SimError>;

/// A lifecycle call made in a state where it has no effect.
///
/// The call leaves the simulation unchanged.  Hosts that treat these as
/// harmless can ignore the error; hosts that want to catch wiring mistakes
/// (a resume button calling `pause`, say) can surface it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    #[error("simulation is already running")]
    AlreadyRunning,

    #[error("simulation is not running")]
    NotRunning,

    #[error("simulation is already paused")]
    AlreadyPaused,

    #[error("simulation is not paused")]
    NotPaused,
}

pub type ControlResult = Result<(), ControlError>;
