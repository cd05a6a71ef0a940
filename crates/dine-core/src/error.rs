//! Configuration error type shared by the `dine-*` crates.

use thiserror::Error;

/// Errors raised while validating a [`TableConfig`][crate::TableConfig].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("a table needs at least 2 seats, got {0}")]
    TooFewSeats(usize),

    #[error("{0} seats exceeds the philosopher id space")]
    TooManySeats(usize),
}

/// Shorthand result type for `dine-core`.
pub type CoreResult<T> = Result<T, CoreError>;
