//! `dine-table` — the shared state of a dining-philosophers table.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                |
//! |-------------------|---------------------------------------------------------|
//! | [`forks`]         | `ForkTable` — who holds which fork, pairwise acquire    |
//! | [`philosopher`]   | `Philosopher`, `PhilState` — life cycle and timers      |
//! | [`seating`]       | `Seating` — the ring of philosophers plus its forks     |
//! | [`error`]         | `TableError`, `TableResult`                             |
//!
//! Nothing here advances time.  The per-tick algorithm lives in `dine-sim`
//! and is the only writer of this state; everyone else gets `&Seating`.

pub mod error;
pub mod forks;
pub mod philosopher;
pub mod seating;

#[cfg(test)]
mod tests;

pub use error::{TableError, TableResult};
pub use forks::ForkTable;
pub use philosopher::{PhilState, Philosopher};
pub use seating::Seating;
