//! Table configuration.
//!
//! Typically built in code or loaded from a JSON file by the host application
//! (with the `serde` feature) and handed to `dine_sim::SimBuilder`.

use crate::{CoreError, CoreResult, Ring};

/// Order in which a tick visits the philosophers.
///
/// Forks are always requested lowest index first regardless of this setting,
/// so every order is deadlock free.  The order only decides who wins when two
/// neighbours become able to eat on the same tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TickOrder {
    /// Seat 0 first, then 1, 2, …
    #[default]
    Ascending,
    /// Highest seat first.
    Descending,
    /// A permutation drawn once from `TableConfig::seed` and then kept fixed.
    Shuffled,
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableConfig {
    /// Number of philosophers, and of forks.  Must be at least 2.
    pub seats: usize,

    /// A thinking philosopher becomes hungry once it has thought for more
    /// than this many ticks.
    pub think_limit: u64,

    /// A hungry philosopher that has failed to pick up its forks for more
    /// than this many ticks gives up and goes back to thinking.
    pub hunger_limit: u64,

    /// An eating philosopher puts its forks down once it has eaten for more
    /// than this many ticks.
    pub eat_limit: u64,

    /// Philosopher visiting order within a tick.
    pub order: TickOrder,

    /// Seed for [`TickOrder::Shuffled`].  Ignored by the other orders.
    pub seed: u64,
}

impl TableConfig {
    pub const DEFAULT_SEATS: usize = 5;
    pub const DEFAULT_THINK_LIMIT: u64 = 1_000;
    pub const DEFAULT_HUNGER_LIMIT: u64 = 1_000;
    pub const DEFAULT_EAT_LIMIT: u64 = 1_500;

    /// Defaults with a different seat count.
    pub fn with_seats(seats: usize) -> Self {
        Self { seats, ..Self::default() }
    }

    /// Check the seat count.  Any limit value is valid, including 0.
    pub fn validate(&self) -> CoreResult<()> {
        if self.seats < 2 {
            return Err(CoreError::TooFewSeats(self.seats));
        }
        // Seat and fork ids are u32.
        if u32::try_from(self.seats).is_err() {
            return Err(CoreError::TooManySeats(self.seats));
        }
        Ok(())
    }

    /// Validated ring geometry for this table.
    pub fn ring(&self) -> CoreResult<Ring> {
        self.validate()?;
        Ok(Ring::new(self.seats as u32))
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seats:        Self::DEFAULT_SEATS,
            think_limit:  Self::DEFAULT_THINK_LIMIT,
            hunger_limit: Self::DEFAULT_HUNGER_LIMIT,
            eat_limit:    Self::DEFAULT_EAT_LIMIT,
            order:        TickOrder::Ascending,
            seed:         0,
        }
    }
}
