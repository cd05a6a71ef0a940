//! Plain data row types written by output backends.

use dine_table::PhilState;

/// One philosopher at the end of a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhilosopherSnapshotRow {
    pub run:            u32,
    pub tick:           u64,
    pub philosopher_id: u32,
    pub state:          PhilState,
    pub holds_left:     bool,
    pub holds_right:    bool,
}

/// End-of-tick totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub run:           u32,
    pub tick:          u64,
    pub thinking:      u32,
    pub hungry:        u32,
    pub eating:        u32,
    pub forks_held:    u32,
    pub meals_started: u32,
    pub gave_up:       u32,
}
