//! Per-philosopher life-cycle state and timers.
//!
//! ```text
//!   Thinking ──(thought > think_limit)──▶ Hungry
//!   Hungry   ──(both forks acquired)────▶ Eating
//!   Hungry   ──(waited > hunger_limit)──▶ Thinking
//!   Eating   ──(ate > eat_limit)────────▶ Thinking
//! ```
//!
//! The transition methods below keep the timer and fork-flag invariants; the
//! decision of *when* to call them belongs to the scheduler in `dine-sim`.

use std::fmt;

use dine_core::PhilosopherId;

/// Life-cycle state of one philosopher.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PhilState {
    #[default]
    Thinking,
    Hungry,
    Eating,
}

impl PhilState {
    /// Stable lowercase label, used as the state column in output files.
    pub fn as_str(self) -> &'static str {
        match self {
            PhilState::Thinking => "thinking",
            PhilState::Hungry   => "hungry",
            PhilState::Eating   => "eating",
        }
    }
}

impl fmt::Display for PhilState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One seat at the table.
///
/// Only the timer matching `state` advances; the other two stay at zero.
/// Both fork flags are set exactly while `state == Eating`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Philosopher {
    id:               PhilosopherId,
    state:            PhilState,
    holds_left:       bool,
    holds_right:      bool,
    thinking_elapsed: u64,
    hungry_elapsed:   u64,
    eating_elapsed:   u64,
}

impl Philosopher {
    /// A philosopher who has just sat down: thinking, zero timers, no forks.
    pub fn new(id: PhilosopherId) -> Self {
        Self {
            id,
            state:            PhilState::Thinking,
            holds_left:       false,
            holds_right:      false,
            thinking_elapsed: 0,
            hungry_elapsed:   0,
            eating_elapsed:   0,
        }
    }

    #[inline] pub fn id(&self) -> PhilosopherId { self.id }
    #[inline] pub fn state(&self) -> PhilState { self.state }
    #[inline] pub fn holds_left(&self) -> bool { self.holds_left }
    #[inline] pub fn holds_right(&self) -> bool { self.holds_right }
    #[inline] pub fn thinking_elapsed(&self) -> u64 { self.thinking_elapsed }
    #[inline] pub fn hungry_elapsed(&self) -> u64 { self.hungry_elapsed }
    #[inline] pub fn eating_elapsed(&self) -> u64 { self.eating_elapsed }

    /// The timer of the current state.
    pub fn elapsed(&self) -> u64 {
        match self.state {
            PhilState::Thinking => self.thinking_elapsed,
            PhilState::Hungry   => self.hungry_elapsed,
            PhilState::Eating   => self.eating_elapsed,
        }
    }

    // ── Timers ────────────────────────────────────────────────────────────

    /// One more tick of thinking.  Returns the new thinking time.
    #[inline]
    pub fn think(&mut self) -> u64 {
        debug_assert_eq!(self.state, PhilState::Thinking);
        self.thinking_elapsed = self.thinking_elapsed.saturating_add(1);
        self.thinking_elapsed
    }

    /// One more tick of waiting for forks.  Returns the new waiting time.
    #[inline]
    pub fn wait(&mut self) -> u64 {
        debug_assert_eq!(self.state, PhilState::Hungry);
        self.hungry_elapsed = self.hungry_elapsed.saturating_add(1);
        self.hungry_elapsed
    }

    /// One more tick of eating.  Returns the new eating time.
    #[inline]
    pub fn eat(&mut self) -> u64 {
        debug_assert_eq!(self.state, PhilState::Eating);
        self.eating_elapsed = self.eating_elapsed.saturating_add(1);
        self.eating_elapsed
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Thinking → Hungry.
    pub fn become_hungry(&mut self) {
        debug_assert_eq!(self.state, PhilState::Thinking);
        self.state = PhilState::Hungry;
        self.thinking_elapsed = 0;
        self.hungry_elapsed = 0;
    }

    /// Hungry → Eating.  The caller has already acquired both forks.
    pub fn start_eating(&mut self) {
        debug_assert_eq!(self.state, PhilState::Hungry);
        self.state = PhilState::Eating;
        self.holds_left = true;
        self.holds_right = true;
        self.hungry_elapsed = 0;
        self.eating_elapsed = 0;
    }

    /// Eating → Thinking.  The caller releases both forks.
    pub fn finish_eating(&mut self) {
        debug_assert_eq!(self.state, PhilState::Eating);
        self.state = PhilState::Thinking;
        self.holds_left = false;
        self.holds_right = false;
        self.eating_elapsed = 0;
        self.thinking_elapsed = 0;
    }

    /// Hungry → Thinking without having eaten.
    pub fn give_up(&mut self) {
        debug_assert_eq!(self.state, PhilState::Hungry);
        self.state = PhilState::Thinking;
        self.hungry_elapsed = 0;
        self.thinking_elapsed = 0;
    }

    /// Back to the freshly seated state.
    pub fn reset(&mut self) {
        *self = Self::new(self.id);
    }
}
