//! Per-tick results produced by the scheduler.

use dine_core::{PhilosopherId, Tick};
use dine_table::PhilState;

/// Why a philosopher changed state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionKind {
    /// Thinking → Hungry.
    BecameHungry,
    /// Hungry → Eating; both forks picked up.
    StartedEating,
    /// Eating → Thinking; both forks put down.
    FinishedEating,
    /// Hungry → Thinking after waiting too long.
    GaveUp,
}

impl TransitionKind {
    pub fn from_state(self) -> PhilState {
        match self {
            TransitionKind::BecameHungry   => PhilState::Thinking,
            TransitionKind::StartedEating  => PhilState::Hungry,
            TransitionKind::FinishedEating => PhilState::Eating,
            TransitionKind::GaveUp         => PhilState::Hungry,
        }
    }

    pub fn to_state(self) -> PhilState {
        match self {
            TransitionKind::BecameHungry   => PhilState::Hungry,
            TransitionKind::StartedEating  => PhilState::Eating,
            TransitionKind::FinishedEating => PhilState::Thinking,
            TransitionKind::GaveUp         => PhilState::Thinking,
        }
    }
}

/// One state change of one philosopher.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub philosopher: PhilosopherId,
    pub kind:        TransitionKind,
}

impl Transition {
    #[inline]
    pub fn from_state(&self) -> PhilState {
        self.kind.from_state()
    }

    #[inline]
    pub fn to_state(&self) -> PhilState {
        self.kind.to_state()
    }
}

/// Everything that happened during one tick, plus end-of-tick totals.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub tick:        Tick,
    /// In the order they happened.
    pub transitions: Vec<Transition>,
    pub thinking:    usize,
    pub hungry:      usize,
    pub eating:      usize,
    pub forks_held:  usize,
}

impl TickReport {
    fn count(&self, kind: TransitionKind) -> usize {
        self.transitions.iter().filter(|t| t.kind == kind).count()
    }

    pub fn meals_started(&self) -> usize {
        self.count(TransitionKind::StartedEating)
    }

    pub fn meals_finished(&self) -> usize {
        self.count(TransitionKind::FinishedEating)
    }

    pub fn became_hungry(&self) -> usize {
        self.count(TransitionKind::BecameHungry)
    }

    pub fn gave_up(&self) -> usize {
        self.count(TransitionKind::GaveUp)
    }

    /// The transition `philosopher` made this tick, if any.
    pub fn transition_of(&self, philosopher: PhilosopherId) -> Option<TransitionKind> {
        self.transitions
            .iter()
            .find(|t| t.philosopher == philosopher)
            .map(|t| t.kind)
    }
}
