//! The per-tick transition algorithm.

use dine_core::{PhilosopherId, Ring, SimRng, TableConfig, Tick, TickOrder};
use dine_table::{ForkTable, PhilState, Philosopher, Seating, TableResult};

use crate::{SimObserver, SimResult, TickReport, Transition, TransitionKind};

/// Limits and visiting order for one table.  Holds no mutable state: the
/// table it advances is passed in on every call.
#[derive(Clone, Debug)]
pub struct Scheduler {
    ring:         Ring,
    think_limit:  u64,
    hunger_limit: u64,
    eat_limit:    u64,
    order:        Vec<PhilosopherId>,
}

impl Scheduler {
    /// Validate `config` and fix the visiting order.
    pub fn new(config: &TableConfig) -> SimResult<Self> {
        let ring = config.ring()?;
        let mut order: Vec<PhilosopherId> = match config.order {
            TickOrder::Ascending | TickOrder::Descending => ring.philosophers().collect(),
            TickOrder::Shuffled => SimRng::new(config.seed).permutation(ring.seats() as u32),
        };
        if config.order == TickOrder::Descending {
            order.reverse();
        }
        Ok(Self {
            ring,
            think_limit:  config.think_limit,
            hunger_limit: config.hunger_limit,
            eat_limit:    config.eat_limit,
            order,
        })
    }

    #[inline]
    pub fn ring(&self) -> Ring {
        self.ring
    }

    /// The order philosophers are visited in, every tick.
    #[inline]
    pub fn order(&self) -> &[PhilosopherId] {
        &self.order
    }

    /// Advance every philosopher by one tick.
    ///
    /// Each philosopher's update, fork table included, completes before the
    /// next one starts.  Errors only if the table was already inconsistent.
    pub fn run_tick<O: SimObserver>(
        &self,
        tick:     Tick,
        seating:  &mut Seating,
        observer: &mut O,
    ) -> SimResult<TickReport> {
        let mut transitions = Vec::new();
        {
            let (philosophers, forks) = seating.split_mut();
            for &id in &self.order {
                let philosopher = &mut philosophers[id.index()];
                if let Some(kind) = self.step(philosopher, forks)? {
                    let transition = Transition { philosopher: id, kind };
                    observer.on_transition(tick, &transition);
                    transitions.push(transition);
                }
            }
        }

        Ok(TickReport {
            tick,
            transitions,
            thinking:   seating.count_in(PhilState::Thinking),
            hungry:     seating.count_in(PhilState::Hungry),
            eating:     seating.count_in(PhilState::Eating),
            forks_held: seating.forks().held_count(),
        })
    }

    /// One tick for one philosopher.  Returns the transition taken, if any.
    pub fn step(
        &self,
        philosopher: &mut Philosopher,
        forks:       &mut ForkTable,
    ) -> TableResult<Option<TransitionKind>> {
        match philosopher.state() {
            PhilState::Thinking => {
                if philosopher.think() > self.think_limit {
                    philosopher.become_hungry();
                    return Ok(Some(TransitionKind::BecameHungry));
                }
            }

            PhilState::Hungry => {
                let (lo, hi) = self.ring.ordered_forks(philosopher.id());
                if forks.try_acquire_pair(philosopher.id(), lo, hi)? {
                    philosopher.start_eating();
                    return Ok(Some(TransitionKind::StartedEating));
                }
                // Giving up keeps a blocked philosopher from waiting forever;
                // it says nothing about who eats next.
                if philosopher.wait() > self.hunger_limit {
                    philosopher.give_up();
                    return Ok(Some(TransitionKind::GaveUp));
                }
            }

            PhilState::Eating => {
                if philosopher.eat() > self.eat_limit {
                    let (lo, hi) = self.ring.ordered_forks(philosopher.id());
                    forks.release_pair(philosopher.id(), lo, hi)?;
                    philosopher.finish_eating();
                    return Ok(Some(TransitionKind::FinishedEating));
                }
            }
        }
        Ok(None)
    }
}
