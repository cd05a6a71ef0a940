//! Unit tests for dine-table.

#[cfg(test)]
mod fork_tests {
    use dine_core::{ForkId, PhilosopherId};

    use crate::{ForkTable, TableError};

    const P0: PhilosopherId = PhilosopherId(0);
    const P1: PhilosopherId = PhilosopherId(1);

    #[test]
    fn new_table_has_every_fork_free() {
        let t = ForkTable::new(5);
        assert_eq!(t.len(), 5);
        assert_eq!(t.held_count(), 0);
        assert!(t.iter_held().all(|h| !h));
    }

    #[test]
    fn acquire_marks_both_forks() {
        let mut t = ForkTable::new(5);
        assert_eq!(t.try_acquire_pair(P0, ForkId(0), ForkId(1)), Ok(true));
        assert!(t.is_held(ForkId(0)));
        assert!(t.is_held(ForkId(1)));
        assert_eq!(t.holder(ForkId(1)), Some(P0));
        assert_eq!(t.held_count(), 2);
    }

    #[test]
    fn failed_acquire_leaves_table_untouched() {
        let mut t = ForkTable::new(5);
        t.try_acquire_pair(P0, ForkId(0), ForkId(1)).unwrap();
        let before = t.clone();

        // Fork 2 is free but fork 1 is not: neither may be taken.
        assert_eq!(t.try_acquire_pair(P1, ForkId(1), ForkId(2)), Ok(false));
        assert_eq!(t, before);
        assert!(!t.is_held(ForkId(2)));
    }

    #[test]
    fn release_frees_both_forks() {
        let mut t = ForkTable::new(3);
        t.try_acquire_pair(P1, ForkId(1), ForkId(2)).unwrap();
        t.release_pair(P1, ForkId(1), ForkId(2)).unwrap();
        assert_eq!(t.held_count(), 0);
        assert_eq!(t.try_acquire_pair(P0, ForkId(0), ForkId(1)), Ok(true));
    }

    #[test]
    fn release_by_non_holder_is_reported() {
        let mut t = ForkTable::new(5);
        t.try_acquire_pair(P0, ForkId(0), ForkId(1)).unwrap();
        let err = t.release_pair(P1, ForkId(0), ForkId(1)).unwrap_err();
        assert_eq!(err, TableError::NotHolder { fork: ForkId(0), who: P1, holder: Some(P0) });
        assert_eq!(t.held_count(), 2, "forks must stay held after a rejected release");
    }

    #[test]
    fn release_of_free_fork_is_reported() {
        let mut t = ForkTable::new(5);
        let err = t.release_pair(P0, ForkId(0), ForkId(1)).unwrap_err();
        assert!(matches!(err, TableError::NotHolder { holder: None, .. }));
    }

    #[test]
    fn malformed_pairs_rejected() {
        let mut t = ForkTable::new(2);
        assert_eq!(t.try_acquire_pair(P0, ForkId(1), ForkId(1)), Err(TableError::SameFork(ForkId(1))));
        assert_eq!(
            t.try_acquire_pair(P0, ForkId(0), ForkId(2)),
            Err(TableError::ForkOutOfRange { fork: ForkId(2), forks: 2 })
        );
        assert_eq!(t.held_count(), 0);
    }

    #[test]
    fn out_of_range_fork_reads_as_free() {
        let t = ForkTable::new(2);
        assert!(!t.is_held(ForkId(9)));
    }

    #[test]
    fn clear_frees_everything() {
        let mut t = ForkTable::new(4);
        t.try_acquire_pair(P0, ForkId(0), ForkId(1)).unwrap();
        t.try_acquire_pair(PhilosopherId(2), ForkId(2), ForkId(3)).unwrap();
        t.clear();
        assert_eq!(t.held_count(), 0);
    }
}

#[cfg(test)]
mod philosopher_tests {
    use dine_core::PhilosopherId;

    use crate::{PhilState, Philosopher};

    #[test]
    fn starts_thinking_with_no_forks() {
        let p = Philosopher::new(PhilosopherId(3));
        assert_eq!(p.id(), PhilosopherId(3));
        assert_eq!(p.state(), PhilState::Thinking);
        assert!(!p.holds_left() && !p.holds_right());
        assert_eq!(p.elapsed(), 0);
    }

    #[test]
    fn full_cycle_resets_timers() {
        let mut p = Philosopher::new(PhilosopherId(0));
        p.think();
        assert_eq!(p.think(), 2);

        p.become_hungry();
        assert_eq!(p.state(), PhilState::Hungry);
        assert_eq!(p.thinking_elapsed(), 0);
        assert_eq!(p.wait(), 1);

        p.start_eating();
        assert_eq!(p.state(), PhilState::Eating);
        assert!(p.holds_left() && p.holds_right());
        assert_eq!(p.hungry_elapsed(), 0);
        assert_eq!(p.eat(), 1);

        p.finish_eating();
        assert_eq!(p.state(), PhilState::Thinking);
        assert!(!p.holds_left() && !p.holds_right());
        assert_eq!(p.eating_elapsed(), 0);
        assert_eq!(p.thinking_elapsed(), 0);
    }

    #[test]
    fn give_up_returns_to_thinking_without_forks() {
        let mut p = Philosopher::new(PhilosopherId(1));
        p.become_hungry();
        p.wait();
        p.wait();
        p.give_up();
        assert_eq!(p.state(), PhilState::Thinking);
        assert_eq!(p.hungry_elapsed(), 0);
        assert_eq!(p.thinking_elapsed(), 0);
        assert!(!p.holds_left());
    }

    #[test]
    fn reset_keeps_identity() {
        let mut p = Philosopher::new(PhilosopherId(4));
        p.become_hungry();
        p.start_eating();
        p.eat();
        p.reset();
        assert_eq!(p, Philosopher::new(PhilosopherId(4)));
    }

    #[test]
    fn state_labels() {
        assert_eq!(PhilState::Thinking.to_string(), "thinking");
        assert_eq!(PhilState::Hungry.as_str(), "hungry");
        assert_eq!(PhilState::Eating.as_str(), "eating");
    }
}

#[cfg(test)]
mod seating_tests {
    use dine_core::{ForkId, PhilosopherId, Ring, TableConfig};

    use crate::{PhilState, Seating, TableError};

    fn ring(seats: usize) -> Ring {
        TableConfig::with_seats(seats).ring().unwrap()
    }

    #[test]
    fn new_seating_is_all_thinking() {
        let s = Seating::new(ring(5));
        assert_eq!(s.philosophers().len(), 5);
        assert_eq!(s.count_in(PhilState::Thinking), 5);
        assert_eq!(s.forks().held_count(), 0);
        assert!(s.check_invariants().is_ok());
    }

    #[test]
    fn consistent_eater_passes_invariants() {
        let mut s = Seating::new(ring(5));
        let (lo, hi) = s.ring().ordered_forks(PhilosopherId(4));
        {
            let (phils, forks) = s.split_mut();
            assert!(forks.try_acquire_pair(PhilosopherId(4), lo, hi).unwrap());
            phils[4].become_hungry();
            phils[4].start_eating();
        }
        assert!(s.check_invariants().is_ok());
        assert!(s.forks().is_held(ForkId(0)));
        assert!(s.forks().is_held(ForkId(4)));
    }

    #[test]
    fn eater_without_forks_fails_invariants() {
        let mut s = Seating::new(ring(3));
        {
            let (phils, _) = s.split_mut();
            phils[1].become_hungry();
            phils[1].start_eating();
        }
        assert!(matches!(s.check_invariants(), Err(TableError::HolderMismatch { .. })));
    }

    #[test]
    fn held_fork_without_eater_fails_invariants() {
        let mut s = Seating::new(ring(3));
        {
            let (_, forks) = s.split_mut();
            forks.try_acquire_pair(PhilosopherId(0), ForkId(0), ForkId(1)).unwrap();
        }
        assert!(s.check_invariants().is_err());
    }

    #[test]
    fn reset_restores_initial_state() {
        let table = ring(4);
        let mut s = Seating::new(table);
        {
            let (phils, forks) = s.split_mut();
            let (lo, hi) = table.ordered_forks(PhilosopherId(2));
            forks.try_acquire_pair(PhilosopherId(2), lo, hi).unwrap();
            phils[2].become_hungry();
            phils[2].start_eating();
            phils[0].think();
        }
        s.reset();
        assert_eq!(s, Seating::new(table));
    }
}
