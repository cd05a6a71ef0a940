//! Plain-text status rendering: the host's read-only view of a snapshot.

use dine_core::Ring;
use dine_sim::{PhilosopherView, TableSnapshot};
use dine_table::PhilState;

/// "in use" by this philosopher, "taken" by its neighbour, or "available".
fn fork_status(mine: bool, held: bool) -> &'static str {
    match (mine, held) {
        (true, _)      => "in use",
        (false, true)  => "taken",
        (false, false) => "available",
    }
}

fn title(state: PhilState) -> &'static str {
    match state {
        PhilState::Thinking => "Thinking",
        PhilState::Hungry   => "Hungry",
        PhilState::Eating   => "Eating",
    }
}

/// One line per philosopher, numbered from 1 like the seats on a menu card.
pub fn render(snapshot: &TableSnapshot, ring: Ring) -> String {
    let mut out = format!("── {} ──\n", snapshot.tick);
    for p in &snapshot.philosophers {
        out.push_str(&render_line(p, snapshot, ring));
        out.push('\n');
    }
    out.push_str(&format!(
        "thinking {} | hungry {} | eating {} | forks held {}/{}\n",
        snapshot.count_in(PhilState::Thinking),
        snapshot.count_in(PhilState::Hungry),
        snapshot.count_in(PhilState::Eating),
        snapshot.forks_held(),
        snapshot.forks.len(),
    ));
    out
}

fn render_line(p: &PhilosopherView, snapshot: &TableSnapshot, ring: Ring) -> String {
    let left = ring.left_fork(p.id);
    let right = ring.right_fork(p.id);
    let held = |i: usize| snapshot.forks.get(i).copied().unwrap_or(false);
    format!(
        "Philosopher {:<2} {:<9} left fork #{:<2} {:<9} right fork #{:<2} {}",
        p.id.0 + 1,
        title(p.state),
        left.0 + 1,
        fork_status(p.holds_left, held(left.index())),
        right.0 + 1,
        fork_status(p.holds_right, held(right.index())),
    )
}
