//! Budgeted 2-opt improvement over the greedy route.
//!
//! Seeds with the nearest-neighbor solution, then repeatedly applies two
//! move families until a full pass makes no progress or the budget runs
//! out:
//!
//! - **Orientation flip**: traverse one path in the other direction,
//!   changing the two transits around it.
//! - **2-opt reversal**: reverse a subsequence of the visiting order,
//!   flipping the orientation of every node inside it. The flips keep
//!   every transit inside the span at its old length, so only the two
//!   boundary transits change.
//!
//! Only improving moves are accepted, so the result never costs more than
//! the greedy seed. On budget exhaustion the best solution found so far is
//! returned; exhaustion is not an error.

use std::time::{Duration, Instant};

use crate::graph::{Node, PathGraph};
use crate::greedy::greedy_walk;
use crate::solver::{RouteSolver, Solution, verify_coverage};

/// Ignore cost deltas below this when deciding whether a move improved.
const MIN_IMPROVEMENT: f64 = 1e-10;

/// Local-search strategy with a bounded compute budget.
#[derive(Debug, Clone)]
pub struct LocalSearchSolver {
    /// Maximum number of full improvement passes.
    pub max_passes: usize,
    /// Wall-clock budget; `None` disables the deadline.
    pub deadline: Option<Duration>,
}

impl Default for LocalSearchSolver {
    fn default() -> Self {
        Self {
            max_passes: 200,
            deadline: Some(Duration::from_secs(5)),
        }
    }
}

impl LocalSearchSolver {
    pub fn with_max_passes(max_passes: usize) -> Self {
        Self {
            max_passes,
            ..Self::default()
        }
    }

    pub fn with_deadline(deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::default()
        }
    }

    fn expired(&self, started: Instant) -> bool {
        self.deadline.is_some_and(|limit| started.elapsed() >= limit)
    }
}

impl RouteSolver for LocalSearchSolver {
    fn solve(&self, graph: &PathGraph) -> Solution {
        let seed = greedy_walk(graph);
        if seed.len() < 2 {
            return seed;
        }

        let started = Instant::now();
        let mut solution = seed.clone();
        let mut current_cost = solution_cost(graph, &solution);
        let n = solution.len();

        let mut improved = true;
        let mut passes = 0;

        'search: while improved && passes < self.max_passes {
            improved = false;
            passes += 1;

            // Move 1: flip a single node's orientation.
            for pos in 0..n {
                if self.expired(started) {
                    break 'search;
                }

                let original = solution[pos];
                solution[pos] = original.flipped();
                let new_cost = solution_cost(graph, &solution);

                if new_cost < current_cost - MIN_IMPROVEMENT {
                    current_cost = new_cost;
                    improved = true;
                } else {
                    solution[pos] = original; // Undo
                }
            }

            // Move 2: 2-opt subsequence reversal.
            for i in 0..n - 1 {
                for j in (i + 2)..n {
                    if self.expired(started) {
                        break 'search;
                    }

                    reverse_span(&mut solution, i + 1, j);
                    let new_cost = solution_cost(graph, &solution);

                    if new_cost < current_cost - MIN_IMPROVEMENT {
                        current_cost = new_cost;
                        improved = true;
                    } else {
                        reverse_span(&mut solution, i + 1, j); // Undo
                    }
                }
            }
        }

        // Moves preserve coverage by construction; if that invariant ever
        // breaks, the greedy seed is still feasible.
        if verify_coverage(&solution, graph.len()).is_err() {
            return seed;
        }
        solution
    }
}

/// Total pen-up travel of a solution.
pub fn solution_cost(graph: &PathGraph, solution: &[Node]) -> f64 {
    solution.windows(2).map(|w| graph.distance(w[0], w[1])).sum()
}

/// Reverse `solution[from..=to]` and flip every node inside.
///
/// Reversing the visiting order of a span means each path in it is reached
/// from the opposite side; flipping the orientations preserves the span's
/// internal transit costs exactly.
fn reverse_span(solution: &mut [Node], from: usize, to: usize) {
    solution[from..=to].reverse();
    for node in &mut solution[from..=to] {
        *node = node.flipped();
    }
}

// ============================================================================
// TESTS
// ============================================================================
