//! Nearest-neighbor route construction.
//!
//! Simple greedy approach - O(n²) node comparisons but usually good enough,
//! and n is the number of strokes, not geometry points. Typically reduces
//! pen-up travel by 30-50% compared to document order.

use crate::graph::{Node, PathGraph};
use crate::solver::{RouteSolver, Solution};

/// Walk the graph greedily, always moving to the nearest unvisited path.
///
/// Starts at the first path in forward orientation. Each step picks the
/// node minimizing pen-up travel from the current node's end; ties go to
/// the lowest path index, forward before reverse, so the output is fully
/// deterministic. Visited state is local to one invocation.
pub fn greedy_walk(graph: &PathGraph) -> Solution {
    let n = graph.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut solution = Vec::with_capacity(n);

    let mut current = Node::forward(0);
    visited[0] = true;
    solution.push(current);

    for _ in 1..n {
        let mut nearest: Option<(Node, f64)> = None;

        // unvisited_nodes enumerates candidates in tie-break order, so a
        // strict-less comparison keeps the first of any equidistant pair.
        for candidate in graph.unvisited_nodes(&visited) {
            let d = graph.distance(current, candidate);
            if nearest.is_none_or(|(_, best)| d < best) {
                nearest = Some((candidate, d));
            }
        }

        let Some((next, _)) = nearest else { break };
        visited[next.path_index] = true;
        solution.push(next);
        current = next;
    }

    solution
}

/// Nearest-neighbor strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl RouteSolver for GreedySolver {
    fn solve(&self, graph: &PathGraph) -> Solution {
        greedy_walk(graph)
    }
}

// ============================================================================
// TESTS
// ============================================================================
