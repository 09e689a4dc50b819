//! Route reconstruction, cost reporting, and close-path merging.
//!
//! A solver's output is abstract - a visiting order over nodes. This module
//! turns it back into concrete geometry: an ordered list of paths with
//! orientation already applied, ready for a serializer. It also merges
//! adjacent paths whose connecting gap is small enough that a pen lift
//! between them is pointless.

use crate::geometry::PlotPath;
use crate::graph::{Node, Orientation};

/// Map a solution back to concrete paths in visiting order, reversing the
/// geometry of reverse-oriented nodes. Pure function.
pub fn reconstruct(solution: &[Node], paths: &[PlotPath]) -> Vec<PlotPath> {
    solution
        .iter()
        .map(|node| match node.orientation {
            Orientation::Forward => paths[node.path_index].clone(),
            Orientation::Reverse => paths[node.path_index].reversed(),
        })
        .collect()
}

/// Total pen-up travel of a route: the sum of gaps between the end of each
/// path and the start of the next. Zero for routes of length <= 1.
///
/// Pairs involving a path with no coordinates contribute nothing; such
/// paths never survive graph construction anyway.
pub fn cost_of_route(route: &[PlotPath]) -> f64 {
    route
        .windows(2)
        .filter_map(|w| Some(w[0].end()?.distance(w[1].start()?)))
        .sum()
}

/// Merge adjacent paths whose connecting gap is strictly below `threshold`.
///
/// Single left-to-right pass: an accumulator starts as the first path; each
/// subsequent path either gets its segments appended (gap below threshold)
/// or finishes the accumulator and starts a new one. Total segment count
/// and segment order are conserved; no path's internal geometry changes.
///
/// A threshold of 0.0 never merges, even across touching endpoints, so it
/// is a structural no-op. An infinite threshold chains the entire route
/// into one path.
pub fn join_close_paths(route: &[PlotPath], threshold: f64) -> Vec<PlotPath> {
    let mut merged = Vec::new();
    let mut rest = route.iter();
    let Some(first) = rest.next() else {
        return merged;
    };

    let mut accumulator = first.clone();
    for path in rest {
        let close = match (accumulator.end(), path.start()) {
            (Some(end), Some(start)) => end.distance(start) < threshold,
            _ => false,
        };

        if close {
            accumulator = accumulator.concat(path);
        } else {
            merged.push(std::mem::replace(&mut accumulator, path.clone()));
        }
    }
    merged.push(accumulator);

    merged
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::graph::PathGraph;
    use crate::greedy::greedy_walk;

    fn polyline(points: &[(f64, f64)]) -> PlotPath {
        let points: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        PlotPath::from_points(&points, None).unwrap()
    }

    /// The A/B/C scenario: B starts just past A's end, C is far away.
    fn abc_paths() -> Vec<PlotPath> {
        vec![
            polyline(&[(0.0, 0.0), (0.0, 10.0)]),   // A
            polyline(&[(0.0, 10.5), (0.0, 20.0)]),  // B
            polyline(&[(50.0, 50.0), (50.0, 60.0)]), // C
        ]
    }

    #[test]
    fn reconstruct_applies_orientation() {
        let paths = abc_paths();
        let solution = vec![Node::reverse(2), Node::forward(0), Node::reverse(1)];
        let route = reconstruct(&solution, &paths);

        assert_eq!(route.len(), 3);
        assert_eq!(route[0], paths[2].reversed());
        assert_eq!(route[1], paths[0]);
        assert_eq!(route[2], paths[1].reversed());
    }

    #[test]
    fn cost_of_trivial_routes() {
        assert_eq!(cost_of_route(&[]), 0.0);
        assert_eq!(cost_of_route(&[polyline(&[(0.0, 0.0), (9.0, 9.0)])]), 0.0);
    }

    #[test]
    fn cost_sums_gaps() {
        let route = abc_paths();
        // A end (0,10) -> B start (0,10.5): 0.5
        // B end (0,20) -> C start (50,50): sqrt(50^2 + 30^2)
        let expected = 0.5 + (2500.0f64 + 900.0).sqrt();
        assert!((cost_of_route(&route) - expected).abs() < 1e-9);
        assert!(cost_of_route(&route) >= 0.0);
    }

    #[test]
    fn greedy_route_beats_bad_order() {
        let paths = abc_paths();
        let graph = PathGraph::build(&paths).unwrap();
        let route = reconstruct(&greedy_walk(&graph), &paths);

        let order: Vec<_> = route.iter().map(|p| p.start()).collect();
        assert_eq!(order[0], paths[0].start());
        assert_eq!(order[1], paths[1].start());

        // A, C, B wastes two long transits.
        let bad = vec![paths[0].clone(), paths[2].clone(), paths[1].clone()];
        assert!(cost_of_route(&route) < cost_of_route(&bad));
    }

    #[test]
    fn merge_joins_close_pair_only() {
        let route = abc_paths();
        let merged = join_close_paths(&route, 1.0);

        assert_eq!(merged.len(), 2);
        // A+B combined keeps every segment.
        assert_eq!(merged[0].len(), route[0].len() + route[1].len());
        assert_eq!(merged[0].start(), route[0].start());
        assert_eq!(merged[0].end(), route[1].end());
        // C untouched.
        assert_eq!(merged[1], route[2]);
    }

    #[test]
    fn merge_conserves_segment_count() {
        let route = abc_paths();
        let total: usize = route.iter().map(PlotPath::len).sum();
        for threshold in [0.0, 0.4, 1.0, 100.0, f64::INFINITY] {
            let merged = join_close_paths(&route, threshold);
            let merged_total: usize = merged.iter().map(PlotPath::len).sum();
            assert_eq!(merged_total, total, "threshold {}", threshold);
        }
    }

    #[test]
    fn merge_threshold_zero_is_noop() {
        // Touching endpoints still must not merge at threshold zero.
        let route = vec![
            polyline(&[(0.0, 0.0), (5.0, 0.0)]),
            polyline(&[(5.0, 0.0), (5.0, 5.0)]),
        ];
        assert_eq!(join_close_paths(&route, 0.0), route);
    }

    #[test]
    fn merge_infinite_threshold_chains_everything() {
        let route = abc_paths();
        let merged = join_close_paths(&route, f64::INFINITY);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].len(), route.iter().map(PlotPath::len).sum());
    }

    #[test]
    fn merge_distant_paths_unchanged() {
        let route = vec![
            polyline(&[(0.0, 0.0), (1.0, 0.0)]),
            polyline(&[(100.0, 0.0), (101.0, 0.0)]),
            polyline(&[(200.0, 0.0), (201.0, 0.0)]),
        ];
        assert_eq!(join_close_paths(&route, 1.0), route);
    }

    #[test]
    fn merge_single_path_any_threshold() {
        let route = vec![polyline(&[(0.0, 0.0), (1.0, 1.0)])];
        assert_eq!(join_close_paths(&route, 0.0), route);
        assert_eq!(join_close_paths(&route, f64::INFINITY), route);
    }

    #[test]
    fn merge_empty_route() {
        assert!(join_close_paths(&[], 1.0).is_empty());
    }
}
