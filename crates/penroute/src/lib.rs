//! # penroute
//!
//! Route optimization for pen-plotter output.
//!
//! Given a set of disjoint drawable paths, penroute computes an order - and
//! for each path a traversal direction - that minimizes total pen-up travel
//! between the end of one path and the start of the next, then optionally
//! merges adjacent paths whose connecting gap is below a threshold.
//!
//! The pipeline: input paths → [`PathGraph`] → a [`RouteSolver`]
//! (nearest-neighbor, or 2-opt local search) → [`Solution`] →
//! [`reconstruct`] → route → [`cost_of_route`] reporting → optional
//! [`join_close_paths`] → final route.

pub mod geometry;
pub mod graph;
pub mod greedy;
pub mod local_search;
pub mod route;
pub mod solver;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use geometry::{PlotPath, Point, Segment};
pub use graph::{GraphError, Node, Orientation, PathGraph};
pub use greedy::{GreedySolver, greedy_walk};
pub use local_search::{LocalSearchSolver, solution_cost};
pub use route::{cost_of_route, join_close_paths, reconstruct};
pub use solver::{CoverageError, RouteSolver, Solution, SolverKind, verify_coverage};
pub use svg::{SvgError, extract_paths_from_svg};
