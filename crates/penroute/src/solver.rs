//! Solver contract and solution validation.
//!
//! A solver takes a [`PathGraph`] and produces a [`Solution`]: a visiting
//! order over nodes covering every path exactly once, via exactly one of
//! its two orientations. Any implementation satisfying that contract is
//! substitutable without changing route reconstruction or downstream code.

use crate::graph::{Node, PathGraph};

/// An ordered visiting sequence over nodes, one per input path.
pub type Solution = Vec<Node>;

/// Strategy interface for route solvers.
pub trait RouteSolver {
    /// Produce a solution covering every path in the graph exactly once.
    fn solve(&self, graph: &PathGraph) -> Solution;
}

/// Error type for solutions violating the coverage invariant.
///
/// A coverage violation is an internal bug, never input-dependent; callers
/// abort rather than repair by dropping or duplicating paths.
#[derive(Debug)]
pub enum CoverageError {
    LengthMismatch { expected: usize, actual: usize },
    DuplicatePath { path_index: usize },
    MissingPath { path_index: usize },
}

impl std::fmt::Display for CoverageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoverageError::LengthMismatch { expected, actual } => {
                write!(f, "solution visits {} paths, expected {}", actual, expected)
            }
            CoverageError::DuplicatePath { path_index } => {
                write!(f, "solution visits path {} more than once", path_index)
            }
            CoverageError::MissingPath { path_index } => {
                write!(f, "solution never visits path {}", path_index)
            }
        }
    }
}

impl std::error::Error for CoverageError {}

/// Check that a solution covers every path index exactly once.
pub fn verify_coverage(solution: &[Node], path_count: usize) -> Result<(), CoverageError> {
    if solution.len() != path_count {
        return Err(CoverageError::LengthMismatch {
            expected: path_count,
            actual: solution.len(),
        });
    }

    let mut seen = vec![false; path_count];
    for node in solution {
        if node.path_index >= path_count || seen[node.path_index] {
            return Err(CoverageError::DuplicatePath {
                path_index: node.path_index,
            });
        }
        seen[node.path_index] = true;
    }

    match seen.iter().position(|&s| !s) {
        Some(path_index) => Err(CoverageError::MissingPath { path_index }),
        None => Ok(()),
    }
}

/// Available solver strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverKind {
    /// Nearest-neighbor construction only.
    #[default]
    Greedy,
    /// Greedy seed improved by budgeted 2-opt local search.
    LocalSearch,
}

impl SolverKind {
    /// Get strategy name as string.
    pub fn name(&self) -> &'static str {
        match self {
            SolverKind::Greedy => "greedy",
            SolverKind::LocalSearch => "local",
        }
    }

    /// Parse strategy from string.
    pub fn from_name(name: &str) -> Option<SolverKind> {
        match name.to_lowercase().as_str() {
            "greedy" | "nn" | "nearest" => Some(SolverKind::Greedy),
            "local" | "local-search" | "2opt" => Some(SolverKind::LocalSearch),
            _ => None,
        }
    }

    /// All available strategies.
    pub fn all() -> &'static [SolverKind] {
        &[SolverKind::Greedy, SolverKind::LocalSearch]
    }

    /// Build a solver instance with default settings.
    pub fn build(&self) -> Box<dyn RouteSolver> {
        match self {
            SolverKind::Greedy => Box::new(crate::greedy::GreedySolver),
            SolverKind::LocalSearch => Box::new(crate::local_search::LocalSearchSolver::default()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
