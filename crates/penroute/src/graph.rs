//! Path graph - the distance model the solvers query.
//!
//! Every path contributes two nodes, one per traversal direction. The
//! distance between two nodes is the pen-up travel from the end of the
//! first node's path to the start of the second node's path. The two nodes
//! of a single path are mutually exclusive; their distance is marked with
//! `f64::MAX` so no solver can ever prefer that transition.
//!
//! Endpoints are cached at build time so distance queries never re-derive
//! coordinates from the segment lists.

use crate::geometry::{PlotPath, Point};

/// Which direction a path is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Forward,
    Reverse,
}

/// A path bound to one of its two traversal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub path_index: usize,
    pub orientation: Orientation,
}

impl Node {
    #[inline]
    pub fn forward(path_index: usize) -> Self {
        Self {
            path_index,
            orientation: Orientation::Forward,
        }
    }

    #[inline]
    pub fn reverse(path_index: usize) -> Self {
        Self {
            path_index,
            orientation: Orientation::Reverse,
        }
    }

    /// The other node of the same path.
    #[inline]
    pub fn flipped(&self) -> Node {
        match self.orientation {
            Orientation::Forward => Node::reverse(self.path_index),
            Orientation::Reverse => Node::forward(self.path_index),
        }
    }
}

/// Error type for graph construction.
#[derive(Debug)]
pub enum GraphError {
    /// A path with no coordinates at all cannot be routed.
    EmptyPath { index: usize },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::EmptyPath { index } => {
                write!(f, "path {} has no coordinates", index)
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Distance model over all path endpoints.
#[derive(Debug, Clone)]
pub struct PathGraph {
    /// (start, end) per path, forward orientation.
    endpoints: Vec<(Point, Point)>,
}

impl PathGraph {
    /// Build the graph from input paths.
    ///
    /// Fails fast on the first path with no coordinates; no partial graph
    /// is built. Zero-length paths (start == end) are accepted.
    pub fn build(paths: &[PlotPath]) -> Result<Self, GraphError> {
        let mut endpoints = Vec::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            match (path.start(), path.end()) {
                (Some(start), Some(end)) => endpoints.push((start, end)),
                _ => return Err(GraphError::EmptyPath { index }),
            }
        }
        Ok(Self { endpoints })
    }

    /// Number of paths (half the number of nodes).
    #[inline]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Where the pen lands when this node's path starts.
    #[inline]
    pub fn node_start(&self, node: Node) -> Point {
        let (start, end) = self.endpoints[node.path_index];
        match node.orientation {
            Orientation::Forward => start,
            Orientation::Reverse => end,
        }
    }

    /// Where the pen rests when this node's path finishes.
    #[inline]
    pub fn node_end(&self, node: Node) -> Point {
        let (start, end) = self.endpoints[node.path_index];
        match node.orientation {
            Orientation::Forward => end,
            Orientation::Reverse => start,
        }
    }

    /// Pen-up travel from the end of `a` to the start of `b`.
    ///
    /// Returns `f64::MAX` for the two nodes of the same path; that
    /// transition is never valid.
    #[inline]
    pub fn distance(&self, a: Node, b: Node) -> f64 {
        if a.path_index == b.path_index {
            return f64::MAX;
        }
        self.node_end(a).distance(self.node_start(b))
    }

    /// Both nodes of every path whose index is not yet visited, in
    /// ascending path order, forward before reverse.
    ///
    /// Solvers that scan this enumeration with a strict-less comparison get
    /// deterministic tie-breaking for free.
    pub fn unvisited_nodes<'a>(&'a self, visited: &'a [bool]) -> impl Iterator<Item = Node> + 'a {
        (0..self.len())
            .filter(move |&i| !visited.get(i).copied().unwrap_or(false))
            .flat_map(|i| [Node::forward(i), Node::reverse(i)])
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PlotPath;

    fn polyline(points: &[(f64, f64)]) -> PlotPath {
        let points: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        PlotPath::from_points(&points, None).unwrap()
    }

    #[test]
    fn build_empty_input() {
        let graph = PathGraph::build(&[]).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn build_rejects_empty_path() {
        let paths = vec![
            polyline(&[(0.0, 0.0), (1.0, 0.0)]),
            PlotPath::from_segments(Vec::new(), None),
        ];
        let err = PathGraph::build(&paths).unwrap_err();
        assert!(matches!(err, GraphError::EmptyPath { index: 1 }));
    }

    #[test]
    fn node_endpoints_respect_orientation() {
        let paths = vec![polyline(&[(0.0, 0.0), (10.0, 0.0)])];
        let graph = PathGraph::build(&paths).unwrap();

        let fwd = Node::forward(0);
        let rev = Node::reverse(0);
        assert_eq!(graph.node_start(fwd), Point::new(0.0, 0.0));
        assert_eq!(graph.node_end(fwd), Point::new(10.0, 0.0));
        assert_eq!(graph.node_start(rev), Point::new(10.0, 0.0));
        assert_eq!(graph.node_end(rev), Point::new(0.0, 0.0));
    }

    #[test]
    fn distance_between_paths() {
        let paths = vec![
            polyline(&[(0.0, 0.0), (0.0, 10.0)]),
            polyline(&[(0.0, 13.0), (0.0, 20.0)]),
        ];
        let graph = PathGraph::build(&paths).unwrap();

        // End of path 0 forward at (0,10) to start of path 1 forward at (0,13).
        let d = graph.distance(Node::forward(0), Node::forward(1));
        assert!((d - 3.0).abs() < 1e-12);

        // Reverse of path 1 starts at its far end (0,20).
        let d = graph.distance(Node::forward(0), Node::reverse(1));
        assert!((d - 10.0).abs() < 1e-12);
    }

    #[test]
    fn same_path_distance_is_invalid() {
        let paths = vec![polyline(&[(0.0, 0.0), (5.0, 0.0)])];
        let graph = PathGraph::build(&paths).unwrap();
        assert_eq!(graph.distance(Node::forward(0), Node::reverse(0)), f64::MAX);
        assert_eq!(graph.distance(Node::forward(0), Node::forward(0)), f64::MAX);
    }

    #[test]
    fn zero_length_path_is_legal() {
        let paths = vec![
            PlotPath::from_points(&[Point::new(3.0, 4.0)], None).unwrap(),
            polyline(&[(0.0, 0.0), (1.0, 0.0)]),
        ];
        let graph = PathGraph::build(&paths).unwrap();
        let d = graph.distance(Node::forward(0), Node::forward(1));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn unvisited_nodes_order() {
        let paths = vec![
            polyline(&[(0.0, 0.0), (1.0, 0.0)]),
            polyline(&[(2.0, 0.0), (3.0, 0.0)]),
            polyline(&[(4.0, 0.0), (5.0, 0.0)]),
        ];
        let graph = PathGraph::build(&paths).unwrap();

        let visited = vec![false, true, false];
        let nodes: Vec<Node> = graph.unvisited_nodes(&visited).collect();
        assert_eq!(
            nodes,
            vec![
                Node::forward(0),
                Node::reverse(0),
                Node::forward(2),
                Node::reverse(2),
            ]
        );
    }
}
