//! Core geometry types for penroute.
//!
//! A drawing is a list of [`PlotPath`]s: continuous strokes the pen draws
//! without lifting. Everything the route optimizer needs from a path is its
//! endpoints; the segment list is carried through untouched so output
//! serializers see the exact input geometry.

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One straight piece of a plot path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// The same segment traversed in the opposite direction.
    #[inline]
    pub fn reversed(&self) -> Segment {
        Segment::new(self.end, self.start)
    }
}

/// One continuous drawable stroke: an ordered run of segments with a fixed
/// start and end point.
///
/// Paths are never mutated after construction. Reversal and merging both
/// produce new `PlotPath` values, so a path held by the caller is still
/// valid after the optimizer has run.
///
/// A path with zero segments carries no coordinates at all; it can be
/// represented but is rejected by graph construction. A zero-length path
/// (start == end) is a normal path.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPath {
    segments: Vec<Segment>,
    id: Option<String>,
}

impl PlotPath {
    /// Create a path from pre-built segments.
    pub fn from_segments(segments: Vec<Segment>, id: Option<String>) -> Self {
        Self { segments, id }
    }

    /// Create a path from a polyline.
    ///
    /// Returns `None` for an empty point list. A single point produces a
    /// degenerate zero-length path (a pen touch without travel).
    pub fn from_points(points: &[Point], id: Option<String>) -> Option<Self> {
        let first = *points.first()?;
        let segments = if points.len() == 1 {
            vec![Segment::new(first, first)]
        } else {
            points.windows(2).map(|w| Segment::new(w[0], w[1])).collect()
        };
        Some(Self { segments, id })
    }

    /// The segments of this path, in drawing order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Source element id, if the input format carried one.
    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Where the pen lands when this path starts. `None` only for a path
    /// with no segments.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(|s| s.start)
    }

    /// Where the pen rests when this path finishes.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(|s| s.end)
    }

    /// Total drawn length. Used for reporting only, never for ordering.
    pub fn length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// The vertex sequence of the path: start point followed by each
    /// segment's end point.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            points.push(first.start);
        }
        points.extend(self.segments.iter().map(|s| s.end));
        points
    }

    /// A new path drawing the same geometry in the opposite direction:
    /// segment order reversed, every segment flipped, start and end swapped.
    pub fn reversed(&self) -> PlotPath {
        let segments = self.segments.iter().rev().map(Segment::reversed).collect();
        PlotPath {
            segments,
            id: self.id.clone(),
        }
    }

    /// A new path drawing this path and then `other`, segments appended in
    /// order. Neither input's geometry is altered; the id of the first path
    /// is kept.
    pub fn concat(&self, other: &PlotPath) -> PlotPath {
        let mut segments = Vec::with_capacity(self.segments.len() + other.segments.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        PlotPath {
            segments,
            id: self.id.clone(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn polyline(points: &[(f64, f64)]) -> PlotPath {
        let points: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        PlotPath::from_points(&points, None).unwrap()
    }

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn path_endpoints_and_length() {
        let path = polyline(&[(0.0, 0.0), (3.0, 4.0), (3.0, 14.0)]);
        assert_eq!(path.len(), 2);
        assert_eq!(path.start(), Some(Point::new(0.0, 0.0)));
        assert_eq!(path.end(), Some(Point::new(3.0, 14.0)));
        assert_eq!(path.length(), 15.0);
    }

    #[test]
    fn from_points_empty_and_single() {
        assert!(PlotPath::from_points(&[], None).is_none());

        let touch = PlotPath::from_points(&[Point::new(2.0, 3.0)], None).unwrap();
        assert_eq!(touch.len(), 1);
        assert_eq!(touch.start(), touch.end());
        assert_eq!(touch.length(), 0.0);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let path = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let rev = path.reversed();

        assert_eq!(rev.start(), path.end());
        assert_eq!(rev.end(), path.start());
        assert_eq!(rev.len(), path.len());
    }

    #[test]
    fn double_reversal_is_identity() {
        let path = polyline(&[(1.0, 2.0), (3.0, 4.0), (5.0, 0.0), (7.0, 7.0)]);
        assert_eq!(path.reversed().reversed(), path);
    }

    #[test]
    fn concat_preserves_segments() {
        let a = polyline(&[(0.0, 0.0), (0.0, 10.0)]);
        let b = polyline(&[(0.0, 10.0), (5.0, 10.0), (5.0, 20.0)]);
        let joined = a.concat(&b);

        assert_eq!(joined.len(), a.len() + b.len());
        assert_eq!(joined.start(), a.start());
        assert_eq!(joined.end(), b.end());
        assert_eq!(joined.segments()[..a.len()], *a.segments());
        assert_eq!(joined.segments()[a.len()..], *b.segments());
    }

    #[test]
    fn points_round_trip() {
        let path = polyline(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let points = path.points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[2], Point::new(2.0, 0.0));
    }
}
