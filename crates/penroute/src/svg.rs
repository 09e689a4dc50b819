//! SVG input adapter - extract drawable paths from SVG content.
//!
//! Uses usvg for complete SVG resolution (CSS, shape-to-path conversion,
//! etc.) then walks the tree collecting path data. Bézier curves are
//! flattened into line segments with lyon_geom at a fixed tolerance.
//!
//! Unlike a polygon extractor, this keeps open strokes open: every subpath
//! (each MoveTo) becomes its own [`PlotPath`], and a Close command adds the
//! segment back to the subpath's first point.

use crate::geometry::{PlotPath, Point};
use lyon_geom::{CubicBezierSegment, QuadraticBezierSegment, point};

/// Error type for SVG input.
#[derive(Debug)]
pub enum SvgError {
    ParseError(String),
    NoPaths,
}

impl std::fmt::Display for SvgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SvgError::ParseError(msg) => write!(f, "SVG parse error: {}", msg),
            SvgError::NoPaths => write!(f, "No drawable paths found in SVG"),
        }
    }
}

impl std::error::Error for SvgError {}

/// Tolerance for curve flattening.
/// Lower = more points, smoother curves, slower.
/// 0.1 is good for plotters (sub-pixel accuracy at typical scales).
const CURVE_TOLERANCE: f32 = 0.1;

/// Extract all drawable paths from an SVG document.
pub fn extract_paths_from_svg(svg_content: &str) -> Result<Vec<PlotPath>, SvgError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| SvgError::ParseError(e.to_string()))?;

    let mut paths = Vec::new();
    extract_from_group(tree.root(), &mut paths);

    if paths.is_empty() {
        Err(SvgError::NoPaths)
    } else {
        Ok(paths)
    }
}

/// Recursively extract paths from a usvg Group.
fn extract_from_group(group: &usvg::Group, paths: &mut Vec<PlotPath>) {
    for child in group.children() {
        extract_from_node(child, paths);
    }
}

fn extract_from_node(node: &usvg::Node, paths: &mut Vec<PlotPath>) {
    match node {
        usvg::Node::Group(group) => {
            extract_from_group(group, paths);
        }
        usvg::Node::Path(path) => {
            path_to_plot_paths(path, paths);
        }
        // Ignore text, images, etc.
        _ => {}
    }
}

/// Split a usvg path into one PlotPath per subpath, flattening curves.
fn path_to_plot_paths(path: &usvg::Path, paths: &mut Vec<PlotPath>) {
    let data = path.data();
    let id = if path.id().is_empty() {
        None
    } else {
        Some(path.id().to_string())
    };

    let mut points: Vec<Point> = Vec::new();
    let mut subpath_start: Option<(f32, f32)> = None;
    let mut last_point: Option<(f32, f32)> = None;

    for cmd in data.segments() {
        match cmd {
            usvg::tiny_skia_path::PathSegment::MoveTo(p) => {
                // New subpath - flush whatever came before it.
                flush_subpath(&mut points, &id, paths);
                points.push(Point::new(p.x as f64, p.y as f64));
                subpath_start = Some((p.x, p.y));
                last_point = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::LineTo(p) => {
                points.push(Point::new(p.x as f64, p.y as f64));
                last_point = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::QuadTo(ctrl, p) => {
                if let Some((lx, ly)) = last_point {
                    let curve = QuadraticBezierSegment {
                        from: point(lx, ly),
                        ctrl: point(ctrl.x, ctrl.y),
                        to: point(p.x, p.y),
                    };
                    curve.for_each_flattened(CURVE_TOLERANCE, &mut |segment| {
                        points.push(Point::new(segment.to.x as f64, segment.to.y as f64));
                    });
                } else {
                    points.push(Point::new(p.x as f64, p.y as f64));
                }
                last_point = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::CubicTo(ctrl1, ctrl2, p) => {
                if let Some((lx, ly)) = last_point {
                    let curve = CubicBezierSegment {
                        from: point(lx, ly),
                        ctrl1: point(ctrl1.x, ctrl1.y),
                        ctrl2: point(ctrl2.x, ctrl2.y),
                        to: point(p.x, p.y),
                    };
                    curve.for_each_flattened(CURVE_TOLERANCE, &mut |segment| {
                        points.push(Point::new(segment.to.x as f64, segment.to.y as f64));
                    });
                } else {
                    points.push(Point::new(p.x as f64, p.y as f64));
                }
                last_point = Some((p.x, p.y));
            }
            usvg::tiny_skia_path::PathSegment::Close => {
                // Draw back to the subpath start.
                if let Some((sx, sy)) = subpath_start {
                    points.push(Point::new(sx as f64, sy as f64));
                    last_point = Some((sx, sy));
                }
            }
        }
    }

    flush_subpath(&mut points, &id, paths);
}

/// Turn accumulated subpath points into a PlotPath, dropping duplicates
/// introduced by curve flattening. Subpaths with a single point (a bare
/// MoveTo) draw nothing and are skipped.
fn flush_subpath(points: &mut Vec<Point>, id: &Option<String>, paths: &mut Vec<PlotPath>) {
    if points.len() >= 2 {
        points.dedup_by(|a, b| {
            let dx = (a.x - b.x).abs();
            let dy = (a.y - b.y).abs();
            dx < 1e-6 && dy < 1e-6
        });
    }

    if points.len() >= 2 {
        if let Some(path) = PlotPath::from_points(points, id.clone()) {
            paths.push(path);
        }
    }
    points.clear();
}

// ============================================================================
// TESTS
// ============================================================================
