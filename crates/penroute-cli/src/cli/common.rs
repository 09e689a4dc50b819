//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read};

use penroute::{PathGraph, PlotPath, SolverKind, cost_of_route, join_close_paths, reconstruct, verify_coverage};

/// Merge threshold used when `-m` is given without a value (document units).
pub const DEFAULT_MERGE_THRESHOLD: f64 = 1.0;

/// Read SVG content from a file, or from stdin when the path is `-`.
/// Errors are fatal for every command, so this reports and exits.
pub fn read_svg_input(path: &str) -> String {
    if path == "-" {
        eprintln!("Reading SVG from stdin...");
        let mut buffer = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        buffer
    } else {
        match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }
}

/// Parse input SVG into paths, exiting with a message on failure.
pub fn load_paths(svg_content: &str) -> Vec<PlotPath> {
    match penroute::extract_paths_from_svg(svg_content) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error parsing SVG: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the shared pipeline: optionally reorder with a solver, optionally
/// merge close paths. Progress and cost reporting go to stderr.
pub fn build_route(
    paths: &[PlotPath],
    noopt: bool,
    kind: SolverKind,
    merge: Option<f64>,
) -> Vec<PlotPath> {
    let initial_cost = cost_of_route(paths);
    eprintln!(
        "Loaded {} paths, pen-up travel {:.1}",
        paths.len(),
        initial_cost
    );

    let route = if noopt {
        paths.to_vec()
    } else {
        let graph = match PathGraph::build(paths) {
            Ok(graph) => graph,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        let solution = kind.build().solve(&graph);
        if let Err(e) = verify_coverage(&solution, graph.len()) {
            // A solver returning partial coverage is a bug, not bad input.
            eprintln!("Internal error in {} solver: {}", kind.name(), e);
            std::process::exit(1);
        }

        let route = reconstruct(&solution, paths);
        let optimized_cost = cost_of_route(&route);
        let savings = if initial_cost > 0.0 {
            ((initial_cost - optimized_cost) / initial_cost * 100.0).max(0.0)
        } else {
            0.0
        };
        eprintln!(
            "Pen-up travel after {} optimization: {:.1} ({:.0}% reduction)",
            kind.name(),
            optimized_cost,
            savings
        );
        route
    };

    match merge {
        Some(threshold) => {
            eprintln!("Paths before merging: {}", route.len());
            let merged = join_close_paths(&route, threshold);
            eprintln!("Paths after merging: {}", merged.len());
            merged
        }
        None => route,
    }
}

/// Convert a route to SVG output (one polyline per path, in drawing order).
pub fn route_to_svg(route: &[PlotPath], original_svg: &str) -> String {
    let viewbox = extract_viewbox(original_svg).unwrap_or_else(|| "0 0 1000 1000".to_string());

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">
<g stroke="black" stroke-width="0.5" fill="none" stroke-linecap="round">
"#,
        viewbox
    ));

    for path in route {
        svg.push_str(&polyline_element(path));
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Render a route with its pen-up transits for inspection: drawn paths in
/// light gray, the connecting moves between them in dashed red.
pub fn visualize_pen_transits(route: &[PlotPath], original_svg: &str) -> String {
    let viewbox = extract_viewbox(original_svg).unwrap_or_else(|| "0 0 1000 1000".to_string());

    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">
<g stroke="#bbbbbb" stroke-width="0.5" fill="none">
"##,
        viewbox
    ));

    for path in route {
        svg.push_str(&polyline_element(path));
    }
    svg.push_str("</g>\n");

    svg.push_str("<g stroke=\"red\" stroke-width=\"0.5\" stroke-dasharray=\"2,1\" fill=\"none\">\n");
    for pair in route.windows(2) {
        if let (Some(end), Some(start)) = (pair[0].end(), pair[1].start()) {
            svg.push_str(&format!(
                "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>\n",
                end.x, end.y, start.x, start.y
            ));
        }
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}

/// One `<polyline>` element for a path's vertex run.
fn polyline_element(path: &PlotPath) -> String {
    let points: String = path
        .points()
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    format!("  <polyline points=\"{}\"/>\n", points)
}

/// Extract viewBox from SVG content.
pub fn extract_viewbox(svg: &str) -> Option<String> {
    // Try viewBox (camelCase)
    if let Some(start) = svg.find("viewBox=\"") {
        let rest = &svg[start + 9..];
        if let Some(end) = rest.find('"') {
            return Some(rest[..end].to_string());
        }
    }
    // Try viewbox (lowercase)
    if let Some(start) = svg.find("viewbox=\"") {
        let rest = &svg[start + 9..];
        if let Some(end) = rest.find('"') {
            return Some(rest[..end].to_string());
        }
    }
    None
}

/// Document size in user units: viewBox width/height when present,
/// otherwise the bounding extent of the route itself.
pub fn document_size(svg: &str, route: &[PlotPath]) -> (f64, f64) {
    if let Some(viewbox) = extract_viewbox(svg) {
        let parts: Vec<f64> = viewbox
            .split_whitespace()
            .filter_map(|v| v.parse().ok())
            .collect();
        if parts.len() == 4 && parts[2] > 0.0 && parts[3] > 0.0 {
            return (parts[2], parts[3]);
        }
    }

    let mut max_x: f64 = 0.0;
    let mut max_y: f64 = 0.0;
    for path in route {
        for p in path.points() {
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
    }
    (max_x.max(1.0), max_y.max(1.0))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use penroute::Point;

    fn polyline(points: &[(f64, f64)]) -> PlotPath {
        let points: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        PlotPath::from_points(&points, None).unwrap()
    }

    #[test]
    fn viewbox_extraction() {
        let svg = r#"<svg viewBox="0 0 200 100"></svg>"#;
        assert_eq!(extract_viewbox(svg), Some("0 0 200 100".to_string()));
        assert_eq!(extract_viewbox("<svg></svg>"), None);
    }

    #[test]
    fn route_svg_contains_polylines() {
        let route = vec![
            polyline(&[(0.0, 0.0), (10.0, 0.0)]),
            polyline(&[(10.0, 5.0), (20.0, 5.0)]),
        ];
        let svg = route_to_svg(&route, r#"<svg viewBox="0 0 20 10"></svg>"#);
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(svg.contains("viewBox=\"0 0 20 10\""));
    }

    #[test]
    fn transit_visualization_draws_connectors() {
        let route = vec![
            polyline(&[(0.0, 0.0), (10.0, 0.0)]),
            polyline(&[(10.0, 5.0), (20.0, 5.0)]),
            polyline(&[(30.0, 5.0), (40.0, 5.0)]),
        ];
        let svg = visualize_pen_transits(&route, "<svg></svg>");
        // Two transits for three paths.
        assert_eq!(svg.matches("<line").count(), 2);
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn document_size_from_viewbox() {
        let (w, h) = document_size(r#"<svg viewBox="0 0 389 274"></svg>"#, &[]);
        assert_eq!((w, h), (389.0, 274.0));
    }

    #[test]
    fn document_size_falls_back_to_extent() {
        let route = vec![polyline(&[(0.0, 0.0), (120.0, 80.0)])];
        let (w, h) = document_size("<svg></svg>", &route);
        assert_eq!((w, h), (120.0, 80.0));
    }
}
