//! Compare command implementation.
//!
//! Runs every solver strategy against the same input and reports pen-up
//! travel cost and wall-clock time for each, next to the document-order
//! baseline.

use std::time::Instant;

use penroute::{PathGraph, SolverKind, cost_of_route, reconstruct, verify_coverage};

use super::common::{load_paths, read_svg_input};

/// Execute the compare command.
pub fn cmd_compare(args: &[String]) {
    let mut svg_path: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            path if !path.starts_with('-') || path == "-" => {
                if svg_path.is_none() {
                    svg_path = Some(path);
                }
            }
            _ => {}
        }
        i += 1;
    }

    let svg_path = svg_path.unwrap_or_else(|| {
        eprintln!("Error: SVG file required (use '-' for stdin)");
        print_usage();
        std::process::exit(1);
    });

    let start_load = Instant::now();
    let svg_content = read_svg_input(svg_path);
    let paths = load_paths(&svg_content);
    let load_time = start_load.elapsed();

    println!("Loaded {} paths in {:?}", paths.len(), load_time);

    let baseline = cost_of_route(&paths);

    let graph = match PathGraph::build(&paths) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    println!("═══════════════════════════════════════════════");
    println!("  SOLVER COMPARISON");
    println!("═══════════════════════════════════════════════");
    println!("  Paths: {}", paths.len());
    println!("  Document order cost: {:.1}", baseline);
    println!("───────────────────────────────────────────────");

    for kind in SolverKind::all() {
        let start = Instant::now();
        let solution = kind.build().solve(&graph);
        let elapsed = start.elapsed();

        if let Err(e) = verify_coverage(&solution, graph.len()) {
            eprintln!("Internal error in {} solver: {}", kind.name(), e);
            std::process::exit(1);
        }

        let route = reconstruct(&solution, &paths);
        let cost = cost_of_route(&route);
        let savings = if baseline > 0.0 {
            ((baseline - cost) / baseline * 100.0).max(0.0)
        } else {
            0.0
        };

        println!(
            "  {:<8} cost {:>10.1}  ({:>4.0}% saved)  {:.2}ms",
            kind.name(),
            cost,
            savings,
            elapsed.as_secs_f64() * 1000.0
        );
    }

    println!("═══════════════════════════════════════════════");
}

fn print_usage() {
    eprintln!("Usage: penroute compare <input.svg>");
    eprintln!();
    eprintln!("Runs each solver strategy and reports pen-up travel and timing.");
}
