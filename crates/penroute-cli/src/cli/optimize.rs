//! The `optimize` command: reorder an SVG's paths to minimize pen-up
//! travel, optionally merge close paths, and write the result back out.

use std::fs;

use penroute::SolverKind;

use crate::cli::common::{
    DEFAULT_MERGE_THRESHOLD, build_route, load_paths, read_svg_input, route_to_svg,
    visualize_pen_transits,
};

pub fn cmd_optimize(args: &[String]) {
    let mut input: Option<&str> = None;
    let mut output: Option<&str> = None;
    let mut vis_output: Option<&str> = None;
    let mut merge: Option<f64> = None;
    let mut noopt = false;
    let mut solver = SolverKind::Greedy;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(&args[i]);
                }
            }
            "-v" | "--vis-output" => {
                i += 1;
                if i < args.len() {
                    vis_output = Some(&args[i]);
                }
            }
            "-m" | "--merge-paths" => {
                // Threshold value is optional; a bare flag uses the default.
                let explicit = args.get(i + 1).and_then(|v| v.parse::<f64>().ok());
                if let Some(threshold) = explicit {
                    merge = Some(threshold);
                    i += 1;
                } else {
                    merge = Some(DEFAULT_MERGE_THRESHOLD);
                }
            }
            "-n" | "--noopt" => {
                noopt = true;
            }
            "--solver" => {
                i += 1;
                if i < args.len() {
                    solver = SolverKind::from_name(&args[i]).unwrap_or_else(|| {
                        eprintln!("Unknown solver: {}. Use 'greedy' or 'local'.", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            path => {
                if input.is_none() {
                    input = Some(path);
                } else if output.is_none() {
                    output = Some(path);
                }
            }
        }
        i += 1;
    }

    let input = input.unwrap_or_else(|| {
        eprintln!("Error: SVG file required (use '-' for stdin)");
        std::process::exit(1);
    });

    let svg_content = read_svg_input(input);
    let paths = load_paths(&svg_content);
    let route = build_route(&paths, noopt, solver, merge);

    let result_svg = route_to_svg(&route, &svg_content);
    match output {
        Some(path) => {
            write_or_die(path, &result_svg);
            eprintln!("Wrote: {}", path);
        }
        None if input == "-" => {
            println!("{}", result_svg);
        }
        None => {
            let path = default_output_name(input);
            write_or_die(&path, &result_svg);
            eprintln!("Wrote: {}", path);
        }
    }

    if let Some(vis_path) = vis_output {
        write_or_die(vis_path, &visualize_pen_transits(&route, &svg_content));
        eprintln!("Wrote visualization: {}", vis_path);
    }
}

/// `drawing.svg` becomes `drawing-optimized.svg`.
fn default_output_name(input: &str) -> String {
    match input.strip_suffix(".svg") {
        Some(stem) => format!("{}-optimized.svg", stem),
        None => format!("{}-optimized.svg", input),
    }
}

fn write_or_die(path: &str, content: &str) {
    if let Err(e) = fs::write(path, content) {
        eprintln!("Error writing {}: {}", path, e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_derivation() {
        assert_eq!(default_output_name("a.svg"), "a-optimized.svg");
        assert_eq!(default_output_name("dir/b.svg"), "dir/b-optimized.svg");
        assert_eq!(default_output_name("noext"), "noext-optimized.svg");
    }
}
