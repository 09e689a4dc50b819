//! penroute - pen-up travel optimization for plotter SVGs
//!
//! Usage:
//!   penroute optimize <svg> [out.svg]   Reorder paths to cut pen-up travel
//!   penroute gcode <svg>                Convert to G-code for a plotter
//!   penroute compare <svg>              Compare solver strategies
//!   penroute <file.svg>                 Shorthand for optimize

use std::env;

mod cli;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "optimize" => {
                cli::cmd_optimize(&args[2..]);
                return;
            }
            "gcode" => {
                cli::cmd_gcode(&args[2..]);
                return;
            }
            "compare" => {
                cli::cmd_compare(&args[2..]);
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            other if other == "-" || other.ends_with(".svg") => {
                // Bare SVG argument: run the optimizer on it.
                cli::cmd_optimize(&args[1..]);
                return;
            }
            _ => {}
        }
    }

    print_usage(args.first().map(String::as_str).unwrap_or("penroute"));
    std::process::exit(1);
}

fn print_usage(prog: &str) {
    eprintln!("penroute - pen-up travel optimization for plotter SVGs");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} optimize <svg> [out.svg] [options]", prog);
    eprintln!("  {} gcode <svg> [options]", prog);
    eprintln!("  {} compare <svg>", prog);
    eprintln!();
    eprintln!("Optimize options:");
    eprintln!("  -o, --output <file>      Output SVG (default: <input>-optimized.svg)");
    eprintln!("  -m, --merge-paths [d]    Merge paths whose gap is below d (default: 1.0)");
    eprintln!("  -v, --vis-output <file>  Also write a pen-transit visualization SVG");
    eprintln!("  -n, --noopt              Don't reorder; pass paths through unchanged");
    eprintln!("  --solver <name>          Solver strategy: greedy, local (default: greedy)");
    eprintln!();
    eprintln!("Gcode options:");
    eprintln!("  -o, --output <file>      Output file (default: <input>.gcode)");
    eprintln!("  --config <file>          Machine profile JSON (default: EleksMaker A3)");
    eprintln!("  -m, --merge-paths [d]    Merge close paths before conversion");
    eprintln!("  -n, --noopt              Convert in document order");
    eprintln!("  --solver <name>          Solver strategy: greedy, local (default: greedy)");
    eprintln!();
    eprintln!("Stdin support:");
    eprintln!("  Use '-' as the input file to read SVG from stdin:");
    eprintln!("  cat drawing.svg | {} optimize - -o out.svg", prog);
}
