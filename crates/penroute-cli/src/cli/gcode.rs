//! The `gcode` command: convert an SVG to plotter G-code, running the
//! route pipeline first so the machine draws in optimized order.
//!
//! The drawing is scaled uniformly to fit the machine bed (never scaled
//! up), then each path becomes a rapid move to its start, a pen-down
//! command, and feed moves through its vertices.

use std::fs;

use serde::{Deserialize, Serialize};

use penroute::{PlotPath, SolverKind};

use crate::cli::common::{
    DEFAULT_MERGE_THRESHOLD, build_route, document_size, load_paths, read_svg_input,
};

/// Plotter machine profile. Defaults describe an EleksMaker A3 pen plotter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Bed width in mm.
    pub bed_max_x: f64,
    /// Bed height in mm.
    pub bed_max_y: f64,
    /// Feed rate for drawing moves.
    pub feed_rate: f64,
    pub pen_down_cmd: String,
    pub pen_up_cmd: String,
    /// Emitted once at the start of the program.
    pub preamble: String,
    /// Emitted at the end, after the final pen lift.
    pub postamble: String,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            bed_max_x: 389.0,
            bed_max_y: 274.0,
            feed_rate: 5000.0,
            pen_down_cmd: "M03 S55 (pen down)".to_string(),
            pen_up_cmd: "M03 S35 (pen up)".to_string(),
            preamble: "G21 ;metric values\nG90 ;absolute positioning".to_string(),
            postamble: "G00 X0 Y0".to_string(),
        }
    }
}

impl MachineConfig {
    /// Load a profile from a JSON file; missing fields keep their defaults.
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
        serde_json::from_str(&content).map_err(|e| format!("{}: {}", path, e))
    }
}

/// Generate a G-code program drawing the route.
///
/// `doc_size` is the document extent in user units; the uniform scale
/// `min(bed_x/width, bed_y/height)` is capped at 1.0 so drawings that
/// already fit are emitted at native size. Points landing outside the bed
/// after scaling are skipped.
pub fn generate_gcode(route: &[PlotPath], doc_size: (f64, f64), config: &MachineConfig) -> String {
    let (width, height) = doc_size;
    let scale_x = config.bed_max_x / width;
    let scale_y = config.bed_max_y / height;
    let scale = scale_x.min(scale_y).min(1.0);

    let mut gcode = String::new();
    gcode.push_str(&config.preamble);
    gcode.push('\n');
    gcode.push_str(&format!("G1 F{:.2}\n", config.feed_rate));

    for path in route {
        let mut pen_down = false;
        for p in path.points() {
            let x = p.x * scale;
            let y = p.y * scale;
            if x < 0.0 || x > config.bed_max_x || y < 0.0 || y > config.bed_max_y {
                continue;
            }
            if !pen_down {
                gcode.push_str(&format!("G00 X{:.3} Y{:.3}\n", x, y));
                gcode.push_str(&config.pen_down_cmd);
                gcode.push('\n');
                pen_down = true;
            } else {
                gcode.push_str(&format!("G01 X{:.3} Y{:.3}\n", x, y));
            }
        }
        if pen_down {
            gcode.push_str(&config.pen_up_cmd);
            gcode.push('\n');
        }
    }

    gcode.push_str(&config.pen_up_cmd);
    gcode.push('\n');
    gcode.push_str(&config.postamble);
    gcode.push('\n');
    gcode
}

pub fn cmd_gcode(args: &[String]) {
    let mut input: Option<&str> = None;
    let mut output: Option<&str> = None;
    let mut config_path: Option<&str> = None;
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
            "--config" => {
                i += 1;
                if i < args.len() {
                    config_path = Some(&args[i]);
                }
            }
            "-m" | "--merge-paths" => {
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
                }
            }
        }
        i += 1;
    }

    let input = input.unwrap_or_else(|| {
        eprintln!("Error: SVG file required (use '-' for stdin)");
        std::process::exit(1);
    });

    let config = match config_path {
        Some(path) => match MachineConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading machine config: {}", e);
                std::process::exit(1);
            }
        },
        None => MachineConfig::default(),
    };

    let svg_content = read_svg_input(input);
    let paths = load_paths(&svg_content);
    let route = build_route(&paths, noopt, solver, merge);

    let doc_size = document_size(&svg_content, &route);
    let gcode = generate_gcode(&route, doc_size, &config);

    match output {
        Some("-") => println!("{}", gcode),
        Some(path) => write_or_die(path, &gcode),
        None if input == "-" => println!("{}", gcode),
        None => {
            let path = default_output_name(input);
            write_or_die(&path, &gcode);
        }
    }
}

/// `drawing.svg` becomes `drawing.gcode`.
fn default_output_name(input: &str) -> String {
    match input.strip_suffix(".svg") {
        Some(stem) => format!("{}.gcode", stem),
        None => format!("{}.gcode", input),
    }
}

fn write_or_die(path: &str, content: &str) {
    match fs::write(path, content) {
        Ok(()) => eprintln!("Wrote: {}", path),
        Err(e) => {
            eprintln!("Error writing {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
