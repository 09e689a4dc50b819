//! CLI command implementations.
//!
//! - `optimize` - reorder and optionally merge paths, write the result SVG
//! - `gcode` - convert an SVG to plotter G-code via the same pipeline
//! - `compare` - run every solver strategy and report cost/time

pub mod common;
pub mod compare;
pub mod gcode;
pub mod optimize;

pub use compare::cmd_compare;
pub use gcode::cmd_gcode;
pub use optimize::cmd_optimize;
