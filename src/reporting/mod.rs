// src/reporting/mod.rs
//! Console output for load progress, path results, and chain results.
//!
//! The report frames are stable text: distances, bracketed route blocks, and
//! elapsed times print unstyled so the output is scriptable, while section
//! headers carry styling that drops out when stdout is not a terminal.

pub mod console;

pub use console::{
    print_algorithm_header, print_chain, print_elapsed, print_part_one_header, print_part_two_header,
    print_path,
};
