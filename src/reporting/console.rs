// src/reporting/console.rs
use std::time::Duration;

use colored::Colorize;

use crate::graph::{ChainResult, NodeId, PathResult, SocialGraph};

const RULE_WIDTH: usize = 50;

pub fn print_part_one_header() {
    println!();
    println!("{}", "Part 1: Graph-Based Shortest Path".bold());
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn print_part_two_header() {
    println!();
    println!(
        "{}",
        "Part 2: Dynamic Programming - Longest Chain of Influence".bold()
    );
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn print_algorithm_header(name: &str) {
    println!();
    println!("{}:", name.cyan());
}

/// Prints a path result: the distance line, then the route between brackets.
///
/// A missing route prints the -1 distance and an empty block, matching what
/// the search sentinel carries.
pub fn print_path(graph: &SocialGraph, result: &PathResult) {
    println!("Shortest Distance: {}", result.distance);
    println!("Path: [");
    println!("{}", format_route(graph, &result.nodes));
    println!("]");
}

/// Prints a chain result: the length line, then the user sequence.
pub fn print_chain(graph: &SocialGraph, result: &ChainResult) {
    println!("Longest Chain Length: {}", result.length);
    println!("User Sequence: [");
    println!("{}", format_route(graph, &result.nodes));
    println!("]");
}

pub fn print_elapsed(elapsed: Duration) {
    println!("Time taken: {}ms", elapsed.as_millis());
}

/// Renders nodes as `id (label)` joined by arrows, all on one line.
#[must_use]
pub fn format_route(graph: &SocialGraph, nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|&node| format!("{node} ({})", graph.user_label(node)))
        .collect::<Vec<_>>()
        .join(" → ")
}
