// src/cli/handlers.rs
//! One handler per command, plus the interactive session.

use std::time::Instant;

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::Cli;
use crate::cli::prompt;
use crate::config::Config;
use crate::graph::{NodeId, SocialGraph};
use crate::loader;
use crate::reporting::console;

/// Runs the full interactive session: load all three data files, prompt for
/// both endpoints, then print the shortest-path comparison and the longest
/// influence chain.
///
/// # Errors
/// Returns error if a data file cannot be read or stdin closes.
pub fn handle_session(cli: &Cli) -> Result<()> {
    let config = build_config(cli);
    let graph = load_graph(&config)?;

    let start = resolve_endpoint(&graph, None, "Enter Starting Node: ", "start")?;
    let end = resolve_endpoint(&graph, None, "Enter Ending Node: ", "end")?;

    console::print_part_one_header();
    report_paths(&graph, start, end);
    console::print_part_two_header();
    report_chain(&graph);
    Ok(())
}

/// Handles the path command. Endpoints omitted on the command line are
/// prompted for.
///
/// # Errors
/// Returns error if a data file cannot be read or stdin closes.
pub fn handle_path(cli: &Cli, start: Option<NodeId>, end: Option<NodeId>) -> Result<()> {
    let config = build_config(cli);
    let graph = load_graph(&config)?;

    let start = resolve_endpoint(&graph, start, "Enter Starting Node: ", "start")?;
    let end = resolve_endpoint(&graph, end, "Enter Ending Node: ", "end")?;

    console::print_part_one_header();
    report_paths(&graph, start, end);
    Ok(())
}

/// Handles the chain command.
///
/// # Errors
/// Returns error if a data file cannot be read.
pub fn handle_chain(cli: &Cli) -> Result<()> {
    let config = build_config(cli);
    let graph = load_graph(&config)?;
    console::print_part_two_header();
    report_chain(&graph);
    Ok(())
}

/// Takes the endpoint from the command line or prompts for it, then echoes
/// the selected node's label either way.
fn resolve_endpoint(
    graph: &SocialGraph,
    given: Option<NodeId>,
    prompt_text: &str,
    role: &str,
) -> Result<NodeId> {
    let node = match given {
        Some(node) => node,
        None => prompt::read_node(prompt_text)?,
    };
    println!("Selected {role} node: {}", graph.user_label(node));
    Ok(node)
}

fn build_config(cli: &Cli) -> Config {
    let mut config = Config::load();
    if let Some(path) = &cli.graph {
        config.data.graph = path.clone();
    }
    if let Some(path) = &cli.influences {
        config.data.influences = path.clone();
    }
    if let Some(path) = &cli.labels {
        config.data.labels = path.clone();
    }
    config.verbose = cli.verbose;
    config
}

fn load_graph(config: &Config) -> Result<SocialGraph> {
    let mut graph = SocialGraph::new();

    println!("Loading graph data...");
    let edges = loader::load_edges(&mut graph, &config.data.graph)?;
    println!("Loading influence data...");
    let scores = loader::load_influences(&mut graph, &config.data.influences)?;
    println!("Loading user labels...");
    let labels = loader::load_labels(&mut graph, &config.data.labels)?;

    if config.verbose {
        let summary = format!(
            "  {edges} edges, {scores} influence scores, {labels} labels across {} users",
            graph.node_count()
        );
        println!("{}", summary.as_str().dimmed());
    }
    Ok(graph)
}

fn report_paths(graph: &SocialGraph, start: NodeId, end: NodeId) {
    console::print_algorithm_header("Dijkstra's Algorithm");
    let timer = Instant::now();
    let result = graph.dijkstra(start, end);
    let elapsed = timer.elapsed();
    console::print_path(graph, &result);
    console::print_elapsed(elapsed);

    console::print_algorithm_header("A* Algorithm");
    let timer = Instant::now();
    let result = graph.astar(start, end);
    let elapsed = timer.elapsed();
    console::print_path(graph, &result);
    console::print_elapsed(elapsed);
}

fn report_chain(graph: &SocialGraph) {
    let timer = Instant::now();
    let result = graph.longest_influence_chain();
    let elapsed = timer.elapsed();
    console::print_chain(graph, &result);
    console::print_elapsed(elapsed);
}
