// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::graph::NodeId;

#[derive(Parser)]
#[command(name = "sociogram", version, about = "Social network path and influence analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Friendship edges file (id id weight triples)
    #[arg(long, value_name = "FILE")]
    pub graph: Option<PathBuf>,
    /// Influence scores file (id score pairs)
    #[arg(long, value_name = "FILE")]
    pub influences: Option<PathBuf>,
    /// User labels file (id first last per line)
    #[arg(long, value_name = "FILE")]
    pub labels: Option<PathBuf>,
    /// Print load statistics
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run Dijkstra and the degree-guided search between two users
    Path {
        /// Start node id; prompted for when omitted
        #[arg(long)]
        start: Option<NodeId>,
        /// End node id; prompted for when omitted
        #[arg(long)]
        end: Option<NodeId>,
    },
    /// Report the longest strictly-increasing influence chain
    Chain,
}
