// src/graph/mod.rs
//! The social graph and the queries that run over it.
//!
//! [`model::SocialGraph`] owns the adjacency lists, influence scores,
//! degrees, and display labels. The algorithm modules borrow it immutably:
//! [`dijkstra`] for exact shortest paths, [`astar`] for the degree-guided
//! variant, and [`influence`] for the longest increasing-score chain.

pub mod astar;
pub mod dijkstra;
pub mod influence;
pub mod model;
pub mod types;

pub use model::SocialGraph;
pub use types::{ChainResult, NodeId, PathResult, Weight};

use std::collections::HashMap;

/// Rebuilds the start-to-end route from a predecessor map.
///
/// Walks backward from `end` and stops early if the chain is broken, so a
/// caller handing in a partial map gets a truncated route rather than a hang.
pub(crate) fn walk_parents(
    parent: &HashMap<NodeId, NodeId>,
    start: NodeId,
    end: NodeId,
) -> Vec<NodeId> {
    let mut nodes = Vec::new();
    let mut at = end;
    while at != start {
        nodes.push(at);
        match parent.get(&at) {
            Some(&prev) => at = prev,
            None => break,
        }
    }
    nodes.push(start);
    nodes.reverse();
    nodes
}
