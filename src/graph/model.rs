// src/graph/model.rs
//! The social graph container and its mutation contract.

use std::collections::HashMap;

use super::types::{ChainResult, NodeId, PathResult, Weight};

/// A frozen social network: adjacency, influence scores, degree counts, and
/// display labels.
///
/// The graph is populated once by the loaders and queried read-only after
/// that. It is a plain owned value; the algorithms take `&SocialGraph` and
/// keep their working tables local, so queries never observe each other.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    /// Node id -> (neighbor, weight) pairs in insertion order. Every edge is
    /// stored twice, once per endpoint.
    pub(crate) adjacency: HashMap<NodeId, Vec<(NodeId, Weight)>>,
    pub(crate) influence: HashMap<NodeId, i64>,
    pub(crate) degrees: HashMap<NodeId, i64>,
    pub(crate) labels: HashMap<NodeId, String>,
}

impl SocialGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an undirected edge symmetrically and bumps both endpoint
    /// degrees. No de-duplication: parallel edges accumulate independently,
    /// so the structure is effectively a multigraph.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: Weight) {
        self.adjacency.entry(u).or_default().push((v, weight));
        self.adjacency.entry(v).or_default().push((u, weight));
        *self.degrees.entry(u).or_insert(0) += 1;
        *self.degrees.entry(v).or_insert(0) += 1;
    }

    /// Sets a node's influence score. Last write wins.
    pub fn add_influence_score(&mut self, node: NodeId, score: i64) {
        self.influence.insert(node, score);
    }

    /// Sets a node's display label. Last write wins.
    pub fn add_user_label(&mut self, node: NodeId, name: impl Into<String>) {
        self.labels.insert(node, name.into());
    }

    /// Stored label, or the synthesized `User <id>` default. Never fails.
    #[must_use]
    pub fn user_label(&self, node: NodeId) -> String {
        self.labels
            .get(&node)
            .cloned()
            .unwrap_or_else(|| format!("User {node}"))
    }

    /// Neighbor list in insertion order; empty for ids never seen in an edge.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)] {
        self.adjacency.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Total incident edge count; 0 for ids never seen in an edge.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> i64 {
        self.degrees.get(&node).copied().unwrap_or(0)
    }

    /// Influence score, if the node has one.
    #[must_use]
    pub fn influence_score(&self, node: NodeId) -> Option<i64> {
        self.influence.get(&node).copied()
    }

    /// True if u's neighbor list contains v. Linear scan of u's list, the
    /// same test the chain DP relies on.
    #[must_use]
    pub fn is_connected(&self, u: NodeId, v: NodeId) -> bool {
        self.neighbors(u).iter().any(|&(n, _)| n == v)
    }

    /// Nodes that appear in at least one edge.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Undirected edges counted once (each `add_edge` stores two entries).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    #[must_use]
    pub fn influence_count(&self) -> usize {
        self.influence.len()
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Shortest path by accumulated weight. See [`super::dijkstra`].
    #[must_use]
    pub fn dijkstra(&self, start: NodeId, end: NodeId) -> PathResult {
        super::dijkstra::shortest_path(self, start, end)
    }

    /// Degree-guided search. See [`super::astar`] for why its answer can
    /// differ from Dijkstra's.
    #[must_use]
    pub fn astar(&self, start: NodeId, end: NodeId) -> PathResult {
        super::astar::shortest_path(self, start, end)
    }

    /// Longest strictly-increasing influence chain. See [`super::influence`].
    #[must_use]
    pub fn longest_influence_chain(&self) -> ChainResult {
        super::influence::longest_chain(self)
    }
}
