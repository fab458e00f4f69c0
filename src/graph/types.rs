// src/graph/types.rs
//! Shared identifiers and result types for the graph queries.

/// Node identifier as it appears in the data files.
pub type NodeId = i64;

/// Edge weight. Non-negative by data invariant; the loaders do not enforce it.
pub type Weight = i64;

/// Outcome of a shortest-path query.
///
/// "No path" is a first-class value, not an error: distance -1 with an empty
/// node list. Callers that care can branch on [`PathResult::is_found`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Total distance from start to end, or -1 when unreachable.
    pub distance: i64,
    /// Node ids from start to end inclusive, empty when unreachable.
    pub nodes: Vec<NodeId>,
}

impl PathResult {
    /// The sentinel "no path" value.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            distance: -1,
            nodes: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.distance >= 0
    }
}

/// Outcome of the longest-influence-chain query.
///
/// Length counts nodes, so a single scored node yields length 1. A graph with
/// no scored nodes at all yields the empty result (length 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainResult {
    pub length: usize,
    /// Node ids in chain order, influence strictly increasing.
    pub nodes: Vec<NodeId>,
}

impl ChainResult {
    /// The defined result for a graph with no influence scores.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            length: 0,
            nodes: Vec::new(),
        }
    }
}
