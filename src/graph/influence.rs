// src/graph/influence.rs
//! Longest chain of strictly increasing influence.
//!
//! A chain is a sequence of users where each step follows a friendship edge
//! and each user's influence score is strictly greater than the previous
//! one's. Users with equal scores never chain, and users without a score are
//! not considered at all.
//!
//! The search is a pairwise DP over the score-ordered node list: for every
//! node, every lower-scored node that came earlier in the ordering is tried
//! as a predecessor. Ordering is by (score, id) ascending, which pins down
//! every tie: among equally long chains the one discovered first wins, and
//! when no chain exists at all the node with the smallest (score, id) is the
//! reported singleton.

use std::collections::{BTreeSet, HashMap};

use super::model::SocialGraph;
use super::types::{ChainResult, NodeId};

/// Finds the longest strictly-increasing influence chain in `graph`.
///
/// Returns the empty result when no node has an influence score. Quadratic
/// in the number of scored nodes.
#[must_use]
pub fn longest_chain(graph: &SocialGraph) -> ChainResult {
    let ordered: BTreeSet<(i64, NodeId)> = graph
        .influence
        .iter()
        .map(|(&node, &score)| (score, node))
        .collect();

    let Some(&(_, first_node)) = ordered.first() else {
        return ChainResult::empty();
    };

    let entries: Vec<(i64, NodeId)> = ordered.into_iter().collect();

    // Absent dp entry means the node chains only with itself (length 1).
    let mut dp: HashMap<NodeId, usize> = HashMap::new();
    let mut predecessor: HashMap<NodeId, NodeId> = HashMap::new();

    let mut best_len: usize = 1;
    let mut best_end: NodeId = first_node;

    for i in 1..entries.len() {
        let (score, node) = entries[i];
        let mut node_len = chain_len(&dp, node);

        for &(prev_score, prev_node) in &entries[..i] {
            if prev_score >= score || !graph.is_connected(prev_node, node) {
                continue;
            }
            let extended = chain_len(&dp, prev_node) + 1;
            if extended > node_len {
                node_len = extended;
                dp.insert(node, extended);
                predecessor.insert(node, prev_node);
                if extended > best_len {
                    best_len = extended;
                    best_end = node;
                }
            }
        }
    }

    let mut nodes = vec![best_end];
    let mut at = best_end;
    while let Some(&prev) = predecessor.get(&at) {
        nodes.push(prev);
        at = prev;
    }
    nodes.reverse();

    ChainResult {
        length: nodes.len(),
        nodes,
    }
}

fn chain_len(dp: &HashMap<NodeId, usize>, node: NodeId) -> usize {
    dp.get(&node).copied().unwrap_or(1)
}
