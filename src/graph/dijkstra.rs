// src/graph/dijkstra.rs
//! Dijkstra shortest path over the social graph.
//!
//! The frontier is an ordered set of (distance, node) pairs: the smallest
//! distance pops first, ties broken by the smaller node id. That pop order
//! decides which of several equal-cost paths gets reported, so it is part of
//! the observable contract. Decrease-key is erase-then-reinsert; the set
//! holds at most one live entry per discovered node.

use std::collections::{BTreeSet, HashMap};

use super::model::SocialGraph;
use super::types::{NodeId, PathResult};
use super::walk_parents;

/// Computes the minimum total edge weight from `start` to `end` and the node
/// sequence that achieves it.
///
/// Stops as soon as `end` is popped from the frontier; unreachable or unknown
/// ids produce the -1/empty sentinel. `start == end` yields distance 0 and
/// the single-node path, whether or not the id appears in any edge.
#[must_use]
pub fn shortest_path(graph: &SocialGraph, start: NodeId, end: NodeId) -> PathResult {
    let mut dist: HashMap<NodeId, i64> = HashMap::new();
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
    let mut frontier: BTreeSet<(i64, NodeId)> = BTreeSet::new();

    dist.insert(start, 0);
    frontier.insert((0, start));

    while let Some((d, u)) = frontier.pop_first() {
        if u == end {
            break;
        }

        for &(v, weight) in graph.neighbors(u) {
            let candidate = d + weight;
            if candidate < distance_of(&dist, v) {
                // Drop the stale frontier entry before reinserting, otherwise
                // the node would pop twice at different priorities.
                if let Some(&old) = dist.get(&v) {
                    frontier.remove(&(old, v));
                }
                dist.insert(v, candidate);
                parent.insert(v, u);
                frontier.insert((candidate, v));
            }
        }
    }

    match dist.get(&end) {
        Some(&total) => PathResult {
            distance: total,
            nodes: walk_parents(&parent, start, end),
        },
        None => PathResult::not_found(),
    }
}

/// Best known distance; absent means unreached, i.e. infinite.
fn distance_of(dist: &HashMap<NodeId, i64>, node: NodeId) -> i64 {
    dist.get(&node).copied().unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Weight;

    fn graph(edges: &[(NodeId, NodeId, Weight)]) -> SocialGraph {
        let mut g = SocialGraph::new();
        for &(u, v, w) in edges {
            g.add_edge(u, v, w);
        }
        g
    }

    #[test]
    fn relaxation_finds_cheaper_two_hop_route() {
        let g = graph(&[(1, 2, 1), (2, 3, 1), (1, 3, 5)]);
        let r = shortest_path(&g, 1, 3);
        assert_eq!(r.distance, 2);
        assert_eq!(r.nodes, vec![1, 2, 3]);
    }

    #[test]
    fn same_node_query_is_zero_length() {
        let g = graph(&[(1, 2, 1)]);
        let r = shortest_path(&g, 1, 1);
        assert_eq!(r.distance, 0);
        assert_eq!(r.nodes, vec![1]);
    }

    #[test]
    fn same_node_query_works_for_unknown_id() {
        let g = graph(&[(1, 2, 1)]);
        let r = shortest_path(&g, 9, 9);
        assert_eq!(r.distance, 0);
        assert_eq!(r.nodes, vec![9]);
    }

    #[test]
    fn disconnected_components_yield_sentinel() {
        let g = graph(&[(1, 2, 1), (3, 4, 1)]);
        let r = shortest_path(&g, 1, 4);
        assert_eq!(r, PathResult::not_found());
        assert!(!r.is_found());
    }

    #[test]
    fn unknown_end_yields_sentinel() {
        let g = graph(&[(1, 2, 1)]);
        assert_eq!(shortest_path(&g, 1, 99), PathResult::not_found());
    }

    #[test]
    fn unknown_start_yields_sentinel() {
        let g = graph(&[(1, 2, 1)]);
        assert_eq!(shortest_path(&g, 99, 2), PathResult::not_found());
    }

    #[test]
    fn equal_cost_tie_goes_through_smaller_node_id() {
        // Routes 1-2-4 and 1-3-4 both cost 2; node 2 pops before node 3.
        let g = graph(&[(1, 2, 1), (1, 3, 1), (2, 4, 1), (3, 4, 1)]);
        let r = shortest_path(&g, 1, 4);
        assert_eq!(r.distance, 2);
        assert_eq!(r.nodes, vec![1, 2, 4]);
    }

    #[test]
    fn parallel_edges_use_the_cheaper_one() {
        let g = graph(&[(1, 2, 9), (1, 2, 2)]);
        let r = shortest_path(&g, 1, 2);
        assert_eq!(r.distance, 2);
        assert_eq!(r.nodes, vec![1, 2]);
    }

    #[test]
    fn zero_weight_edges_are_traversable() {
        let g = graph(&[(1, 2, 0), (2, 3, 0)]);
        let r = shortest_path(&g, 1, 3);
        assert_eq!(r.distance, 0);
        assert_eq!(r.nodes, vec![1, 2, 3]);
    }

    #[test]
    fn longer_route_with_fewer_hops_loses() {
        let g = graph(&[(1, 2, 2), (2, 3, 2), (3, 4, 2), (1, 4, 10)]);
        let r = shortest_path(&g, 1, 4);
        assert_eq!(r.distance, 6);
        assert_eq!(r.nodes, vec![1, 2, 3, 4]);
    }
}
