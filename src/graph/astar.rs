// src/graph/astar.rs
//! Degree-guided search over the social graph.
//!
//! Shares Dijkstra's relaxation but orders the frontier by
//! f = accumulated distance + the node's degree. Degree is not a
//! goal-distance estimate, so the ordering is not admissible and the reported
//! distance can exceed the true minimum; hub-heavy routes get deferred even
//! when they are cheaper. Two further differences from [`super::dijkstra`]:
//! the search returns the moment `end` surfaces at the head of the frontier,
//! and improved entries are inserted without erasing the stale ones (a stale
//! pop just re-expands the node with its current g-score).

use std::collections::{BTreeSet, HashMap};

use super::model::SocialGraph;
use super::types::{NodeId, PathResult};
use super::walk_parents;

/// Runs the degree-guided search from `start` to `end`.
///
/// Returns the accumulated distance of the route it committed to, which may
/// be longer than Dijkstra's answer on the same graph, and the -1/empty
/// sentinel when the frontier drains without reaching `end`.
#[must_use]
pub fn shortest_path(graph: &SocialGraph, start: NodeId, end: NodeId) -> PathResult {
    let mut g_score: HashMap<NodeId, i64> = HashMap::new();
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
    let mut open: BTreeSet<(i64, NodeId)> = BTreeSet::new();

    g_score.insert(start, 0);
    open.insert((graph.degree(start), start));

    while let Some(&(_, current)) = open.first() {
        if current == end {
            return match g_score.get(&end) {
                Some(&total) => PathResult {
                    distance: total,
                    nodes: walk_parents(&parent, start, end),
                },
                None => PathResult::not_found(),
            };
        }
        open.pop_first();

        let Some(&g_current) = g_score.get(&current) else {
            continue;
        };

        for &(next, weight) in graph.neighbors(current) {
            let tentative = g_current + weight;
            if tentative < score_of(&g_score, next) {
                parent.insert(next, current);
                g_score.insert(next, tentative);
                open.insert((tentative + graph.degree(next), next));
            }
        }
    }

    PathResult::not_found()
}

/// Best known g-score; absent means unreached, i.e. infinite.
fn score_of(g_score: &HashMap<NodeId, i64>, node: NodeId) -> i64 {
    g_score.get(&node).copied().unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::dijkstra;
    use crate::graph::types::Weight;

    fn graph(edges: &[(NodeId, NodeId, Weight)]) -> SocialGraph {
        let mut g = SocialGraph::new();
        for &(u, v, w) in edges {
            g.add_edge(u, v, w);
        }
        g
    }

    /// Six-node ring: every weight 1, every degree 2.
    fn ring() -> SocialGraph {
        graph(&[(1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 5, 1), (5, 6, 1), (6, 1, 1)])
    }

    /// Cheap route through a hub, expensive route through a quiet node.
    /// Node 3 carries the 2-cost route but twenty extra leaf edges inflate
    /// its degree; node 2 carries the 20-cost route at degree 2.
    fn hub_trap() -> SocialGraph {
        let mut g = graph(&[(1, 2, 10), (2, 4, 10), (1, 3, 1), (3, 4, 1)]);
        for leaf in 5..25 {
            g.add_edge(3, leaf, 100);
        }
        g
    }

    #[test]
    fn matches_dijkstra_distance_on_uniform_degree() {
        let g = ring();
        let a = shortest_path(&g, 1, 4);
        let d = dijkstra::shortest_path(&g, 1, 4);
        assert_eq!(a.distance, d.distance);
        assert_eq!(a.distance, 3);
    }

    #[test]
    fn degree_bias_can_overshoot_the_true_shortest_path() {
        let g = hub_trap();
        let a = shortest_path(&g, 1, 4);
        let d = dijkstra::shortest_path(&g, 1, 4);

        assert_eq!(d.distance, 2);
        assert_eq!(d.nodes, vec![1, 3, 4]);
        // The hub's inflated f-score keeps the cheap route buried until the
        // expensive one has already reached the end node.
        assert_eq!(a.distance, 20);
        assert_eq!(a.nodes, vec![1, 2, 4]);
    }

    #[test]
    fn same_node_query_is_zero_length() {
        let g = ring();
        let r = shortest_path(&g, 5, 5);
        assert_eq!(r.distance, 0);
        assert_eq!(r.nodes, vec![5]);
    }

    #[test]
    fn disconnected_components_yield_sentinel() {
        let g = graph(&[(1, 2, 1), (3, 4, 1)]);
        assert_eq!(shortest_path(&g, 1, 4), PathResult::not_found());
    }

    #[test]
    fn unknown_ids_yield_sentinel() {
        let g = ring();
        assert_eq!(shortest_path(&g, 1, 99), PathResult::not_found());
        assert_eq!(shortest_path(&g, 99, 1), PathResult::not_found());
    }

    #[test]
    fn cheap_two_hop_route_beats_direct_edge() {
        let g = graph(&[(1, 2, 1), (2, 3, 1), (1, 3, 5)]);
        let r = shortest_path(&g, 1, 3);
        assert_eq!(r.distance, 2);
        assert_eq!(r.nodes, vec![1, 2, 3]);
    }
}
