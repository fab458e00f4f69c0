// tests/unit_graph.rs
//! Queries over a two-community network joined by a single bridge.
//!
//! Nodes 1-6 and 7-12 form the communities, edge 6-7 is the bridge, and
//! 13-14 sit in a separate component. Influence scores are arranged so
//! exactly one maximal increasing chain exists.

use sociogram_core::graph::{PathResult, SocialGraph};

fn network() -> SocialGraph {
    let mut g = SocialGraph::new();
    let edges = [
        (1, 2, 2),
        (1, 3, 4),
        (2, 3, 1),
        (2, 4, 7),
        (3, 5, 3),
        (4, 6, 1),
        (5, 6, 5),
        (6, 7, 1),
        (7, 8, 2),
        (8, 9, 1),
        (7, 10, 6),
        (9, 10, 2),
        (10, 11, 1),
        (11, 12, 3),
        (9, 12, 8),
        (13, 14, 1),
    ];
    for (u, v, w) in edges {
        g.add_edge(u, v, w);
    }
    let scores = [
        (1, 10),
        (2, 20),
        (3, 15),
        (4, 30),
        (6, 40),
        (7, 55),
        (8, 60),
        (9, 70),
        (10, 45),
        (11, 80),
        (12, 90),
    ];
    for (node, score) in scores {
        g.add_influence_score(node, score);
    }
    g.add_user_label(1, "Maya Chen");
    g.add_user_label(12, "Omar Haddad");
    g
}

#[test]
fn dijkstra_threads_the_bridge() {
    let g = network();
    let r = g.dijkstra(1, 12);
    assert_eq!(r.distance, 20);
    assert_eq!(r.nodes, vec![1, 2, 4, 6, 7, 8, 9, 10, 11, 12]);
}

#[test]
fn astar_agrees_on_this_topology() {
    let g = network();
    let a = g.astar(1, 12);
    let d = g.dijkstra(1, 12);
    assert_eq!(a.distance, d.distance);
    assert_eq!(a.nodes, d.nodes);
}

#[test]
fn cross_component_queries_return_the_sentinel() {
    let g = network();
    assert_eq!(g.dijkstra(1, 13), PathResult::not_found());
    assert_eq!(g.astar(13, 12), PathResult::not_found());
}

#[test]
fn longest_chain_spans_both_communities() {
    let g = network();
    let chain = g.longest_influence_chain();
    assert_eq!(chain.length, 9);
    assert_eq!(chain.nodes, vec![1, 3, 2, 4, 6, 7, 8, 9, 12]);
}

#[test]
fn unscored_nodes_are_skipped_by_the_chain() {
    let g = network();
    assert_eq!(g.influence_score(5), None);
    assert!(!g.longest_influence_chain().nodes.contains(&5));
}

#[test]
fn connectivity_and_degree_queries() {
    let g = network();
    assert!(g.is_connected(6, 7));
    assert!(g.is_connected(7, 6));
    assert!(!g.is_connected(6, 8));
    assert_eq!(g.degree(7), 3);
    assert_eq!(g.degree(13), 1);
    assert_eq!(g.degree(99), 0);
}

#[test]
fn labels_resolve_with_generated_fallback() {
    let g = network();
    assert_eq!(g.user_label(1), "Maya Chen");
    assert_eq!(g.user_label(12), "Omar Haddad");
    assert_eq!(g.user_label(5), "User 5");
    assert_eq!(g.user_label(999), "User 999");
}
