//! Queries on grid networks.

use altroute::onepass_plus;
use petgraph::graph::{node_index, DiGraph};

fn get_grid_network(n: usize) -> DiGraph<(), f64> {
    let mut graph = DiGraph::with_capacity(n * n, n * n * 4);
    for _ in 0..n * n {
        graph.add_node(());
    }
    // Add vertical edges.
    for x in 0..n {
        for y in 0..n - 1 {
            let (i, j) = (x + y * n, x + (y + 1) * n);
            graph.add_edge(node_index(i), node_index(j), 1.0);
            graph.add_edge(node_index(j), node_index(i), 1.0);
        }
    }
    // Add horizontal edges.
    for x in 0..n - 1 {
        for y in 0..n {
            let (i, j) = (x + y * n, x + 1 + y * n);
            graph.add_edge(node_index(i), node_index(j), 1.0);
            graph.add_edge(node_index(j), node_index(i), 1.0);
        }
    }
    graph
}

#[test]
fn shortest_first_test() {
    // Corner-to-corner on a 4 x 4 grid: any shortest path crosses
    // 2 * (n - 1) = 6 unit edges.
    let n = 4;
    let graph = get_grid_network(n);
    let source = node_index(0);
    let target = node_index(n * n - 1);
    let routes = onepass_plus(&graph, source, target, 3, 1.0).unwrap();
    assert_eq!(routes.len(), 3);
    assert_eq!(routes[0].length(), 6.0);
    for window in routes.windows(2) {
        assert!(window[0].length() <= window[1].length());
    }
}

#[test]
fn grid_edge_disjoint_test() {
    let n = 4;
    let graph = get_grid_network(n);
    let source = node_index(0);
    let target = node_index(n * n - 1);
    let routes = onepass_plus(&graph, source, target, 5, 0.0).unwrap();
    // The corner vertices have degree 2, so at most two routes can be
    // edge-disjoint.
    assert_eq!(routes.len(), 2);
    for (j, later) in routes.iter().enumerate() {
        for earlier in &routes[..j] {
            assert_eq!(later.shared_weight(earlier, &graph), 0.0);
        }
    }
}

#[test]
fn grid_overlap_bound_test() {
    let n = 4;
    let graph = get_grid_network(n);
    let source = node_index(0);
    let target = node_index(n * n - 1);
    let theta = 0.5;
    let routes = onepass_plus(&graph, source, target, 4, theta).unwrap();
    assert!(!routes.is_empty());
    assert!(routes.len() <= 4);
    for (j, later) in routes.iter().enumerate() {
        let nodes = later.nodes(&graph);
        let mut sorted = nodes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), nodes.len(), "route repeats a vertex");
        for earlier in &routes[..j] {
            let ratio = later.shared_weight(earlier, &graph) / earlier.length();
            assert!(ratio <= theta + 1e-9);
        }
    }
}
