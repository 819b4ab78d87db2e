//! Dijkstra routines seeding the search: lower bounds and the first alternative.

use std::cmp::Reverse;

use hashbrown::DefaultHashBuilder;
use hashbrown::HashMap;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use priority_queue::PriorityQueue;

use crate::path::Path;
use crate::queue::OrdWeight;
use crate::weight::Weight;

type NodeQueue<W> = PriorityQueue<NodeIndex, Reverse<OrdWeight<W>>, DefaultHashBuilder>;

/// Exact distance to `target` from every vertex that can reach it.
///
/// Runs Dijkstra over incoming edges, i.e. on the edge-reversed view of the
/// graph. Vertices missing from the returned map cannot reach `target`; used
/// as the A* lower-bound table of the search.
pub(crate) fn distances_to_target<W: Weight>(
    graph: &DiGraph<(), W>,
    target: NodeIndex,
) -> HashMap<NodeIndex, W> {
    let mut distances: HashMap<NodeIndex, W> = HashMap::new();
    let mut queue = NodeQueue::default();
    distances.insert(target, W::zero());
    queue.push(target, Reverse(OrdWeight(W::zero())));
    while let Some((node, Reverse(OrdWeight(distance)))) = queue.pop() {
        for edge in graph.edges_directed(node, Direction::Incoming) {
            let next = edge.source();
            let next_distance = distance + *edge.weight();
            if improves(&distances, next, next_distance) {
                distances.insert(next, next_distance);
                // Decreasing the distance = increasing the priority.
                queue.push_increase(next, Reverse(OrdWeight(next_distance)));
            }
        }
    }
    distances
}

/// Shortest path from `source` to `target`, or `None` if `target` is
/// unreachable.
///
/// Relaxation only replaces a label on strict improvement, so the returned
/// path is deterministic up to queue tie order.
pub(crate) fn shortest_path<W: Weight>(
    graph: &DiGraph<(), W>,
    source: NodeIndex,
    target: NodeIndex,
) -> Option<Path<W>> {
    let mut distances: HashMap<NodeIndex, W> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, EdgeIndex> = HashMap::new();
    let mut queue = NodeQueue::default();
    distances.insert(source, W::zero());
    queue.push(source, Reverse(OrdWeight(W::zero())));
    while let Some((node, Reverse(OrdWeight(distance)))) = queue.pop() {
        if node == target {
            break;
        }
        for edge in graph.edges_directed(node, Direction::Outgoing) {
            let next = edge.target();
            let next_distance = distance + *edge.weight();
            if improves(&distances, next, next_distance) {
                distances.insert(next, next_distance);
                predecessors.insert(next, edge.id());
                queue.push_increase(next, Reverse(OrdWeight(next_distance)));
            }
        }
    }
    let &length = distances.get(&target)?;
    let mut edges = Vec::new();
    let mut current = target;
    while current != source {
        let &edge = predecessors
            .get(&current)
            .expect("settled vertex has no predecessor");
        edges.push(edge);
        current = graph
            .edge_endpoints(edge)
            .expect("predecessor edge is not in the graph")
            .0;
    }
    edges.reverse();
    Some(Path::new(edges, length))
}

fn improves<W: Weight>(distances: &HashMap<NodeIndex, W>, node: NodeIndex, candidate: W) -> bool {
    match distances.get(&node) {
        Some(&current) => candidate < current,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::node_index;

    fn diamond() -> DiGraph<(), u64> {
        // Two routes from 0 to 3: 0 -> 1 -> 3 (cost 5) and 0 -> 2 -> 3 (cost 4).
        DiGraph::from_edges([(0, 1, 2u64), (1, 3, 3), (0, 2, 1), (2, 3, 3)])
    }

    #[test]
    fn distances_to_target_test() {
        let graph = diamond();
        let distances = distances_to_target(&graph, node_index(3));
        assert_eq!(distances[&node_index(3)], 0);
        assert_eq!(distances[&node_index(1)], 3);
        assert_eq!(distances[&node_index(2)], 3);
        assert_eq!(distances[&node_index(0)], 4);
    }

    #[test]
    fn unreachable_distances_test() {
        // Vertex 2 has no path to vertex 1.
        let mut graph: DiGraph<(), u64> = DiGraph::from_edges([(0, 1, 1u64)]);
        graph.add_node(());
        let distances = distances_to_target(&graph, node_index(1));
        assert!(!distances.contains_key(&node_index(2)));
    }

    #[test]
    fn shortest_path_test() {
        let graph = diamond();
        let path = shortest_path(&graph, node_index(0), node_index(3)).unwrap();
        assert_eq!(path.length(), 4);
        assert_eq!(
            path.nodes(&graph),
            vec![node_index(0), node_index(2), node_index(3)]
        );
    }

    #[test]
    fn unreachable_path_test() {
        let graph: DiGraph<(), u64> = DiGraph::from_edges([(1, 0, 1u64)]);
        assert!(shortest_path(&graph, node_index(0), node_index(1)).is_none());
    }
}
