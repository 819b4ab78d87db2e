//! Path records: edge sequences with a cumulative weight.

use hashbrown::HashSet;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use crate::weight::Weight;

/// A path through a graph: an ordered edge sequence plus its cumulative weight.
///
/// The zero-length path (no edges) represents the trivial route of a query
/// whose source and target coincide.
#[derive(Clone, Debug, PartialEq)]
pub struct Path<W> {
    edges: Vec<EdgeIndex>,
    length: W,
}

impl<W: Weight> Path<W> {
    pub(crate) fn new(edges: Vec<EdgeIndex>, length: W) -> Self {
        Path { edges, length }
    }

    /// The zero-length path with no edges.
    pub(crate) fn trivial() -> Self {
        Path {
            edges: Vec::new(),
            length: W::zero(),
        }
    }

    /// Edges of the path, in order from source to target.
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    /// Cumulative weight of the path.
    pub fn length(&self) -> W {
        self.length
    }

    /// True for the zero-length path.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    /// Vertex sequence of the path, from source to target.
    ///
    /// The trivial path yields an empty sequence.
    pub fn nodes<N, E>(&self, graph: &DiGraph<N, E>) -> Vec<NodeIndex> {
        let mut nodes = Vec::with_capacity(self.edges.len() + 1);
        for (i, &edge) in self.edges.iter().enumerate() {
            let (source, target) = graph
                .edge_endpoints(edge)
                .expect("path edge is not in the graph");
            if i == 0 {
                nodes.push(source);
            }
            nodes.push(target);
        }
        nodes
    }

    /// Total weight of the edges this path shares with `other`.
    pub fn shared_weight(&self, other: &Path<W>, graph: &DiGraph<(), W>) -> W {
        let other_edges: HashSet<EdgeIndex> = other.edges.iter().copied().collect();
        self.edges
            .iter()
            .filter(|edge| other_edges.contains(*edge))
            .fold(W::zero(), |acc, &edge| acc + graph[edge])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::node_index;

    fn line_graph() -> DiGraph<(), u64> {
        DiGraph::from_edges([(0, 1, 2u64), (1, 2, 3), (0, 2, 10)])
    }

    #[test]
    fn nodes_test() {
        let graph = line_graph();
        let path = Path::new(
            vec![
                graph.find_edge(node_index(0), node_index(1)).unwrap(),
                graph.find_edge(node_index(1), node_index(2)).unwrap(),
            ],
            5,
        );
        assert_eq!(
            path.nodes(&graph),
            vec![node_index(0), node_index(1), node_index(2)]
        );
        assert_eq!(path.length(), 5);
        assert!(!path.is_trivial());
    }

    #[test]
    fn shared_weight_test() {
        let graph = line_graph();
        let e01 = graph.find_edge(node_index(0), node_index(1)).unwrap();
        let e12 = graph.find_edge(node_index(1), node_index(2)).unwrap();
        let e02 = graph.find_edge(node_index(0), node_index(2)).unwrap();
        let long = Path::new(vec![e01, e12], 5);
        let short = Path::new(vec![e02], 10);
        let partial = Path::new(vec![e01], 2);
        assert_eq!(long.shared_weight(&short, &graph), 0);
        assert_eq!(long.shared_weight(&partial, &graph), 2);
        assert_eq!(long.shared_weight(&long, &graph), 5);
    }

    #[test]
    fn trivial_test() {
        let graph = line_graph();
        let path: Path<u64> = Path::trivial();
        assert!(path.is_trivial());
        assert_eq!(path.length(), 0);
        assert!(path.nodes(&graph).is_empty());
    }
}
