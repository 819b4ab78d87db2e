//! The OnePass+ search engine.
//!
//! One label-setting search computes all requested alternatives. Labels carry
//! the weight they share with every committed alternative; a min-queue on the
//! A* key (`length` plus the exact remaining distance to the target) makes the
//! first feasible label reaching the target the shortest one of its
//! generation. Shared weights are reconciled lazily against alternatives
//! committed after a label was created, and per-vertex Pareto dominance on the
//! shared-weight vectors prunes labels that cannot lead to a less similar
//! completion.

use anyhow::{ensure, Result};
use hashbrown::HashMap;
use log::debug;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::label::{LabelId, LabelPool};
use crate::oracle::{distances_to_target, shortest_path};
use crate::overlap::OverlapIndex;
use crate::path::Path;
use crate::queue::LabelQueue;
use crate::skyline::Skyline;
use crate::weight::Weight;

/// Computes up to `k` simple `source → target` paths such that the weighted
/// overlap between any two returned paths is at most `theta`.
///
/// The first returned path is the shortest `source → target` path; every
/// following path is the shortest one whose overlap ratio with each earlier
/// path does not exceed `theta`. Paths are returned in commit order. Fewer
/// than `k` paths (possibly none, when `target` is unreachable) are returned
/// when the graph does not admit more feasible alternatives; this is not an
/// error. A query with `source == target` returns the single zero-length
/// trivial path.
///
/// Fails if `k` is zero, `theta` is outside `[0, 1]` or an endpoint is not a
/// vertex of the graph.
///
/// # Example
///
/// ```
/// use altroute::{onepass_plus, read_graph_from_str};
/// use petgraph::graph::node_index;
///
/// let graph = read_graph_from_str::<u32>("d\n3 3\n0 1 1 0\n1 2 1 0\n0 2 3 0\n").unwrap();
/// let routes = onepass_plus(&graph, node_index(0), node_index(2), 2, 1.0).unwrap();
/// assert_eq!(routes[0].length(), 2);
/// ```
pub fn onepass_plus<W: Weight>(
    graph: &DiGraph<(), W>,
    source: NodeIndex,
    target: NodeIndex,
    k: usize,
    theta: f64,
) -> Result<Vec<Path<W>>> {
    ensure!(k >= 1, "the number of alternative paths must be at least 1");
    ensure!(
        (0.0..=1.0).contains(&theta),
        "the similarity threshold must be within [0.0, 1.0], got {theta}"
    );
    ensure!(
        source.index() < graph.node_count(),
        "source vertex {} is not in the graph ({} vertices)",
        source.index(),
        graph.node_count()
    );
    ensure!(
        target.index() < graph.node_count(),
        "target vertex {} is not in the graph ({} vertices)",
        target.index(),
        graph.node_count()
    );
    if source == target {
        return Ok(vec![Path::trivial()]);
    }
    let lower_bounds = distances_to_target(graph, target);
    if !lower_bounds.contains_key(&source) {
        debug!(
            "target {} is unreachable from source {}",
            target.index(),
            source.index()
        );
        return Ok(Vec::new());
    }
    let Some(first) = shortest_path(graph, source, target) else {
        return Ok(Vec::new());
    };
    let search = SearchState {
        graph,
        lower_bounds: &lower_bounds,
        source,
        target,
        k,
        theta,
        pool: LabelPool::default(),
        queue: LabelQueue::new(),
        skyline: Skyline::default(),
        overlap: OverlapIndex::default(),
        committed: Vec::with_capacity(k),
        step: 0,
        similarity_pruned: 0,
        dominance_pruned: 0,
        cycle_pruned: 0,
    };
    Ok(search.run(first))
}

/// Mutable state of one OnePass+ run.
struct SearchState<'a, W: Weight> {
    graph: &'a DiGraph<(), W>,
    /// Exact distance from each vertex to the target (absent: cannot reach it).
    lower_bounds: &'a HashMap<NodeIndex, W>,
    source: NodeIndex,
    target: NodeIndex,
    k: usize,
    theta: f64,
    pool: LabelPool<W>,
    queue: LabelQueue<W>,
    skyline: Skyline,
    overlap: OverlapIndex,
    committed: Vec<Path<W>>,
    /// Index of the alternative currently sought; equals `committed.len()`.
    step: usize,
    similarity_pruned: usize,
    dominance_pruned: usize,
    cycle_pruned: usize,
}

impl<W: Weight> SearchState<'_, W> {
    fn run(mut self, first: Path<W>) -> Vec<Path<W>> {
        self.commit(first);
        while self.step < self.k {
            debug_assert_eq!(self.step, self.committed.len());
            let Some((id, _)) = self.queue.pop() else {
                // No feasible alternative is left; return what was collected.
                break;
            };
            if self.pool.get(id).is_outdated(self.step) {
                if !self.refresh(id) {
                    self.similarity_pruned += 1;
                    continue;
                }
                self.pool.get_mut(id).mark_checked(self.step);
            }
            let node = self.pool.get(id).node;
            if node == self.target {
                let path = self.build_path(id);
                self.commit(path);
                continue;
            }
            if self.skyline.dominates(&self.pool, id) {
                self.dominance_pruned += 1;
                continue;
            }
            self.skyline.insert(node, id);
            debug_assert!(self.skyline.contains(node));
            self.expand(id);
        }
        debug!(
            "search done: {} alternatives, {} labels, {} similarity-pruned, \
             {} dominance-pruned, {} cycle-pruned",
            self.committed.len(),
            self.pool.len(),
            self.similarity_pruned,
            self.dominance_pruned,
            self.cycle_pruned
        );
        self.committed
    }

    /// Append a path to the committed set and open the next generation.
    fn commit(&mut self, path: Path<W>) {
        debug!(
            "committed alternative {} with length {:?}",
            self.step,
            path.length()
        );
        self.overlap.ingest(&path, self.step);
        self.committed.push(path);
        self.step += 1;
        if self.step < self.k {
            // Re-seed the source so the new generation starts from a label with
            // all-zero shared weights.
            let lower_bound = self.lower_bounds[&self.source];
            let id = self
                .pool
                .new_source(self.source, lower_bound, self.k, self.step);
            self.queue.push(id, lower_bound);
        }
    }

    /// Bring the shared weights of a label up to the current generation.
    ///
    /// Walks the label's chain and, for every edge, adds its weight to the
    /// coordinates of the alternatives that contain the edge and were committed
    /// since the label was last reconciled. Returns `false` as soon as an
    /// updated coordinate exceeds the threshold; the label is then abandoned.
    fn refresh(&mut self, id: LabelId) -> bool {
        let checked_at = self.pool.get(id).checked_at;
        for edge in self.pool.chain_edges(id) {
            let Some(indices) = self.overlap.lookup(edge) else {
                continue;
            };
            let weight = self.graph[edge];
            for &i in indices {
                if i < checked_at {
                    continue;
                }
                if i >= self.step {
                    break;
                }
                let label = self.pool.get_mut(id);
                label.sim[i] = label.sim[i] + weight;
                let shared = label.sim[i];
                if exceeds_threshold(shared, self.committed[i].length(), self.theta) {
                    return false;
                }
            }
        }
        true
    }

    /// Relax every outgoing edge of the label's vertex.
    fn expand(&mut self, id: LabelId) {
        let graph = self.graph;
        let node = self.pool.get(id).node;
        for edge in graph.edges(node) {
            let next = edge.target();
            if self.pool.chain_contains(id, next) {
                self.cycle_pruned += 1;
                continue;
            }
            let Some(&remaining) = self.lower_bounds.get(&next) else {
                // The vertex cannot reach the target; an infinite A* key would
                // never pop before the search ends.
                continue;
            };
            let weight = *edge.weight();
            let mut sim = self.pool.get(id).sim.clone();
            if !self.seed_edge_overlap(&mut sim, edge.id(), weight) {
                self.similarity_pruned += 1;
                continue;
            }
            let child = self
                .pool
                .expand(id, next, edge.id(), weight, remaining, sim, self.step);
            let lower_bound = self.pool.get(child).lower_bound;
            self.queue.push(child, lower_bound);
        }
    }

    /// Add the overlap contributions of one new edge to a child's shared
    /// weights. Returns `false` when a coordinate exceeds the threshold.
    fn seed_edge_overlap(&self, sim: &mut [W], edge: EdgeIndex, weight: W) -> bool {
        let Some(indices) = self.overlap.lookup(edge) else {
            return true;
        };
        for &i in indices {
            debug_assert!(i < self.step);
            sim[i] = sim[i] + weight;
            if exceeds_threshold(sim[i], self.committed[i].length(), self.theta) {
                return false;
            }
        }
        true
    }

    /// Rebuild the committed path induced by a target label's chain.
    fn build_path(&self, id: LabelId) -> Path<W> {
        let mut edges = self.pool.chain_edges(id);
        edges.reverse();
        Path::new(edges, self.pool.get(id).length)
    }
}

/// True when `shared / total` exceeds `theta`.
fn exceeds_threshold<W: Weight>(shared: W, total: W, theta: f64) -> bool {
    shared.to_ratio() / total.to_ratio() > theta
}
