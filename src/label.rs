//! Search-tree labels and the arena that owns them.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::weight::Weight;

/// Handle to a [Label] inside a [LabelPool].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct LabelId(pub(crate) usize);

/// A node of the search tree: one visit of a vertex through a specific
/// predecessor chain.
///
/// A label tracks the partial path from the source to its vertex, the weight it
/// shares with every committed alternative, and the generation at which those
/// shared weights were last reconciled. Source labels have no predecessor; any
/// other label was created by extending its predecessor across one edge.
#[derive(Clone, Debug)]
pub(crate) struct Label<W> {
    /// Vertex this label is attached to.
    pub(crate) node: NodeIndex,
    /// Edge from the predecessor's vertex to `node` (`None` for a source label).
    pub(crate) in_edge: Option<EdgeIndex>,
    /// Predecessor label in the chain (`None` for a source label).
    pub(crate) prev: Option<LabelId>,
    /// Cumulative weight of the chain from the source.
    pub(crate) length: W,
    /// `length` plus the exact remaining distance from `node` to the target.
    pub(crate) lower_bound: W,
    /// Weight shared with each committed alternative, indexed by commit order.
    pub(crate) sim: Vec<W>,
    /// Generation at which `sim` was last reconciled.
    pub(crate) checked_at: usize,
}

impl<W> Label<W> {
    /// True if `sim` has not been reconciled against all committed alternatives.
    pub(crate) fn is_outdated(&self, step: usize) -> bool {
        self.checked_at < step
    }

    pub(crate) fn mark_checked(&mut self, step: usize) {
        debug_assert!(step > 0);
        self.checked_at = step;
    }
}

/// Arena owning every label created during one query.
///
/// Predecessor chains are handle chains into the arena, so they stay valid for
/// the whole query; the skyline stores the same handles. Nothing is reclaimed
/// before the query ends.
#[derive(Clone, Debug, Default)]
pub(crate) struct LabelPool<W> {
    labels: Vec<Label<W>>,
}

impl<W: Weight> LabelPool<W> {
    /// Create a source label: zero length, all-zero shared weights.
    pub(crate) fn new_source(
        &mut self,
        node: NodeIndex,
        lower_bound: W,
        k: usize,
        step: usize,
    ) -> LabelId {
        self.alloc(Label {
            node,
            in_edge: None,
            prev: None,
            length: W::zero(),
            lower_bound,
            sim: vec![W::zero(); k],
            checked_at: step,
        })
    }

    /// Extend `parent` across one edge, with pre-seeded shared weights.
    pub(crate) fn expand(
        &mut self,
        parent: LabelId,
        node: NodeIndex,
        edge: EdgeIndex,
        edge_weight: W,
        remaining: W,
        sim: Vec<W>,
        step: usize,
    ) -> LabelId {
        let length = self.get(parent).length + edge_weight;
        self.alloc(Label {
            node,
            in_edge: Some(edge),
            prev: Some(parent),
            length,
            lower_bound: length + remaining,
            sim,
            checked_at: step,
        })
    }

    fn alloc(&mut self, label: Label<W>) -> LabelId {
        let id = LabelId(self.labels.len());
        self.labels.push(label);
        id
    }

    pub(crate) fn get(&self, id: LabelId) -> &Label<W> {
        &self.labels[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: LabelId) -> &mut Label<W> {
        &mut self.labels[id.0]
    }

    /// True if `node` appears on the chain of `id` (including its own vertex).
    pub(crate) fn chain_contains(&self, id: LabelId, node: NodeIndex) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            let label = &self.labels[c.0];
            if label.node == node {
                return true;
            }
            current = label.prev;
        }
        false
    }

    /// Edges of the chain of `id`, from its vertex back to the source.
    pub(crate) fn chain_edges(&self, id: LabelId) -> Vec<EdgeIndex> {
        let mut edges = Vec::new();
        let mut current = Some(id);
        while let Some(c) = current {
            let label = &self.labels[c.0];
            if let Some(edge) = label.in_edge {
                edges.push(edge);
            }
            current = label.prev;
        }
        edges
    }

    /// Number of labels created so far.
    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }
}
