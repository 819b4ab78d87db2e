//! Per-vertex Pareto fronts over label shared-weight vectors.

use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use crate::label::{LabelId, LabelPool};
use crate::weight::Weight;

/// Labels admitted to the frontier, grouped by vertex, used for dominance
/// pruning.
///
/// Two labels at the same vertex have the same remaining potential towards the
/// target; they differ only in how much they resemble the committed
/// alternatives. A challenger that is at least as similar as some admitted
/// label on every coordinate cannot lead to a less similar completion and is
/// pruned. Entries are never removed: the shared weights of an admitted label
/// only grow with later generations, so an entry stays a valid (conservative)
/// witness against any freshly reconciled challenger.
#[derive(Clone, Debug, Default)]
pub(crate) struct Skyline {
    entries: HashMap<NodeIndex, Vec<LabelId>>,
}

impl Skyline {
    /// Admit a label at its vertex. Older dominated entries are kept.
    pub(crate) fn insert(&mut self, node: NodeIndex, label: LabelId) {
        self.entries.entry(node).or_default().push(label);
    }

    pub(crate) fn contains(&self, node: NodeIndex) -> bool {
        self.entries.contains_key(&node)
    }

    /// True if some admitted label at the challenger's vertex has shared
    /// weights coordinatewise at most the challenger's.
    pub(crate) fn dominates<W: Weight>(&self, pool: &LabelPool<W>, challenger: LabelId) -> bool {
        let challenger = pool.get(challenger);
        let Some(incumbents) = self.entries.get(&challenger.node) else {
            return false;
        };
        incumbents.iter().any(|&id| {
            pool.get(id)
                .sim
                .iter()
                .zip(&challenger.sim)
                .all(|(incumbent, chal)| incumbent <= chal)
        })
    }

    /// Total number of admitted labels, over all vertices.
    #[cfg(test)]
    pub(crate) fn num_labels(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::{edge_index, node_index};

    #[test]
    fn dominance_test() {
        let mut pool: LabelPool<u64> = LabelPool::default();
        let mut skyline = Skyline::default();
        let root = pool.new_source(node_index(0), 0, 2, 1);
        let incumbent = pool.expand(root, node_index(1), edge_index(0), 1, 0, vec![2, 0], 1);
        assert!(!skyline.dominates(&pool, incumbent));
        skyline.insert(node_index(1), incumbent);
        assert!(skyline.contains(node_index(1)));
        assert!(!skyline.contains(node_index(2)));

        // Coordinatewise at least as similar: dominated.
        let worse = pool.expand(root, node_index(1), edge_index(1), 2, 0, vec![2, 1], 1);
        assert!(skyline.dominates(&pool, worse));
        // Strictly less similar on one coordinate: not dominated.
        let better = pool.expand(root, node_index(1), edge_index(2), 3, 0, vec![1, 5], 1);
        assert!(!skyline.dominates(&pool, better));
        // Another vertex is never dominated.
        let elsewhere = pool.expand(root, node_index(2), edge_index(3), 1, 0, vec![9, 9], 1);
        assert!(!skyline.dominates(&pool, elsewhere));

        skyline.insert(node_index(1), better);
        assert_eq!(skyline.num_labels(), 2);
    }
}
