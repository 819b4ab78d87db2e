// This file is part of Altroute.
// Copyright © 2025 The Altroute developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Index of the edges used by committed alternatives.

use hashbrown::HashMap;
use petgraph::graph::EdgeIndex;

use crate::path::Path;
use crate::weight::Weight;

/// Maps each edge of a committed alternative to the alternatives containing it.
///
/// Per-edge lists hold alternative indices in ascending order, which the lazy
/// similarity refresh relies on to scan only the not-yet-accounted suffix.
#[derive(Clone, Debug, Default)]
pub(crate) struct OverlapIndex {
    edges: HashMap<EdgeIndex, Vec<usize>>,
}

impl OverlapIndex {
    /// Record the edges of the alternative committed at `index`.
    ///
    /// Alternatives must be ingested in commit order (strictly increasing
    /// `index`, starting at 0) so the per-edge lists stay sorted.
    pub(crate) fn ingest<W: Weight>(&mut self, path: &Path<W>, index: usize) {
        for &edge in path.edges() {
            let list = self.edges.entry(edge).or_default();
            debug_assert!(list.last().map(|&last| last < index).unwrap_or(true));
            list.push(index);
        }
    }

    /// Ascending indices of the alternatives containing `edge`, if any.
    pub(crate) fn lookup(&self, edge: EdgeIndex) -> Option<&[usize]> {
        self.edges.get(&edge).map(Vec::as_slice)
    }
}
