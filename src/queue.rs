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

//! Min-priority queues over search labels and graph vertices.

use std::cmp::{Ordering, Reverse};

use hashbrown::DefaultHashBuilder;
use priority_queue::PriorityQueue;

use crate::label::LabelId;
use crate::weight::Weight;

/// Wrapper turning a `PartialOrd` weight into an `Ord` heap priority.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub(crate) struct OrdWeight<T>(pub(crate) T);

impl<T: PartialEq> Eq for OrdWeight<T> {}

#[allow(clippy::derive_ord_xor_partial_ord)]
impl<T: PartialOrd> Ord for OrdWeight<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).expect("Invalid comparison")
    }
}

/// Queue of labels, popped in ascending order of their A* lower bound.
///
/// Labels with equal lower bounds pop in insertion order, so a run is
/// deterministic for a given graph and query.
#[derive(Clone, Debug)]
pub(crate) struct LabelQueue<W: Weight> {
    queue: PriorityQueue<LabelId, Reverse<(OrdWeight<W>, u64)>, DefaultHashBuilder>,
    next_seq: u64,
}

impl<W: Weight> LabelQueue<W> {
    pub(crate) fn new() -> Self {
        LabelQueue {
            queue: PriorityQueue::default(),
            next_seq: 0,
        }
    }

    /// Push a label with the given lower bound. Each label is pushed at most once.
    pub(crate) fn push(&mut self, label: LabelId, lower_bound: W) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(label, Reverse((OrdWeight(lower_bound), seq)));
    }

    /// Pop the label with the smallest lower bound.
    pub(crate) fn pop(&mut self) -> Option<(LabelId, W)> {
        self.queue
            .pop()
            .map(|(label, Reverse((OrdWeight(bound), _)))| (label, bound))
    }
}
