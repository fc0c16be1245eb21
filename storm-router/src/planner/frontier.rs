//! Best-first frontier ordered by elapsed time.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::domain::SearchState;

/// Heap entry. `seq` breaks ties in insertion order.
struct Entry {
    total_time: f64,
    seq: u64,
    state: SearchState,
}

// Min-heap on (total_time, seq), reversed from the standard max-heap
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .total_time
            .total_cmp(&self.total_time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Priority queue of search states, least `total_time` first.
///
/// States with equal elapsed time pop in the order they were pushed, so a
/// search over unchanged inputs is deterministic.
#[derive(Default)]
pub(super) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&mut self, state: SearchState) {
        let entry = Entry {
            total_time: state.total_time(),
            seq: self.next_seq,
            state,
        };
        self.next_seq += 1;
        self.heap.push(entry);
    }

    pub(super) fn pop(&mut self) -> Option<SearchState> {
        self.heap.pop().map(|entry| entry.state)
    }

    pub(super) fn len(&self) -> usize {
        self.heap.len()
    }
}
