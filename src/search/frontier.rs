use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use crate::num_traits::Weight;

/// Heap entry ordered by key, then by push order.
#[derive(Debug, Clone)]
struct FrontierEntry<V, W> {
    key: W,
    seq: u64,
    vertex: V,
}

impl<V, W: Weight> PartialEq for FrontierEntry<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, W: Weight> Eq for FrontierEntry<V, W> {}

impl<V, W: Weight> PartialOrd for FrontierEntry<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W: Weight> Ord for FrontierEntry<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .weight_cmp(&other.key)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue of `(vertex, key)` pairs.
///
/// Entries with equal keys come out in the order they were pushed. Stale
/// entries are not removed; callers skip them when popped.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<V, W> {
    heap: BinaryHeap<Reverse<FrontierEntry<V, W>>>,
    pushed: u64,
}

impl<V, W: Weight> Default for PriorityFrontier<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W: Weight> PriorityFrontier<V, W> {
    pub fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub fn push(&mut self, vertex: V, key: W) {
        self.heap.push(Reverse(FrontierEntry {
            key,
            seq: self.pushed,
            vertex,
        }));
        self.pushed += 1;
    }

    pub fn pop(&mut self) -> Option<(V, W)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.vertex, entry.key))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pops_smallest_key_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push('c', 3.5);
        frontier.push('a', 0.5);
        frontier.push('b', 1.0);
        assert_eq!(frontier.len(), 3);

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(order, vec![('a', 0.5), ('b', 1.0), ('c', 3.5)]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn ties_keep_push_order() {
        let mut frontier = PriorityFrontier::new();
        for v in [4, 1, 3, 2] {
            frontier.push(v, 7u32);
        }
        frontier.push(0, 9);
        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).map(|(v, _)| v).collect();
        assert_eq!(order, vec![4, 1, 3, 2, 0]);
    }
}
