use std::hash::Hash;

use ahash::AHashMap;

use crate::edge::{Edge, EdgeSeq};

/// For every discovered vertex, the vertex it was reached from and the weight
/// of that edge.
pub type PredecessorMap<V, W> = AHashMap<V, (V, W)>;

/// Walks the predecessor chain back from `target` to `start` and returns the
/// edges front to back.
///
/// `target == start` gives the empty path, and so does a chain that never
/// reaches `start`.
pub fn rebuild_path<V, W>(prev: &PredecessorMap<V, W>, start: &V, target: &V) -> EdgeSeq<V, W>
where
    V: Clone + Eq + Hash,
    W: Copy,
{
    let mut edges = Vec::new();
    let mut current = target;
    while current != start {
        // a chain longer than the map has looped
        if edges.len() > prev.len() {
            return EdgeSeq::empty();
        }
        let Some((parent, weight)) = prev.get(current) else {
            return EdgeSeq::empty();
        };
        edges.push(Edge::new(parent.clone(), current.clone(), *weight));
        current = parent;
    }
    edges.reverse();
    EdgeSeq::from(edges)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn follows_the_chain() {
        let mut prev = PredecessorMap::default();
        prev.insert(2, (1, 5));
        prev.insert(3, (2, 1));
        prev.insert(9, (8, 1));

        assert_eq!(
            rebuild_path(&prev, &1, &3).into_vec(),
            vec![Edge::new(1, 2, 5), Edge::new(2, 3, 1)]
        );
        assert!(rebuild_path(&prev, &1, &1).is_empty());
        assert!(rebuild_path(&prev, &1, &9).is_empty());
    }

    #[test]
    fn cyclic_chain_is_no_path() {
        let mut prev = PredecessorMap::default();
        prev.insert('a', ('b', 1));
        prev.insert('b', ('a', 1));
        assert!(rebuild_path(&prev, &'z', &'a').is_empty());
    }
}
