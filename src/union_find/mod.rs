//! # Union–find over arbitrary keys
//!
//! Disjoint sets with path compression and union by rank. Elements are
//! hashed into a dense arena on first sight, so the parent–pointer tree works
//! on plain indices whatever the key type is.
//!
//! [`UnionFind::union`] creates unseen elements on demand; [`UnionFind::find`]
//! and [`UnionFind::connected`] merely report them as absent.

use std::{
    cell::Cell,
    fmt::{self, Display},
    hash::Hash,
};

use ahash::AHashMap;
use itertools::Itertools;

/// Position of an element in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParentPointer(pub usize);

impl From<usize> for ParentPointer {
    fn from(x: usize) -> Self {
        ParentPointer(x)
    }
}

/// A node of the union–find forest.
///
/// - `Root { rank }`: representative of its set, with its union–by–rank value.
/// - `Child(parent)`: points towards the root of its set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UFNode {
    Root { rank: usize },
    Child(ParentPointer),
}

/// Internally the parent–pointer tree is a `Vec<Cell<UFNode>>`, so that
/// [`UnionFind::find`] can compress paths through a shared reference.
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    elements: Vec<T>,
    positions: AHashMap<T, ParentPointer>,
    nodes: Vec<Cell<UFNode>>,
    set_count: usize,
}

impl<T: Clone + Eq + Hash> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> UnionFind<T> {
    pub fn new() -> Self {
        UnionFind {
            elements: Vec::new(),
            positions: AHashMap::new(),
            nodes: Vec::new(),
            set_count: 0,
        }
    }

    /// Registers `x` as a singleton set. Already known elements keep their set.
    pub fn make_set(&mut self, x: T) -> ParentPointer {
        if let Some(&p) = self.positions.get(&x) {
            return p;
        }
        let p = ParentPointer(self.elements.len());
        self.elements.push(x.clone());
        self.nodes.push(Cell::new(UFNode::Root { rank: 0 }));
        self.positions.insert(x, p);
        self.set_count += 1;
        p
    }

    pub fn position(&self, x: &T) -> Option<ParentPointer> {
        self.positions.get(x).copied()
    }

    /// Finds the root of the tree containing `x`, performing path compression.
    pub fn find_root(&self, x: ParentPointer) -> ParentPointer {
        match self.nodes[x.0].get() {
            UFNode::Root { .. } => x,
            UFNode::Child(parent) => {
                let root = self.find_root(parent);
                // Path compression: update x's pointer to point directly to the root.
                self.nodes[x.0].set(UFNode::Child(root));
                root
            }
        }
    }

    /// Representative of the set containing `x`, or `None` for unseen elements.
    pub fn find(&self, x: &T) -> Option<&T> {
        let root = self.find_root(self.position(x)?);
        Some(&self.elements[root.0])
    }

    pub fn connected(&self, x: &T, y: &T) -> bool {
        match (self.position(x), self.position(y)) {
            (Some(px), Some(py)) => self.find_root(px) == self.find_root(py),
            _ => false,
        }
    }

    /// Merges the sets of `x` and `y`, registering either if unseen.
    ///
    /// Returns `false` when both were already in the same set.
    pub fn union(&mut self, x: &T, y: &T) -> bool {
        let px = self.make_set(x.clone());
        let py = self.make_set(y.clone());
        let root_x = self.find_root(px);
        let root_y = self.find_root(py);
        if root_x == root_y {
            return false;
        }

        let rank_x = self.rank(root_x);
        let rank_y = self.rank(root_y);

        let (winner, loser) = if rank_x < rank_y {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };

        // If the ranks are equal, increment the winner's rank.
        if rank_x == rank_y {
            self.nodes[winner.0].set(UFNode::Root { rank: rank_x + 1 });
        }
        self.nodes[loser.0].set(UFNode::Child(winner));
        self.set_count -= 1;
        true
    }

    fn rank(&self, root: ParentPointer) -> usize {
        match self.nodes[root.0].get() {
            UFNode::Root { rank } => rank,
            UFNode::Child(_) => unreachable!("find_root() should always return a root"),
        }
    }

    /// Every element sharing a set with `x`, in registration order.
    pub fn members(&self, x: &T) -> Vec<&T> {
        let Some(px) = self.position(x) else {
            return Vec::new();
        };
        let root = self.find_root(px);
        self.elements
            .iter()
            .enumerate()
            .filter(|(i, _)| self.find_root(ParentPointer(*i)) == root)
            .map(|(_, e)| e)
            .collect()
    }

    /// All sets, ordered by their earliest registered member.
    pub fn sets(&self) -> Vec<Vec<&T>> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, e)| (self.find_root(ParentPointer(i)), e))
            .into_group_map_by(|(root, _)| *root)
            .into_iter()
            .sorted_by_key(|(_, group)| {
                group
                    .iter()
                    .map(|(_, e)| self.positions[*e])
                    .min()
            })
            .map(|(_, group)| group.into_iter().map(|(_, e)| e).collect())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn set_count(&self) -> usize {
        self.set_count
    }

    pub fn node(&self, x: ParentPointer) -> UFNode {
        self.nodes[x.0].get()
    }
}

impl<T: Clone + Eq + Hash + Display> Display for UnionFind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.sets()
                .into_iter()
                .map(|group| format!("~{{{}}}", group.iter().join(", ")))
                .join(" ")
        )
    }
}

#[cfg(test)]
pub mod test;
