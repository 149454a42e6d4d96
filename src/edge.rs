//! Weighted edges and the edge sequences every algorithm returns.

use std::fmt::{self, Display};

use ahash::AHashSet;
use std::hash::Hash;

use crate::num_traits::{sum_weights, Weight};

/// A directed, weighted edge `src -> dst`.
///
/// Undirected graphs report each edge once, in whichever orientation the
/// storage holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<V, W> {
    pub src: V,
    pub dst: V,
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    pub fn new(src: V, dst: V, weight: W) -> Self {
        Edge { src, dst, weight }
    }

    pub fn reversed(self) -> Self {
        Edge {
            src: self.dst,
            dst: self.src,
            weight: self.weight,
        }
    }

    pub fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.src == self.dst
    }
}

impl<V, W: Weight> Edge<V, W> {
    /// An edge carrying the default weight of one.
    pub fn unit(src: V, dst: V) -> Self {
        Edge::new(src, dst, W::one())
    }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((src, dst, weight): (V, V, W)) -> Self {
        Edge::new(src, dst, weight)
    }
}

impl<V: Display, W: Display> Display for Edge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.src, self.dst, self.weight)
    }
}

/// An owned sequence of edges: a path, a spanning forest or an arborescence.
///
/// Iterating consumes the sequence front to back. An empty sequence is how
/// every search reports "nothing found".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSeq<V, W> {
    edges: Vec<Edge<V, W>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    cursor: usize,
}

impl<V, W> Default for EdgeSeq<V, W> {
    fn default() -> Self {
        EdgeSeq::empty()
    }
}

impl<V, W> EdgeSeq<V, W> {
    pub fn empty() -> Self {
        EdgeSeq {
            edges: Vec::new(),
            cursor: 0,
        }
    }

    /// Edges not yet yielded.
    pub fn as_slice(&self) -> &[Edge<V, W>] {
        &self.edges[self.cursor..]
    }

    pub fn len(&self) -> usize {
        self.edges.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(mut self) -> Vec<Edge<V, W>> {
        self.edges.drain(..self.cursor);
        self.edges
    }

    pub fn total_weight(&self) -> W
    where
        W: Weight,
    {
        sum_weights(self.as_slice().iter().map(|e| e.weight))
    }

    /// Distinct vertices touched by the remaining edges, in first-seen order.
    pub fn vertices(&self) -> Vec<V>
    where
        V: Clone + Eq + Hash,
    {
        let mut seen = AHashSet::new();
        let mut out = Vec::new();
        for e in self.as_slice() {
            for v in [&e.src, &e.dst] {
                if seen.insert(v.clone()) {
                    out.push(v.clone());
                }
            }
        }
        out
    }
}

impl<V, W> From<Vec<Edge<V, W>>> for EdgeSeq<V, W> {
    fn from(edges: Vec<Edge<V, W>>) -> Self {
        EdgeSeq { edges, cursor: 0 }
    }
}

impl<V, W> FromIterator<Edge<V, W>> for EdgeSeq<V, W> {
    fn from_iter<I: IntoIterator<Item = Edge<V, W>>>(iter: I) -> Self {
        EdgeSeq::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<V: Clone, W: Clone> Iterator for EdgeSeq<V, W> {
    type Item = Edge<V, W>;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.edges.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<V: Clone, W: Clone> ExactSizeIterator for EdgeSeq<V, W> {}

impl<V: Display, W: Display> Display for EdgeSeq<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.as_slice().iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}
