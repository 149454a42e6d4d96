use std::{fmt::Debug, hash::Hash};

use ahash::RandomState;
use indexmap::IndexMap;

use crate::{edge::Edge, num_traits::Weight};

use super::{Graph, GraphError};

type OrderedMap<K, V> = IndexMap<K, V, RandomState>;

/// Adjacency-map graph with insertion-ordered vertices and neighbours.
///
/// Every vertex maps to its out-neighbours and the weight of each edge. An
/// undirected graph stores each edge in both directions. Re-adding an
/// existing edge overwrites its weight.
///
/// Vertices can additionally be given string labels, which is convenient when
/// the vertex type itself is awkward to spell out (points, tuples).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "V: serde::Serialize + Eq + Hash, W: serde::Serialize",
        deserialize = "V: serde::Deserialize<'de> + Eq + Hash, W: serde::Deserialize<'de>"
    ))
)]
pub struct AdjacencyMap<V, W> {
    adjacency: OrderedMap<V, OrderedMap<V, W>>,
    labels: OrderedMap<String, V>,
    directed: bool,
}

impl<V: Clone + Eq + Hash, W: Weight> AdjacencyMap<V, W> {
    pub fn new(directed: bool) -> Self {
        AdjacencyMap {
            adjacency: OrderedMap::default(),
            labels: OrderedMap::default(),
            directed,
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Builds a graph from `(src, dst, weight)` triples.
    pub fn from_edges(directed: bool, edges: impl IntoIterator<Item = (V, V, W)>) -> Self {
        let mut graph = Self::new(directed);
        for (src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Adds `vertex` unless it is already present.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Removes `vertex` and every edge touching it. Unknown vertices are
    /// ignored.
    pub fn remove_vertex(&mut self, vertex: &V) {
        self.adjacency.shift_remove(vertex);
        for neighbors in self.adjacency.values_mut() {
            neighbors.shift_remove(vertex);
        }
        self.labels.retain(|_, v| *v != *vertex);
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Out-degree for directed graphs, degree for undirected ones.
    pub fn degree(&self, vertex: &V) -> Result<usize, GraphError>
    where
        V: Debug,
    {
        self.adjacency
            .get(vertex)
            .map(|n| n.len())
            .ok_or_else(|| GraphError::VertexNotFound(format!("{vertex:?}")))
    }

    /// Adds (or re-weights) the edge `src -> dst`, adding missing endpoints.
    pub fn add_edge(&mut self, src: V, dst: V, weight: W) {
        self.add_vertex(src.clone());
        self.add_vertex(dst.clone());
        if !self.directed {
            if let Some(n) = self.adjacency.get_mut(&dst) {
                n.insert(src.clone(), weight);
            }
        }
        if let Some(n) = self.adjacency.get_mut(&src) {
            n.insert(dst, weight);
        }
    }

    /// Adds an edge with the default weight of one.
    pub fn add_unit_edge(&mut self, src: V, dst: V) {
        self.add_edge(src, dst, W::one());
    }

    pub fn remove_edge(&mut self, src: &V, dst: &V) {
        if let Some(n) = self.adjacency.get_mut(src) {
            n.shift_remove(dst);
        }
        if !self.directed {
            if let Some(n) = self.adjacency.get_mut(dst) {
                n.shift_remove(src);
            }
        }
    }

    pub fn has_edge(&self, src: &V, dst: &V) -> bool {
        self.adjacency
            .get(src)
            .is_some_and(|n| n.contains_key(dst))
    }

    pub fn has_edge_with_weight(&self, src: &V, dst: &V, weight: W) -> bool {
        self.adjacency
            .get(src)
            .and_then(|n| n.get(dst))
            .is_some_and(|w| *w == weight)
    }

    pub fn edge(&self, src: &V, dst: &V) -> Result<Edge<V, W>, GraphError>
    where
        V: Debug,
    {
        self.edge_weight(src, dst)
            .map(|w| Edge::new(src.clone(), dst.clone(), w))
    }

    pub fn edge_weight(&self, src: &V, dst: &V) -> Result<W, GraphError>
    where
        V: Debug,
    {
        self.adjacency
            .get(src)
            .and_then(|n| n.get(dst))
            .copied()
            .ok_or_else(|| GraphError::EdgeNotFound {
                src: format!("{src:?}"),
                dst: format!("{dst:?}"),
            })
    }

    /// Re-weights an existing edge; absent edges are left alone.
    pub fn set_edge_weight(&mut self, src: &V, dst: &V, weight: W) {
        if !self.has_edge(src, dst) {
            return;
        }
        if let Some(w) = self.adjacency.get_mut(src).and_then(|n| n.get_mut(dst)) {
            *w = weight;
        }
        if !self.directed {
            if let Some(w) = self.adjacency.get_mut(dst).and_then(|n| n.get_mut(src)) {
                *w = weight;
            }
        }
    }

    /// Attaches `label` to `vertex`, replacing any previous owner of the label.
    pub fn add_label(&mut self, vertex: V, label: impl Into<String>) {
        self.labels.insert(label.into(), vertex);
    }

    pub fn vertex_by_label(&self, label: &str) -> Result<&V, GraphError> {
        self.labels
            .get(label)
            .ok_or_else(|| GraphError::LabelNotFound(label.to_owned()))
    }

    pub fn add_edge_by_label(&mut self, src: &str, dst: &str, weight: W) -> Result<(), GraphError> {
        let u = self.vertex_by_label(src)?.clone();
        let v = self.vertex_by_label(dst)?.clone();
        self.add_edge(u, v, weight);
        Ok(())
    }

    pub fn edge_by_label(&self, src: &str, dst: &str) -> Result<Edge<V, W>, GraphError>
    where
        V: Debug,
    {
        let u = self.vertex_by_label(src)?;
        let v = self.vertex_by_label(dst)?;
        self.edge(u, v)
    }
}

impl<V: Clone + Eq + Hash + Debug, W: Weight> Graph for AdjacencyMap<V, W> {
    type Vertex = V;
    type Weight = W;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.adjacency.keys().cloned()
    }

    fn neighbors(&self, v: &V) -> impl Iterator<Item = (V, W)> + '_ {
        self.adjacency
            .get(v)
            .into_iter()
            .flat_map(|n| n.iter().map(|(dst, w)| (dst.clone(), *w)))
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V, W>> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(i, (src, n))| {
                n.iter().filter_map(move |(dst, w)| {
                    // an undirected edge is reported from its earlier endpoint
                    let keep = self.directed
                        || self
                            .adjacency
                            .get_index_of(dst)
                            .is_some_and(|j| i <= j);
                    keep.then(|| Edge::new(src.clone(), dst.clone(), *w))
                })
            })
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }
}
