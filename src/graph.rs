//! # The graph contract
//!
//! Algorithms in this crate never look inside a graph's storage. They only
//! need the read-only view described by [`Graph`]:
//!
//! - whether the graph is directed,
//! - its vertices,
//! - the weighted out-neighbours of a vertex,
//! - its edges, each undirected edge reported exactly once,
//! - the number of vertices.
//!
//! Undirected graphs must keep their adjacency symmetric: if `v` is a
//! neighbour of `u` with weight `w`, then `u` is a neighbour of `v` with the
//! same weight.
//!
//! [`AdjacencyMap`] is an insertion-ordered implementation used throughout the
//! tests and usable on its own.

use std::{fmt::Debug, hash::Hash};

use thiserror::Error;

use crate::{edge::Edge, num_traits::Weight};

pub mod adjacency;

pub use adjacency::AdjacencyMap;

pub trait Graph {
    type Vertex: Clone + Eq + Hash + Debug;
    type Weight: Weight;

    fn is_directed(&self) -> bool;

    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Out-neighbours of `v` with the weight of the connecting edge. Unknown
    /// vertices have no neighbours.
    fn neighbors(&self, v: &Self::Vertex)
        -> impl Iterator<Item = (Self::Vertex, Self::Weight)> + '_;

    fn edges(&self) -> impl Iterator<Item = Edge<Self::Vertex, Self::Weight>> + '_;

    fn vertex_count(&self) -> usize;
}

/// Shorthand for the edge type of a graph.
pub type GraphEdge<G> = Edge<<G as Graph>::Vertex, <G as Graph>::Weight>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex not found: {0}")]
    VertexNotFound(String),
    #[error("edge not found: {src} -> {dst}")]
    EdgeNotFound { src: String, dst: String },
    #[error("label not found: {0}")]
    LabelNotFound(String),
}
