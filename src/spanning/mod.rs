//! # Optimal spanning subgraphs
//!
//! ## Available Algorithms
//!
//! - [`kruskal`]: minimum spanning forest of an undirected graph.
//! - [`edmonds`]: minimum spanning arborescence (Chu–Liu–Edmonds) of
//!   everything reachable from a root, directed or undirected.
//!
//! Both return the chosen edges with their original endpoints and weights.

use thiserror::Error;

pub mod arena;
pub mod edmonds;
pub mod kruskal;

pub use edmonds::edmonds;
pub use kruskal::kruskal;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanningError {
    #[error("kruskal requires an undirected graph")]
    DirectedGraph,
}
