//! # Arborist
//!
//! Arborist is a library of graph searches and optimal spanning structures
//! that works over any graph storage implementing the small read-only
//! [`Graph`](graph::Graph) contract.
//!
//! - [`search`]: depth-first, breadth-first, Dijkstra and A*, all steered by
//!   the same five hooks of [`SearchOptions`](search::SearchOptions).
//! - [`spanning`]: Kruskal's minimum spanning forest and the Chu–Liu–Edmonds
//!   minimum arborescence.
//! - [`union_find`]: the disjoint sets both spanning algorithms rely on.
//!
//! Results are owned [`EdgeSeq`](edge::EdgeSeq)s; "nothing found" is an empty
//! sequence rather than an error.
//!
//! ```
//! use arborist::graph::AdjacencyMap;
//! use arborist::spanning::kruskal;
//!
//! let g = AdjacencyMap::from_edges(false, [('a', 'b', 1), ('a', 'c', 3), ('b', 'c', 2)]);
//! let tree = kruskal(&g).unwrap();
//! assert_eq!(tree.to_string(), "a -> b (1), b -> c (2)");
//! ```

pub mod edge;
pub mod graph;
pub mod num_traits;
pub mod search;
pub mod spanning;
pub mod typed_vec;
pub mod union_find;

#[cfg(test)]
mod test_graphs;

pub use edge::{Edge, EdgeSeq};
pub use graph::{AdjacencyMap, Graph, GraphError};
pub use num_traits::Weight;
