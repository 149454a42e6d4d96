//! # Searching
//!
//! One traversal contract, four strategies:
//!
//! - [`dfs`]: depth-first, returns the path on the stack when it stops.
//! - [`bfs`]: breadth-first, returns the fewest-edges path or the whole
//!   discovery tree.
//! - [`dijkstra`]: lightest path for non-negative weights.
//! - [`a_star`]: lightest path guided by a [`Heuristic`].
//!
//! All of them are steered by the hooks of [`SearchOptions`] and report "not
//! found" as an empty [`EdgeSeq`](crate::edge::EdgeSeq), never as an error.
//!
//! ```
//! use arborist::graph::AdjacencyMap;
//! use arborist::search::{dijkstra, SearchOptions};
//!
//! let g = AdjacencyMap::from_edges(
//!     true,
//!     [(1, 2, 1), (1, 3, 4), (2, 3, 2), (2, 4, 5), (3, 4, 1)],
//! );
//! let path = dijkstra(&g, &1, SearchOptions::new().with_target(4));
//! assert_eq!(path.total_weight(), 4);
//! assert_eq!(path.vertices(), vec![1, 2, 3, 4]);
//! ```

pub mod frontier;
pub mod heuristic;
pub mod options;
pub mod path;
pub mod queries;
pub mod shortest;
pub mod traversal;

pub use frontier::PriorityFrontier;
pub use heuristic::{euclidean, Euclidean, Heuristic, Point2d, Zero};
pub use options::{Hooks, NoHook, SearchOptions};
pub use path::{rebuild_path, PredecessorMap};
pub use queries::{has_cycle, has_path, is_connected, path, shortest_path, total_weight};
pub use shortest::{a_star, dijkstra};
pub use traversal::{bfs, dfs, reachable, BreadthFirst, Reachable, Step};
