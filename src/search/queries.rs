//! One-call questions about a graph, built on the hooked searches.

use std::cell::RefCell;

use ahash::{AHashMap, AHashSet};
use tracing::debug;

use crate::{
    edge::EdgeSeq,
    graph::Graph,
    num_traits::sum_weights,
};

use super::{
    options::SearchOptions,
    traversal::{bfs, dfs, reachable},
};

/// Some path from `src` to `dst`, found depth-first. Empty when there is none
/// or when `src == dst`.
pub fn path<G: Graph>(
    graph: &G,
    src: &G::Vertex,
    dst: &G::Vertex,
) -> EdgeSeq<G::Vertex, G::Weight> {
    dfs(graph, src, SearchOptions::new().with_target(dst.clone()))
}

/// Whether `dst` can be reached from `src`. A vertex of the graph always
/// reaches itself.
pub fn has_path<G: Graph>(graph: &G, src: &G::Vertex, dst: &G::Vertex) -> bool {
    if src == dst {
        return graph.vertices().any(|v| v == *src);
    }
    let mut found = false;
    dfs(
        graph,
        src,
        SearchOptions::new().with_base_case(|v: &G::Vertex| {
            found = v == dst;
            found
        }),
    );
    found
}

/// A path from `src` to `dst` with the fewest edges.
pub fn shortest_path<G: Graph>(
    graph: &G,
    src: &G::Vertex,
    dst: &G::Vertex,
) -> EdgeSeq<G::Vertex, G::Weight> {
    bfs(graph, src, SearchOptions::new().with_target(dst.clone()))
}

/// Whether every vertex is reachable from `start`, or from at least one
/// vertex of the graph when no start is given. The empty graph is connected.
///
/// For directed graphs this is reachability along edge directions, so a
/// graph can be connected from one vertex but not from another.
pub fn is_connected<G: Graph>(graph: &G, start: Option<&G::Vertex>) -> bool {
    let n = graph.vertex_count();
    match start {
        Some(v) => graph.vertices().any(|u| u == *v) && reachable(graph, v).count() == n,
        None => n == 0 || graph.vertices().any(|v| reachable(graph, &v).count() == n),
    }
}

/// Sum of all edge weights, each undirected edge counted once.
pub fn total_weight<G: Graph>(graph: &G) -> G::Weight {
    sum_weights(graph.edges().map(|e| e.weight))
}

/// Whether the graph contains a cycle. Self-loops count.
///
/// Directed graphs look for an edge back onto the current depth-first
/// stack; undirected graphs for an edge to an already visited vertex other
/// than the one the current vertex was entered from.
#[tracing::instrument(level = "debug", skip_all, fields(directed = graph.is_directed()))]
pub fn has_cycle<G: Graph>(graph: &G) -> bool {
    let found = if graph.is_directed() {
        directed_cycle(graph)
    } else {
        undirected_cycle(graph)
    };
    debug!(found, "cycle check");
    found
}

fn directed_cycle<G: Graph>(graph: &G) -> bool {
    let on_stack = RefCell::new(AHashSet::<G::Vertex>::new());
    let done = RefCell::new(AHashSet::<G::Vertex>::new());
    let mut found = false;

    for v in graph.vertices() {
        if done.borrow().contains(&v) {
            continue;
        }
        let options = SearchOptions::new()
            .with_base_case(|v: &G::Vertex| {
                on_stack.borrow_mut().insert(v.clone());
                false
            })
            .with_vertex_filter(|_: &G::Vertex, dst: &G::Vertex| !done.borrow().contains(dst))
            .with_early_return(|_: &G::Vertex, dst: &G::Vertex| {
                found = on_stack.borrow().contains(dst);
                found
            })
            .with_deferred(|v: &G::Vertex| {
                on_stack.borrow_mut().remove(v);
                done.borrow_mut().insert(v.clone());
            });
        dfs(graph, &v, options);
        if found {
            return true;
        }
    }
    false
}

fn undirected_cycle<G: Graph>(graph: &G) -> bool {
    let parent = RefCell::new(AHashMap::<G::Vertex, G::Vertex>::new());
    let seen = RefCell::new(AHashSet::<G::Vertex>::new());
    let mut found = false;

    for v in graph.vertices() {
        if seen.borrow().contains(&v) {
            continue;
        }
        let options = SearchOptions::new()
            .with_base_case(|v: &G::Vertex| {
                seen.borrow_mut().insert(v.clone());
                false
            })
            .with_pre_visit(|src: &G::Vertex, dst: &G::Vertex| {
                parent.borrow_mut().insert(dst.clone(), src.clone());
            })
            .with_early_return(|src: &G::Vertex, dst: &G::Vertex| {
                found = parent.borrow().get(src) != Some(dst);
                found
            });
        dfs(graph, &v, options);
        if found {
            return true;
        }
    }
    false
}
