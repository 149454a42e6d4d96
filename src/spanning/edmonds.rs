use ahash::RandomState;
use bitvec::prelude::*;
use indexmap::{map::Entry, IndexMap};
use tracing::{debug, trace};

use crate::{
    edge::{Edge, EdgeSeq},
    graph::{Graph, GraphEdge},
    num_traits::Weight,
    search::reachable,
    union_find::UnionFind,
};

use super::arena::{VertexArena, VertexKey};

/// An edge of the graph at some contraction level.
#[derive(Debug, Clone, Copy)]
struct WorkEdge<W> {
    src: VertexKey,
    dst: VertexKey,
    weight: W,
}

/// For every vertex with an incoming edge, the index of the lightest one.
type Incoming = IndexMap<VertexKey, usize, RandomState>;

/// Chu–Liu–Edmonds minimum spanning arborescence rooted at `root`.
///
/// Spans exactly the vertices reachable from `root`; everything else is
/// ignored, as are self-loops and edges into the root. Undirected edges may
/// be used in either direction. Every non-root vertex of the result has one
/// incoming edge, and the edges are listed in the graph's edge order.
#[tracing::instrument(level = "debug", skip_all, fields(root = ?root))]
pub fn edmonds<G: Graph>(graph: &G, root: &G::Vertex) -> EdgeSeq<G::Vertex, G::Weight> {
    let mut arena = VertexArena::new();
    let root_key = arena.intern(root.clone());
    for v in reachable(graph, root) {
        arena.intern(v);
    }

    let mut candidates: Vec<GraphEdge<G>> = graph.edges().collect();
    if !graph.is_directed() {
        let reversed: Vec<_> = candidates.iter().map(|e| e.clone().reversed()).collect();
        candidates.extend(reversed);
    }

    let mut work = Vec::with_capacity(candidates.len());
    for edge in candidates {
        let (Some(src), Some(dst)) = (arena.key_of(&edge.src), arena.key_of(&edge.dst)) else {
            continue;
        };
        if dst == root_key || src == dst {
            continue;
        }
        work.push(WorkEdge {
            src,
            dst,
            weight: edge.weight,
        });
    }

    let mut chosen = solve(&work, &mut arena, 0);
    chosen.sort_unstable();
    debug!(edges = chosen.len(), "arborescence built");
    // level-0 edges join original vertices only
    chosen
        .into_iter()
        .filter_map(|i| {
            let e = &work[i];
            let src = arena.original(e.src)?.clone();
            let dst = arena.original(e.dst)?.clone();
            Some(Edge::new(src, dst, e.weight))
        })
        .collect()
}

/// Indices into `edges` of a minimum arborescence of the current level.
fn solve<W: Weight, V: Clone + Eq + std::hash::Hash>(
    edges: &[WorkEdge<W>],
    arena: &mut VertexArena<V>,
    depth: usize,
) -> Vec<usize> {
    let incoming = lightest_incoming(edges);
    let Some(cycle) = find_cycle(edges, &incoming) else {
        return incoming.into_values().collect();
    };

    let sup = arena.alloc_super(depth + 1);
    let mut on_cycle = bitvec![0; arena.capacity()];
    for key in &cycle {
        on_cycle.set(key.slot.0, true);
    }
    trace!(depth, len = cycle.len(), "contracting cycle");

    // contracted edge -> edge of this level
    let mut origin = Vec::with_capacity(edges.len());
    let mut contracted = Vec::with_capacity(edges.len());
    for (i, e) in edges.iter().enumerate() {
        let mapped = match (on_cycle[e.src.slot.0], on_cycle[e.dst.slot.0]) {
            (true, true) => continue,
            (false, true) => WorkEdge {
                dst: sup,
                weight: e.weight - edges[incoming[&e.dst]].weight,
                ..*e
            },
            (true, false) => WorkEdge { src: sup, ..*e },
            (false, false) => *e,
        };
        contracted.push(mapped);
        origin.push(i);
    }

    let picked = solve(&contracted, arena, depth + 1);
    arena.release(sup);

    // the edge entering the super vertex breaks the cycle at its head
    let broken = picked
        .iter()
        .find(|&&c| contracted[c].dst == sup)
        .map(|&c| edges[origin[c]].dst);
    let mut chosen: Vec<usize> = picked.iter().map(|&c| origin[c]).collect();
    chosen.extend(
        cycle
            .iter()
            .filter(|&&key| Some(key) != broken)
            .map(|key| incoming[key]),
    );
    chosen
}

fn lightest_incoming<W: Weight>(edges: &[WorkEdge<W>]) -> Incoming {
    let mut incoming = Incoming::default();
    for (i, e) in edges.iter().enumerate() {
        match incoming.entry(e.dst) {
            Entry::Vacant(slot) => {
                slot.insert(i);
            }
            Entry::Occupied(mut slot) => {
                if e.weight.weight_cmp(&edges[*slot.get()].weight).is_lt() {
                    slot.insert(i);
                }
            }
        }
    }
    incoming
}

/// The first cycle closed by the lightest incoming edges, if any.
///
/// Joining each vertex with its chosen predecessor fails exactly when the
/// edge closes a loop; that loop runs through the edge's head.
fn find_cycle<W>(edges: &[WorkEdge<W>], incoming: &Incoming) -> Option<Vec<VertexKey>> {
    let mut components = UnionFind::new();
    for (&v, &i) in incoming {
        if !components.union(&edges[i].src, &v) {
            return walk_cycle(edges, incoming, v);
        }
    }
    None
}

/// Floyd's tortoise and hare along predecessors, starting at `start`.
fn walk_cycle<W>(
    edges: &[WorkEdge<W>],
    incoming: &Incoming,
    start: VertexKey,
) -> Option<Vec<VertexKey>> {
    let pred = |v: VertexKey| incoming.get(&v).map(|&i| edges[i].src);

    let mut tortoise = pred(start)?;
    let mut hare = pred(pred(start)?)?;
    while tortoise != hare {
        tortoise = pred(tortoise)?;
        hare = pred(pred(hare)?)?;
    }

    let mut cycle = vec![tortoise];
    let mut at = pred(tortoise)?;
    while at != tortoise {
        cycle.push(at);
        at = pred(at)?;
    }
    Some(cycle)
}
