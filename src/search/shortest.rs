//! Priority-driven searches: Dijkstra and A*.
//!
//! Both keep a [`PriorityFrontier`] of tentative distances and never remove
//! superseded entries; an entry is ignored when it is popped after its vertex
//! was finalized. Edge weights must be non-negative. Debug builds assert it.
//! Distances are summed with [`Weight::saturating_add`], so a narrow integer
//! weight type clamps long distances rather than overflowing.

use ahash::{AHashMap, AHashSet};
use tracing::{debug, trace};

use crate::{edge::EdgeSeq, graph::Graph, num_traits::Weight};

use super::{
    frontier::PriorityFrontier,
    heuristic::Heuristic,
    options::Hooks,
    path::{rebuild_path, PredecessorMap},
};

fn improves<W: Weight>(candidate: W, best: Option<W>) -> bool {
    match best {
        None => true,
        Some(best) => candidate.weight_cmp(&best).is_lt(),
    }
}

/// Dijkstra's algorithm from `start`.
///
/// Vertices are finalized in order of distance; the first finalized vertex
/// accepted by the base case ends the search with its shortest path. A
/// neighbour that is already finalized or rejected by the vertex filter
/// consults the early return, which ends the search with the path to the
/// vertex being expanded.
#[tracing::instrument(level = "debug", skip_all, fields(start = ?start))]
pub fn dijkstra<G: Graph>(
    graph: &G,
    start: &G::Vertex,
    mut hooks: impl Hooks<G::Vertex>,
) -> EdgeSeq<G::Vertex, G::Weight> {
    // `None` is a vertex that was not reached yet, absence a finalized one
    let mut live: AHashMap<G::Vertex, Option<G::Weight>> =
        graph.vertices().map(|v| (v, None)).collect();
    live.insert(start.clone(), Some(G::Weight::zero()));

    let mut prev = PredecessorMap::default();
    let mut frontier = PriorityFrontier::new();
    frontier.push(start.clone(), G::Weight::zero());

    while let Some((src, dist)) = frontier.pop() {
        if !live.contains_key(&src) {
            trace!(vertex = ?src, "skipping finalized vertex");
            continue;
        }
        if hooks.reached(&src) {
            let path = rebuild_path(&prev, start, &src);
            debug!(vertex = ?src, distance = %dist, "shortest path found");
            return path;
        }

        for (dst, weight) in graph.neighbors(&src) {
            debug_assert!(
                !weight.is_negative(),
                "negative edge weight {weight} on {src:?} -> {dst:?}"
            );
            match live.get(&dst).copied() {
                Some(best) if hooks.admits(&src, &dst) => {
                    let candidate = dist.saturating_add(weight);
                    if improves(candidate, best) {
                        trace!(vertex = ?dst, distance = %candidate, "relaxed");
                        hooks.pre_visit(&src, &dst);
                        live.insert(dst.clone(), Some(candidate));
                        prev.insert(dst.clone(), (src.clone(), weight));
                        frontier.push(dst, candidate);
                    }
                }
                _ => {
                    if hooks.stops(&src, &dst) {
                        debug!(at = ?src, "early return");
                        return rebuild_path(&prev, start, &src);
                    }
                }
            }
        }

        live.remove(&src);
        hooks.deferred(&src);
    }

    debug!("frontier exhausted");
    EdgeSeq::empty()
}

/// A* search from `start`, ordering the frontier by `g + h`.
///
/// `g` is the best known distance from `start` and `h` the heuristic's
/// estimate. A closed vertex is re-opened when a strictly shorter route to it
/// turns up, so an inconsistent (but admissible) heuristic still yields an
/// optimal path.
///
/// Hooks behave as in [`dijkstra`]; a neighbour that is closed and not
/// improved counts as finalized.
#[tracing::instrument(level = "debug", skip_all, fields(start = ?start))]
pub fn a_star<G: Graph>(
    graph: &G,
    start: &G::Vertex,
    heuristic: impl Heuristic<G::Vertex, G::Weight>,
    mut hooks: impl Hooks<G::Vertex>,
) -> EdgeSeq<G::Vertex, G::Weight> {
    let mut g: AHashMap<G::Vertex, G::Weight> = AHashMap::new();
    let mut f: AHashMap<G::Vertex, G::Weight> = AHashMap::new();
    let mut closed: AHashSet<G::Vertex> = AHashSet::new();
    let mut prev = PredecessorMap::default();
    let mut frontier = PriorityFrontier::new();

    let h = heuristic.estimate(start);
    g.insert(start.clone(), G::Weight::zero());
    f.insert(start.clone(), h);
    frontier.push(start.clone(), h);

    while let Some((src, key)) = frontier.pop() {
        let stale = closed.contains(&src)
            || f.get(&src).is_some_and(|best| key.weight_cmp(best).is_gt());
        if stale {
            trace!(vertex = ?src, "skipping stale entry");
            continue;
        }
        if hooks.reached(&src) {
            let path = rebuild_path(&prev, start, &src);
            debug!(vertex = ?src, edges = path.len(), "path found");
            return path;
        }
        let Some(g_src) = g.get(&src).copied() else {
            continue;
        };

        for (dst, weight) in graph.neighbors(&src) {
            debug_assert!(
                !weight.is_negative(),
                "negative edge weight {weight} on {src:?} -> {dst:?}"
            );
            let tentative = g_src.saturating_add(weight);
            let better = improves(tentative, g.get(&dst).copied());
            if better && hooks.admits(&src, &dst) {
                if closed.remove(&dst) {
                    trace!(vertex = ?dst, "re-opened");
                }
                hooks.pre_visit(&src, &dst);
                let key = tentative.saturating_add(heuristic.estimate(&dst));
                g.insert(dst.clone(), tentative);
                f.insert(dst.clone(), key);
                prev.insert(dst.clone(), (src.clone(), weight));
                frontier.push(dst, key);
            } else if (better || closed.contains(&dst)) && hooks.stops(&src, &dst) {
                debug!(at = ?src, "early return");
                return rebuild_path(&prev, start, &src);
            }
        }

        closed.insert(src.clone());
        hooks.deferred(&src);
    }

    debug!("frontier exhausted");
    EdgeSeq::empty()
}
