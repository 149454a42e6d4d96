//! Depth-first and breadth-first search driven by [`Hooks`].

use std::{collections::VecDeque, vec};

use ahash::AHashSet;
use tracing::debug;

use crate::{
    edge::{Edge, EdgeSeq},
    graph::{Graph, GraphEdge},
};

use super::{
    options::{Hooks, NoHook},
    path::{rebuild_path, PredecessorMap},
};

type Neighbors<G> = vec::IntoIter<(<G as Graph>::Vertex, <G as Graph>::Weight)>;

fn neighbors_of<G: Graph>(graph: &G, v: &G::Vertex) -> Neighbors<G> {
    graph.neighbors(v).collect::<Vec<_>>().into_iter()
}

/// A vertex on the depth-first stack and the neighbours it has yet to try.
struct Frame<G: Graph> {
    vertex: G::Vertex,
    neighbors: Neighbors<G>,
}

impl<G: Graph> Frame<G> {
    fn new(graph: &G, vertex: G::Vertex) -> Self {
        let neighbors = neighbors_of(graph, &vertex);
        Frame { vertex, neighbors }
    }
}

/// Depth-first search from `start`.
///
/// Returns the path to the first vertex the base case accepts, or the path
/// to the current vertex when the early return fires. If the search runs
/// out of vertices the result is empty; so is the result when `start` itself
/// satisfies the base case.
///
/// The deferred hook runs for a vertex once all of its neighbours were tried
/// without the search finishing.
#[tracing::instrument(level = "debug", skip_all, fields(start = ?start))]
pub fn dfs<G: Graph>(
    graph: &G,
    start: &G::Vertex,
    mut hooks: impl Hooks<G::Vertex>,
) -> EdgeSeq<G::Vertex, G::Weight> {
    if hooks.reached(start) {
        return EdgeSeq::empty();
    }

    let mut visited = AHashSet::new();
    visited.insert(start.clone());
    let mut stack: Vec<Frame<G>> = vec![Frame::new(graph, start.clone())];
    let mut path: Vec<GraphEdge<G>> = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let Some((dst, weight)) = frame.neighbors.next() else {
            if let Some(done) = stack.pop() {
                hooks.deferred(&done.vertex);
            }
            path.pop();
            continue;
        };
        let src = frame.vertex.clone();

        if !visited.contains(&dst) && hooks.admits(&src, &dst) {
            hooks.pre_visit(&src, &dst);
            visited.insert(dst.clone());
            path.push(Edge::new(src, dst.clone(), weight));
            if hooks.reached(&dst) {
                debug!(len = path.len(), "reached base case");
                return EdgeSeq::from(path);
            }
            stack.push(Frame::new(graph, dst));
        } else if hooks.stops(&src, &dst) {
            debug!(len = path.len(), "early return");
            return EdgeSeq::from(path);
        }
    }

    debug!(visited = visited.len(), "search exhausted");
    EdgeSeq::from(path)
}

/// What one call to [`BreadthFirst::advance`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<V, W> {
    /// A new vertex was entered through this edge.
    Discovered(Edge<V, W>),
    /// This dequeued vertex satisfies the base case.
    Reached(V),
    /// The early return fired while expanding this vertex.
    Stopped(V),
    Exhausted,
}

/// Breadth-first search as a resumable state machine.
///
/// Every call to [`advance`](Self::advance) makes progress up to the next
/// discovery or the end of the search, so callers decide how much of the
/// graph is explored.
pub struct BreadthFirst<'g, G: Graph> {
    graph: &'g G,
    queue: VecDeque<G::Vertex>,
    visited: AHashSet<G::Vertex>,
    prev: PredecessorMap<G::Vertex, G::Weight>,
    current: Option<(G::Vertex, Neighbors<G>)>,
}

impl<'g, G: Graph> BreadthFirst<'g, G> {
    pub fn new(graph: &'g G, start: G::Vertex) -> Self {
        let mut visited = AHashSet::new();
        visited.insert(start.clone());
        BreadthFirst {
            graph,
            queue: VecDeque::from([start]),
            visited,
            prev: PredecessorMap::default(),
            current: None,
        }
    }

    pub fn advance<H: Hooks<G::Vertex> + ?Sized>(
        &mut self,
        hooks: &mut H,
    ) -> Step<G::Vertex, G::Weight> {
        loop {
            if let Some((src, neighbors)) = self.current.as_mut() {
                if let Some((dst, weight)) = neighbors.next() {
                    if !self.visited.contains(&dst) && hooks.admits(src, &dst) {
                        hooks.pre_visit(src, &dst);
                        self.visited.insert(dst.clone());
                        self.prev.insert(dst.clone(), (src.clone(), weight));
                        self.queue.push_back(dst.clone());
                        return Step::Discovered(Edge::new(src.clone(), dst, weight));
                    } else if hooks.stops(src, &dst) {
                        return Step::Stopped(src.clone());
                    }
                    continue;
                }
                if let Some((done, _)) = self.current.take() {
                    hooks.deferred(&done);
                }
            }

            let Some(v) = self.queue.pop_front() else {
                return Step::Exhausted;
            };
            if hooks.reached(&v) {
                return Step::Reached(v);
            }
            let neighbors = neighbors_of(self.graph, &v);
            self.current = Some((v, neighbors));
        }
    }

    pub fn predecessors(&self) -> &PredecessorMap<G::Vertex, G::Weight> {
        &self.prev
    }

    pub fn visited(&self) -> &AHashSet<G::Vertex> {
        &self.visited
    }
}

/// Breadth-first search from `start`.
///
/// With a base case, returns the fewest-edges path to the first accepted
/// vertex (empty if there is none). Without one, returns every discovery
/// edge in level order. An early return yields the path to the vertex being
/// expanded.
#[tracing::instrument(level = "debug", skip_all, fields(start = ?start))]
pub fn bfs<G: Graph>(
    graph: &G,
    start: &G::Vertex,
    mut hooks: impl Hooks<G::Vertex>,
) -> EdgeSeq<G::Vertex, G::Weight> {
    let mut search = BreadthFirst::new(graph, start.clone());
    let mut flood = Vec::new();
    loop {
        match search.advance(&mut hooks) {
            Step::Discovered(edge) => flood.push(edge),
            Step::Reached(v) | Step::Stopped(v) => {
                let path = rebuild_path(search.predecessors(), start, &v);
                debug!(len = path.len(), "search finished early");
                return path;
            }
            Step::Exhausted => break,
        }
    }

    debug!(discovered = flood.len(), "search exhausted");
    if hooks.has_base_case() {
        EdgeSeq::empty()
    } else {
        EdgeSeq::from(flood)
    }
}

/// Lazily yields `start` and then every vertex reachable from it, in
/// breadth-first order.
pub struct Reachable<'g, G: Graph> {
    search: BreadthFirst<'g, G>,
    start: Option<G::Vertex>,
}

impl<G: Graph> Iterator for Reachable<'_, G> {
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(start);
        }
        match self.search.advance(&mut NoHook) {
            Step::Discovered(edge) => Some(edge.dst),
            _ => None,
        }
    }
}

pub fn reachable<'g, G: Graph>(graph: &'g G, start: &G::Vertex) -> Reachable<'g, G> {
    Reachable {
        search: BreadthFirst::new(graph, start.clone()),
        start: Some(start.clone()),
    }
}
