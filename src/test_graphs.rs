//! Shared fixtures and exhaustive reference answers for the test suites.

use ahash::AHashSet;
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    edge::Edge,
    graph::{AdjacencyMap, Graph},
    search::reachable,
    union_find::UnionFind,
};

pub type TestGraph = AdjacencyMap<usize, u32>;

/// Graph on vertices `0..n` with the given edges.
pub fn graph_on(directed: bool, n: usize, edges: &[(usize, usize, u32)]) -> TestGraph {
    let mut g = AdjacencyMap::new(directed);
    for v in 0..n {
        g.add_vertex(v);
    }
    for &(src, dst, w) in edges {
        g.add_edge(src, dst, w);
    }
    g
}

/// Binary tree 1 -> 2, 3; 2 -> 4, 5; 3 -> 6, 7.
pub fn binary_tree() -> AdjacencyMap<u32, u32> {
    AdjacencyMap::from_edges(
        true,
        [
            (1, 2, 1),
            (1, 3, 1),
            (2, 4, 1),
            (2, 5, 1),
            (3, 6, 1),
            (3, 7, 1),
        ],
    )
}

/// Every vertex `0..n`, each possible edge present with probability `p`.
pub fn random_graph(seed: u64, directed: bool, n: usize, p: f64, max_weight: u32) -> TestGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for src in 0..n {
        let first = if directed { 0 } else { src + 1 };
        for dst in first..n {
            if src != dst && rng.gen_bool(p) {
                edges.push((src, dst, rng.gen_range(1..=max_weight)));
            }
        }
    }
    graph_on(directed, n, &edges)
}

prop_compose! {
    /// Up to `max_n` vertices and a handful of weighted edges between them.
    pub fn arb_graph(directed: bool, max_n: usize)
        (n in 1..=max_n)
        (edges in prop::collection::vec((0..n, 0..n, 1u32..=20), 0..=2 * n), n in Just(n))
        -> TestGraph
    {
        graph_on(directed, n, &edges)
    }
}

/// Weight of the lightest simple path from `src` to `dst`, by trying them all.
pub fn brute_shortest<G: Graph<Weight = u32>>(g: &G, src: &G::Vertex, dst: &G::Vertex) -> Option<u32> {
    fn walk<G: Graph<Weight = u32>>(
        g: &G,
        at: &G::Vertex,
        dst: &G::Vertex,
        on_path: &mut AHashSet<G::Vertex>,
        so_far: u32,
        best: &mut Option<u32>,
    ) {
        if at == dst {
            *best = Some(best.map_or(so_far, |b| b.min(so_far)));
            return;
        }
        let next: Vec<_> = g.neighbors(at).collect();
        for (v, w) in next {
            if on_path.insert(v.clone()) {
                walk(g, &v, dst, on_path, so_far + w, best);
                on_path.remove(&v);
            }
        }
    }

    let mut best = None;
    let mut on_path = AHashSet::new();
    on_path.insert(src.clone());
    walk(g, src, dst, &mut on_path, 0, &mut best);
    best
}

/// Weight of the lightest spanning forest, by trying every edge subset.
pub fn brute_spanning_forest(g: &TestGraph) -> u32 {
    let edges: Vec<Edge<usize, u32>> = g.edges().filter(|e| !e.is_loop()).collect();
    assert!(edges.len() <= 16, "too many edges to enumerate");

    let mut best: Option<(usize, u32)> = None;
    for mask in 0u32..(1 << edges.len()) {
        let mut uf = UnionFind::new();
        let mut acyclic = true;
        let mut weight = 0;
        let mut count = 0;
        for (i, e) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                acyclic &= uf.union(&e.src, &e.dst);
                weight += e.weight;
                count += 1;
            }
        }
        if !acyclic {
            continue;
        }
        // more edges first, then less weight
        let better = match best {
            None => true,
            Some((c, w)) => count > c || (count == c && weight < w),
        };
        if better {
            best = Some((count, weight));
        }
    }
    best.map_or(0, |(_, w)| w)
}

/// Weight of the lightest arborescence rooted at `root` spanning everything
/// reachable from it, by trying every choice of incoming edges.
pub fn brute_arborescence(g: &TestGraph, root: usize) -> u32 {
    let reached: AHashSet<usize> = reachable(g, &root).collect();
    let mut targets: Vec<usize> = reached.iter().copied().filter(|v| *v != root).collect();
    targets.sort_unstable();

    let incoming: Vec<Vec<(usize, u32)>> = targets
        .iter()
        .map(|&v| {
            g.edges()
                .flat_map(|e| {
                    if g.is_directed() {
                        vec![e]
                    } else {
                        vec![e, e.reversed()]
                    }
                })
                .filter(|e| e.dst == v && e.src != v && reached.contains(&e.src))
                .map(|e| (e.src, e.weight))
                .collect()
        })
        .collect();

    let mut best: Option<u32> = None;
    let mut choice = vec![0; targets.len()];
    loop {
        let parent = |v: usize| -> Option<usize> {
            let i = targets.iter().position(|t| *t == v)?;
            Some(incoming[i][choice[i]].0)
        };
        let rooted = targets.iter().all(|&v| {
            let mut at = v;
            for _ in 0..=targets.len() {
                if at == root {
                    return true;
                }
                match parent(at) {
                    Some(p) => at = p,
                    None => return false,
                }
            }
            false
        });
        if rooted {
            let weight: u32 = (0..targets.len()).map(|i| incoming[i][choice[i]].1).sum();
            best = Some(best.map_or(weight, |b| b.min(weight)));
        }

        // next choice, odometer style
        let mut i = 0;
        loop {
            if i == targets.len() {
                return best.unwrap_or(0);
            }
            choice[i] += 1;
            if choice[i] < incoming[i].len() {
                break;
            }
            choice[i] = 0;
            i += 1;
        }
    }
}

/// Whether `edges` contain a directed cycle.
pub fn has_directed_cycle(edges: &[Edge<usize, u32>]) -> bool {
    let mut g: TestGraph = AdjacencyMap::directed();
    for e in edges {
        g.add_edge(e.src, e.dst, e.weight);
    }
    crate::search::has_cycle(&g)
}
