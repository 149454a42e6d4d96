use tracing::debug;

use crate::{
    edge::EdgeSeq,
    graph::{Graph, GraphEdge},
    num_traits::Weight,
    union_find::UnionFind,
};

use super::SpanningError;

/// Kruskal's minimum spanning forest.
///
/// Edges are tried from lightest to heaviest and kept whenever they join two
/// different components, so the result has `vertex_count - components`
/// edges. Directed graphs are refused.
#[tracing::instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn kruskal<G: Graph>(graph: &G) -> Result<EdgeSeq<G::Vertex, G::Weight>, SpanningError> {
    if graph.is_directed() {
        return Err(SpanningError::DirectedGraph);
    }

    let mut components = UnionFind::new();
    for v in graph.vertices() {
        components.make_set(v);
    }

    // heaviest first, so the lightest edge sits at the back
    let mut edges: Vec<GraphEdge<G>> = graph.edges().collect();
    edges.sort_by(|a, b| b.weight.weight_cmp(&a.weight));

    let mut forest = Vec::with_capacity(components.len().saturating_sub(1));
    while let Some(edge) = edges.pop() {
        if components.union(&edge.src, &edge.dst) {
            forest.push(edge);
        }
    }

    debug!(
        accepted = forest.len(),
        components = components.set_count(),
        "spanning forest built"
    );
    Ok(EdgeSeq::from(forest))
}
