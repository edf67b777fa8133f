use crate::graph::*;

/// Read-only, handle-level view of a directed graph.
///
/// Algorithms in [crate::algorithm] are written against this trait only,
/// so they never see payloads and never touch scratch registers.
pub trait QueryableGraph {
    /// Total number of vertices.
    fn vertex_size(&self) -> usize;
    /// Iterates over vertices in the graph's fixed iteration order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    /// Total number of directed edges.
    fn edge_size(&self) -> usize;
    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool;
    /// Iterates over sinks of edges leaving `v`.
    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Iterates over sources of edges entering `v`.
    ///
    /// The default scans every vertex.
    fn in_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let sink = *v;
        let it = self
            .iter_vertices()
            .filter(move |u| self.contains_edge(u, &sink));
        Box::new(it)
    }

    /// Iterates over all edges as `(source, sink)` pairs.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = (VertexId, VertexId)> + '_> {
        let it = self
            .iter_vertices()
            .flat_map(move |u| self.out_neighbors(&u).map(move |v| (u, v)));
        Box::new(it)
    }
}
