use crate::graph::*;
use ahash::RandomState;
use log::debug;
use std::collections::{HashMap, HashSet};

pub trait CycleDetection
where
    Self: QueryableGraph + Sized,
{
    /// Returns a directed cycle as the vertices along it, the first one repeated at the end,
    /// or `None` if the graph is acyclic.
    fn find_cycle(&self) -> Option<Vec<VertexId>> {
        let mut explored = HashSet::with_hasher(RandomState::new());
        self.find_cycle_within(&mut explored)
    }

    /// Like [CycleDetection::find_cycle], starting a depth-first search from every vertex
    /// not yet in `explored`.
    ///
    /// Vertices whose descendants are fully searched are added to `explored`.
    /// When no cycle is found, all vertices end up there.
    fn find_cycle_within(
        &self,
        explored: &mut HashSet<VertexId, RandomState>,
    ) -> Option<Vec<VertexId>> {
        let roots: Vec<_> = self.iter_vertices().collect();
        for root in roots {
            if explored.contains(&root) {
                continue;
            }
            if let Some(cycle) = PathSearch::new(self).run(root, explored) {
                debug!("found a cycle of length {}", cycle.len() - 1);
                return Some(cycle);
            }
        }
        None
    }

    fn is_acyclic(&self) -> bool {
        self.find_cycle().is_none()
    }
}

impl<G: QueryableGraph> CycleDetection for G {}

/// One depth-first search.
///
/// `vertex_backtrack` holds exactly the vertices on the current path,
/// separately from the vertices explored by this and earlier searches.
/// Reaching a vertex on the path closes a cycle.
struct PathSearch<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    vertex_stack: Vec<VertexId>,
    vertex_backtrack: HashMap<VertexId, usize, RandomState>,
    edge_to_scan: Vec<Box<dyn Iterator<Item = VertexId> + 'a>>,
}

impl<'a, G> PathSearch<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            vertex_stack: vec![],
            vertex_backtrack: HashMap::with_hasher(RandomState::new()),
            edge_to_scan: vec![],
        }
    }

    fn run(
        mut self,
        root: VertexId,
        explored: &mut HashSet<VertexId, RandomState>,
    ) -> Option<Vec<VertexId>> {
        self.push_vertex(root);
        while let Some(edges) = self.edge_to_scan.last_mut() {
            match edges.next() {
                Some(sink) => {
                    if let Some(idx) = self.vertex_backtrack.get(&sink) {
                        let mut res = self.vertex_stack[*idx..].to_vec();
                        res.push(sink);
                        return Some(res);
                    }
                    if !explored.contains(&sink) {
                        self.push_vertex(sink);
                    }
                }
                None => {
                    self.edge_to_scan.pop();
                    if let Some(v) = self.vertex_stack.pop() {
                        self.vertex_backtrack.remove(&v);
                        explored.insert(v);
                    }
                }
            }
        }
        None
    }

    fn push_vertex(&mut self, vert: VertexId) {
        let n = self.vertex_stack.len();
        self.vertex_stack.push(vert);
        self.vertex_backtrack.insert(vert, n);
        self.edge_to_scan.push(self.graph.out_neighbors(&vert));
    }
}
