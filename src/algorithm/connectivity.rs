use crate::{graph::*, Connectivity};
use ahash::RandomState;
use std::collections::{HashMap, HashSet};

/// Which edges a traversal may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Along edges, source to sink.
    Outgoing,
    /// Against edges, sink to source.
    Incoming,
    /// Either way, as if the graph were undirected.
    Both,
}

pub trait Reachability
where
    Self: QueryableGraph + Sized,
{
    /// Adds to `visited` every vertex reachable from `start`.
    ///
    /// Vertices already in `visited` are treated as explored and are not expanded again,
    /// so a caller can sweep several starts with one context.
    fn reach_from(
        &self,
        start: VertexId,
        direction: Direction,
        visited: &mut HashSet<VertexId, RandomState>,
    ) {
        let predecessors = match direction {
            Direction::Outgoing => None,
            Direction::Incoming | Direction::Both => Some(predecessor_lists(self)),
        };
        let mut stack = vec![start];
        while let Some(v) = stack.pop() {
            if !visited.insert(v) {
                continue;
            }
            if direction != Direction::Incoming {
                stack.extend(self.out_neighbors(&v).filter(|u| !visited.contains(u)));
            }
            if let Some(ins) = predecessors.as_ref().and_then(|p| p.get(&v)) {
                stack.extend(ins.iter().copied().filter(|u| !visited.contains(u)));
            }
        }
    }

    fn reachable_from(&self, start: VertexId, direction: Direction) -> HashSet<VertexId, RandomState> {
        let mut visited = HashSet::with_hasher(RandomState::new());
        self.reach_from(start, direction, &mut visited);
        visited
    }

    /// Every vertex reaches every other when direction is ignored.
    ///
    /// An empty graph is connected.
    fn is_weakly_connected(&self) -> bool {
        match self.iter_vertices().next() {
            None => true,
            Some(start) => self.reachable_from(start, Direction::Both).len() == self.vertex_size(),
        }
    }

    /// Every vertex reaches every other following edge direction.
    ///
    /// It suffices that one vertex reaches all and is reached by all.
    fn is_strongly_connected(&self) -> bool {
        match self.iter_vertices().next() {
            None => true,
            Some(start) => {
                let n = self.vertex_size();
                self.reachable_from(start, Direction::Outgoing).len() == n
                    && self.reachable_from(start, Direction::Incoming).len() == n
            }
        }
    }

    fn is_connected_as(&self, connectivity: Connectivity) -> bool {
        match connectivity {
            Connectivity::Weak => self.is_weakly_connected(),
            Connectivity::Strong => self.is_strongly_connected(),
        }
    }
}

impl<G: QueryableGraph> Reachability for G {}

/// Sources of in-edges of every vertex, built in one pass over the edges.
pub(crate) fn predecessor_lists<G>(graph: &G) -> HashMap<VertexId, Vec<VertexId>, RandomState>
where
    G: QueryableGraph,
{
    let mut res: HashMap<VertexId, Vec<VertexId>, RandomState> =
        HashMap::with_capacity_and_hasher(graph.vertex_size(), RandomState::new());
    for (source, sink) in graph.iter_edges() {
        res.entry(sink).or_default().push(source);
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::algo::{connected_components, kosaraju_scc};
    use quickcheck_macros::quickcheck;

    fn chain() -> Graph<&'static str> {
        let mut g = Graph::new();
        for x in ["A", "B", "C"] {
            g.add_node(x).unwrap();
        }
        g.add_edge(&"A", &"B").unwrap();
        g.add_edge(&"B", &"C").unwrap();
        g
    }

    #[test]
    fn chain_is_weakly_but_not_strongly_connected() {
        let g = chain();
        assert!(g.is_weakly_connected());
        assert!(!g.is_strongly_connected());
    }

    #[test]
    fn cycle_is_strongly_connected() {
        let mut g = chain();
        g.add_edge(&"C", &"A").unwrap();
        assert!(g.is_strongly_connected());
    }

    #[test]
    fn all_branches_are_followed() {
        let mut g = Graph::new();
        for x in ["A", "B", "C", "D"] {
            g.add_node(x).unwrap();
        }
        g.add_edge(&"A", &"B").unwrap();
        g.add_edge(&"A", &"C").unwrap();
        g.add_edge(&"A", &"D").unwrap();
        let a = g.vertex_of(&"A").unwrap();
        assert_eq!(g.reachable_from(a, Direction::Outgoing).len(), 4);
        let d = g.vertex_of(&"D").unwrap();
        assert_eq!(g.reachable_from(d, Direction::Outgoing).len(), 1);
        assert_eq!(g.reachable_from(d, Direction::Incoming).len(), 2);
        assert_eq!(g.reachable_from(d, Direction::Both).len(), 4);
    }

    #[test]
    fn isolated_vertex_breaks_connectivity() {
        let mut g = chain();
        g.add_node("D").unwrap();
        assert!(!g.is_weakly_connected());
        assert!(!g.is_connected_as(Connectivity::Strong));
    }

    #[test]
    fn empty_graph_is_connected() {
        let g = Graph::<u32>::new();
        assert!(g.is_weakly_connected());
        assert!(g.is_strongly_connected());
    }

    #[quickcheck]
    fn weak_connectivity_agrees_with_petgraph(ops: Ops) {
        let g: Graph<u32> = (&ops).into();
        let oracle = Oracle::from(&g);
        assert_eq!(
            g.is_weakly_connected(),
            connected_components(&oracle.graph) <= 1
        );
    }

    #[quickcheck]
    fn strong_connectivity_agrees_with_petgraph(ops: Ops) {
        let g: Graph<u32> = (&ops).into();
        let oracle = Oracle::from(&g);
        assert_eq!(g.is_strongly_connected(), kosaraju_scc(&oracle.graph).len() <= 1);
    }
}
