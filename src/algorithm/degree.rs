use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

pub trait Degrees
where
    Self: QueryableGraph + Sized,
{
    /// Out-degree of every vertex.
    fn out_degree_map(&self) -> HashMap<VertexId, usize, RandomState> {
        let mut res = HashMap::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        for v in self.iter_vertices() {
            res.insert(v, self.out_neighbors(&v).count());
        }
        res
    }

    /// In-degree of every vertex, zero included, in one pass over the edges.
    ///
    /// Since out-edges form a set, this equals the number of vertices with an edge
    /// into each vertex.
    fn in_degree_map(&self) -> HashMap<VertexId, usize, RandomState> {
        let mut res = HashMap::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        for v in self.iter_vertices() {
            res.insert(v, 0);
        }
        for (_, sink) in self.iter_edges() {
            *res.entry(sink).or_insert(0) += 1;
        }
        res
    }

    /// Whether every vertex has as many in-edges as out-edges.
    fn is_balanced(&self) -> bool {
        let ins = self.in_degree_map();
        self.iter_vertices()
            .all(|v| ins.get(&v).copied().unwrap_or(0) == self.out_neighbors(&v).count())
    }
}

impl<G: QueryableGraph> Degrees for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn star() {
        let mut g = Graph::new();
        for x in ["A", "B", "C"] {
            g.add_node(x).unwrap();
        }
        g.add_edge(&"A", &"B").unwrap();
        g.add_edge(&"A", &"C").unwrap();
        let outs = g.out_degree_map();
        let ins = g.in_degree_map();
        let a = g.vertex_of(&"A").unwrap();
        let b = g.vertex_of(&"B").unwrap();
        assert_eq!(outs[&a], 2);
        assert_eq!(outs[&b], 0);
        assert_eq!(ins[&a], 0);
        assert_eq!(ins[&b], 1);
        assert!(!g.is_balanced());
    }

    #[test]
    fn self_loop_counts_once_each_way() {
        let mut g = Graph::new();
        g.add_node('x').unwrap();
        g.add_edge(&'x', &'x').unwrap();
        let x = g.vertex_of(&'x').unwrap();
        assert_eq!(g.out_degree_map()[&x], 1);
        assert_eq!(g.in_degree_map()[&x], 1);
        assert!(g.is_balanced());
    }

    #[quickcheck]
    fn degree_sums_equal_edge_size(ops: Ops) {
        let g: Graph<u32> = (&ops).into();
        let outs: usize = g.out_degree_map().values().sum();
        let ins: usize = g.in_degree_map().values().sum();
        assert_eq!(outs, g.edge_size());
        assert_eq!(ins, g.edge_size());
    }

    #[quickcheck]
    fn in_degree_counts_predecessors(ops: Ops) {
        let g: Graph<u32> = (&ops).into();
        let ins = g.in_degree_map();
        for v in g.iter_vertices() {
            assert_eq!(ins[&v], g.in_neighbors(&v).count());
        }
    }
}
