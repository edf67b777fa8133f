use crate::graph::*;

pub trait Symmetry
where
    Self: QueryableGraph + Sized,
{
    /// Whether every edge `u -> v` is matched by an edge `v -> u`.
    ///
    /// Checks the whole edge set, so disconnected parts are covered too.
    /// Self-loops match themselves.
    fn is_symmetric(&self) -> bool {
        self.iter_edges()
            .all(|(source, sink)| self.contains_edge(&sink, &source))
    }
}

impl<G: QueryableGraph> Symmetry for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn pairs_are_symmetric() {
        let mut g = Graph::new();
        for x in ["A", "B", "C"] {
            g.add_node(x).unwrap();
        }
        g.add_edge(&"A", &"B").unwrap();
        g.add_edge(&"B", &"A").unwrap();
        g.add_edge(&"C", &"C").unwrap();
        assert!(g.is_symmetric());
        g.add_edge(&"B", &"C").unwrap();
        assert!(!g.is_symmetric());
    }

    #[test]
    fn asymmetry_off_the_first_chain_is_found() {
        let mut g = Graph::new();
        for x in ["A", "B", "C", "D"] {
            g.add_node(x).unwrap();
        }
        g.add_edge(&"A", &"B").unwrap();
        g.add_edge(&"B", &"A").unwrap();
        g.add_edge(&"C", &"D").unwrap();
        assert!(!g.is_symmetric());
    }

    #[quickcheck]
    fn symmetric_closure_is_symmetric(ops: Ops) {
        let mut g: Graph<u32> = (&ops).into();
        let edges: Vec<_> = g
            .iter_edges()
            .map(|(u, v)| (g.payload(&u).copied(), g.payload(&v).copied()))
            .collect();
        for (u, v) in edges {
            if let (Some(u), Some(v)) = (u, v) {
                g.add_edge(&v, &u).unwrap();
            }
        }
        assert!(g.is_symmetric());
    }
}
