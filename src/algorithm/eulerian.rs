use crate::{
    algorithm::{Degrees, Reachability},
    graph::*,
    Connectivity,
};

pub trait EulerianCircuit
where
    Self: QueryableGraph + Sized,
{
    /// Whether a closed walk traverses every edge exactly once.
    ///
    /// Holds iff every vertex is balanced and the whole graph is connected
    /// under `connectivity`. Linear in vertices plus edges.
    /// For a balanced graph weak and strong connectivity coincide.
    fn has_eulerian_circuit(&self, connectivity: Connectivity) -> bool {
        self.is_balanced() && self.is_connected_as(connectivity)
    }
}

impl<G: QueryableGraph> EulerianCircuit for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn triangle() {
        let mut g = Graph::new();
        for x in ["A", "B", "C"] {
            g.add_node(x).unwrap();
        }
        g.add_edge(&"A", &"B").unwrap();
        g.add_edge(&"B", &"C").unwrap();
        g.add_edge(&"C", &"A").unwrap();
        assert!(g.has_eulerian_circuit(Connectivity::Weak));
        assert!(g.has_eulerian_circuit(Connectivity::Strong));
        g.add_edge(&"A", &"C").unwrap();
        assert!(!g.has_eulerian_circuit(Connectivity::Weak));
    }

    #[test]
    fn figure_eight() {
        let mut g = Graph::new();
        for x in 0..5u32 {
            g.add_node(x).unwrap();
        }
        for (u, v) in [(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)] {
            g.add_edge(&u, &v).unwrap();
        }
        assert!(g.has_eulerian_circuit(Connectivity::Weak));
    }

    #[test]
    fn two_separate_cycles() {
        let mut g = Graph::new();
        for x in 0..4u32 {
            g.add_node(x).unwrap();
        }
        for (u, v) in [(0, 1), (1, 0), (2, 3), (3, 2)] {
            g.add_edge(&u, &v).unwrap();
        }
        assert!(g.is_balanced());
        assert!(!g.has_eulerian_circuit(Connectivity::Weak));
    }

    #[quickcheck]
    fn unbalanced_is_never_eulerian(ops: Ops) {
        let g: Graph<u32> = (&ops).into();
        if !g.is_balanced() {
            assert!(!g.has_eulerian_circuit(Connectivity::Weak));
            assert!(!g.has_eulerian_circuit(Connectivity::Strong));
        }
    }

    #[quickcheck]
    fn weak_and_strong_agree(ops: Ops) {
        let g: Graph<u32> = (&ops).into();
        assert_eq!(
            g.has_eulerian_circuit(Connectivity::Weak),
            g.has_eulerian_circuit(Connectivity::Strong)
        );
    }
}
