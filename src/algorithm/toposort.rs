use crate::{algorithm::CycleDetection, graph::*};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use log::debug;
use std::cmp::Reverse;
use std::collections::HashMap;

pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    /// Vertices in an order where every edge points forward.
    ///
    /// On a cyclic graph the iteration stops before the first vertex on or behind a cycle,
    /// so fewer than `vertex_size()` vertices come out.
    fn toposort(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(ToposortIter::new(self))
    }

    /// Level of every vertex: 0 for vertices without in-edges,
    /// otherwise one more than the highest level among its predecessors.
    ///
    /// Levels start at 0 and are relaxed along every edge until no level changes.
    /// Returns `None` on a cyclic graph, where no fixpoint exists.
    fn topo_levels(&self) -> Option<HashMap<VertexId, usize, RandomState>> {
        if !self.is_acyclic() {
            return None;
        }
        let mut levels = HashMap::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        for v in self.iter_vertices() {
            levels.insert(v, 0usize);
        }
        let mut rounds = 0;
        loop {
            rounds += 1;
            let mut changed = false;
            for (source, sink) in self.iter_edges() {
                let floor = levels.get(&source).copied().unwrap_or(0) + 1;
                let level = levels.entry(sink).or_insert(0);
                if *level < floor {
                    *level = floor;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        debug!("topological levels reached fixpoint in {} rounds", rounds);
        Some(levels)
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}

struct ToposortIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    degree_queue: KeyedPriorityQueue<VertexId, Reverse<usize>, RandomState>,
    blocked: bool,
}

impl<'a, G> Iterator for ToposortIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.blocked {
            return None;
        }
        let (vert, in_degree) = self.degree_queue.pop()?;
        if in_degree.0 > 0 {
            self.blocked = true;
            return None;
        }
        for sink in self.graph.out_neighbors(&vert) {
            // every sink of a vertex with no in-edges left is still queued
            if let Some(Reverse(remaining)) = self.degree_queue.get_priority(&sink).copied() {
                self.degree_queue
                    .set_priority(&sink, Reverse(remaining - 1))
                    .expect("sink is queued");
            }
        }
        Some(vert)
    }
}

impl<'a, G> ToposortIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G) -> Self {
        let mut res = Self {
            graph,
            degree_queue: KeyedPriorityQueue::with_capacity_and_hasher(
                graph.vertex_size(),
                RandomState::new(),
            ),
            blocked: false,
        };
        let mut in_degrees: HashMap<VertexId, usize, RandomState> =
            HashMap::with_capacity_and_hasher(graph.vertex_size(), RandomState::new());
        for (_, sink) in graph.iter_edges() {
            *in_degrees.entry(sink).or_default() += 1;
        }
        for v in graph.iter_vertices() {
            let in_degree = in_degrees.get(&v).copied().unwrap_or_default();
            res.degree_queue.push(v, Reverse(in_degree));
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn chain_levels() {
        let g = chain();
        let levels = g.topo_levels().unwrap();
        assert_eq!(levels[&g.vertex_of(&"A").unwrap()], 0);
        assert_eq!(levels[&g.vertex_of(&"B").unwrap()], 1);
        assert_eq!(levels[&g.vertex_of(&"C").unwrap()], 2);
    }

    #[test]
    fn level_follows_longest_predecessor() {
        let mut g = chain();
        g.add_node("D").unwrap();
        g.add_edge(&"A", &"D").unwrap();
        g.add_edge(&"C", &"D").unwrap();
        let levels = g.topo_levels().unwrap();
        assert_eq!(levels[&g.vertex_of(&"D").unwrap()], 3);
    }

    #[test]
    fn cycle_has_no_levels() {
        let mut g = chain();
        g.add_edge(&"C", &"A").unwrap();
        assert!(g.topo_levels().is_none());
        assert_eq!(g.toposort().count(), 0);
    }

    #[test]
    fn toposort_chain() {
        let g = chain();
        let trial: Vec<_> = g.toposort().collect();
        let oracle: Vec<_> = ["A", "B", "C"]
            .iter()
            .map(|x| g.vertex_of(x).unwrap())
            .collect();
        assert_eq!(trial, oracle);
    }

    #[test]
    fn toposort_releases_a_sink_after_all_sources() {
        let mut g = chain();
        g.add_node("D").unwrap();
        g.add_edge(&"A", &"D").unwrap();
        g.add_edge(&"C", &"D").unwrap();
        let trial: Vec<_> = g.toposort().collect();
        assert_eq!(trial.len(), 4);
        assert_eq!(trial.last(), g.vertex_of(&"D").as_ref());
    }

    #[test]
    fn toposort_stops_in_front_of_a_cycle() {
        let mut g = chain();
        g.add_edge(&"C", &"B").unwrap();
        g.add_node("D").unwrap();
        let trial: std::collections::HashSet<_> = g.toposort().collect();
        let oracle: std::collections::HashSet<_> = ["A", "D"]
            .iter()
            .map(|x| g.vertex_of(x).unwrap())
            .collect();
        assert_eq!(trial, oracle);
    }

    #[quickcheck]
    fn toposort(ops: Ops) {
        let mut graph: Graph<u32> = (&ops).into();
        graph.break_cycles();
        let mut seen = std::collections::HashSet::new();
        for v in graph.toposort() {
            for u in graph.in_neighbors(&v) {
                assert!(seen.contains(&u));
            }
            seen.insert(v);
        }
        assert_eq!(seen.len(), graph.vertex_size());
    }

    #[quickcheck]
    fn levels_are_tight(ops: Ops) {
        let mut graph: Graph<u32> = (&ops).into();
        graph.break_cycles();
        let levels = graph.topo_levels().unwrap();
        for v in graph.iter_vertices() {
            let preds: Vec<_> = graph.in_neighbors(&v).map(|u| levels[&u]).collect();
            match preds.iter().max() {
                None => assert_eq!(levels[&v], 0),
                Some(m) => assert_eq!(levels[&v], m + 1),
            }
        }
    }
}
