use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashMap, VecDeque};

pub trait HopDistance
where
    Self: QueryableGraph + Sized,
{
    /// Fewest edges from `source` to every vertex reachable from it, by breadth-first search.
    ///
    /// Unreachable vertices are absent. `source` itself is at distance 0.
    fn hop_distances(&self, source: VertexId) -> HashMap<VertexId, usize, RandomState> {
        let mut distances = HashMap::with_hasher(RandomState::new());
        if !self.contains_vertex(&source) {
            return distances;
        }
        let mut queue = VecDeque::new();
        distances.insert(source, 0);
        queue.push_back((source, 0));
        while let Some((v, depth)) = queue.pop_front() {
            for next in self.out_neighbors(&v) {
                if !distances.contains_key(&next) {
                    distances.insert(next, depth + 1);
                    queue.push_back((next, depth + 1));
                }
            }
        }
        distances
    }
}

impl<G: QueryableGraph> HopDistance for G {}
