use crate::graph::*;
use ahash::RandomState;
use log::debug;
use petgraph::unionfind::UnionFind;
use std::collections::{HashMap, HashSet};

pub trait Partitions
where
    Self: QueryableGraph + Sized,
{
    /// Labels every vertex with its weakly-connected component.
    ///
    /// Labels are `0..k`, numbered in the order components are first met
    /// while iterating vertices.
    fn weak_components(&self) -> HashMap<VertexId, usize, RandomState> {
        let (order, mut sets) = self.union_edges();
        let mut labels_by_root: HashMap<usize, usize, RandomState> =
            HashMap::with_hasher(RandomState::new());
        let mut res = HashMap::with_capacity_and_hasher(order.len(), RandomState::new());
        for (idx, v) in order.iter().enumerate() {
            let root = sets.find_mut(idx);
            let next = labels_by_root.len();
            let label = *labels_by_root.entry(root).or_insert(next);
            res.insert(*v, label);
        }
        debug!("found {} weakly-connected components", labels_by_root.len());
        res
    }

    fn count_weak_components(&self) -> usize {
        let (order, mut sets) = self.union_edges();
        let roots: HashSet<usize, RandomState> =
            (0..order.len()).map(|idx| sets.find_mut(idx)).collect();
        roots.len()
    }

    /// Vertices in iteration order, and a union-find over their positions
    /// with every edge merged in regardless of direction.
    fn union_edges(&self) -> (Vec<VertexId>, UnionFind<usize>) {
        let order: Vec<VertexId> = self.iter_vertices().collect();
        let position: HashMap<VertexId, usize, RandomState> =
            order.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        let mut sets = UnionFind::new(order.len());
        for (source, sink) in self.iter_edges() {
            if let (Some(a), Some(b)) = (position.get(&source), position.get(&sink)) {
                sets.union(*a, *b);
            }
        }
        (order, sets)
    }
}

impl<G: QueryableGraph> Partitions for G {}
