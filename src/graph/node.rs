use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// Value of a scratch register nobody has written to since the last reset.
pub const UNVISITED: i64 = 0;

/// A vertex of a [Graph]: its payload, its outgoing edges and a scratch register.
///
/// Outgoing edges are a set of [VertexId]s, so adding an edge twice keeps one copy.
/// The scratch register records the per-node outcome of the last analysis that ran
/// over the owning graph (visited flag, partition tag, hop distance or level).
/// Analyses reset every register before they stamp their own results.
#[derive(Debug, Clone)]
pub struct Node<T> {
    id: VertexId,
    data: T,
    edges: HashSet<VertexId, RandomState>,
    state: i64,
}

impl<T> Node<T> {
    pub(crate) fn new(id: VertexId, data: T) -> Self {
        Self {
            id,
            data,
            edges: HashSet::with_hasher(RandomState::new()),
            state: UNVISITED,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn state(&self) -> i64 {
        self.state
    }

    pub fn set_state(&mut self, state: i64) {
        self.state = state;
    }

    /// Drives the scratch register back to [UNVISITED].
    pub fn reset(&mut self) {
        self.state = UNVISITED;
    }

    /// Returns `true` if the edge was not there before.
    pub fn add_edge(&mut self, other: VertexId) -> bool {
        self.edges.insert(other)
    }

    /// Returns `true` if the edge was there.
    pub fn remove_edge(&mut self, other: &VertexId) -> bool {
        self.edges.remove(other)
    }

    pub fn has_edge(&self, other: &VertexId) -> bool {
        self.edges.contains(other)
    }

    pub fn clear_edges(&mut self) {
        self.edges.clear();
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Sinks of outgoing edges, in no specific order.
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.iter().copied()
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: Ord> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Nodes compare as their payloads do.
impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.data.cmp(&other.data)
    }
}
