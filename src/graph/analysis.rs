//! Whole-graph analyses on [Graph], reported with node names.
use crate::{algorithm::*, graph::*, Connectivity, GraphError, Result};
use ahash::RandomState;
use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::Display;

/// Marks a visited node in its scratch register.
pub const VISITED: i64 = 1;

/// Hop distance reported for nodes the source cannot reach.
pub const UNREACHABLE: i64 = -1;

impl<T> Graph<T>
where
    T: Ord + Clone + Display,
{
    /// Whether every edge `u -> v` has a matching `v -> u`.
    pub fn is_undirected(&self) -> bool {
        self.is_symmetric()
    }

    /// Whether the graph is connected in the sense its [crate::GraphConfig] asks for.
    ///
    /// By default this is [Connectivity::Strong]: every node reaches every other
    /// following edge direction, so `A -> B` alone is not connected.
    ///
    /// Afterwards every node reached by the sweep holds [VISITED], the rest [UNVISITED].
    /// Under [Connectivity::Strong] a node counts as reached only if it is reachable
    /// both from and to the start node.
    pub fn is_connected(&mut self) -> bool {
        self.reset();
        let start = match self.iter_vertices().next() {
            None => return true,
            Some(v) => v,
        };
        let reached: HashSet<VertexId, RandomState> = match self.config().connectivity {
            Connectivity::Weak => self.reachable_from(start, Direction::Both),
            Connectivity::Strong => {
                let forward = self.reachable_from(start, Direction::Outgoing);
                let backward = self.reachable_from(start, Direction::Incoming);
                forward.intersection(&backward).copied().collect()
            }
        };
        self.stamp(|v| if reached.contains(&v) { VISITED } else { UNVISITED });
        reached.len() == self.size()
    }

    /// Whether the graph has no directed cycle.
    ///
    /// Afterwards every node the search finished with holds [VISITED].
    /// On an acyclic graph that is every node.
    pub fn is_dag(&mut self) -> bool {
        self.reset();
        let mut explored = HashSet::with_hasher(RandomState::new());
        let cycle = self.find_cycle_within(&mut explored);
        self.stamp(|v| if explored.contains(&v) { VISITED } else { UNVISITED });
        cycle.is_none()
    }

    /// Names along some directed cycle, the first repeated at the end.
    pub fn cycle_witness(&self) -> Option<Vec<String>> {
        self.find_cycle()
            .map(|cycle| cycle.iter().map(|v| self.name_of(v)).collect())
    }

    /// Node names grouped by out-degree, ascending.
    pub fn out_degrees(&self) -> BTreeMap<usize, BTreeSet<String>> {
        self.group_names(self.out_degree_map())
    }

    /// Node names grouped by in-degree, ascending.
    pub fn in_degrees(&self) -> BTreeMap<usize, BTreeSet<String>> {
        self.group_names(self.in_degree_map())
    }

    /// Node names grouped by topological level.
    ///
    /// Afterwards every node holds its level.
    /// Fails with [GraphError::NotADag] on a cyclic graph, leaving registers cleared.
    pub fn topo_sort(&mut self) -> Result<BTreeMap<usize, BTreeSet<String>>> {
        self.reset();
        self.ensure_acyclic()?;
        let levels = match self.topo_levels() {
            Some(levels) => levels,
            None => return Err(GraphError::NotADag { cycle: vec![] }),
        };
        self.stamp(|v| levels.get(&v).map_or(UNVISITED, |l| *l as i64));
        Ok(self.group_names(levels))
    }

    /// Node names in an order where every edge points forward.
    pub fn topo_order(&self) -> Result<Vec<String>> {
        let order: Vec<_> = self.toposort().map(|v| self.name_of(&v)).collect();
        if order.len() < self.size() {
            self.ensure_acyclic()?;
        }
        Ok(order)
    }

    /// Number of weakly-connected components. 0 for an empty graph.
    ///
    /// Afterwards every node holds its component tag, counting from 1.
    pub fn count_partitions(&mut self) -> usize {
        self.reset();
        let labels = self.weak_components();
        self.stamp(|v| labels.get(&v).map_or(UNVISITED, |l| *l as i64 + 1));
        let distinct: HashSet<usize> = labels.values().copied().collect();
        distinct.len()
    }

    /// Fewest edges from `source` to every node, keyed by name.
    ///
    /// Edges are unweighted, so this is a breadth-first search.
    /// `source` is at 0 and unreachable nodes are at [UNREACHABLE].
    /// Afterwards every node holds its reported distance.
    ///
    /// Names are the `Display` form of payloads and are assumed unique.
    /// Payloads that display alike share one entry.
    pub fn dijkstra(&mut self, source: &T) -> Result<BTreeMap<String, i64>> {
        let start = self
            .vertex_of(source)
            .ok_or_else(|| GraphError::InvalidSource(source.to_string()))?;
        self.reset();
        let distances = self.hop_distances(start);
        debug!(
            "{} of {} nodes reachable from {}",
            distances.len(),
            self.size(),
            source
        );
        let hops = |v: &VertexId| distances.get(v).map_or(UNREACHABLE, |d| *d as i64);
        self.stamp(|v| hops(&v));
        let res = self
            .iter_vertices()
            .map(|v| (self.name_of(&v), hops(&v)))
            .collect();
        Ok(res)
    }

    /// Whether a closed walk traverses every edge exactly once.
    ///
    /// Registers are left as [Graph::is_connected] leaves them.
    pub fn is_eulerian_circuit(&mut self) -> bool {
        let eulerian = self.has_eulerian_circuit(self.config().connectivity);
        self.is_connected();
        eulerian
    }

    fn ensure_acyclic(&self) -> Result<()> {
        match self.cycle_witness() {
            Some(cycle) => Err(GraphError::NotADag { cycle }),
            None => Ok(()),
        }
    }

    /// Assumes distinct payloads display differently.
    fn group_names(
        &self,
        values: HashMap<VertexId, usize, RandomState>,
    ) -> BTreeMap<usize, BTreeSet<String>> {
        let mut res: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
        for (v, value) in values {
            res.entry(value).or_default().insert(self.name_of(&v));
        }
        res
    }
}
