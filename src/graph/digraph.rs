use crate::{graph::*, GraphConfig, GraphError, Result};
use ahash::RandomState;
use log::trace;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

/// A directed, unweighted graph whose nodes are identified by their payloads.
///
/// | operation     | complexity                                   |
/// | ------------- | -------------------------------------------- |
/// | `add_node`    | $O(\log \|V\|)$                              |
/// | `add_edge`    | $O(\log \|V\|)$                              |
/// | `remove_edge` | $O(\log \|V\|)$                              |
/// | `remove_node` | $O(\|V\|)$, every node is checked for an edge into the removed one |
/// | `size`        | $O(1)$                                       |
///
/// Nodes iterate in ascending payload order. Payloads are compared with `Ord`,
/// never by hash, so distinct payloads never collide.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    config: GraphConfig,
    vid_factory: VertexIdFactory,
    index: BTreeMap<T, VertexId>,
    nodes: HashMap<VertexId, Node<T>, RandomState>,
}

impl<T: Ord + Clone + Display> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T>
where
    T: Ord + Clone + Display,
{
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            vid_factory: VertexIdFactory::new(),
            index: BTreeMap::new(),
            nodes: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.out_degree()).sum()
    }

    pub fn contains(&self, data: &T) -> bool {
        self.index.contains_key(data)
    }

    pub fn node(&self, data: &T) -> Option<&Node<T>> {
        self.index.get(data).and_then(|vid| self.nodes.get(vid))
    }

    /// Nodes in ascending payload order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.index.values().filter_map(|vid| self.nodes.get(vid))
    }

    pub fn vertex_of(&self, data: &T) -> Option<VertexId> {
        self.index.get(data).copied()
    }

    pub fn payload(&self, vid: &VertexId) -> Option<&T> {
        self.nodes.get(vid).map(|n| n.data())
    }

    /// Whether every node's scratch register holds `state`.
    pub fn check_state(&self, state: i64) -> bool {
        self.nodes.values().all(|n| n.state() == state)
    }

    /// Drives every scratch register back to [UNVISITED].
    pub fn reset(&mut self) {
        for n in self.nodes.values_mut() {
            n.reset();
        }
    }

    /// Inserts a node with no edges and a clear register.
    pub fn add_node(&mut self, data: T) -> Result<()> {
        if self.index.contains_key(&data) {
            return Err(GraphError::DuplicateNode(data.to_string()));
        }
        let vid = self.vid_factory.one_more();
        trace!("add node {} as {:?}", data, vid);
        self.index.insert(data.clone(), vid);
        self.nodes.insert(vid, Node::new(vid, data));
        Ok(())
    }

    /// Links `from` to `to`. Adding an existing edge changes nothing.
    pub fn add_edge(&mut self, from: &T, to: &T) -> Result<()> {
        let (source, sink) = self.endpoints(from, to)?;
        if let Some(node) = self.nodes.get_mut(&source) {
            if node.add_edge(sink) {
                trace!("add edge {} -> {}", from, to);
            }
        }
        Ok(())
    }

    /// Unlinks `from` from `to`. Removing an absent edge changes nothing.
    pub fn remove_edge(&mut self, from: &T, to: &T) -> Result<()> {
        let (source, sink) = self.endpoints(from, to)?;
        if let Some(node) = self.nodes.get_mut(&source) {
            if node.remove_edge(&sink) {
                trace!("remove edge {} -> {}", from, to);
            }
        }
        Ok(())
    }

    /// Whether `from` links to `to`. `false` if either is absent.
    pub fn has_edge(&self, from: &T, to: &T) -> bool {
        match (self.node(from), self.vertex_of(to)) {
            (Some(node), Some(sink)) => node.has_edge(&sink),
            _ => false,
        }
    }

    /// Removes a node with all edges into and out of it, returning its payload.
    pub fn remove_node(&mut self, data: &T) -> Result<T> {
        // nothing is touched until the node itself is taken out
        let vid = self.require(data)?;
        let mut node = self
            .nodes
            .remove(&vid)
            .ok_or_else(|| GraphError::MissingNode(data.to_string()))?;
        self.index.remove(data);
        node.clear_edges();
        for other in self.nodes.values_mut() {
            other.remove_edge(&vid);
        }
        trace!("remove node {} as {:?}", data, vid);
        Ok(node.data().clone())
    }

    /// Display form of the node behind `vid`.
    pub(crate) fn name_of(&self, vid: &VertexId) -> String {
        self.payload(vid).map(|d| d.to_string()).unwrap_or_default()
    }

    /// Sets every register to what `f` says for that node.
    pub(crate) fn stamp<F>(&mut self, f: F)
    where
        F: Fn(VertexId) -> i64,
    {
        for node in self.nodes.values_mut() {
            let state = f(node.id());
            node.set_state(state);
        }
    }

    fn require(&self, data: &T) -> Result<VertexId> {
        self.vertex_of(data)
            .ok_or_else(|| GraphError::MissingNode(data.to_string()))
    }

    fn endpoints(&self, from: &T, to: &T) -> Result<(VertexId, VertexId)> {
        Ok((self.require(from)?, self.require(to)?))
    }

    /// Payloads of `node`'s neighbors, in ascending order.
    fn sorted_neighbors<'a>(&'a self, node: &'a Node<T>) -> Vec<&'a T> {
        let mut res: Vec<_> = node.neighbors().filter_map(|v| self.payload(&v)).collect();
        res.sort();
        res
    }

    /// An `(n+1)×(n+1)` grid.
    ///
    /// Cell `[0][0]` is empty. The first row and the first column hold node names
    /// in node order. Cell `[i][j]` is `"1"` if node `i` links to node `j`, otherwise `"0"`.
    /// The diagonal is `"1"` only for self-loops.
    pub fn adjacency_matrix(&self) -> Vec<Vec<String>> {
        let order: Vec<VertexId> = self.index.values().copied().collect();
        let mut header = vec![String::new()];
        header.extend(order.iter().map(|v| self.name_of(v)));
        let mut res = vec![header];
        for row in order.iter() {
            let mut line = vec![self.name_of(row)];
            line.extend(order.iter().map(|col| {
                if self.contains_edge(row, col) {
                    "1".to_owned()
                } else {
                    "0".to_owned()
                }
            }));
            res.push(line);
        }
        res
    }
}

impl<T: Ord> QueryableGraph for Graph<T> {
    fn vertex_size(&self) -> usize {
        self.nodes.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.index.values().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.nodes.contains_key(v)
    }

    fn edge_size(&self) -> usize {
        self.nodes.values().map(|n| n.out_degree()).sum()
    }

    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.nodes
            .get(source)
            .map_or(false, |n| n.has_edge(sink))
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.nodes.get(v) {
            Some(node) => Box::new(node.neighbors()),
            None => Box::new(std::iter::empty()),
        }
    }
}

/// One line per node in node order, `<name> > <neighbor> <neighbor> ...`,
/// neighbors in ascending order. No trailing newline.
impl<T> std::fmt::Display for Graph<T>
where
    T: Ord + Clone + Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, node) in self.nodes().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} > ", node.data())?;
            for (j, sink) in self.sorted_neighbors(node).into_iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", sink)?;
            }
        }
        Ok(())
    }
}
