/// Which notion of connectivity a graph answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Every node is reachable from every other following edge direction.
    #[default]
    Strong,
    /// Every node is reachable from every other when edge direction is ignored.
    Weak,
}

/// Configuration for a [crate::graph::Graph].
#[derive(Debug, Clone, Default)]
pub struct GraphConfig {
    /// Used by `is_connected` and `is_eulerian_circuit`.
    pub connectivity: Connectivity,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }
}
