use thiserror::Error;

/// Errors raised by [crate::graph::Graph] operations.
///
/// Every variant is a precondition violation detected before the graph is touched,
/// so a failed call never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node with the same payload is already present.
    #[error("node {0} is already in the graph")]
    DuplicateNode(String),

    /// A referenced node is not present.
    #[error("node {0} is not in the graph")]
    MissingNode(String),

    /// Topological layering was requested on a cyclic graph.
    #[error("graph is not acyclic, found cycle {}", .cycle.join(" -> "))]
    NotADag { cycle: Vec<String> },

    /// A shortest-path query named a node that is not present.
    #[error("source {0} is not in the graph")]
    InvalidSource(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
