//! Graph algorithms
//!
//! Each analysis is an extension trait with default methods, implemented for
//! every [QueryableGraph](crate::graph::QueryableGraph).
//! Traversal state (visited sets, path stacks, distances, levels) lives in
//! contexts owned by each call, so analyses compose without any reset discipline.
mod connectivity;
pub use self::connectivity::*;
mod cycle;
pub use self::cycle::*;
mod degree;
pub use self::degree::*;
mod distance;
pub use self::distance::*;
mod eulerian;
pub use self::eulerian::*;
mod partition;
pub use self::partition::*;
mod symmetry;
pub use self::symmetry::*;
mod toposort;
pub use self::toposort::*;
