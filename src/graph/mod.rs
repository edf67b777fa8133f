//! The directed graph container, its nodes and the handle-level view algorithms run on.
//!
//! # Payloads and handles
//!
//! A [Graph] is keyed by its payloads: two nodes never hold equal payloads.
//! Internally each node also gets a [VertexId], a lightweight handle which is
//! essentially `usize`. Algorithms work on handles through [QueryableGraph],
//! so they may copy and store them freely.
//!
//! # Scratch registers
//!
//! Every [Node] carries an integer register. The analyses on [Graph] that take
//! `&mut self` reset all registers, compute with their own traversal context and
//! then stamp each node with its outcome. See [Graph::check_state].

mod vertex;
pub use self::vertex::*;
mod r#trait;
pub use self::r#trait::*;
mod node;
pub use self::node::*;
mod digraph;
pub use self::digraph::*;
mod analysis;
pub use self::analysis::*;

#[cfg(test)]
pub use self::tests::*;
