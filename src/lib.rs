//! A generic directed graph keyed by its payloads, plus a suite of analyses:
//! undirectedness, connectivity, acyclicity, degree distributions,
//! topological layering, partition counting, hop distances and
//! Eulerian-circuit detection.
//!
//! ```rust
//! use digraphs::graph::Graph;
//!
//! let mut g = Graph::new();
//! for x in ["A", "B", "C"] {
//!     g.add_node(x).unwrap();
//! }
//! g.add_edge(&"A", &"B").unwrap();
//! g.add_edge(&"B", &"C").unwrap();
//! assert!(g.is_dag());
//! assert_eq!(g.to_string(), "A > B\nB > C\nC > ");
//! ```
pub mod algorithm;
mod config;
pub use self::config::*;
mod error;
pub use self::error::*;
pub mod graph;
