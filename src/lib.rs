//! A generic directed graph with reachability and shortest-path queries.
//!
//! # Layers
//!
//! Vertices of a graph are usually customized values, e.g. names of tasks,
//! coordinates or strings read from a file.
//! But for algorithm authors, customized values are hard to deal with.
//! Can we copy a vertex?
//! What is the cost of hashing it again and again?
//!
//! So this crate is built in two layers.
//!
//! *   [graph] holds low-level graphs whose vertices are lightweight
//!     [VertexId](graph::VertexId)'s, essentially `usize`.
//!     Algorithms in [algorithm] run on them and may feel free to copy and store ids.
//! *   [tagged] holds [DirectedGraph], which maps customized vertices onto ids
//!     of a low-level graph.
//!     Users may experience it as a plain graph over their own vertex type.
//!
//! # Example
//!
//! ```
//! let mut g = digraph_adt::create_graph::<&str>();
//! g.add_edge("A", "B");
//! g.add_edge("B", "C");
//! assert!(g.has_path(&"A", &"C"));
//! assert_eq!(g.path_length(&"A", &"C"), 2);
//! assert_eq!(g.shortest_path(&"A", &"C"), vec!["A", "B", "C"]);
//! assert_eq!(g.to_string(), "A: B\nB: C\nC:\n");
//! ```

pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
pub mod tagged;
pub use self::tagged::DirectedGraph;

use std::hash::Hash;

/// Creates an empty [DirectedGraph] over a caller-chosen vertex type.
pub fn create_graph<V>() -> DirectedGraph<V>
where
    V: Hash + Eq,
{
    DirectedGraph::new()
}
