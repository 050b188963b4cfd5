//! A directed graph over customized vertex types.
//!
//! [DirectedGraph] translates each vertex, in both directions,
//! to a [VertexId](crate::graph::VertexId) of an underlying
//! [AdjacentListGraph](crate::graph::directed::AdjacentListGraph),
//! and runs [algorithms](crate::algorithm) on the latter.
mod directed_graph;
pub use self::directed_graph::*;

mod fmt;
pub use self::fmt::*;
