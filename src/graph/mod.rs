//! Traits and an implementation of low-level directed graphs.
//!
//! Vertices in low-level graphs are lightweight [VertexId]'s.
//! Edges are identified by their endpoints, since at most one edge
//! connects an ordered pair of vertices.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;

pub mod directed;
