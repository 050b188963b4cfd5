//! Graph algorithms
mod reachability;
pub use self::reachability::*;
mod shortest_path;
pub use self::shortest_path::*;
