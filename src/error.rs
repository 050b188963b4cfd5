use thiserror::Error;

/// Errors raised by graph queries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The queried vertex is not in the graph.
    #[error("vertex not in graph")]
    UnknownVertex,
}

pub type Result<T> = std::result::Result<T, GraphError>;
