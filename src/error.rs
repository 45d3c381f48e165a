//! Crate-wide error type. Malformed input is never an error (bad lines are
//! skipped during parsing); the only fallible operations are the traversals,
//! which fail closed when the start vertex does not exist.

/// Result alias using the crate [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The caller-supplied start vertex is not a key of the built graph
    #[error("start vertex {0:?} does not exist in the graph")]
    UnknownStartVertex(String),
}
