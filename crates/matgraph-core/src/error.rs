//! Error types shared by the matgraph crates.

use thiserror::Error;

/// Errors reported by the algorithm entry points.
///
/// The taxonomy is deliberately narrow: the algorithms are pure functions of
/// their inputs, so the only failure mode is a precondition violation on a
/// vertex argument. A disconnected graph is a result state (see
/// `MstResult::is_spanning` in the `matgraph` crate), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex argument was outside `[0, vertex_count)`.
    #[error("invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph the index was checked against.
        vertex_count: usize,
    },
}

/// Convenience alias used throughout the matgraph crates.
pub type Result<T> = std::result::Result<T, GraphError>;
