//! Error type shared by every fallible operation in `circuits-core`.
//!
//! Every variant except [`CycleError::InternalInvariant`] describes malformed
//! caller input and is reported before any search work starts.
//! `InternalInvariant` is reserved for states the algorithm cannot reach when
//! implemented correctly; callers should treat it as fatal.
use std::fmt;

/// Errors produced while validating input or enumerating cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleError {
    /// A row of the adjacency matrix does not have one entry per vertex.
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of entries found in that row.
        len: usize,
        /// Expected row length (the number of rows in the matrix).
        expected: usize,
    },
    /// The label slice and the matrix disagree on the number of vertices.
    LabelCountMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Side length of the adjacency matrix.
        vertices: usize,
    },
    /// An edge endpoint lies outside `[0, vertices)`.
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// Number of vertices in the graph.
        vertices: usize,
    },
    /// The vertex count is too large to allocate a successor table for.
    GraphTooLarge {
        /// The requested number of vertices.
        vertices: usize,
    },
    /// The search reached a state that indicates a bug in this crate.
    InternalInvariant {
        /// Description of the violated invariant.
        detail: String,
    },
}

impl CycleError {
    /// Returns `true` for the variants caused by malformed caller input.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::NotSquare { .. }
            | Self::LabelCountMismatch { .. }
            | Self::VertexOutOfRange { .. }
            | Self::GraphTooLarge { .. } => true,
            Self::InternalInvariant { .. } => false,
        }
    }
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { row, len, expected } => write!(
                f,
                "adjacency matrix is not square: row {row} has {len} entries, expected {expected}"
            ),
            Self::LabelCountMismatch { labels, vertices } => write!(
                f,
                "label count {labels} does not match matrix side length {vertices}"
            ),
            Self::VertexOutOfRange { vertex, vertices } => write!(
                f,
                "vertex {vertex} is out of range for a graph with {vertices} vertices"
            ),
            Self::GraphTooLarge { vertices } => {
                write!(f, "cannot allocate a graph with {vertices} vertices")
            }
            Self::InternalInvariant { detail } => {
                write!(f, "internal invariant violated: {detail}")
            }
        }
    }
}

impl std::error::Error for CycleError {}
