use thiserror::Error;

/// Recoverable failures reported by graph queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex '{0}' not found")]
    VertexNotFound(String),

    /// Both endpoints exist but the target is not reachable from the source.
    #[error("no path from '{from}' to '{to}'")]
    NoPath { from: String, to: String },

    #[error("graph has no vertices")]
    EmptyGraph,
}

pub type Result<T> = std::result::Result<T, GraphError>;
