use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors surfaced by the graph container and the spanning-tree engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The input violates a precondition of the requested operation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A vertex index outside the graph's index space `[0, cardinality)`.
    #[error("Vertex {index} out of range for a graph of {cardinality} vertices")]
    VertexOutOfRange { index: usize, cardinality: usize },
}

impl GraphError {
    /// Creates an [`GraphError::InvalidInput`] from any string-like message.
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        GraphError::InvalidInput(message.into())
    }
}
