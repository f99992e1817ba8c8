//! Error types for graph construction, edge insertion and traversal.

use thiserror::Error;

use crate::node::*;

/// All caller errors the graph representations and traversals can report.
///
/// Every operation validates its arguments before mutating anything, so an `Err`
/// always leaves the graph exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The requested number of vertices exceeds the capacity of the representation.
    #[error("Cannot create a graph with {count} vertices: capacity is {capacity}")]
    InvalidVertexCount { count: NumNodes, capacity: NumNodes },

    /// A vertex outside of `0..num_vertices` was passed as edge endpoint or traversal start.
    #[error("Vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    InvalidVertexIndex { vertex: Node, num_vertices: NumNodes },
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = GraphError::InvalidVertexCount {
            count: 11,
            capacity: 10,
        };
        assert_eq!(
            err.to_string(),
            "Cannot create a graph with 11 vertices: capacity is 10"
        );

        let err = GraphError::InvalidVertexIndex {
            vertex: 7,
            num_vertices: 5,
        };
        assert_eq!(
            err.to_string(),
            "Vertex 7 is out of range for a graph with 5 vertices"
        );
    }
}
