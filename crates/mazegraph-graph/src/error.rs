//! Errors reported by [`WeightedGraph`](crate::WeightedGraph) operations.

use std::fmt;

/// Which vertex argument of a call was missing from the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    /// The `from` endpoint of an edge query.
    From,
    /// The `to` endpoint of an edge query.
    To,
    /// The starting vertex of a search.
    Start,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("from"),
            Self::To => f.write_str("to"),
            Self::Start => f.write_str("start"),
        }
    }
}

/// Why an edge was rejected. Conditions are checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeError {
    NegativeWeight(i32),
    MissingFrom,
    MissingTo,
}

/// Errors that can occur when mutating or querying a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An equal vertex is already stored.
    DuplicateVertex,
    /// An edge could not be added.
    InvalidEdge(EdgeError),
    /// A named vertex is not part of the graph.
    VertexNotFound(VertexRole),
    /// Weight queries need at least two vertices in the graph.
    InsufficientVertices(usize),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateVertex => f.write_str("vertex already in graph"),
            Self::InvalidEdge(EdgeError::NegativeWeight(w)) => {
                write!(f, "invalid edge: weight {w} is negative")
            }
            Self::InvalidEdge(EdgeError::MissingFrom) => {
                f.write_str("invalid edge: from vertex is not found")
            }
            Self::InvalidEdge(EdgeError::MissingTo) => {
                f.write_str("invalid edge: to vertex is not found")
            }
            Self::VertexNotFound(role) => write!(f, "{role} vertex is not found"),
            Self::InsufficientVertices(n) => {
                write!(f, "not enough vertices: graph holds {n}, need at least 2")
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_fault() {
        let e = GraphError::InvalidEdge(EdgeError::NegativeWeight(-3));
        assert_eq!(e.to_string(), "invalid edge: weight -3 is negative");
        let e = GraphError::VertexNotFound(VertexRole::Start);
        assert_eq!(e.to_string(), "start vertex is not found");
        let e = GraphError::InsufficientVertices(1);
        assert!(e.to_string().contains("holds 1"));
    }

    #[test]
    fn usable_as_boxed_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(GraphError::DuplicateVertex);
        assert_eq!(boxed.to_string(), "vertex already in graph");
    }
}
