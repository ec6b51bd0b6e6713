//! # Error Model
//!
//! Closed error taxonomy for graph operations.
//!
//! Every fallible operation returns [`GraphResult`]. Expected, recoverable
//! conditions travel through the `Err` channel; accessing the wrong variant
//! of a result (`unwrap` on an `Err`, `unwrap_err` on an `Ok`) is a
//! programmer error and panics rather than being absorbed into the
//! taxonomy.

use crate::primitives::{EdgeId, VertexId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a fallible graph operation.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors produced by graph operations.
///
/// The enumeration is closed. `InvalidArgument`, `InvalidOperation`,
/// `OutOfRange` and `Unknown` are reserved for defensive use and never
/// produced by the current operation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GraphError {
    /// Operation referenced a vertex id that is not in the vertex table.
    #[error("vertex {0} is not present in the graph")]
    AbsentVertex(VertexId),

    /// Operation referenced an edge id that is not in the edge table.
    #[error("edge {0} is not present in the graph")]
    AbsentEdge(EdgeId),

    /// Edge id already bound to a different `(from, to)` pair.
    #[error("edge {0} already exists with a different endpoint binding")]
    EdgeAlreadyExists(EdgeId),

    /// Vertex deletion attempted while incident edges remain.
    #[error("vertex {0} still has incident edges")]
    VertexNotFree(VertexId),

    /// Reserved.
    #[error("invalid argument")]
    InvalidArgument,

    /// Reserved.
    #[error("invalid operation")]
    InvalidOperation,

    /// Reserved.
    #[error("value out of range")]
    OutOfRange,

    /// Reserved.
    #[error("unknown error")]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_id() {
        assert_eq!(
            GraphError::AbsentVertex(VertexId(2001)).to_string(),
            "vertex 2001 is not present in the graph"
        );
        assert_eq!(
            GraphError::EdgeAlreadyExists(EdgeId(42)).to_string(),
            "edge 42 already exists with a different endpoint binding"
        );
        assert_eq!(
            GraphError::VertexNotFree(VertexId(2)).to_string(),
            "vertex 2 still has incident edges"
        );
    }

    #[test]
    fn equality_requires_same_variant_and_payload() {
        let ok: GraphResult<u64> = Ok(1);
        assert_eq!(ok, Ok(1));
        assert_ne!(ok, Ok(2));
        assert_ne!(ok, Err(GraphError::Unknown));

        let err: GraphResult<u64> = Err(GraphError::AbsentVertex(VertexId(1)));
        assert_eq!(err, Err(GraphError::AbsentVertex(VertexId(1))));
        assert_ne!(err, Err(GraphError::AbsentVertex(VertexId(2))));
        assert_ne!(err, Err(GraphError::AbsentEdge(EdgeId(1))));
    }

    #[test]
    #[should_panic(expected = "called `Result::unwrap()` on an `Err` value")]
    #[allow(clippy::unwrap_used)]
    fn wrong_variant_access_fails_fast() {
        let err: GraphResult<u64> = Err(GraphError::Unknown);
        let _ = err.unwrap();
    }

    #[test]
    fn serde_round_trip() {
        let err = GraphError::AbsentVertex(VertexId(7));
        let json = serde_json::to_string(&err).unwrap_or_default();
        assert_eq!(serde_json::from_str::<GraphError>(&json).ok(), Some(err));
    }
}
