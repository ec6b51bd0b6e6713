//! # Graph Primitives
//!
//! Identifier newtypes and the ready-made plain edge payload.
//!
//! Ids are opaque handles: each one is the content hash of the payload it
//! identifies, computed by the owning graph instance. They are plain `u64`
//! newtypes so they stay `Copy`, ordered and serializable without touching
//! the payload types.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier of a vertex: the content hash of its payload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VertexId(pub u64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an edge: the content hash of its payload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimal edge payload carrying only a caller-chosen number.
///
/// For graphs whose edges need no data of their own. Combined with
/// [`IdentityBuildHasher`](crate::IdentityBuildHasher) the derived
/// [`EdgeId`] equals `id` verbatim; under the default hasher the id is an
/// opaque hash of the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlainEdge {
    /// The only hashed content of this payload.
    pub id: u64,
}

impl PlainEdge {
    /// Create a plain edge payload with the given number.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self { id }
    }
}
