//! # idgraph Core
//!
//! Generic in-memory directed graph container with content-hashed
//! identities.
//!
//! Callers supply hashable vertex and edge payloads; the graph derives a
//! stable integer id for each from its content hash and answers every query
//! in terms of those ids. No references into the internal stores escape, so
//! the container is free to relocate or reclaim storage.
//!
//! ## Identity scheme
//!
//! `hash(payload)` IS the id. Two payloads that hash equal under the graph's
//! hasher are treated as the same item (dedup-on-insert); the container
//! cannot distinguish a true hash collision between distinct payloads from
//! intentional dedup. Debug builds assert payload equality on every dedup
//! hit, release builds keep the documented aliasing behavior. The default
//! [`FxBuildHasher`] is deterministic and seed-free, so ids are stable
//! across instances, runs and processes.
//!
//! ## Structural invariants
//!
//! After every successful operation:
//! - every stored edge id appears in exactly the outgoing set of its source
//!   vertex and the incoming set of its destination vertex;
//! - a vertex is deletable only at degree zero;
//! - an edge id stays bound to one `(from, to)` pair until deleted;
//! - insertion is idempotent.
//!
//! ## Concurrency
//!
//! Single-threaded by design: mutation takes `&mut self`, queries take
//! `&self`, and there is no internal synchronization. Wrap the graph in an
//! external lock for shared use.

pub mod error;
pub mod graph;
pub mod hash;
pub mod primitives;

pub use error::{GraphError, GraphResult};
pub use graph::{DirectedGraph, Edge};
pub use hash::{IdentityBuildHasher, IdentityHasher};
pub use primitives::{EdgeId, PlainEdge, VertexId};

// Re-export the default hasher so the `S` parameter is nameable downstream.
pub use rustc_hash::FxBuildHasher;
