//! # Directed Graph Container
//!
//! The hash-identified directed graph behind the crate's public contract.
//!
//! Three stores back the container: a vertex table, an edge table, and an
//! adjacency index mapping each vertex to its incoming/outgoing edge-id
//! sets. All three use `BTreeMap`/`BTreeSet` for deterministic iteration.
//! Callers hold ids, never references; every payload is addressed by the
//! content hash the owning graph derived for it.

use crate::error::{GraphError, GraphResult};
use crate::primitives::{EdgeId, VertexId};
use rustc_hash::FxBuildHasher;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::{BuildHasher, Hash};

// =============================================================================
// EDGE RECORD
// =============================================================================

/// A stored edge: two endpoint ids and the caller's payload.
///
/// Equality covers all three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<E> {
    /// Source vertex id.
    pub from: VertexId,
    /// Destination vertex id.
    pub to: VertexId,
    /// Caller-supplied payload; immutable once stored.
    pub payload: E,
}

// =============================================================================
// ADJACENCY INDEX
// =============================================================================

/// Incoming/outgoing edge-id sets for one vertex.
#[derive(Debug, Clone, Default)]
struct AdjacencySet {
    incoming: BTreeSet<EdgeId>,
    outgoing: BTreeSet<EdgeId>,
}

impl AdjacencySet {
    /// Degree zero: no incident edges in either direction.
    fn is_free(&self) -> bool {
        self.incoming.is_empty() && self.outgoing.is_empty()
    }
}

// =============================================================================
// DIRECTED GRAPH
// =============================================================================

/// Directed graph with content-hashed vertex and edge ids.
///
/// `V` and `E` are arbitrary caller payloads constrained to `Hash + Eq`;
/// the hasher `S` derives a [`VertexId`]/[`EdgeId`] from each payload on
/// insertion. Identity equality is assumed to imply payload equality: a
/// true hash collision between distinct payloads is indistinguishable from
/// intentional dedup (asserted in debug builds).
///
/// Mutation requires `&mut self`; queries borrow `&self`. There is no
/// internal synchronization.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, E, S = FxBuildHasher> {
    /// Vertex table: id -> payload.
    vertex_index: BTreeMap<VertexId, V>,

    /// Edge table: id -> record.
    edge_index: BTreeMap<EdgeId, Edge<E>>,

    /// Adjacency index: vertex id -> incident edge-id sets.
    adjacency: BTreeMap<VertexId, AdjacencySet>,

    /// Hasher deriving ids from payload content.
    hasher: S,
}

impl<V, E> DirectedGraph<V, E> {
    /// Create an empty graph with the default deterministic hasher.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(FxBuildHasher)
    }
}

impl<V, E, S: BuildHasher + Default> Default for DirectedGraph<V, E, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<V, E, S> DirectedGraph<V, E, S> {
    /// Create an empty graph deriving ids with the given hasher.
    ///
    /// The hasher must be deterministic for ids to remain stable; every id
    /// handed out stays valid for the lifetime of the item it names.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            vertex_index: BTreeMap::new(),
            edge_index: BTreeMap::new(),
            adjacency: BTreeMap::new(),
            hasher,
        }
    }

    /// Number of stored vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_index.len()
    }

    /// Number of stored edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_index.len()
    }

    /// True when the graph holds no vertices (and therefore no edges).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_index.is_empty()
    }

    /// Check if the graph contains a vertex.
    #[must_use]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex_index.contains_key(&id)
    }

    /// Check if the graph contains an edge.
    #[must_use]
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edge_index.contains_key(&id)
    }

    /// Lazy view of all vertex payloads, unordered as far as the contract
    /// goes. Restartable: each call yields a fresh iterator over the live
    /// table.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertex_index.values()
    }

    /// Lazy view of all edge records; same contract as [`Self::vertices`].
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E>> {
        self.edge_index.values()
    }

    /// Fetch a vertex payload by id.
    pub fn vertex(&self, id: VertexId) -> GraphResult<&V> {
        self.vertex_index
            .get(&id)
            .ok_or(GraphError::AbsentVertex(id))
    }

    /// Fetch an edge record by id.
    pub fn edge(&self, id: EdgeId) -> GraphResult<&Edge<E>> {
        self.edge_index.get(&id).ok_or(GraphError::AbsentEdge(id))
    }

    /// Vertices reachable via one outgoing edge.
    pub fn children(&self, id: VertexId) -> GraphResult<BTreeSet<VertexId>> {
        let adjacency = self.adjacency_of(id)?;
        Ok(self.endpoints(&adjacency.outgoing, |edge| edge.to))
    }

    /// Vertices reaching this one via one incoming edge.
    pub fn parents(&self, id: VertexId) -> GraphResult<BTreeSet<VertexId>> {
        let adjacency = self.adjacency_of(id)?;
        Ok(self.endpoints(&adjacency.incoming, |edge| edge.from))
    }

    /// Union of children and parents.
    pub fn neighbours(&self, id: VertexId) -> GraphResult<BTreeSet<VertexId>> {
        let adjacency = self.adjacency_of(id)?;
        let mut neighbours = self.endpoints(&adjacency.outgoing, |edge| edge.to);
        neighbours.extend(self.endpoints(&adjacency.incoming, |edge| edge.from));
        Ok(neighbours)
    }

    /// Ids of all outgoing edges of a vertex.
    pub fn outgoing_edges(&self, id: VertexId) -> GraphResult<BTreeSet<EdgeId>> {
        Ok(self.adjacency_of(id)?.outgoing.clone())
    }

    /// Ids of all incoming edges of a vertex.
    pub fn incoming_edges(&self, id: VertexId) -> GraphResult<BTreeSet<EdgeId>> {
        Ok(self.adjacency_of(id)?.incoming.clone())
    }

    /// Delete a vertex. Gated on degree zero: while any incident edge
    /// remains the vertex stays.
    pub fn delete_vertex(&mut self, id: VertexId) -> GraphResult<VertexId> {
        if !self.vertex_index.contains_key(&id) {
            return Err(GraphError::AbsentVertex(id));
        }
        if self.adjacency.get(&id).is_some_and(|adj| !adj.is_free()) {
            return Err(GraphError::VertexNotFree(id));
        }
        self.adjacency.remove(&id);
        self.vertex_index.remove(&id);
        Ok(id)
    }

    /// Delete an edge and prune it from both endpoints' adjacency sets.
    pub fn delete_edge(&mut self, id: EdgeId) -> GraphResult<EdgeId> {
        let Some(edge) = self.edge_index.remove(&id) else {
            return Err(GraphError::AbsentEdge(id));
        };
        if let Some(adjacency) = self.adjacency.get_mut(&edge.from) {
            adjacency.outgoing.remove(&id);
        }
        if let Some(adjacency) = self.adjacency.get_mut(&edge.to) {
            adjacency.incoming.remove(&id);
        }
        Ok(id)
    }

    fn adjacency_of(&self, id: VertexId) -> GraphResult<&AdjacencySet> {
        self.adjacency.get(&id).ok_or(GraphError::AbsentVertex(id))
    }

    /// Map a set of incident edge ids to the endpoint selected by `pick`.
    fn endpoints(
        &self,
        incident: &BTreeSet<EdgeId>,
        pick: impl Fn(&Edge<E>) -> VertexId,
    ) -> BTreeSet<VertexId> {
        incident
            .iter()
            .filter_map(|edge_id| self.edge_index.get(edge_id).map(&pick))
            .collect()
    }
}

impl<V: Hash + Eq, E: Hash + Eq, S: BuildHasher> DirectedGraph<V, E, S> {
    /// Add a vertex. Returns the id derived from the payload's hash.
    ///
    /// Idempotent: if the id is already present the stored payload stays
    /// untouched and the existing id is returned.
    pub fn add_vertex(&mut self, vertex: V) -> VertexId {
        let id = VertexId(self.hasher.hash_one(&vertex));
        match self.vertex_index.entry(id) {
            Entry::Occupied(existing) => {
                debug_assert!(
                    existing.get() == &vertex,
                    "distinct vertex payloads hashed to id {id}",
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(vertex);
                self.adjacency.insert(id, AdjacencySet::default());
            }
        }
        id
    }

    /// Add a directed edge between two existing vertices.
    ///
    /// Idempotent for a matching `(from, to)` binding; an id already bound
    /// to a different pair is rejected, and the existing binding stays
    /// immutable until explicitly deleted. Self-loops are permitted.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, payload: E) -> GraphResult<EdgeId> {
        if !self.vertex_index.contains_key(&from) {
            return Err(GraphError::AbsentVertex(from));
        }
        if !self.vertex_index.contains_key(&to) {
            return Err(GraphError::AbsentVertex(to));
        }

        let id = EdgeId(self.hasher.hash_one(&payload));
        if let Some(existing) = self.edge_index.get(&id) {
            if existing.from != from || existing.to != to {
                return Err(GraphError::EdgeAlreadyExists(id));
            }
            debug_assert!(
                existing.payload == payload,
                "distinct edge payloads hashed to id {id}",
            );
            return Ok(id);
        }

        self.edge_index.insert(id, Edge { from, to, payload });
        self.adjacency.entry(from).or_default().outgoing.insert(id);
        self.adjacency.entry(to).or_default().incoming.insert(id);
        Ok(id)
    }
}

// =============================================================================
// TESTS
// =============================================================================
