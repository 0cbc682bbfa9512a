//! Adjacency-list vertex graph with identity semantics.
//!
//! Vertices live in an arena owned by [`VertexGraph`] and are referred to by
//! [`VertexId`] handles. Identity is the handle, never the value: two vertices
//! holding equal data are distinct nodes, and a self-loop is a vertex whose
//! neighbor list contains its own handle.

use crate::common::{GraphTraversal, IdentitySet};
use crate::error::{GraphwalkError, GraphwalkResult};

/// Handle to a vertex inside a [`VertexGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Arena slot of this vertex.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A value plus its ordered outgoing edges.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    data: T,
    neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Outgoing edges in insertion order. May contain duplicates.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }
}

/// Arena of vertices connected by directed edges.
#[derive(Debug, Clone)]
pub struct VertexGraph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Default for VertexGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VertexGraph<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Adds an unconnected vertex and returns its handle.
    pub fn add_vertex(&mut self, data: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            data,
            neighbors: Vec::new(),
        });
        id
    }

    /// Appends `to` to the neighbor list of `from`.
    ///
    /// `from == to` creates a self-loop. Adding the same edge twice keeps
    /// both entries.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> GraphwalkResult<()> {
        if !self.contains(to) {
            return Err(GraphwalkError::invalid_argument(format!(
                "edge target {:?} is not a vertex of this graph",
                to
            )));
        }
        let vertex = self.vertices.get_mut(from.0).ok_or_else(|| {
            GraphwalkError::invalid_argument(format!(
                "edge source {:?} is not a vertex of this graph",
                from
            ))
        })?;
        vertex.neighbors.push(to);
        Ok(())
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    pub fn data(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(Vertex::data)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    /// Whether the vertex lists itself as a neighbor.
    pub fn has_self_loop(&self, id: VertexId) -> bool {
        self.vertex(id)
            .is_some_and(|v| v.neighbors.contains(&id))
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertex handles in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }
}

impl<T> GraphTraversal for VertexGraph<T> {
    type Node = VertexId;
    type Visited = IdentitySet;

    fn neighbors(&self, node: &VertexId) -> Vec<VertexId> {
        self.vertex(*node)
            .map(|v| v.neighbors.clone())
            .unwrap_or_default()
    }

    fn contains_node(&self, node: &VertexId) -> bool {
        self.contains(*node)
    }

    fn visited_set(&self) -> IdentitySet {
        IdentitySet::with_capacity(self.vertices.len())
    }
}
