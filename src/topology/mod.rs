pub mod adapter;
pub mod entity;

pub use adapter::MeshTopology;
pub use entity::{EdgeData, EdgeId, FaceData, FaceId, VertexData, VertexId};

use std::collections::HashMap;

use crate::error::TopologyError;
use crate::math::Point3;
use slotmap::{SecondaryMap, SlotMap};

/// In-memory polygon mesh that owns vertices, edges and faces.
///
/// Entities reference each other via typed IDs (generational indices).
/// Edges are shared between faces and looked up by their unordered
/// vertex pair, so building faces from vertex lists yields connected
/// topology. The store also tracks the edge selection in the order
/// edges were selected.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    edge_lookup: HashMap<(VertexId, VertexId), EdgeId>,
    edge_faces: SecondaryMap<EdgeId, Vec<FaceId>>,
    selection: Vec<EdgeId>,
}

fn edge_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the store.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges in the store.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces in the store.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    // --- Edge operations ---

    /// Returns the edge connecting `a` and `b`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is missing or `a == b`.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId, TopologyError> {
        self.vertex(a)?;
        self.vertex(b)?;
        if a == b {
            return Err(TopologyError::InvalidTopology(
                "edge endpoints must be distinct".into(),
            ));
        }
        if let Some(existing) = self.find_edge(a, b) {
            return Ok(existing);
        }
        let id = self.edges.insert(EdgeData::new(a, b));
        self.edge_lookup.insert(edge_key(a, b), id);
        self.edge_faces.insert(id, Vec::new());
        Ok(id)
    }

    /// Finds the edge connecting `a` and `b`, in either direction.
    #[must_use]
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edge_lookup.get(&edge_key(a, b)).copied()
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    // --- Face operations ---

    /// Inserts a polygon face from its boundary vertices in winding order,
    /// creating or reusing the boundary edges.
    ///
    /// Faces are not checked for manifoldness; an edge may end up with
    /// more than two incident faces.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 vertices are given, a vertex
    /// repeats, or a vertex is missing.
    pub fn add_face(&mut self, vertices: &[VertexId]) -> Result<FaceId, TopologyError> {
        if vertices.len() < 3 {
            return Err(TopologyError::InvalidTopology(format!(
                "face needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        for (i, v) in vertices.iter().enumerate() {
            if vertices[..i].contains(v) {
                return Err(TopologyError::InvalidTopology(
                    "face vertices must be distinct".into(),
                ));
            }
        }

        let n = vertices.len();
        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            edges.push(self.add_edge(vertices[i], vertices[(i + 1) % n])?);
        }

        let id = self.faces.insert(FaceData {
            vertices: vertices.to_vec(),
            edges: edges.clone(),
        });
        for edge in edges {
            if let Some(faces) = self.edge_faces.get_mut(edge) {
                faces.push(id);
            }
        }
        Ok(id)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    // --- Selection ---

    /// Adds an edge to the selection. Re-selecting an edge keeps its
    /// original position in the selection order.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found in the store.
    pub fn select_edge(&mut self, id: EdgeId) -> Result<(), TopologyError> {
        self.edge(id)?;
        if !self.selection.contains(&id) {
            self.selection.push(id);
        }
        Ok(())
    }

    /// Removes an edge from the selection.
    pub fn deselect_edge(&mut self, id: EdgeId) {
        self.selection.retain(|&e| e != id);
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Returns `true` if the edge is selected.
    #[must_use]
    pub fn is_selected(&self, id: EdgeId) -> bool {
        self.selection.contains(&id)
    }
}

impl MeshTopology for TopologyStore {
    fn vertex_position(&self, vertex: VertexId) -> Result<Point3, TopologyError> {
        Ok(self.vertex(vertex)?.point)
    }

    fn edge_vertices(&self, edge: EdgeId) -> Result<[VertexId; 2], TopologyError> {
        let data = self.edge(edge)?;
        Ok([data.start, data.end])
    }

    fn edge_faces(&self, edge: EdgeId) -> Result<Vec<FaceId>, TopologyError> {
        self.edge(edge)?;
        Ok(self.edge_faces.get(edge).cloned().unwrap_or_default())
    }

    fn face_vertices(&self, face: FaceId) -> Result<Vec<VertexId>, TopologyError> {
        Ok(self.face(face)?.vertices.clone())
    }

    fn face_edges(&self, face: FaceId) -> Result<Vec<EdgeId>, TopologyError> {
        Ok(self.face(face)?.edges.clone())
    }

    fn selected_edges(&self) -> Vec<EdgeId> {
        self.selection.clone()
    }

    fn preserves_selection_order(&self) -> bool {
        true
    }
}
