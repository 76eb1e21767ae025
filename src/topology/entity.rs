use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the topology store.
    pub struct VertexId;
}

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// Data associated with a mesh vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 3D position of the vertex.
    pub point: Point3,
}

impl VertexData {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }
}

/// Data associated with a mesh edge: an unordered connection stored
/// as an ordered vertex pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
}

impl EdgeData {
    /// Creates a new edge between two vertices.
    #[must_use]
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self { start, end }
    }
}

/// Data associated with a polygon face.
///
/// `vertices` is the boundary in winding order; `edges[i]` connects
/// `vertices[i]` to `vertices[(i + 1) % n]`.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Boundary vertices in winding order.
    pub vertices: Vec<VertexId>,
    /// Boundary edges, parallel to `vertices`.
    pub edges: Vec<EdgeId>,
}
