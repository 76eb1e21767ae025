use crate::error::TopologyError;
use crate::math::Point3;

use super::entity::{EdgeId, FaceId, VertexId};

/// Read-only view of a host mesh.
///
/// This is the only surface through which the slide computation sees the
/// mesh. It exposes positions, adjacency and selection state; it never
/// exposes mutation.
pub trait MeshTopology {
    /// Returns the position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex does not exist.
    fn vertex_position(&self, vertex: VertexId) -> Result<Point3, TopologyError>;

    /// Returns the two endpoints of an edge as `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    fn edge_vertices(&self, edge: EdgeId) -> Result<[VertexId; 2], TopologyError>;

    /// Returns all faces incident to an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    fn edge_faces(&self, edge: EdgeId) -> Result<Vec<FaceId>, TopologyError>;

    /// Returns the boundary vertices of a face in winding order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face does not exist.
    fn face_vertices(&self, face: FaceId) -> Result<Vec<VertexId>, TopologyError>;

    /// Returns the boundary edges of a face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face does not exist.
    fn face_edges(&self, face: FaceId) -> Result<Vec<EdgeId>, TopologyError>;

    /// Returns the selected edges. When [`preserves_selection_order`]
    /// is `true` they are in the order the user selected them.
    ///
    /// [`preserves_selection_order`]: MeshTopology::preserves_selection_order
    fn selected_edges(&self) -> Vec<EdgeId>;

    /// Whether [`selected_edges`](MeshTopology::selected_edges) reflects the
    /// user's selection order.
    fn preserves_selection_order(&self) -> bool {
        false
    }
}
