use tracing::{debug, warn};

use crate::error::{Result, TopologyError};
use crate::operations::selection::{EdgeLoop, LoopEdge};
use crate::topology::{EdgeId, FaceId, MeshTopology, VertexId};

/// One of the two directions a loop edge can slide in.
///
/// `Forward` is the side whose face winds the loop edge in the loop's
/// walk direction (start immediately followed by end). Positive slide
/// distances move towards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideSide {
    /// Towards the face that winds the edge along the walk.
    Forward,
    /// Towards the face that winds the edge against the walk.
    Backward,
}

impl SlideSide {
    /// Returns the other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// The rail on one side of a loop edge.
///
/// `edges[i]` leaves loop vertex `i` (start, then end) inside `face`;
/// `targets[i]` is its far vertex, where that loop vertex lands when the
/// loop is slid fully to this side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailSide {
    /// The face the rail lies in.
    pub face: FaceId,
    /// Rail edges at the loop edge's start and end vertex.
    pub edges: [EdgeId; 2],
    /// Far vertices of the rail edges.
    pub targets: [VertexId; 2],
}

/// The rails bounding one loop edge. A missing side means the edge
/// cannot travel in that direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideRail {
    /// Rail towards [`SlideSide::Forward`].
    pub forward: Option<RailSide>,
    /// Rail towards [`SlideSide::Backward`].
    pub backward: Option<RailSide>,
}

impl SlideRail {
    /// Returns the rail on `side`, if present.
    #[must_use]
    pub fn side(&self, side: SlideSide) -> Option<&RailSide> {
        match side {
            SlideSide::Forward => self.forward.as_ref(),
            SlideSide::Backward => self.backward.as_ref(),
        }
    }

    fn side_mut(&mut self, side: SlideSide) -> &mut Option<RailSide> {
        match side {
            SlideSide::Forward => &mut self.forward,
            SlideSide::Backward => &mut self.backward,
        }
    }
}

/// Locates the rails of every edge in a loop, in walk order.
pub struct FindRails<'a> {
    edge_loop: &'a EdgeLoop,
}

impl<'a> FindRails<'a> {
    /// Creates a new `FindRails` query.
    #[must_use]
    pub fn new(edge_loop: &'a EdgeLoop) -> Self {
        Self { edge_loop }
    }

    /// Executes the query, returning one [`SlideRail`] per loop edge.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::UnsupportedTopology`] if any loop edge has
    /// more than two incident faces, or another topology error if the
    /// mesh is malformed.
    pub fn execute<M: MeshTopology + ?Sized>(&self, mesh: &M) -> Result<Vec<SlideRail>> {
        self.edge_loop
            .edges()
            .iter()
            .map(|loop_edge| rails_for(mesh, loop_edge, self.edge_loop))
            .collect()
    }
}

/// Finds the rails on both sides of a single loop edge.
///
/// # Errors
///
/// See [`FindRails::execute`].
pub fn rails_for<M: MeshTopology + ?Sized>(
    mesh: &M,
    loop_edge: &LoopEdge,
    edge_loop: &EdgeLoop,
) -> Result<SlideRail> {
    let faces = mesh.edge_faces(loop_edge.edge)?;
    if faces.len() > 2 {
        return Err(TopologyError::UnsupportedTopology { faces: faces.len() }.into());
    }

    let mut rail = SlideRail::default();
    let mut claimed: Option<SlideSide> = None;

    for face in faces {
        let verts = mesh.face_vertices(face)?;
        if verts.len() < 3 {
            return Err(TopologyError::InvalidTopology(format!(
                "face has only {} vertices",
                verts.len()
            ))
            .into());
        }

        let Some(mut side) = winding_side(&verts, loop_edge) else {
            return Err(TopologyError::InvalidTopology(
                "incident face does not contain its edge".into(),
            )
            .into());
        };
        if claimed == Some(side) {
            warn!(
                side = ?side,
                "adjacent faces wind the loop edge the same way; using the free side"
            );
            side = side.opposite();
        }
        claimed = Some(side);

        *rail.side_mut(side) = rail_in_face(mesh, face, loop_edge, edge_loop)?;
    }

    Ok(rail)
}

/// Which side `face` lies on, judged by how its boundary winds the edge.
fn winding_side(verts: &[VertexId], loop_edge: &LoopEdge) -> Option<SlideSide> {
    let n = verts.len();
    let i = verts.iter().position(|&v| v == loop_edge.start)?;
    if verts[(i + 1) % n] == loop_edge.end {
        Some(SlideSide::Forward)
    } else if verts[(i + n - 1) % n] == loop_edge.end {
        Some(SlideSide::Backward)
    } else {
        None
    }
}

/// The rail inside one face, or `None` when a rail edge is itself part
/// of the loop and the slide direction becomes ambiguous.
fn rail_in_face<M: MeshTopology + ?Sized>(
    mesh: &M,
    face: FaceId,
    loop_edge: &LoopEdge,
    edge_loop: &EdgeLoop,
) -> Result<Option<RailSide>> {
    let face_edges = mesh.face_edges(face)?;
    let mut edges = [loop_edge.edge; 2];
    let mut targets = [loop_edge.start; 2];

    for (i, vertex) in [loop_edge.start, loop_edge.end].into_iter().enumerate() {
        let mut found = None;
        for &candidate in &face_edges {
            if candidate == loop_edge.edge {
                continue;
            }
            let [a, b] = mesh.edge_vertices(candidate)?;
            let far = if a == vertex {
                b
            } else if b == vertex {
                a
            } else {
                continue;
            };
            if found.is_some() {
                return Err(TopologyError::InvalidTopology(
                    "face boundary is not a simple polygon".into(),
                )
                .into());
            }
            found = Some((candidate, far));
        }

        let Some((edge, far)) = found else {
            return Err(TopologyError::InvalidTopology(
                "face boundary is not a simple polygon".into(),
            )
            .into());
        };
        if edge_loop.contains(edge) {
            debug!("rail edge belongs to the loop; side left without a rail");
            return Ok(None);
        }
        edges[i] = edge;
        targets[i] = far;
    }

    Ok(Some(RailSide {
        face,
        edges,
        targets,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::EdgeSlideError;
    use crate::math::Point3;
    use crate::operations::creation::{GridMesh, MakeGrid, MakeTube};
    use crate::operations::selection::selected_loop;
    use crate::topology::{TopologyStore, VertexData};

    fn grid_3x3() -> (TopologyStore, GridMesh) {
        let mut store = TopologyStore::new();
        let grid = MakeGrid::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 2.0, 3.0])
            .execute(&mut store)
            .unwrap();
        (store, grid)
    }

    fn rails_of_selection(store: &TopologyStore) -> Result<Vec<SlideRail>> {
        let edge_loop = selected_loop(store)?;
        FindRails::new(&edge_loop).execute(store)
    }

    #[test]
    fn interior_row_edge_has_both_rails() {
        let (mut store, grid) = grid_3x3();
        let e = grid.row_edges(&store, 1)[1];
        store.select_edge(e).unwrap();

        let rails = rails_of_selection(&store).unwrap();
        let forward = rails[0].forward.unwrap();
        let backward = rails[0].backward.unwrap();

        // Row edges walk towards +X, so the forward face is above (+Y).
        assert_eq!(
            forward.targets,
            [grid.vertex(2, 1).unwrap(), grid.vertex(2, 2).unwrap()]
        );
        assert_eq!(
            backward.targets,
            [grid.vertex(0, 1).unwrap(), grid.vertex(0, 2).unwrap()]
        );
        assert_eq!(
            forward.edges[0],
            store
                .find_edge(grid.vertex(1, 1).unwrap(), grid.vertex(2, 1).unwrap())
                .unwrap()
        );
    }

    #[test]
    fn boundary_edge_has_one_rail() {
        let (mut store, grid) = grid_3x3();
        for e in grid.row_edges(&store, 0) {
            store.select_edge(e).unwrap();
        }

        let rails = rails_of_selection(&store).unwrap();
        assert_eq!(rails.len(), 3);
        for rail in rails {
            assert!(rail.forward.is_some());
            assert!(rail.side(SlideSide::Backward).is_none());
        }
    }

    #[test]
    fn tube_ring_rails_point_up_and_down() {
        let mut store = TopologyStore::new();
        let tube = MakeTube::new(1.0, 4, vec![0.0, 1.0, 2.0])
            .execute(&mut store)
            .unwrap();
        for e in tube.ring_edges(&store, 1) {
            store.select_edge(e).unwrap();
        }

        let rails = rails_of_selection(&store).unwrap();
        for rail in &rails {
            let up = rail.forward.unwrap();
            let down = rail.backward.unwrap();
            assert!(tube.rings[2].contains(&up.targets[0]));
            assert!(tube.rings[0].contains(&down.targets[1]));
        }
    }

    #[test]
    fn non_manifold_edge_is_unsupported() {
        let (mut store, grid) = grid_3x3();
        let a = grid.vertex(1, 1).unwrap();
        let b = grid.vertex(1, 2).unwrap();
        let fin = store.add_vertex(VertexData::new(Point3::new(1.5, 1.0, 1.0)));
        store.add_face(&[a, b, fin]).unwrap();
        store.select_edge(store.find_edge(a, b).unwrap()).unwrap();

        let result = rails_of_selection(&store);
        assert!(matches!(
            result,
            Err(EdgeSlideError::Topology(TopologyError::UnsupportedTopology { faces: 3 }))
        ));
    }

    #[test]
    fn rail_inside_the_loop_is_ambiguous() {
        // L-shaped selection turning at vertex (1, 1).
        let (mut store, grid) = grid_3x3();
        store.select_edge(grid.row_edges(&store, 1)[0]).unwrap();
        store.select_edge(grid.column_edges(&store, 1)[1]).unwrap();

        let rails = rails_of_selection(&store).unwrap();
        // Row edge: the face above holds the column edge as its rail.
        assert!(rails[0].forward.is_none());
        assert!(rails[0].backward.is_some());
        // Column edge: the face to the left holds the row edge.
        assert!(rails[1].forward.is_none());
        assert!(rails[1].backward.is_some());
    }

    #[test]
    fn triangle_rails_meet_at_apex() {
        let mut store = TopologyStore::new();
        let a = store.add_vertex(VertexData::new(Point3::new(0.0, 0.0, 0.0)));
        let b = store.add_vertex(VertexData::new(Point3::new(2.0, 0.0, 0.0)));
        let top = store.add_vertex(VertexData::new(Point3::new(1.0, 1.0, 0.0)));
        let bottom = store.add_vertex(VertexData::new(Point3::new(1.0, -3.0, 0.0)));
        store.add_face(&[a, b, top]).unwrap();
        store.add_face(&[b, a, bottom]).unwrap();
        store.select_edge(store.find_edge(a, b).unwrap()).unwrap();

        let rails = rails_of_selection(&store).unwrap();
        assert_eq!(rails[0].forward.unwrap().targets, [top, top]);
        assert_eq!(rails[0].backward.unwrap().targets, [bottom, bottom]);
    }

    #[test]
    fn inconsistent_winding_uses_the_free_side() {
        let mut store = TopologyStore::new();
        let a = store.add_vertex(VertexData::new(Point3::new(0.0, 0.0, 0.0)));
        let b = store.add_vertex(VertexData::new(Point3::new(2.0, 0.0, 0.0)));
        let top = store.add_vertex(VertexData::new(Point3::new(1.0, 1.0, 0.0)));
        let bottom = store.add_vertex(VertexData::new(Point3::new(1.0, -1.0, 0.0)));
        store.add_face(&[a, b, top]).unwrap();
        store.add_face(&[a, b, bottom]).unwrap();
        store.select_edge(store.find_edge(a, b).unwrap()).unwrap();

        let rails = rails_of_selection(&store).unwrap();
        assert_eq!(rails[0].forward.unwrap().targets, [top, top]);
        assert_eq!(rails[0].backward.unwrap().targets, [bottom, bottom]);
    }

    #[test]
    fn opposite_side_round_trips() {
        assert_eq!(SlideSide::Forward.opposite(), SlideSide::Backward);
        assert_eq!(SlideSide::Backward.opposite().opposite(), SlideSide::Backward);
    }
}
