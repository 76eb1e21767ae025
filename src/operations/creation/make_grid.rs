use crate::error::{Result, TopologyError};
use crate::math::Point3;
use crate::topology::{EdgeId, TopologyStore, VertexData, VertexId};

/// A planar quad grid created by [`MakeGrid`].
///
/// `rows[r][c]` is the vertex at `(xs[c], ys[r], 0)`.
#[derive(Debug, Clone)]
pub struct GridMesh {
    /// Vertex IDs indexed by row, then column.
    pub rows: Vec<Vec<VertexId>>,
}

impl GridMesh {
    /// Returns the vertex at `(row, col)`.
    #[must_use]
    pub fn vertex(&self, row: usize, col: usize) -> Option<VertexId> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Edges running along the X axis on `row`, ordered by column.
    #[must_use]
    pub fn row_edges(&self, store: &TopologyStore, row: usize) -> Vec<EdgeId> {
        let Some(verts) = self.rows.get(row) else {
            return Vec::new();
        };
        verts
            .windows(2)
            .filter_map(|w| store.find_edge(w[0], w[1]))
            .collect()
    }

    /// Edges running along the Y axis on `col`, ordered by row.
    #[must_use]
    pub fn column_edges(&self, store: &TopologyStore, col: usize) -> Vec<EdgeId> {
        self.rows
            .windows(2)
            .filter_map(|w| store.find_edge(*w[0].get(col)?, *w[1].get(col)?))
            .collect()
    }
}

/// Creates a quad grid in the XY plane from column and row coordinates.
///
/// Faces are wound counter-clockwise when viewed from +Z, row edges
/// point towards +X and column edges towards +Y. Uneven
/// coordinate spacing produces rails of different lengths, which is
/// what most slide measurements care about.
pub struct MakeGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl MakeGrid {
    /// Creates a new `MakeGrid` operation.
    #[must_use]
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self { xs, ys }
    }

    /// Executes the operation, creating the grid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis has fewer than 2 coordinates.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<GridMesh> {
        if self.xs.len() < 2 || self.ys.len() < 2 {
            return Err(TopologyError::InvalidTopology(
                "grid needs at least 2 coordinates per axis".into(),
            )
            .into());
        }

        let rows: Vec<Vec<VertexId>> = self
            .ys
            .iter()
            .map(|&y| {
                self.xs
                    .iter()
                    .map(|&x| store.add_vertex(VertexData::new(Point3::new(x, y, 0.0))))
                    .collect()
            })
            .collect();

        // Row edges run towards +X and column edges towards +Y.
        for row in &rows {
            for w in row.windows(2) {
                store.add_edge(w[0], w[1])?;
            }
        }
        for pair in rows.windows(2) {
            for (&below, &above) in pair[0].iter().zip(&pair[1]) {
                store.add_edge(below, above)?;
            }
        }

        for r in 0..rows.len() - 1 {
            for c in 0..self.xs.len() - 1 {
                store.add_face(&[
                    rows[r][c],
                    rows[r][c + 1],
                    rows[r + 1][c + 1],
                    rows[r + 1][c],
                ])?;
            }
        }

        Ok(GridMesh { rows })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::MeshTopology;

    #[test]
    fn grid_counts() {
        let mut store = TopologyStore::new();
        let grid = MakeGrid::new(vec![0.0, 1.0, 3.0], vec![0.0, 2.0])
            .execute(&mut store)
            .unwrap();

        assert_eq!(store.vertex_count(), 6);
        assert_eq!(store.face_count(), 2);
        assert_eq!(store.edge_count(), 7);
        assert_eq!(grid.row_edges(&store, 0).len(), 2);
        assert_eq!(grid.column_edges(&store, 1).len(), 1);
    }

    #[test]
    fn interior_edge_has_two_faces() {
        let mut store = TopologyStore::new();
        let grid = MakeGrid::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0])
            .execute(&mut store)
            .unwrap();

        let interior = grid.row_edges(&store, 1)[0];
        let border = grid.row_edges(&store, 0)[0];
        assert_eq!(store.edge_faces(interior).unwrap().len(), 2);
        assert_eq!(store.edge_faces(border).unwrap().len(), 1);
    }

    #[test]
    fn vertex_positions_follow_coordinates() {
        let mut store = TopologyStore::new();
        let grid = MakeGrid::new(vec![0.0, 0.5], vec![-1.0, 4.0])
            .execute(&mut store)
            .unwrap();

        let p = store.vertex_position(grid.vertex(1, 1).unwrap()).unwrap();
        assert!((p.x - 0.5).abs() < 1e-12);
        assert!((p.y - 4.0).abs() < 1e-12);
        assert!(grid.vertex(2, 0).is_none());
    }

    #[test]
    fn single_row_fails() {
        let mut store = TopologyStore::new();
        assert!(MakeGrid::new(vec![0.0, 1.0], vec![0.0])
            .execute(&mut store)
            .is_err());
    }
}
