use std::f64::consts::TAU;

use crate::error::{Result, TopologyError};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{EdgeId, TopologyStore, VertexData, VertexId};

/// An open quad tube created by [`MakeTube`].
#[derive(Debug, Clone)]
pub struct TubeMesh {
    /// Ring vertices indexed by ring (bottom to top), then segment.
    pub rings: Vec<Vec<VertexId>>,
}

impl TubeMesh {
    /// The closed edge ring at index `ring`, ordered by segment.
    #[must_use]
    pub fn ring_edges(&self, store: &TopologyStore, ring: usize) -> Vec<EdgeId> {
        let Some(verts) = self.rings.get(ring) else {
            return Vec::new();
        };
        let n = verts.len();
        (0..n)
            .filter_map(|i| store.find_edge(verts[i], verts[(i + 1) % n]))
            .collect()
    }
}

/// Creates an open cylindrical tube of quads around the Z axis.
///
/// One ring of vertices is placed at each height; the faces between
/// consecutive rings have outward normals. The bottom and top rings
/// are open boundaries.
pub struct MakeTube {
    radius: f64,
    segments: usize,
    heights: Vec<f64>,
}

impl MakeTube {
    /// Creates a new `MakeTube` operation.
    #[must_use]
    pub fn new(radius: f64, segments: usize, heights: Vec<f64>) -> Self {
        Self {
            radius,
            segments,
            heights,
        }
    }

    /// Executes the operation, creating the tube in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive, there are fewer
    /// than 3 segments, or fewer than 2 heights.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<TubeMesh> {
        if self.radius < TOLERANCE {
            return Err(
                TopologyError::InvalidTopology("tube radius must be positive".into()).into(),
            );
        }
        if self.segments < 3 || self.heights.len() < 2 {
            return Err(TopologyError::InvalidTopology(
                "tube needs at least 3 segments and 2 rings".into(),
            )
            .into());
        }

        #[allow(clippy::cast_precision_loss)]
        let step = TAU / self.segments as f64;
        let rings: Vec<Vec<VertexId>> = self
            .heights
            .iter()
            .map(|&z| {
                (0..self.segments)
                    .map(|i| {
                        #[allow(clippy::cast_precision_loss)]
                        let angle = step * i as f64;
                        let point =
                            Point3::new(self.radius * angle.cos(), self.radius * angle.sin(), z);
                        store.add_vertex(VertexData::new(point))
                    })
                    .collect()
            })
            .collect();

        // Ring edges run counter-clockwise around +Z, side edges upwards.
        let n = self.segments;
        for ring in &rings {
            for i in 0..n {
                store.add_edge(ring[i], ring[(i + 1) % n])?;
            }
        }
        for pair in rings.windows(2) {
            for (&lower, &upper) in pair[0].iter().zip(&pair[1]) {
                store.add_edge(lower, upper)?;
            }
        }

        for pair in rings.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            for i in 0..n {
                let j = (i + 1) % n;
                store.add_face(&[lower[i], lower[j], upper[j], upper[i]])?;
            }
        }

        Ok(TubeMesh { rings })
    }
}
