use crate::error::Result;
use crate::math::segment::{perpendicular_component, segment_direction, segment_midpoint};
use crate::math::{Point3, Vector3};
use crate::operations::rails::{RailSide, SlideRail, SlideSide};
use crate::operations::selection::LoopEdge;
use crate::topology::MeshTopology;

/// How the distance from a loop edge to its rail is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceMetric {
    /// Straight-line distance between the edge midpoint and the midpoint
    /// of where its vertices land at full travel. Matches the host's
    /// native slide.
    #[default]
    AlongSurface,
    /// Only the part of that offset orthogonal to the loop edge, so a
    /// skewed rail does not count its sideways drift.
    Perpendicular,
    /// Mean of the along-surface and perpendicular distances.
    Mean,
}

/// Maximum travel of one loop edge towards each side. Both components
/// are non-negative; zero means no rail or a rail coincident with the edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TravelExtent {
    /// Travel towards [`SlideSide::Forward`].
    pub forward: f64,
    /// Travel towards [`SlideSide::Backward`].
    pub backward: f64,
}

impl TravelExtent {
    /// Creates an extent; negative inputs are treated as zero.
    #[must_use]
    pub fn new(forward: f64, backward: f64) -> Self {
        Self {
            forward: forward.max(0.0),
            backward: backward.max(0.0),
        }
    }

    /// Returns the travel towards `side`.
    #[must_use]
    pub fn get(&self, side: SlideSide) -> f64 {
        match side {
            SlideSide::Forward => self.forward,
            SlideSide::Backward => self.backward,
        }
    }
}

/// Computes how far a loop edge can travel towards each of its rails.
///
/// # Errors
///
/// Returns an error if a referenced vertex is missing from the mesh.
pub fn extent_for<M: MeshTopology + ?Sized>(
    mesh: &M,
    loop_edge: &LoopEdge,
    rail: &SlideRail,
    metric: DistanceMetric,
) -> Result<TravelExtent> {
    let start = mesh.vertex_position(loop_edge.start)?;
    let end = mesh.vertex_position(loop_edge.end)?;
    let reference = segment_midpoint(&start, &end);
    let axis = segment_direction(&start, &end);

    let forward = travel_to(mesh, &reference, axis.as_ref(), rail.forward.as_ref(), metric)?;
    let backward = travel_to(mesh, &reference, axis.as_ref(), rail.backward.as_ref(), metric)?;
    Ok(TravelExtent::new(forward, backward))
}

fn travel_to<M: MeshTopology + ?Sized>(
    mesh: &M,
    reference: &Point3,
    axis: Option<&Vector3>,
    side: Option<&RailSide>,
    metric: DistanceMetric,
) -> Result<f64> {
    let Some(side) = side else {
        return Ok(0.0);
    };
    let a = mesh.vertex_position(side.targets[0])?;
    let b = mesh.vertex_position(side.targets[1])?;
    let offset = segment_midpoint(&a, &b) - *reference;

    let straight = offset.norm();
    // A degenerate loop edge has no direction to project away.
    let perpendicular = axis.map_or(straight, |axis| {
        perpendicular_component(&offset, axis).norm()
    });

    let distance = match metric {
        DistanceMetric::AlongSurface => straight,
        DistanceMetric::Perpendicular => perpendicular,
        DistanceMetric::Mean => (straight + perpendicular) / 2.0,
    };
    Ok(distance)
}
