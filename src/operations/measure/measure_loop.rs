use tracing::{debug, trace};

use crate::error::{Result, TopologyError};
use crate::operations::rails::SlideRail;
use crate::operations::selection::EdgeLoop;
use crate::topology::MeshTopology;

use super::extent::{extent_for, DistanceMetric, TravelExtent};
use super::reduce::{reduce, MeasurementMethod};

/// Travel measured over a whole loop.
#[derive(Debug, Clone)]
pub struct LoopTravel {
    /// Per-edge extents in walk order.
    pub per_edge: Vec<TravelExtent>,
    /// The loop-level extent after reduction.
    pub extent: TravelExtent,
}

/// Measures every loop edge against its rails and reduces the results.
pub struct MeasureLoop {
    method: MeasurementMethod,
    metric: DistanceMetric,
}

impl MeasureLoop {
    /// Creates a new `MeasureLoop` query.
    #[must_use]
    pub fn new(method: MeasurementMethod, metric: DistanceMetric) -> Self {
        Self { method, metric }
    }

    /// Executes the measurement. `rails` must be parallel to the loop's
    /// edges, as produced by [`FindRails`](crate::operations::rails::FindRails).
    ///
    /// # Errors
    ///
    /// Returns an error if `rails` does not match the loop, a vertex is
    /// missing, or the reduction fails.
    pub fn execute<M: MeshTopology + ?Sized>(
        &self,
        mesh: &M,
        edge_loop: &EdgeLoop,
        rails: &[SlideRail],
    ) -> Result<LoopTravel> {
        if rails.len() != edge_loop.len() {
            return Err(TopologyError::InvalidTopology(format!(
                "{} rails for {} loop edges",
                rails.len(),
                edge_loop.len()
            ))
            .into());
        }

        let per_edge = edge_loop
            .edges()
            .iter()
            .zip(rails)
            .map(|(loop_edge, rail)| {
                let extent = extent_for(mesh, loop_edge, rail, self.metric)?;
                trace!(
                    forward = extent.forward,
                    backward = extent.backward,
                    "edge travel"
                );
                Ok(extent)
            })
            .collect::<Result<Vec<_>>>()?;

        let extent = reduce(&per_edge, self.method, edge_loop.first_selected_index())?;
        debug!(
            method = ?self.method,
            metric = ?self.metric,
            forward = extent.forward,
            backward = extent.backward,
            "measured loop travel"
        );

        Ok(LoopTravel { per_edge, extent })
    }
}
