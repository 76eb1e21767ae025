use std::fmt;

use tracing::info;

use crate::config::SlideRequest;
use crate::error::Result;
use crate::operations::factor::{DistanceToFactor, SlideFactor};
use crate::operations::measure::{LoopTravel, MeasureLoop, TravelExtent};
use crate::operations::rails::{FindRails, SlideRail};
use crate::operations::selection::{EdgeLoop, LoopKind, SelectedLoop};
use crate::topology::MeshTopology;

use super::host::{invoke, SlideHost};

/// Everything computed for one request, before the host is called.
#[derive(Debug, Clone)]
pub struct SlidePlan {
    /// The request the plan was built for.
    pub request: SlideRequest,
    /// The selected loop.
    pub edge_loop: EdgeLoop,
    /// Rails per loop edge, in walk order.
    pub rails: Vec<SlideRail>,
    /// Measured travel.
    pub travel: LoopTravel,
    /// The factor to hand to the host.
    pub factor: SlideFactor,
}

impl SlidePlan {
    /// Summarizes the plan for reporting.
    #[must_use]
    pub fn outcome(&self) -> SlideOutcome {
        SlideOutcome {
            factor: self.factor,
            distance: self.factor.distance_for(self.travel.extent),
            extent: self.travel.extent,
            edges: self.edge_loop.len(),
            kind: self.edge_loop.kind(),
        }
    }
}

/// The result of a completed slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideOutcome {
    /// The factor passed to the host.
    pub factor: SlideFactor,
    /// The signed distance actually covered; differs from the request
    /// only when clamping kicked in.
    pub distance: f64,
    /// Loop-level travel the factor was computed against.
    pub extent: TravelExtent,
    /// Number of loop edges.
    pub edges: usize,
    /// Whether the loop was open or closed.
    pub kind: LoopKind,
}

impl fmt::Display for SlideOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sliding {:.4} units | Factor: {:.4}",
            self.distance.abs(),
            self.factor.factor
        )
    }
}

/// Slides the selected edge loop by an exact distance.
///
/// Runs selection, rail location, measurement and factor conversion
/// against a read-only mesh, then hands the factor to the host. Any
/// failure before the host call leaves the mesh untouched.
pub struct EdgeSlideByDistance {
    request: SlideRequest,
}

impl EdgeSlideByDistance {
    /// Creates a new `EdgeSlideByDistance` operation.
    #[must_use]
    pub fn new(request: SlideRequest) -> Self {
        Self { request }
    }

    /// Computes the slide without invoking the host.
    ///
    /// # Errors
    ///
    /// Returns selection, topology or range errors from any stage.
    pub fn plan<M: MeshTopology + ?Sized>(&self, mesh: &M) -> Result<SlidePlan> {
        let edge_loop = SelectedLoop::new().execute(mesh)?;
        let rails = FindRails::new(&edge_loop).execute(mesh)?;
        let travel = MeasureLoop::new(self.request.method, self.request.metric)
            .execute(mesh, &edge_loop, &rails)?;
        let factor = DistanceToFactor::new(self.request).execute(travel.extent)?;

        Ok(SlidePlan {
            request: self.request,
            edge_loop,
            rails,
            travel,
            factor,
        })
    }

    /// Computes the slide and invokes the host with it.
    ///
    /// # Errors
    ///
    /// Returns any planning error (the host is not called), or the
    /// host's own error.
    pub fn execute<M, H>(&self, mesh: &M, host: &mut H) -> Result<SlideOutcome>
    where
        M: MeshTopology + ?Sized,
        H: SlideHost + ?Sized,
    {
        let plan = self.plan(mesh)?;
        invoke(host, &plan.factor)?;

        let outcome = plan.outcome();
        info!(
            edges = outcome.edges,
            distance = outcome.distance,
            factor = outcome.factor.factor,
            "edge slide finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{EdgeSlideError, FactorError, HostError, SelectionError};
    use crate::operations::creation::MakeGrid;
    use crate::topology::TopologyStore;
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<SlideFactor>,
    }

    impl SlideHost for Recorder {
        fn edge_slide(&mut self, factor: &SlideFactor) -> std::result::Result<(), HostError> {
            self.calls.push(*factor);
            Ok(())
        }
    }

    fn selected_row() -> TopologyStore {
        let mut store = TopologyStore::new();
        let grid = MakeGrid::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 3.0])
            .execute(&mut store)
            .unwrap();
        for e in grid.row_edges(&store, 1) {
            store.select_edge(e).unwrap();
        }
        store
    }

    #[test]
    fn slides_by_exact_distance() {
        let store = selected_row();
        let mut host = Recorder::default();
        let request = SlideRequest {
            clamp: false,
            ..SlideRequest::new(0.5)
        };

        let outcome = EdgeSlideByDistance::new(request)
            .execute(&store, &mut host)
            .unwrap();

        // Forward travel is 2.0 (up to y = 3).
        assert_relative_eq!(outcome.factor.factor, 0.25);
        assert_relative_eq!(outcome.distance, 0.5);
        assert_eq!(outcome.edges, 2);
        assert_eq!(outcome.kind, LoopKind::Open);
        assert_eq!(host.calls.len(), 1);
        assert_eq!(outcome.to_string(), "Sliding 0.5000 units | Factor: 0.2500");
    }

    #[test]
    fn clamped_outcome_reports_covered_distance() {
        let store = selected_row();
        let mut host = Recorder::default();
        let outcome = EdgeSlideByDistance::new(SlideRequest::new(-5.0))
            .execute(&store, &mut host)
            .unwrap();

        assert_relative_eq!(outcome.factor.factor, -1.0);
        assert_relative_eq!(outcome.distance, -1.0);
    }

    #[test]
    fn failures_do_not_reach_the_host() {
        let mut store = selected_row();
        let mut host = Recorder::default();
        let request = SlideRequest {
            clamp: false,
            ..SlideRequest::new(5.0)
        };
        let result = EdgeSlideByDistance::new(request).execute(&store, &mut host);
        assert!(matches!(
            result,
            Err(EdgeSlideError::Factor(FactorError::OutOfRange { .. }))
        ));

        store.clear_selection();
        let result = EdgeSlideByDistance::new(SlideRequest::new(0.1)).execute(&store, &mut host);
        assert!(matches!(
            result,
            Err(EdgeSlideError::Selection(SelectionError::NoSelection))
        ));
        assert!(host.calls.is_empty());
    }

    #[test]
    fn plan_exposes_intermediate_results() {
        let store = selected_row();
        let plan = EdgeSlideByDistance::new(SlideRequest::new(0.0))
            .plan(&store)
            .unwrap();
        assert_eq!(plan.rails.len(), 2);
        assert_eq!(plan.travel.per_edge.len(), 2);
        assert_relative_eq!(plan.travel.extent.forward, 2.0);
        assert_relative_eq!(plan.travel.extent.backward, 1.0);
        assert_eq!(plan.factor.factor.to_bits(), 0.0_f64.to_bits());
    }
}
