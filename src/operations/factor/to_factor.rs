use tracing::debug;

use crate::config::SlideRequest;
use crate::error::{FactorError, Result};
use crate::math::TOLERANCE;
use crate::operations::measure::TravelExtent;
use crate::operations::rails::SlideSide;

/// A host-ready slide factor in `[-1, 1]` with the flags that go with it.
///
/// Positive factors move towards [`SlideSide::Forward`]. `flipped` has
/// already been applied to `factor`; the flags are carried unchanged for
/// the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFactor {
    /// Normalized slide amount.
    pub factor: f64,
    /// Forwarded even flag.
    pub even: bool,
    /// Forwarded clamp flag.
    pub clamp: bool,
    /// Forwarded flipped flag.
    pub flipped: bool,
}

impl SlideFactor {
    /// The side the loop moves towards, or `None` for a zero factor.
    #[must_use]
    pub fn side(&self) -> Option<SlideSide> {
        if self.factor > 0.0 {
            Some(SlideSide::Forward)
        } else if self.factor < 0.0 {
            Some(SlideSide::Backward)
        } else {
            None
        }
    }

    /// The signed distance this factor represents against `extent`,
    /// in the caller's terms (before flipping). The magnitude comes from
    /// the extent of the side the factor points to.
    #[must_use]
    pub fn distance_for(&self, extent: TravelExtent) -> f64 {
        let Some(side) = self.side() else {
            return 0.0;
        };
        let covered = self.factor.abs() * extent.get(side);
        if (side == SlideSide::Forward) == self.flipped {
            -covered
        } else {
            covered
        }
    }
}

/// Maps a requested distance onto the loop's travel range.
pub struct DistanceToFactor {
    request: SlideRequest,
}

impl DistanceToFactor {
    /// Creates a new `DistanceToFactor` conversion.
    #[must_use]
    pub fn new(request: SlideRequest) -> Self {
        Self { request }
    }

    /// Executes the conversion against a loop-level extent.
    ///
    /// # Errors
    ///
    /// See [`to_factor`].
    pub fn execute(&self, extent: TravelExtent) -> Result<SlideFactor> {
        to_factor(&self.request, extent.forward, extent.backward)
    }
}

/// Converts `request.distance` into a slide factor.
///
/// Positive distances move towards the forward side, negative ones
/// towards the backward side; `flipped` swaps the two. The range check
/// and the division both use the extent of the side the emitted factor
/// points to. A zero distance always yields a factor of exactly 0.
///
/// # Errors
///
/// Returns [`FactorError::OutOfRange`] if the distance exceeds the
/// travel towards the target side (or there is none) and `clamp` is not
/// set, or if the distance is NaN.
pub fn to_factor(request: &SlideRequest, forward: f64, backward: f64) -> Result<SlideFactor> {
    let distance = request.distance;
    let emit = |factor: f64| SlideFactor {
        factor,
        even: request.even,
        clamp: request.clamp,
        flipped: request.flipped,
    };

    #[allow(clippy::float_cmp)]
    let is_zero = distance == 0.0;
    if is_zero {
        return Ok(emit(0.0));
    }

    let requested = if distance > 0.0 {
        SlideSide::Forward
    } else {
        SlideSide::Backward
    };
    let side = if request.flipped {
        requested.opposite()
    } else {
        requested
    };
    let available = match side {
        SlideSide::Forward => forward,
        SlideSide::Backward => backward,
    };
    let out_of_range = || FactorError::OutOfRange {
        requested: distance,
        available,
    };

    if distance.is_nan() {
        return Err(out_of_range().into());
    }

    let raw = if available <= TOLERANCE {
        if !request.clamp {
            return Err(out_of_range().into());
        }
        debug!(distance, ?side, "no travel in that direction; saturating");
        1.0
    } else {
        distance.abs() / available
    };

    let magnitude = if raw <= 1.0 {
        raw
    } else if request.clamp || raw - 1.0 <= TOLERANCE {
        debug!(distance, available, raw, "clamping slide factor");
        1.0
    } else {
        return Err(out_of_range().into());
    };

    Ok(match side {
        SlideSide::Forward => emit(magnitude),
        SlideSide::Backward => emit(-magnitude),
    })
}
