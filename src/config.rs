//! Per-call slide options and the defaults a UI layer remembers between calls.

use crate::operations::measure::{DistanceMetric, MeasurementMethod};

/// A request to slide the selected loop by an exact distance.
///
/// `distance` is in scene units; converting from meters, centimeters,
/// feet or inches is the caller's job. Positive distances move towards
/// the forward side of the loop, negative ones towards the backward side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideRequest {
    /// Signed target distance in scene units.
    pub distance: f64,
    /// How per-edge travel is reduced to one loop-level value.
    pub method: MeasurementMethod,
    /// How the distance from an edge to its rail is measured.
    pub metric: DistanceMetric,
    /// Passed through to the host; distributes movement evenly.
    pub even: bool,
    /// Saturate at the ends of the valid range instead of failing.
    pub clamp: bool,
    /// Swap the forward and backward sides.
    pub flipped: bool,
}

impl SlideRequest {
    /// Creates a request for `distance` with default options.
    #[must_use]
    pub fn new(distance: f64) -> Self {
        SlideDefaults::default().request(distance, false)
    }
}

impl Default for SlideRequest {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Operator options remembered between invocations.
///
/// The core never stores these itself. A UI layer owns one instance,
/// builds each [`SlideRequest`] from it and calls [`remember`] after a
/// successful slide. With the `serde` feature it can be persisted.
///
/// [`remember`]: SlideDefaults::remember
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideDefaults {
    /// Last used measurement method.
    pub method: MeasurementMethod,
    /// Last used distance metric.
    pub metric: DistanceMetric,
    /// Last used even flag.
    pub even: bool,
    /// Last used clamp flag.
    pub clamp: bool,
}

/// The default metric is [`DistanceMetric::AlongSurface`] because it
/// measures travel the way the host's own slide moves vertices, so a
/// requested distance is reproduced exactly.
impl Default for SlideDefaults {
    fn default() -> Self {
        Self {
            method: MeasurementMethod::Average,
            metric: DistanceMetric::AlongSurface,
            even: false,
            clamp: true,
        }
    }
}

impl SlideDefaults {
    /// Builds a request using these defaults.
    #[must_use]
    pub fn request(&self, distance: f64, flipped: bool) -> SlideRequest {
        SlideRequest {
            distance,
            method: self.method,
            metric: self.metric,
            even: self.even,
            clamp: self.clamp,
            flipped,
        }
    }

    /// Records the options of `request` as the new defaults.
    pub fn remember(&mut self, request: &SlideRequest) {
        self.method = request.method;
        self.metric = request.metric;
        self.even = request.even;
        self.clamp = request.clamp;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_clamp_and_average() {
        let request = SlideRequest::new(0.25);
        assert!(request.clamp);
        assert!(!request.even);
        assert!(!request.flipped);
        assert_eq!(request.method, MeasurementMethod::Average);
        assert_eq!(request.metric, DistanceMetric::AlongSurface);
    }

    #[test]
    fn remember_keeps_options_but_not_distance() {
        let mut defaults = SlideDefaults::default();
        let used = SlideRequest {
            distance: 3.0,
            method: MeasurementMethod::Minimum,
            metric: DistanceMetric::Perpendicular,
            even: true,
            clamp: false,
            flipped: true,
        };
        defaults.remember(&used);

        let next = defaults.request(-1.0, false);
        assert_eq!(next.method, MeasurementMethod::Minimum);
        assert_eq!(next.metric, DistanceMetric::Perpendicular);
        assert!(next.even);
        assert!(!next.clamp);
        assert!(!next.flipped);
        assert!((next.distance + 1.0).abs() < f64::EPSILON);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn defaults_survive_persistence() {
        let defaults = SlideDefaults {
            method: MeasurementMethod::FirstSelected,
            metric: DistanceMetric::Mean,
            even: true,
            clamp: false,
        };
        let json = serde_json::to_string(&defaults).unwrap();
        let restored: SlideDefaults = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, defaults);
    }
}
