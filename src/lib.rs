pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use config::{SlideDefaults, SlideRequest};
pub use error::{EdgeSlideError, Result};
pub use operations::factor::SlideFactor;
pub use operations::measure::{DistanceMetric, MeasurementMethod};
pub use operations::slide::{EdgeSlideByDistance, SlideHost, SlideOutcome};
pub use topology::{MeshTopology, TopologyStore};
