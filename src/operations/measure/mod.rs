mod extent;
mod measure_loop;
mod reduce;

pub use extent::{extent_for, DistanceMetric, TravelExtent};
pub use measure_loop::{LoopTravel, MeasureLoop};
pub use reduce::{reduce, MeasurementMethod};
