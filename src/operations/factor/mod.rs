mod to_factor;

pub use to_factor::{to_factor, DistanceToFactor, SlideFactor};
