mod edge_slide;
mod host;

pub use edge_slide::{EdgeSlideByDistance, SlideOutcome, SlidePlan};
pub use host::{invoke, SlideHost};
