mod find_rails;

pub use find_rails::{rails_for, FindRails, RailSide, SlideRail, SlideSide};
