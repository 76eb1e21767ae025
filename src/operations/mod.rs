pub mod creation;
pub mod factor;
pub mod measure;
pub mod rails;
pub mod selection;
pub mod slide;
