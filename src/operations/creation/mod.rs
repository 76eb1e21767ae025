mod make_grid;
mod make_tube;

pub use make_grid::{GridMesh, MakeGrid};
pub use make_tube::{MakeTube, TubeMesh};
