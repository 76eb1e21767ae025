mod selected_loop;

pub use selected_loop::{selected_loop, EdgeLoop, LoopEdge, LoopKind, SelectedLoop};
