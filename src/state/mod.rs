pub mod drag;
pub mod edges;

pub use drag::{DragState, FrameHandle, snap_target};
pub use edges::{Direction, ScrollEdges};
