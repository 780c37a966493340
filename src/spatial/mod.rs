//! Spatial storage: the authoritative sparse cell map and the render-side
//! viewport mirror, plus the push contract between them.

pub mod cell_map;
pub mod sink;
pub mod viewport;

pub use cell_map::CellMap;
pub use sink::CellSink;
pub use viewport::{RenderFrame, SparseViewport, LINE_STRIDE, QUAD_STRIDE};
