//! Core helpers shared by every layer: logging macro and small math types.

#[macro_use]
pub mod utils;
pub mod vec2;

pub use vec2::{CellPos, Vec2};
