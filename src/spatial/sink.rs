//! Change notifications from the cell owner to its mirrors.
//!
//! The automaton pushes every visible change through this trait; the
//! receiver never looks at automaton state or rules.

use crate::core::CellPos;
use crate::domain::palette::Color;

pub trait CellSink {
    /// Insert or recolor the entry at `pos`
    fn upsert(&mut self, pos: CellPos, color: Color);

    /// Drop the entry at `pos` if there is one
    fn remove(&mut self, pos: CellPos);

    /// Drop every entry at once
    fn clear(&mut self);
}
