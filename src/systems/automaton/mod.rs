//! Wireworld automaton
//!
//! Owns the live-cell set. Every change that affects what is drawn is pushed
//! into a `CellSink` before the call returns, so a sink fed only through
//! this type always mirrors `{(pos, color_of(state))}` of the live cells.
//!
//! Stepping is a snapshot/commit pair: `evolve` reads the current map and
//! builds the next one, then the new map replaces the old in one move.

mod evolve;

pub use evolve::{evolve, evolve_in_order};

use crate::core::CellPos;
use crate::domain::cell::CellState;
use crate::domain::palette::Palette;
use crate::spatial::{CellMap, CellSink};

/// What one `step()` did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub processed: u32,
    pub changed: u32,
    pub heads: u32,
    pub tails: u32,
    pub wires: u32,
}

pub struct AutomatonEngine {
    cells: CellMap,
    palette: Palette,
    generation: u64,
}

impl AutomatonEngine {
    pub fn new(palette: Palette) -> Self {
        Self {
            cells: CellMap::new(),
            palette,
            generation: 0,
        }
    }

    #[inline]
    pub fn is_alive(&self, pos: CellPos) -> bool {
        self.cells.is_alive(pos)
    }

    #[inline]
    pub fn get(&self, pos: CellPos) -> CellState {
        self.cells.get(pos)
    }

    /// Write `state` at `pos` (`Empty` erases) and push the matching
    /// upsert or removal.
    pub fn set<S: CellSink>(&mut self, pos: CellPos, state: CellState, sink: &mut S) {
        self.cells.set(pos, state);
        match self.palette.color_of(state) {
            Some(color) => sink.upsert(pos, color),
            None => sink.remove(pos),
        }
    }

    /// Advance every live cell by one generation
    pub fn step<S: CellSink>(&mut self, sink: &mut S) -> StepReport {
        let next = evolve(&self.cells);

        let mut report = StepReport {
            processed: self.cells.len() as u32,
            ..StepReport::default()
        };
        for (&pos, &state) in next.iter() {
            match state {
                CellState::Head => report.heads += 1,
                CellState::Tail => report.tails += 1,
                CellState::Wire => report.wires += 1,
                CellState::Empty => {}
            }
            if self.cells.get(pos) != state {
                report.changed += 1;
                if let Some(color) = self.palette.color_of(state) {
                    sink.upsert(pos, color);
                }
            }
        }

        // Commit
        self.cells = next;
        self.generation += 1;
        report
    }

    /// Hard reset: drop every cell
    pub fn clear_all<S: CellSink>(&mut self, sink: &mut S) {
        self.cells.clear();
        self.generation = 0;
        sink.clear();
    }

    /// Soft reset: heads and tails go back to wire, topology stays.
    /// Returns how many cells were rewritten.
    pub fn reset_tails_and_heads<S: CellSink>(&mut self, sink: &mut S) -> usize {
        let signal: Vec<CellPos> = self
            .cells
            .iter()
            .filter(|(_, s)| **s != CellState::Wire)
            .map(|(p, _)| *p)
            .collect();
        for &pos in &signal {
            self.set(pos, CellState::Wire, sink);
        }
        signal.len()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Swap colors and repaint every live cell in the sink
    pub fn set_palette<S: CellSink>(&mut self, palette: Palette, sink: &mut S) {
        self.palette = palette;
        for (&pos, &state) in self.cells.iter() {
            if let Some(color) = self.palette.color_of(state) {
                sink.upsert(pos, color);
            }
        }
    }

    pub fn cells(&self) -> &CellMap {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.count(state)
    }

    /// Steps taken since creation or the last hard reset
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for AutomatonEngine {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}
