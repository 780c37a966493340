//! Sparse viewport
//!
//! Holds a (position -> color) mirror of the live cells plus the pan/zoom
//! state, and turns both into draw-ready buffers on demand.
//!
//! Draw data is cached behind two dirty flags:
//! - `lattice_dirty`: window size or margin changed, line vertices rebuilt
//! - `quads_dirty`: entries, zoom or origin changed, quads rebuilt
//!
//! Pan/zoom never rebuild the lattice; its placement is the O(1)
//! `LatticeTransform` computed on every render.

use std::collections::HashMap;

use crate::core::{CellPos, Vec2};
use crate::domain::palette::Color;
use crate::domain::settings::{DEFAULT_CELL_MARGIN, DEFAULT_LATTICE_MARGIN, MAX_MARGIN};

use super::sink::CellSink;

mod lattice;
mod quads;
mod transform;

pub use lattice::{Lattice, LatticeTransform, LINE_STRIDE};
pub use quads::{QuadBuffer, QUAD_STRIDE};
pub use transform::ViewTransform;

/// Borrowed draw data for one frame
pub struct RenderFrame<'a> {
    /// Lattice-space lines, `LINE_STRIDE` floats each
    pub lines: &'a [f32],
    pub line_transform: LatticeTransform,
    /// Pixel-space quads, `QUAD_STRIDE` floats each
    pub quad_positions: &'a [f32],
    /// One color per quad
    pub quad_colors: &'a [Color],
}

pub struct SparseViewport {
    entries: HashMap<CellPos, Color>,
    view: ViewTransform,
    window: (u32, u32),
    lattice_margin: u32,
    cell_margin: u32,

    lattice: Lattice,
    quads: QuadBuffer,
    lattice_dirty: bool,
    quads_dirty: bool,
}

impl SparseViewport {
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            entries: HashMap::new(),
            view: ViewTransform::default(),
            window: (window_width, window_height),
            lattice_margin: DEFAULT_LATTICE_MARGIN,
            cell_margin: DEFAULT_CELL_MARGIN,
            lattice: Lattice::new(),
            quads: QuadBuffer::new(),
            lattice_dirty: true,
            quads_dirty: true,
        }
    }

    // === ENTRIES ===

    /// Upsert the entry at `pos`
    pub fn set_cell(&mut self, pos: CellPos, color: Color) {
        let previous = self.entries.insert(pos, color);
        if previous != Some(color) {
            self.quads_dirty = true;
        }
    }

    pub fn clear_cell(&mut self, pos: CellPos) {
        if self.entries.remove(&pos).is_some() {
            self.quads_dirty = true;
        }
    }

    pub fn clear_all(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.quads_dirty = true;
        }
    }

    pub fn entry(&self, pos: CellPos) -> Option<Color> {
        self.entries.get(&pos).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (CellPos, Color)> + '_ {
        self.entries.iter().map(|(p, c)| (*p, *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // === VIEW ===

    pub fn cell_size(&self) -> u32 {
        self.view.cell_size()
    }

    /// Clamp and store a new cell size; returns the stored value
    pub fn set_cell_size(&mut self, size: i64) -> u32 {
        let before = self.view.cell_size();
        let after = self.view.set_cell_size(size);
        if after != before {
            self.quads_dirty = true;
        }
        after
    }

    pub fn set_cell_size_limits(&mut self, min: u32, max: u32) {
        self.view.set_limits(min, max);
        self.quads_dirty = true;
    }

    pub fn origin(&self) -> Vec2 {
        self.view.origin()
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        if self.view.set_origin(origin) {
            self.quads_dirty = true;
        }
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.window
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.window == (width, height) {
            return;
        }
        self.window = (width, height);
        self.lattice_dirty = true;
        self.quads_dirty = true;
    }

    /// Both margins are capped at `MAX_MARGIN`
    pub fn set_margins(&mut self, lattice_margin: u32, cell_margin: u32) {
        let lattice_margin = lattice_margin.min(MAX_MARGIN);
        let cell_margin = cell_margin.min(MAX_MARGIN);
        if self.lattice_margin != lattice_margin {
            self.lattice_margin = lattice_margin;
            self.lattice_dirty = true;
        }
        if self.cell_margin != cell_margin {
            self.cell_margin = cell_margin;
            self.quads_dirty = true;
        }
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn screen_to_world(&self, pixel: Vec2) -> Vec2 {
        self.view.screen_to_world(pixel)
    }

    pub fn pixel_to_cell(&self, pixel: Vec2) -> CellPos {
        self.view.pixel_to_cell(pixel)
    }

    /// Whether a pixel lies inside the window
    pub fn contains_pixel(&self, pixel: Vec2) -> bool {
        pixel.x >= 0.0
            && pixel.y >= 0.0
            && pixel.x < self.window.0 as f32
            && pixel.y < self.window.1 as f32
    }

    // === RENDER ===

    pub fn is_dirty(&self) -> bool {
        self.lattice_dirty || self.quads_dirty
    }

    pub fn lattice_rebuilds(&self) -> u32 {
        self.lattice.rebuilds()
    }

    /// Bring cached buffers up to date and borrow them for drawing
    pub fn render(&mut self) -> RenderFrame<'_> {
        if self.lattice_dirty {
            self.lattice.rebuild(self.window, self.lattice_margin);
            self.lattice_dirty = false;
        }
        if self.quads_dirty {
            self.quads
                .rebuild(&self.entries, &self.view, self.window, self.cell_margin);
            self.quads_dirty = false;
        }

        RenderFrame {
            lines: self.lattice.vertices(),
            line_transform: LatticeTransform::from_view(&self.view),
            quad_positions: self.quads.positions(),
            quad_colors: self.quads.colors(),
        }
    }
}

impl CellSink for SparseViewport {
    fn upsert(&mut self, pos: CellPos, color: Color) {
        self.set_cell(pos, color);
    }

    fn remove(&mut self, pos: CellPos) {
        self.clear_cell(pos);
    }

    fn clear(&mut self) {
        self.clear_all();
    }
}
