//! Cell quads for the visible window

use std::collections::HashMap;

use crate::core::CellPos;
use crate::domain::palette::Color;

use super::transform::ViewTransform;

/// Floats per quad: four `[x, y]` corners, clockwise from top-left
pub const QUAD_STRIDE: usize = 8;

#[derive(Default)]
pub struct QuadBuffer {
    positions: Vec<f32>,
    colors: Vec<Color>,
}

impl QuadBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from `entries`, keeping only cells whose viewport-relative
    /// position lies within the window (in cells) grown by `margin` cells.
    pub fn rebuild(
        &mut self,
        entries: &HashMap<CellPos, Color>,
        view: &ViewTransform,
        window: (u32, u32),
        margin: u32,
    ) {
        self.positions.clear();
        self.colors.clear();

        let (vis_w, vis_h) = view.visible_cells(window);
        let m = margin as f64;
        let size = view.cell_size() as f32;

        for (&pos, &color) in entries.iter() {
            let (rx, ry) = view.relative(pos);
            if rx < -m || ry < -m || rx > vis_w + m || ry > vis_h + m {
                continue;
            }
            let p = view.cell_to_screen(pos);
            let (x0, y0, x1, y1) = (p.x, p.y, p.x + size, p.y + size);
            self.positions
                .extend_from_slice(&[x0, y0, x1, y0, x1, y1, x0, y1]);
            self.colors.push(color);
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
