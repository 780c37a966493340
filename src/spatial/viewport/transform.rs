//! World <-> screen mapping
//!
//! `screen = floor((world - origin) * cell_size)`
//! `world  = pixel / cell_size + origin`

use crate::core::{CellPos, Vec2};
use crate::domain::settings::{DEFAULT_CELL_SIZE, MAX_CELL_SIZE, MIN_CELL_SIZE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    cell_size: u32,
    min_cell_size: u32,
    max_cell_size: u32,
    /// World coordinate of the viewport's top-left corner
    origin: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            min_cell_size: MIN_CELL_SIZE,
            max_cell_size: MAX_CELL_SIZE,
            origin: Vec2::zero(),
        }
    }
}

impl ViewTransform {
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn limits(&self) -> (u32, u32) {
        (self.min_cell_size, self.max_cell_size)
    }

    /// Store `size` clamped to the configured range; returns the stored value
    pub fn set_cell_size(&mut self, size: i64) -> u32 {
        self.cell_size = size.clamp(self.min_cell_size as i64, self.max_cell_size as i64) as u32;
        self.cell_size
    }

    /// Narrow the zoom range (always kept inside `[1, 500]`) and re-clamp
    pub fn set_limits(&mut self, min: u32, max: u32) {
        let min = min.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        let max = max.clamp(min, MAX_CELL_SIZE);
        self.min_cell_size = min;
        self.max_cell_size = max;
        self.set_cell_size(self.cell_size as i64);
    }

    /// Non-finite origins are ignored
    pub fn set_origin(&mut self, origin: Vec2) -> bool {
        if !origin.is_finite() {
            return false;
        }
        self.origin = origin;
        true
    }

    /// Viewport-relative position of a world point, in cells
    #[inline]
    pub fn relative(&self, world: CellPos) -> (f64, f64) {
        (
            world.x as f64 - self.origin.x as f64,
            world.y as f64 - self.origin.y as f64,
        )
    }

    /// Top-left pixel of a cell, floored so neighbors share edges exactly
    #[inline]
    pub fn cell_to_screen(&self, world: CellPos) -> Vec2 {
        let (rx, ry) = self.relative(world);
        let cs = self.cell_size as f64;
        Vec2::new((rx * cs).floor() as f32, (ry * cs).floor() as f32)
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let cs = self.cell_size as f32;
        let p = (world - self.origin) * cs;
        Vec2::new(p.x.floor(), p.y.floor())
    }

    pub fn screen_to_world(&self, pixel: Vec2) -> Vec2 {
        pixel / self.cell_size as f32 + self.origin
    }

    /// Cell under a pixel
    pub fn pixel_to_cell(&self, pixel: Vec2) -> CellPos {
        self.screen_to_world(pixel).floor_to_cell()
    }

    /// Window size expressed in cells
    pub fn visible_cells(&self, window: (u32, u32)) -> (f64, f64) {
        let cs = self.cell_size as f64;
        (window.0 as f64 / cs, window.1 as f64 / cs)
    }
}
