//! Background grid lines
//!
//! Lines are generated once per window size, in lattice units (one unit per
//! cell at any zoom), as if the cell size were 1px. Pan and zoom only change
//! the `LatticeTransform` applied at draw time, so moving the view never
//! touches the vertex data.

use super::transform::ViewTransform;

/// Floats per line: `[x0, y0, x1, y1]`
pub const LINE_STRIDE: usize = 4;

/// `screen = lattice * scale + (tx, ty)`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatticeTransform {
    pub tx: f32,
    pub ty: f32,
    pub scale: f32,
}

impl LatticeTransform {
    /// Shift by the sub-cell part of the origin, scale by the cell size.
    /// Lattice line `i` then sits on world line `floor(origin) + i`.
    pub fn from_view(view: &ViewTransform) -> Self {
        let cs = view.cell_size() as f32;
        let frac = view.origin().fract_euclid();
        Self {
            tx: -frac.x * cs,
            ty: -frac.y * cs,
            scale: cs,
        }
    }

    #[inline]
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale + self.tx, y * self.scale + self.ty)
    }
}

pub struct Lattice {
    vertices: Vec<f32>,
    rebuilds: u32,
}

impl Lattice {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            rebuilds: 0,
        }
    }

    /// Regenerate vertical and horizontal lines covering `window` plus
    /// `margin` extra lines on every side.
    pub fn rebuild(&mut self, window: (u32, u32), margin: u32) {
        let (w, h) = (window.0 as i64, window.1 as i64);
        let m = margin as i64;
        let lo = -m as f32;
        let (x_hi, y_hi) = ((w + m) as f32, (h + m) as f32);

        let lines = (w + 2 * m).max(0) as usize + (h + 2 * m).max(0) as usize;
        self.vertices.clear();
        self.vertices.reserve(lines * LINE_STRIDE);

        for x in -m..w + m {
            let x = x as f32;
            self.vertices.extend_from_slice(&[x, lo, x, y_hi]);
        }
        for y in -m..h + m {
            let y = y as f32;
            self.vertices.extend_from_slice(&[lo, y, x_hi, y]);
        }

        self.rebuilds = self.rebuilds.wrapping_add(1);
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / LINE_STRIDE
    }

    pub fn rebuilds(&self) -> u32 {
        self.rebuilds
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;

    #[test]
    fn line_count_tracks_perimeter() {
        let mut lattice = Lattice::new();
        lattice.rebuild((100, 50), 10);
        assert_eq!(lattice.line_count(), (100 + 20) + (50 + 20));
        // First vertical line starts above the window
        assert_eq!(&lattice.vertices()[..4], &[-10.0, -10.0, -10.0, 60.0]);
        assert_eq!(lattice.rebuilds(), 1);
    }

    #[test]
    fn transform_aligns_lines_with_cells() {
        let mut view = ViewTransform::default();
        view.set_cell_size(20);
        view.set_origin(Vec2::new(3.25, -1.5));
        let t = LatticeTransform::from_view(&view);
        assert_eq!(t.scale, 20.0);
        assert!((t.tx + 5.0).abs() < 1e-5);
        assert!((t.ty + 10.0).abs() < 1e-5);

        // Lattice line 1 is world column floor(3.25) + 1 = 4
        let (sx, _) = t.apply(1.0, 0.0);
        let expected = view.world_to_screen(Vec2::new(4.0, 0.0)).x;
        assert!((sx - expected).abs() < 1e-4);
    }
}
