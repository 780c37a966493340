/// 2D vector for fractional world and pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Component-wise floor into an integer cell coordinate
    pub fn floor_to_cell(&self) -> CellPos {
        CellPos::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    /// Sub-cell part of each component, always in `[0, 1)`
    pub fn fract_euclid(&self) -> Self {
        Self {
            x: self.x.rem_euclid(1.0),
            y: self.y.rem_euclid(1.0),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Integer world coordinate of a cell. Hashable key of every sparse map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`; `None` past the i32 range
    #[inline]
    pub fn checked_offset(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Moore neighbors, row by row. Cells on the edge of the i32 range
    /// have fewer than eight.
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = CellPos> {
        MOORE_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| self.checked_offset(dx, dy))
    }

    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl From<(i32, i32)> for CellPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
