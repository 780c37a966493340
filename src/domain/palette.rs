//! Display colors
//!
//! Colors are packed ABGR (`0xAABBGGRR`), so the little-endian bytes in
//! memory read `[R, G, B, A]` and the host can upload them as-is.

use super::cell::CellState;

pub type Color = u32;

pub const WHITE: Color = rgba(255, 255, 255, 255);
pub const BLACK: Color = rgba(0, 0, 0, 255);
pub const YELLOW: Color = rgba(255, 255, 0, 255);
pub const BLUE: Color = rgba(0, 0, 255, 255);
pub const RED: Color = rgba(255, 0, 0, 255);

#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

#[inline]
pub fn channels(color: Color) -> [u8; 4] {
    color.to_le_bytes()
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
pub fn parse_hex(s: &str) -> Result<Color, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 && hex.len() != 8 {
        return Err(format!("color must be #RRGGBB or #RRGGBBAA: {}", s));
    }
    let byte = |i: usize| -> Result<u8, String> {
        hex.get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| format!("invalid hex color: {}", s))
    };
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Ok(rgba(byte(0)?, byte(2)?, byte(4)?, a))
}

pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = channels(color);
    if a == 255 {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub wire: Color,
    pub head: Color,
    pub tail: Color,
    pub line: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wire: YELLOW,
            head: BLUE,
            tail: RED,
            line: BLACK,
            background: WHITE,
        }
    }
}

impl Palette {
    /// Display color of a state. Empty cells are not drawn.
    pub fn color_of(&self, state: CellState) -> Option<Color> {
        match state {
            CellState::Empty => None,
            CellState::Wire => Some(self.wire),
            CellState::Head => Some(self.head),
            CellState::Tail => Some(self.tail),
        }
    }
}
