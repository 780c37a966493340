//! Pointer and keyboard handling
//!
//! Hosts hand over decoded events. A press starts a gesture, `update()`
//! reconciles it against the latest cursor, a release ends it:
//! - paint (Left/Right): writes the click-policy result into every cell
//!   the cursor crosses, once per cell per press
//! - pan (Middle): moves the origin so the world point under the cursor
//!   stays under the cursor

use std::collections::HashSet;

use crate::core::{CellPos, Vec2};
use crate::domain::click_policy::PaintButton;

use super::{commands, step, WireworldCore};

pub const BUTTON_LEFT: u8 = 0;
pub const BUTTON_MIDDLE: u8 = 1;
pub const BUTTON_RIGHT: u8 = 2;

/// Mouse buttons, numbered like DOM `MouseEvent.button`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

impl PointerButton {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            BUTTON_LEFT => Some(PointerButton::Left),
            BUTTON_MIDDLE => Some(PointerButton::Middle),
            BUTTON_RIGHT => Some(PointerButton::Right),
            _ => None,
        }
    }

    fn paint_button(self) -> Option<PaintButton> {
        match self {
            PointerButton::Left => Some(PaintButton::Primary),
            PointerButton::Right => Some(PaintButton::Secondary),
            PointerButton::Middle => None,
        }
    }
}

/// Keyboard shortcuts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Pause / resume
    Space,
    /// Halve the step interval
    Equal,
    /// Double the step interval
    Minus,
    /// Soft reset, hard reset with shift
    R,
    /// Single step
    S,
}

impl Key {
    /// Accepts DOM `KeyboardEvent.code` names as well as plain key values
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Space" | " " => Some(Key::Space),
            "Equal" | "NumpadAdd" | "=" | "+" => Some(Key::Equal),
            "Minus" | "NumpadSubtract" | "-" => Some(Key::Minus),
            "KeyR" | "r" | "R" => Some(Key::R),
            "KeyS" | "s" | "S" => Some(Key::S),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
enum Gesture {
    #[default]
    Idle,
    Paint {
        pointer: PointerButton,
        button: PaintButton,
        visited: HashSet<CellPos>,
    },
    Pan {
        last_cursor: Vec2,
    },
}

#[derive(Debug, Default)]
pub(super) struct InputState {
    cursor: Vec2,
    gesture: Gesture,
}

impl InputState {
    pub(super) fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }
}

pub(super) fn pointer_down(core: &mut WireworldCore, pointer: PointerButton, pixel: Vec2) {
    if !pixel.is_finite() || !core.viewport.contains_pixel(pixel) {
        return;
    }
    // One gesture at a time; extra buttons are ignored until release
    if !core.input.is_idle() {
        return;
    }

    core.input.cursor = pixel;
    core.input.gesture = match pointer.paint_button() {
        Some(button) => Gesture::Paint {
            pointer,
            button,
            visited: HashSet::new(),
        },
        None => Gesture::Pan { last_cursor: pixel },
    };
    reconcile(core);
}

pub(super) fn pointer_up(core: &mut WireworldCore, pointer: PointerButton) {
    let owns_gesture = match &core.input.gesture {
        Gesture::Idle => false,
        Gesture::Paint { pointer: p, .. } => *p == pointer,
        Gesture::Pan { .. } => pointer == PointerButton::Middle,
    };
    if owns_gesture {
        reconcile(core);
        core.input.gesture = Gesture::Idle;
    }
}

pub(super) fn pointer_move(core: &mut WireworldCore, pixel: Vec2) {
    if pixel.is_finite() {
        core.input.cursor = pixel;
    }
}

pub(super) fn scroll(core: &mut WireworldCore, delta: f32) -> u32 {
    let current = core.viewport.cell_size() as i64;
    if delta > 0.0 {
        core.viewport.set_cell_size(current + 1)
    } else if delta < 0.0 {
        core.viewport.set_cell_size(current - 1)
    } else {
        core.viewport.cell_size()
    }
}

pub(super) fn key_down(core: &mut WireworldCore, key: Key, shift: bool) {
    match key {
        Key::Space => step::toggle_running(core),
        Key::Equal => {
            step::speed_up(core);
        }
        Key::Minus => {
            step::slow_down(core);
        }
        Key::R if shift => commands::hard_reset(core),
        Key::R => {
            commands::soft_reset(core);
        }
        Key::S => step::step(core),
    }
}

pub(super) fn hovered_cell(core: &WireworldCore) -> CellPos {
    core.viewport.pixel_to_cell(core.input.cursor)
}

/// Apply the active gesture at the current cursor
pub(super) fn reconcile(core: &mut WireworldCore) {
    let cursor = core.input.cursor;
    match &mut core.input.gesture {
        Gesture::Idle => {}
        Gesture::Paint { button, visited, .. } => {
            // Dragging off the window pauses painting until the cursor returns
            if !core.viewport.contains_pixel(cursor) {
                return;
            }
            let pos = core.viewport.pixel_to_cell(cursor);
            if !visited.insert(pos) {
                return;
            }
            let next = core.settings.click_policy.next(*button, core.automaton.get(pos));
            core.automaton.set(pos, next, &mut core.viewport);
        }
        Gesture::Pan { last_cursor } => {
            let delta = cursor - *last_cursor;
            *last_cursor = cursor;
            if delta == Vec2::zero() {
                return;
            }
            let origin = core.viewport.origin() - delta / core.viewport.cell_size() as f32;
            core.viewport.set_origin(origin);
        }
    }
}
