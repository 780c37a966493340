use wasm_bindgen::prelude::*;

use super::{input, WireworldCore};

/// What a HUD needs to draw its status line
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq)]
pub struct StatusSnapshot {
    paused: bool,
    interval_s: f32,
    live_cells: u32,
    generation: u64,
    hovered_x: i32,
    hovered_y: i32,
    origin_x: f32,
    origin_y: f32,
    cell_size: u32,
}

#[wasm_bindgen]
impl StatusSnapshot {
    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.paused }
    #[wasm_bindgen(getter)]
    pub fn interval_s(&self) -> f32 { self.interval_s }
    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.live_cells }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn hovered_x(&self) -> i32 { self.hovered_x }
    #[wasm_bindgen(getter)]
    pub fn hovered_y(&self) -> i32 { self.hovered_y }
    #[wasm_bindgen(getter)]
    pub fn origin_x(&self) -> f32 { self.origin_x }
    #[wasm_bindgen(getter)]
    pub fn origin_y(&self) -> f32 { self.origin_y }
    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 { self.cell_size }

    /// One-line summary, e.g. `Paused | 1.00s/step | 12 cells | (3, -4)`
    pub fn summary(&self) -> String {
        format!(
            "{} | {:.2}s/step | {} cells | ({}, {})",
            if self.paused { "Paused" } else { "Running" },
            self.interval_s,
            self.live_cells,
            self.hovered_x,
            self.hovered_y
        )
    }
}

pub(super) fn snapshot(core: &WireworldCore) -> StatusSnapshot {
    let hovered = input::hovered_cell(core);
    let origin = core.viewport.origin();
    StatusSnapshot {
        paused: !core.running,
        interval_s: core.step_interval_s,
        live_cells: core.automaton.len() as u32,
        generation: core.automaton.generation(),
        hovered_x: hovered.x,
        hovered_y: hovered.y,
        origin_x: origin.x,
        origin_y: origin.y,
        cell_size: core.viewport.cell_size(),
    }
}
