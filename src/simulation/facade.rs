use wasm_bindgen::prelude::*;

use crate::core::{CellPos, Vec2};
use crate::domain::cell::{CellState, StateId};

use super::input::{Key, PointerButton};
use super::perf_stats::PerfStats;
use super::status::StatusSnapshot;
use super::WireworldCore;

/// Where the draw buffers live in wasm memory after `render()`
///
/// - lines: `line_count` segments of `[x0, y0, x1, y1]` in lattice units;
///   draw with `screen = v * line_scale + (line_tx, line_ty)`
/// - quads: `quad_count` cells of `[x0, y0, x1, y0, x1, y1, x0, y1]` in
///   pixels, plus one ABGR color each
#[wasm_bindgen]
pub struct RenderLayout {
    line_ptr: u32,
    line_len_floats: u32,
    line_len_bytes: u32,
    line_count: u32,
    line_tx: f32,
    line_ty: f32,
    line_scale: f32,
    quad_ptr: u32,
    quad_len_floats: u32,
    quad_len_bytes: u32,
    quad_color_ptr: u32,
    quad_count: u32,
}

#[wasm_bindgen]
impl RenderLayout {
    #[wasm_bindgen(getter)]
    pub fn line_ptr(&self) -> u32 { self.line_ptr }
    #[wasm_bindgen(getter)]
    pub fn line_len_floats(&self) -> u32 { self.line_len_floats }
    #[wasm_bindgen(getter)]
    pub fn line_len_bytes(&self) -> u32 { self.line_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn line_count(&self) -> u32 { self.line_count }
    #[wasm_bindgen(getter)]
    pub fn line_tx(&self) -> f32 { self.line_tx }
    #[wasm_bindgen(getter)]
    pub fn line_ty(&self) -> f32 { self.line_ty }
    #[wasm_bindgen(getter)]
    pub fn line_scale(&self) -> f32 { self.line_scale }

    #[wasm_bindgen(getter)]
    pub fn quad_ptr(&self) -> u32 { self.quad_ptr }
    #[wasm_bindgen(getter)]
    pub fn quad_len_floats(&self) -> u32 { self.quad_len_floats }
    #[wasm_bindgen(getter)]
    pub fn quad_len_bytes(&self) -> u32 { self.quad_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn quad_color_ptr(&self) -> u32 { self.quad_color_ptr }
    #[wasm_bindgen(getter)]
    pub fn quad_count(&self) -> u32 { self.quad_count }
}

#[wasm_bindgen]
pub struct World {
    core: WireworldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a simulation for a `width` x `height` pixel canvas
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WireworldCore::new(width, height),
        }
    }

    /// Create a simulation configured by a settings bundle
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(width: u32, height: u32, json: String) -> Result<World, JsValue> {
        let mut core = WireworldCore::new(width, height);
        core.load_settings_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.core.live_cell_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 { self.core.cell_size() }

    #[wasm_bindgen(getter)]
    pub fn origin_x(&self) -> f32 { self.core.origin().x }

    #[wasm_bindgen(getter)]
    pub fn origin_y(&self) -> f32 { self.core.origin().y }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_settings_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn settings_manifest_json(&self) -> String {
        self.core.settings_manifest_json()
    }

    // === CELLS ===

    /// Write a state id (see `st_*()`); unknown ids erase
    pub fn set_cell(&mut self, x: i32, y: i32, state: StateId) {
        self.core.set(CellPos::new(x, y), CellState::from_id(state));
    }

    pub fn get_cell(&self, x: i32, y: i32) -> StateId {
        self.core.get(CellPos::new(x, y)).id()
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.core.is_alive(CellPos::new(x, y))
    }

    /// Remove every cell
    pub fn hard_reset(&mut self) {
        self.core.hard_reset();
    }

    /// Turn heads and tails back into wire; returns how many changed
    pub fn soft_reset(&mut self) -> u32 {
        self.core.soft_reset() as u32
    }

    // === RUN STATE ===

    pub fn toggle_running(&mut self) {
        self.core.toggle_running();
    }

    pub fn set_running(&mut self, running: bool) {
        self.core.set_running(running);
    }

    /// Seconds per step, clamped to [0, 10]; returns the stored value
    pub fn set_speed(&mut self, seconds: f32) -> f32 {
        self.core.set_speed(seconds)
    }

    pub fn speed(&self) -> f32 {
        self.core.speed()
    }

    pub fn speed_up(&mut self) -> f32 {
        self.core.speed_up()
    }

    pub fn slow_down(&mut self) -> f32 {
        self.core.slow_down()
    }

    /// Advance one generation even while paused
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Call once per animation frame; returns whether a step ran
    pub fn update(&mut self) -> bool {
        self.core.update()
    }

    /// `update()` driven by the host clock (e.g. the rAF timestamp)
    pub fn update_at(&mut self, now_ms: f64) -> bool {
        self.core.update_at(now_ms)
    }

    // === INPUT ===

    /// `button` follows `MouseEvent.button`: 0 left, 1 middle, 2 right
    pub fn pointer_down(&mut self, button: u8, x: f32, y: f32) {
        if let Some(button) = PointerButton::from_id(button) {
            self.core.pointer_down(button, Vec2::new(x, y));
        }
    }

    pub fn pointer_up(&mut self, button: u8) {
        if let Some(button) = PointerButton::from_id(button) {
            self.core.pointer_up(button);
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(Vec2::new(x, y));
    }

    /// Zoom by one pixel per cell; returns the new cell size
    pub fn scroll(&mut self, delta: f32) -> u32 {
        self.core.scroll(delta)
    }

    /// `key` is a `KeyboardEvent.code` or key value; unknown keys are ignored
    pub fn key_down(&mut self, key: &str, shift: bool) -> bool {
        match Key::from_code(key) {
            Some(key) => {
                self.core.key_down(key, shift);
                true
            }
            None => false,
        }
    }

    // === VIEW ===

    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    /// Clamped to the configured zoom range; returns the stored value
    pub fn set_cell_size(&mut self, size: i32) -> u32 {
        self.core.set_cell_size(size as i64)
    }

    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.core.set_origin(Vec2::new(x, y));
    }

    pub fn hovered_cell_x(&self) -> i32 {
        self.core.hovered_cell().x
    }

    pub fn hovered_cell_y(&self) -> i32 {
        self.core.hovered_cell().y
    }

    // === RENDER ===

    /// Refresh draw buffers and return their layout
    pub fn render(&mut self) -> RenderLayout {
        let data = self.core.render_layout_data();
        RenderLayout {
            line_ptr: data.line_ptr as u32,
            line_len_floats: data.line_len_floats as u32,
            line_len_bytes: (data.line_len_floats * std::mem::size_of::<f32>()) as u32,
            line_count: data.line_count as u32,
            line_tx: data.line_tx,
            line_ty: data.line_ty,
            line_scale: data.line_scale,
            quad_ptr: data.quad_ptr as u32,
            quad_len_floats: data.quad_len_floats as u32,
            quad_len_bytes: (data.quad_len_floats * std::mem::size_of::<f32>()) as u32,
            quad_color_ptr: data.quad_color_ptr as u32,
            quad_count: data.quad_count as u32,
        }
    }

    pub fn line_color(&self) -> u32 {
        self.core.settings().palette.line
    }

    pub fn background_color(&self) -> u32 {
        self.core.settings().palette.background
    }

    pub fn status(&self) -> StatusSnapshot {
        self.core.status()
    }
}

impl World {
    /// Native access to the simulation behind the wasm surface
    pub fn core(&self) -> &WireworldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WireworldCore {
        &mut self.core
    }
}
