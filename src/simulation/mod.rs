//! WireworldCore - the whole simulation behind one handle
//!
//! Owns the automaton (authoritative cells), the viewport (render mirror),
//! run/pause and step timing, pointer gestures and perf counters.
//! The host feeds decoded events in, calls `update()` once per frame and
//! draws what `render()` leaves in the viewport buffers.
//!
//! Orchestration only: the rule lives in systems/automaton, storage and
//! projection in spatial/.

use crate::core::{CellPos, Vec2};
use crate::domain::cell::CellState;
use crate::domain::settings::SimulationSettings;
use crate::spatial::SparseViewport;
use crate::systems::AutomatonEngine;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "clock/frame_clock.rs"]
mod frame_clock;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "input/input.rs"]
mod input;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "status/status.rs"]
mod status;
mod facade;

pub use facade::{RenderLayout, World};
pub use input::{Key, PointerButton};
pub use perf_stats::PerfStats;
pub use status::StatusSnapshot;

use frame_clock::FrameClock;
use input::InputState;
use perf_timer::PerfTimer;

pub(crate) struct RenderLayoutData {
    pub(crate) line_ptr: *const f32,
    pub(crate) line_len_floats: usize,
    pub(crate) line_count: usize,
    pub(crate) line_tx: f32,
    pub(crate) line_ty: f32,
    pub(crate) line_scale: f32,
    pub(crate) quad_ptr: *const f32,
    pub(crate) quad_len_floats: usize,
    pub(crate) quad_color_ptr: *const u32,
    pub(crate) quad_count: usize,
}

/// The simulation
pub struct WireworldCore {
    settings: SimulationSettings,
    automaton: AutomatonEngine,
    viewport: SparseViewport,

    // Run state
    running: bool,
    step_interval_s: f32,
    last_step_ms: Option<f64>,
    clock: FrameClock,

    input: InputState,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WireworldCore {
    /// Create a simulation drawing into a `width` x `height` pixel window
    pub fn new(width: u32, height: u32) -> Self {
        init::create_core(width, height, SimulationSettings::default())
    }

    pub fn with_settings(width: u32, height: u32, settings: SimulationSettings) -> Self {
        init::create_core(width, height, settings)
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_settings_json(self, json)
    }

    pub fn apply_settings(&mut self, settings: SimulationSettings) {
        settings::apply_settings(self, settings);
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn settings_manifest_json(&self) -> String {
        self.settings.to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === CELLS ===

    pub fn is_alive(&self, pos: CellPos) -> bool {
        self.automaton.is_alive(pos)
    }

    pub fn get(&self, pos: CellPos) -> CellState {
        self.automaton.get(pos)
    }

    /// Write a cell; `Empty` erases
    pub fn set(&mut self, pos: CellPos, state: CellState) {
        commands::set_cell(self, pos, state);
    }

    /// Hard reset: both the automaton and the viewport end up empty
    pub fn hard_reset(&mut self) {
        commands::hard_reset(self);
    }

    /// Soft reset: every head and tail becomes wire
    pub fn soft_reset(&mut self) -> usize {
        commands::soft_reset(self)
    }

    pub fn live_cell_count(&self) -> usize {
        self.automaton.len()
    }

    pub fn generation(&self) -> u64 {
        self.automaton.generation()
    }

    pub fn automaton(&self) -> &AutomatonEngine {
        &self.automaton
    }

    pub fn viewport(&self) -> &SparseViewport {
        &self.viewport
    }

    // === RUN STATE ===

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn toggle_running(&mut self) {
        step::toggle_running(self);
    }

    pub fn set_running(&mut self, running: bool) {
        step::set_running(self, running);
    }

    /// Seconds between automatic steps, clamped to `[0, 10]`
    pub fn set_speed(&mut self, seconds: f32) -> f32 {
        step::set_speed(self, seconds)
    }

    pub fn speed(&self) -> f32 {
        self.step_interval_s
    }

    /// Halve the step interval
    pub fn speed_up(&mut self) -> f32 {
        step::speed_up(self)
    }

    /// Double the step interval
    pub fn slow_down(&mut self) -> f32 {
        step::slow_down(self)
    }

    /// Advance exactly one generation, regardless of pause state
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Per-frame entry point using the built-in clock
    pub fn update(&mut self) -> bool {
        let now = self.clock.now_ms();
        step::update(self, now)
    }

    /// Per-frame entry point with a host-supplied timestamp in milliseconds.
    /// Returns whether a step ran.
    pub fn update_at(&mut self, now_ms: f64) -> bool {
        step::update(self, now_ms)
    }

    // === INPUT ===

    pub fn pointer_down(&mut self, button: PointerButton, pixel: Vec2) {
        input::pointer_down(self, button, pixel);
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        input::pointer_up(self, button);
    }

    pub fn pointer_move(&mut self, pixel: Vec2) {
        input::pointer_move(self, pixel);
    }

    /// Zoom one step per notch: positive delta grows cells
    pub fn scroll(&mut self, delta: f32) -> u32 {
        input::scroll(self, delta)
    }

    pub fn key_down(&mut self, key: Key, shift: bool) {
        input::key_down(self, key, shift);
    }

    /// Cell under the last known pointer position
    pub fn hovered_cell(&self) -> CellPos {
        input::hovered_cell(self)
    }

    // === VIEW ===

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
    }

    pub fn set_cell_size(&mut self, size: i64) -> u32 {
        self.viewport.set_cell_size(size)
    }

    pub fn cell_size(&self) -> u32 {
        self.viewport.cell_size()
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.viewport.set_origin(origin);
    }

    pub fn origin(&self) -> Vec2 {
        self.viewport.origin()
    }

    pub fn screen_to_world(&self, pixel: Vec2) -> Vec2 {
        self.viewport.screen_to_world(pixel)
    }

    // === RENDER ===

    /// Refresh the viewport's draw buffers and describe where they live
    pub(crate) fn render_layout_data(&mut self) -> RenderLayoutData {
        render_extract::render_layout_data(self)
    }

    pub fn status(&self) -> StatusSnapshot {
        status::snapshot(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
