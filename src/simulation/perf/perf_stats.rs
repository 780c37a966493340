use wasm_bindgen::prelude::*;

use crate::systems::StepReport;

/// Counters for the last step and the last render.
/// Timings are only filled while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) cells_processed: u32,
    pub(super) cells_changed: u32,
    pub(super) heads: u32,
    pub(super) tails: u32,
    pub(super) wires: u32,
    pub(super) live_cells: u32,
    pub(super) quads_emitted: u32,
    pub(super) lines: u32,
    pub(super) lattice_rebuilds: u32,
    pub(super) generation: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_step(&mut self, report: &StepReport, live_cells: usize, generation: u64) {
        self.cells_processed = report.processed;
        self.cells_changed = report.changed;
        self.heads = report.heads;
        self.tails = report.tails;
        self.wires = report.wires;
        self.live_cells = live_cells as u32;
        self.generation = generation;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }
    #[wasm_bindgen(getter)]
    pub fn cells_changed(&self) -> u32 { self.cells_changed }
    #[wasm_bindgen(getter)]
    pub fn heads(&self) -> u32 { self.heads }
    #[wasm_bindgen(getter)]
    pub fn tails(&self) -> u32 { self.tails }
    #[wasm_bindgen(getter)]
    pub fn wires(&self) -> u32 { self.wires }
    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.live_cells }
    #[wasm_bindgen(getter)]
    pub fn quads_emitted(&self) -> u32 { self.quads_emitted }
    #[wasm_bindgen(getter)]
    pub fn lines(&self) -> u32 { self.lines }
    #[wasm_bindgen(getter)]
    pub fn lattice_rebuilds(&self) -> u32 { self.lattice_rebuilds }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
}
