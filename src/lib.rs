//! Wireworld Engine - sparse, unbounded Wireworld automaton in WASM
//!
//! Architecture:
//! - core/        - Vectors, coordinates, logging
//! - domain/      - Cell states, palette, click policy, settings
//! - spatial/     - Sparse cell map, viewport mirror and draw buffers
//! - systems/     - The automaton rule and stepping
//! - simulation/  - Orchestration and the wasm facade

#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool setup for the parallel step (browser hosts call this once)
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Wireworld WASM engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use core::{CellPos, Vec2};
pub use domain::cell::CellState;
pub use domain::settings::SimulationSettings;
pub use simulation::{World, WireworldCore};
pub use spatial::{CellSink, SparseViewport};
pub use systems::AutomatonEngine;

// Export state ids for JS
#[wasm_bindgen]
pub fn st_empty() -> u8 { domain::cell::ST_EMPTY }
#[wasm_bindgen]
pub fn st_wire() -> u8 { domain::cell::ST_WIRE }
#[wasm_bindgen]
pub fn st_head() -> u8 { domain::cell::ST_HEAD }
#[wasm_bindgen]
pub fn st_tail() -> u8 { domain::cell::ST_TAIL }
