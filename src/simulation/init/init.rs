use crate::domain::settings::SimulationSettings;
use crate::spatial::SparseViewport;
use crate::systems::AutomatonEngine;

use super::frame_clock::FrameClock;
use super::input::InputState;
use super::perf_stats::PerfStats;
use super::WireworldCore;

pub(super) fn create_core(width: u32, height: u32, settings: SimulationSettings) -> WireworldCore {
    let mut viewport = SparseViewport::new(width, height);
    viewport.set_cell_size_limits(settings.min_cell_size, settings.max_cell_size);
    viewport.set_cell_size(settings.cell_size as i64);
    viewport.set_margins(settings.lattice_margin, settings.cell_margin);

    console_log!(
        "wireworld: {}x{} window, cell size {}, step every {}s",
        width,
        height,
        viewport.cell_size(),
        settings.step_interval_s
    );

    WireworldCore {
        automaton: AutomatonEngine::new(settings.palette),
        viewport,
        running: false,
        step_interval_s: settings.step_interval_s,
        last_step_ms: None,
        clock: FrameClock::new(),
        input: InputState::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        settings,
    }
}
