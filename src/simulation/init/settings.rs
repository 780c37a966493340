use crate::domain::settings::{clamp_step_interval, SimulationSettings};

use super::perf_stats::PerfStats;
use super::WireworldCore;

pub(super) fn enable_perf_metrics(core: &mut WireworldCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &WireworldCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn load_settings_json(core: &mut WireworldCore, json: &str) -> Result<(), String> {
    match SimulationSettings::from_json(json) {
        Ok(settings) => {
            apply_settings(core, settings);
            Ok(())
        }
        Err(e) => {
            console_log!("wireworld: settings rejected: {}", e);
            Err(e)
        }
    }
}

/// Swap in a new settings bundle. Cells survive; view limits, margins,
/// colors and the step interval follow the new values.
pub(super) fn apply_settings(core: &mut WireworldCore, settings: SimulationSettings) {
    core.viewport
        .set_cell_size_limits(settings.min_cell_size, settings.max_cell_size);
    core.viewport.set_cell_size(settings.cell_size as i64);
    core.viewport
        .set_margins(settings.lattice_margin, settings.cell_margin);

    if settings.palette != *core.automaton.palette() {
        core.automaton
            .set_palette(settings.palette, &mut core.viewport);
    }

    core.step_interval_s = clamp_step_interval(settings.step_interval_s);
    console_log!(
        "wireworld: settings applied (cell size {}, step every {}s)",
        core.viewport.cell_size(),
        core.step_interval_s
    );
    core.settings = settings;
}
