use crate::domain::settings::clamp_step_interval;

use super::{input, PerfTimer, WireworldCore};

/// Floor for `slow_down()` when the interval is zero, so doubling moves off it
pub(super) const MIN_SLOWED_INTERVAL_S: f32 = 1.0 / 64.0;

pub(super) fn step(core: &mut WireworldCore) {
    let perf_on = core.perf_enabled;
    let mut step_ms = 0.0;
    let report = PerfTimer::measure(perf_on, &mut step_ms, || {
        core.automaton.step(&mut core.viewport)
    });

    if perf_on {
        core.perf_stats.step_ms = step_ms;
        core.perf_stats
            .record_step(&report, core.automaton.len(), core.automaton.generation());
    }
}

/// Reconcile input, then step when running and the interval has elapsed.
/// Returns whether a step ran.
pub(super) fn update(core: &mut WireworldCore, now_ms: f64) -> bool {
    input::reconcile(core);

    if !core.running || !now_ms.is_finite() {
        return false;
    }

    let Some(last) = core.last_step_ms else {
        // First running frame only starts the clock
        core.last_step_ms = Some(now_ms);
        return false;
    };

    let interval_ms = core.step_interval_s as f64 * 1000.0;
    if now_ms - last < interval_ms {
        return false;
    }

    step(core);
    core.last_step_ms = Some(now_ms);
    true
}

pub(super) fn set_running(core: &mut WireworldCore, running: bool) {
    if core.running == running {
        return;
    }
    core.running = running;
    // Resuming measures the interval from the resume frame, not from
    // the last step before the pause
    core.last_step_ms = None;
}

pub(super) fn toggle_running(core: &mut WireworldCore) {
    let running = !core.running;
    set_running(core, running);
}

pub(super) fn set_speed(core: &mut WireworldCore, seconds: f32) -> f32 {
    core.step_interval_s = clamp_step_interval(seconds);
    core.step_interval_s
}

pub(super) fn speed_up(core: &mut WireworldCore) -> f32 {
    let halved = core.step_interval_s / 2.0;
    set_speed(core, halved)
}

pub(super) fn slow_down(core: &mut WireworldCore) -> f32 {
    let doubled = (core.step_interval_s * 2.0).max(MIN_SLOWED_INTERVAL_S);
    set_speed(core, doubled)
}
