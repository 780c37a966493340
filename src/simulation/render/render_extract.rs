use crate::spatial::{LINE_STRIDE, QUAD_STRIDE};

use super::{PerfTimer, RenderLayoutData, WireworldCore};

/// Refresh the draw buffers and describe where they live.
/// Pointers stay valid until the next call that mutates the viewport.
pub(super) fn render_layout_data(core: &mut WireworldCore) -> RenderLayoutData {
    let perf_on = core.perf_enabled;
    let timer = if perf_on { Some(PerfTimer::start()) } else { None };

    let frame = core.viewport.render();
    let data = RenderLayoutData {
        line_ptr: frame.lines.as_ptr(),
        line_len_floats: frame.lines.len(),
        line_count: frame.lines.len() / LINE_STRIDE,
        line_tx: frame.line_transform.tx,
        line_ty: frame.line_transform.ty,
        line_scale: frame.line_transform.scale,
        quad_ptr: frame.quad_positions.as_ptr(),
        quad_len_floats: frame.quad_positions.len(),
        quad_color_ptr: frame.quad_colors.as_ptr(),
        quad_count: frame.quad_colors.len(),
    };
    debug_assert_eq!(data.quad_len_floats, data.quad_count * QUAD_STRIDE);

    if let Some(timer) = timer {
        core.perf_stats.render_ms = timer.elapsed_ms();
        core.perf_stats.quads_emitted = data.quad_count as u32;
        core.perf_stats.lines = data.line_count as u32;
        core.perf_stats.lattice_rebuilds = core.viewport.lattice_rebuilds();
    }
    data
}
