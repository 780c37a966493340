use crate::core::CellPos;
use crate::domain::cell::CellState;

use super::WireworldCore;

pub(super) fn set_cell(core: &mut WireworldCore, pos: CellPos, state: CellState) {
    core.automaton.set(pos, state, &mut core.viewport);
}

pub(super) fn hard_reset(core: &mut WireworldCore) {
    let dropped = core.automaton.len();
    core.automaton.clear_all(&mut core.viewport);
    core.last_step_ms = None;
    console_log!("wireworld: hard reset, {} cells dropped", dropped);
}

pub(super) fn soft_reset(core: &mut WireworldCore) -> usize {
    core.automaton.reset_tails_and_heads(&mut core.viewport)
}
