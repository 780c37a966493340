use std::collections::HashMap;

use super::*;
use crate::domain::palette::Color;
use crate::spatial::{LINE_STRIDE, QUAD_STRIDE};

const W: u32 = 320;
const H: u32 = 240;

fn p(x: i32, y: i32) -> CellPos {
    CellPos::new(x, y)
}

fn px(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn assert_mirror(core: &WireworldCore) {
    let palette = core.automaton().palette();
    let expected: HashMap<CellPos, Color> = core
        .automaton()
        .cells()
        .iter()
        .filter_map(|(pos, state)| palette.color_of(*state).map(|c| (*pos, c)))
        .collect();
    let got: HashMap<CellPos, Color> = core.viewport().entries().collect();
    assert_eq!(got, expected);
}

#[test]
fn l_shaped_wire_carries_a_signal() {
    let mut core = WireworldCore::new(W, H);
    for pos in [p(0, 0), p(1, 0), p(2, 0), p(3, 0), p(3, 1), p(3, 2)] {
        core.set(pos, CellState::Wire);
    }
    core.set(p(0, 0), CellState::Head);

    core.step();
    assert_eq!(core.get(p(0, 0)), CellState::Tail);
    assert_eq!(core.get(p(1, 0)), CellState::Head);
    assert_eq!(core.get(p(2, 0)), CellState::Wire);

    core.step();
    assert_eq!(core.get(p(0, 0)), CellState::Wire);
    assert_eq!(core.get(p(1, 0)), CellState::Tail);
    assert_eq!(core.get(p(2, 0)), CellState::Head);
    assert_eq!(core.get(p(3, 0)), CellState::Wire);
    assert_eq!(core.get(p(3, 1)), CellState::Wire);
    assert_eq!(core.get(p(3, 2)), CellState::Wire);
    assert_eq!(core.live_cell_count(), 6);
    assert_eq!(core.generation(), 2);
    assert_mirror(&core);
}

#[test]
fn speed_is_clamped_and_scaled() {
    let mut core = WireworldCore::new(W, H);
    assert_eq!(core.speed(), 1.0);
    assert_eq!(core.set_speed(-5.0), 0.0);
    assert_eq!(core.set_speed(999.0), 10.0);

    core.set_speed(1.0);
    assert_eq!(core.speed_up(), 0.5);
    assert_eq!(core.slow_down(), 1.0);

    core.set_speed(8.0);
    assert_eq!(core.slow_down(), 10.0);

    // Doubling zero would stay at zero forever
    core.set_speed(0.0);
    assert_eq!(core.speed_up(), 0.0);
    assert!(core.slow_down() > 0.0);
}

#[test]
fn update_steps_once_per_interval_while_running() {
    let mut core = WireworldCore::new(W, H);
    core.set(p(0, 0), CellState::Head);

    // Paused: time passing does nothing
    assert!(!core.update_at(0.0));
    assert!(!core.update_at(5_000.0));
    assert_eq!(core.generation(), 0);

    core.toggle_running();
    assert!(!core.update_at(10_000.0));
    assert!(!core.update_at(10_500.0));
    assert!(core.update_at(11_000.0));
    assert_eq!(core.generation(), 1);
    assert!(!core.update_at(11_999.0));
    assert!(core.update_at(12_000.0));
    assert_eq!(core.generation(), 2);

    core.toggle_running();
    assert!(!core.update_at(20_000.0));
    assert_eq!(core.generation(), 2);
}

#[test]
fn zero_interval_steps_every_frame() {
    let mut core = WireworldCore::new(W, H);
    core.set_speed(0.0);
    core.set_running(true);
    assert!(!core.update_at(0.0));
    assert!(core.update_at(0.0));
    assert!(core.update_at(16.0));
    assert_eq!(core.generation(), 2);
}

#[test]
fn manual_step_ignores_pause() {
    let mut core = WireworldCore::new(W, H);
    core.set(p(0, 0), CellState::Head);
    assert!(!core.is_running());
    core.step();
    assert_eq!(core.get(p(0, 0)), CellState::Tail);
}

#[test]
fn drag_painting_touches_each_cell_once_per_press() {
    let mut core = WireworldCore::new(W, H);

    core.pointer_down(PointerButton::Left, px(8.0, 8.0));
    assert_eq!(core.get(p(0, 0)), CellState::Wire);

    // Same cell again: without the visited log this would erase it
    core.pointer_move(px(10.0, 12.0));
    core.update_at(0.0);
    assert_eq!(core.get(p(0, 0)), CellState::Wire);

    core.pointer_move(px(24.0, 8.0));
    core.update_at(0.0);
    assert_eq!(core.get(p(1, 0)), CellState::Wire);

    core.pointer_move(px(8.0, 8.0));
    core.update_at(0.0);
    assert_eq!(core.get(p(0, 0)), CellState::Wire);
    core.pointer_up(PointerButton::Left);

    // A fresh press starts a fresh log
    core.pointer_down(PointerButton::Left, px(8.0, 8.0));
    core.pointer_up(PointerButton::Left);
    assert_eq!(core.get(p(0, 0)), CellState::Empty);
    assert_eq!(core.live_cell_count(), 1);
    assert_mirror(&core);
}

#[test]
fn right_button_cycles_signal_states() {
    let mut core = WireworldCore::new(W, H);
    let click = |core: &mut WireworldCore| {
        core.pointer_down(PointerButton::Right, px(40.0, 40.0));
        core.pointer_up(PointerButton::Right);
        core.get(p(2, 2))
    };
    assert_eq!(click(&mut core), CellState::Head);
    assert_eq!(click(&mut core), CellState::Tail);
    assert_eq!(click(&mut core), CellState::Empty);

    core.set(p(2, 2), CellState::Wire);
    assert_eq!(click(&mut core), CellState::Head);
}

#[test]
fn moves_without_a_press_do_not_paint() {
    let mut core = WireworldCore::new(W, H);
    core.pointer_move(px(50.0, 50.0));
    core.update_at(0.0);
    assert_eq!(core.live_cell_count(), 0);

    // Releasing a button that never went down is harmless
    core.pointer_up(PointerButton::Left);
    assert_eq!(core.live_cell_count(), 0);
}

#[test]
fn presses_outside_the_window_are_ignored() {
    let mut core = WireworldCore::new(W, H);
    core.pointer_down(PointerButton::Left, px(-1.0, 5.0));
    core.pointer_down(PointerButton::Left, px(W as f32, 5.0));
    core.pointer_down(PointerButton::Right, px(5.0, H as f32 + 3.0));
    core.pointer_down(PointerButton::Middle, px(-10.0, -10.0));
    assert_eq!(core.live_cell_count(), 0);

    core.pointer_move(px(50.0, 50.0));
    core.update_at(0.0);
    assert_eq!(core.live_cell_count(), 0);
    assert_eq!(core.origin(), Vec2::zero());
}

#[test]
fn painting_pauses_while_the_cursor_is_off_window() {
    let mut core = WireworldCore::new(W, H);
    core.pointer_down(PointerButton::Left, px(8.0, 8.0));
    core.pointer_move(px(-20.0, 8.0));
    core.update_at(0.0);
    assert_eq!(core.live_cell_count(), 1);
    core.pointer_up(PointerButton::Left);
}

#[test]
fn panning_keeps_the_grabbed_point_under_the_cursor() {
    let mut core = WireworldCore::new(W, H);
    core.set(p(3, 3), CellState::Wire);

    let grab = px(100.0, 100.0);
    core.pointer_down(PointerButton::Middle, grab);
    let held = core.screen_to_world(grab);

    let cursor = px(140.0, 68.0);
    core.pointer_move(cursor);
    core.update_at(0.0);
    assert_eq!(core.origin(), Vec2::new(-2.5, 2.0));
    assert_eq!(core.screen_to_world(cursor), held);

    // Zooming mid-drag keeps the anchor from then on
    core.set_cell_size(32);
    let held = core.screen_to_world(cursor);
    let cursor = px(76.0, 100.0);
    core.pointer_move(cursor);
    core.update_at(0.0);
    assert_eq!(core.screen_to_world(cursor), held);

    core.pointer_up(PointerButton::Middle);
    let origin = core.origin();
    core.pointer_move(px(0.0, 0.0));
    core.update_at(0.0);
    assert_eq!(core.origin(), origin);

    // Panning never touches cells
    assert_eq!(core.live_cell_count(), 1);
    assert_eq!(core.get(p(3, 3)), CellState::Wire);
}

#[test]
fn one_gesture_at_a_time() {
    let mut core = WireworldCore::new(W, H);
    core.pointer_down(PointerButton::Middle, px(100.0, 100.0));
    core.pointer_down(PointerButton::Left, px(8.0, 8.0));
    assert_eq!(core.live_cell_count(), 0);

    // The left release does not end the pan
    core.pointer_up(PointerButton::Left);
    core.pointer_move(px(116.0, 100.0));
    core.update_at(0.0);
    assert_eq!(core.origin(), Vec2::new(-1.0, 0.0));
    core.pointer_up(PointerButton::Middle);
}

#[test]
fn scroll_zooms_one_step_within_limits() {
    let mut core = WireworldCore::new(W, H);
    assert_eq!(core.scroll(1.0), 17);
    assert_eq!(core.scroll(-3.0), 16);
    assert_eq!(core.scroll(0.0), 16);

    core.set_cell_size(1);
    assert_eq!(core.scroll(-1.0), 1);
    core.set_cell_size(500);
    assert_eq!(core.scroll(1.0), 500);
}

#[test]
fn keyboard_shortcuts() {
    let mut core = WireworldCore::new(W, H);
    core.set(p(0, 0), CellState::Wire);
    core.set(p(1, 0), CellState::Head);

    core.key_down(Key::Space, false);
    assert!(core.is_running());
    core.key_down(Key::Space, false);
    assert!(!core.is_running());

    core.key_down(Key::Equal, false);
    assert_eq!(core.speed(), 0.5);
    core.key_down(Key::Minus, false);
    assert_eq!(core.speed(), 1.0);

    core.key_down(Key::S, false);
    assert_eq!(core.generation(), 1);
    assert_eq!(core.get(p(0, 0)), CellState::Head);

    core.key_down(Key::R, false);
    assert_eq!(core.automaton().count(CellState::Head), 0);
    assert_eq!(core.automaton().count(CellState::Tail), 0);
    assert_eq!(core.live_cell_count(), 2);

    core.key_down(Key::R, true);
    assert_eq!(core.live_cell_count(), 0);
    assert!(core.viewport().is_empty());
}

#[test]
fn key_codes_decode() {
    assert_eq!(Key::from_code("Space"), Some(Key::Space));
    assert_eq!(Key::from_code("="), Some(Key::Equal));
    assert_eq!(Key::from_code("Minus"), Some(Key::Minus));
    assert_eq!(Key::from_code("KeyR"), Some(Key::R));
    assert_eq!(Key::from_code("s"), Some(Key::S));
    assert_eq!(Key::from_code("KeyQ"), None);

    assert_eq!(PointerButton::from_id(0), Some(PointerButton::Left));
    assert_eq!(PointerButton::from_id(1), Some(PointerButton::Middle));
    assert_eq!(PointerButton::from_id(2), Some(PointerButton::Right));
    assert_eq!(PointerButton::from_id(3), None);
}

#[test]
fn resets_keep_automaton_and_viewport_in_sync() {
    let mut core = WireworldCore::new(W, H);
    for x in 0..5 {
        core.set(p(x, 0), CellState::Wire);
    }
    core.set(p(0, 0), CellState::Head);
    core.step();
    core.step();
    assert_mirror(&core);

    assert_eq!(core.soft_reset(), 2);
    assert_eq!(core.automaton().count(CellState::Wire), 5);
    assert_mirror(&core);

    core.hard_reset();
    assert_eq!(core.live_cell_count(), 0);
    assert_eq!(core.generation(), 0);
    assert_mirror(&core);
}

#[test]
fn rejected_settings_change_nothing() {
    let mut core = WireworldCore::new(W, H);
    core.set_speed(3.0);
    let before = core.settings_manifest_json();

    assert!(core.load_settings_json(r#"{"maxCellSize": 9000}"#).is_err());
    assert!(core.load_settings_json("{").is_err());
    assert_eq!(core.settings_manifest_json(), before);
    assert_eq!(core.speed(), 3.0);
}

#[test]
fn settings_recolor_and_rezoom() {
    let mut core = WireworldCore::new(W, H);
    core.set(p(1, 1), CellState::Wire);

    core.load_settings_json(
        r##"{
            "cellSize": 40,
            "maxCellSize": 32,
            "stepIntervalSeconds": 0.25,
            "palette": { "wire": "#336699" }
        }"##,
    )
    .unwrap();

    assert_eq!(core.cell_size(), 32);
    assert_eq!(core.scroll(1.0), 32);
    assert_eq!(core.speed(), 0.25);
    assert_eq!(
        core.viewport().entry(p(1, 1)),
        Some(crate::domain::palette::rgba(0x33, 0x66, 0x99, 255))
    );
    assert_mirror(&core);

    let round = SimulationSettings::from_json(&core.settings_manifest_json()).unwrap();
    assert_eq!(&round, core.settings());
}

#[test]
fn render_layout_describes_visible_cells() {
    let mut core = WireworldCore::new(W, H);
    core.enable_perf_metrics(true);
    core.set(p(0, 0), CellState::Wire);
    core.set(p(1, 0), CellState::Head);
    core.set(p(10_000, 0), CellState::Wire);

    let data = core.render_layout_data();
    assert_eq!(data.quad_count, 2);
    assert_eq!(data.quad_len_floats, 2 * QUAD_STRIDE);
    assert!(data.line_count > 0);
    assert_eq!(data.line_len_floats, data.line_count * LINE_STRIDE);
    assert_eq!(data.line_scale, 16.0);

    let stats = core.get_perf_stats();
    assert_eq!(stats.quads_emitted(), 2);
    assert_eq!(stats.lattice_rebuilds(), 1);
    assert!(stats.render_ms() >= 0.0);
}

#[test]
fn perf_stats_follow_steps_only_when_enabled() {
    let mut core = WireworldCore::new(W, H);
    core.set(p(0, 0), CellState::Wire);
    core.set(p(1, 0), CellState::Head);

    core.step();
    assert_eq!(core.get_perf_stats(), PerfStats::default());

    core.enable_perf_metrics(true);
    core.step();
    let stats = core.get_perf_stats();
    assert_eq!(stats.cells_processed(), 2);
    assert_eq!(stats.cells_changed(), 2);
    assert_eq!(stats.live_cells(), 2);
    assert_eq!(stats.generation(), 2);
    assert!(stats.step_ms() >= 0.0);

    core.enable_perf_metrics(false);
    assert_eq!(core.get_perf_stats(), PerfStats::default());
}

#[test]
fn status_reports_hover_and_run_state() {
    let mut core = WireworldCore::new(W, H);
    core.set(p(0, 0), CellState::Wire);
    core.pointer_move(px(33.0, 17.0));

    let status = core.status();
    assert!(status.paused());
    assert_eq!(status.live_cells(), 1);
    assert_eq!((status.hovered_x(), status.hovered_y()), (2, 1));
    assert_eq!(status.cell_size(), 16);
    assert_eq!(status.summary(), "Paused | 1.00s/step | 1 cells | (2, 1)");

    core.set_origin(Vec2::new(-4.0, -4.0));
    assert_eq!(core.hovered_cell(), p(-2, -3));
}
