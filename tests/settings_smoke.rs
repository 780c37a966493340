use std::fs;

use wireworld_engine::domain::cell::CellState;
use wireworld_engine::domain::click_policy::PaintButton;
use wireworld_engine::SimulationSettings;

#[test]
fn shipped_settings_parse_to_the_defaults() {
    let json = fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/content/settings.json"))
        .expect("content/settings.json should exist");

    let settings = SimulationSettings::from_json(&json).expect("settings.json should parse");
    assert_eq!(settings, SimulationSettings::default());

    // The classic editing scheme
    let policy = settings.click_policy;
    assert_eq!(policy.next(PaintButton::Primary, CellState::Empty), CellState::Wire);
    assert_eq!(policy.next(PaintButton::Secondary, CellState::Head), CellState::Tail);

    // Manifest output is itself a valid bundle
    let again = SimulationSettings::from_json(&settings.to_json()).expect("manifest should parse");
    assert_eq!(again, settings);
}
