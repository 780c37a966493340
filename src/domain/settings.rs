//! Simulation settings bundle
//!
//! Hosts ship a small JSON document (camelCase keys, every field optional)
//! to tune zoom limits, step interval, colors and the click policy.
//! Anything missing falls back to the defaults below.

use serde::{Deserialize, Serialize};

use super::click_policy::ClickPolicy;
use super::palette::{self, Palette};

pub const DEFAULT_CELL_SIZE: u32 = 16;
pub const MIN_CELL_SIZE: u32 = 1;
pub const MAX_CELL_SIZE: u32 = 500;

pub const DEFAULT_STEP_INTERVAL_S: f32 = 1.0;
pub const MIN_STEP_INTERVAL_S: f32 = 0.0;
pub const MAX_STEP_INTERVAL_S: f32 = 10.0;

/// Extra lattice lines generated past each window edge (lattice units)
pub const DEFAULT_LATTICE_MARGIN: u32 = 10;
/// Cells kept in the quad set past each window edge
pub const DEFAULT_CELL_MARGIN: u32 = 5;
/// Upper bound for both margins
pub const MAX_MARGIN: u32 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationSettings {
    pub cell_size: u32,
    pub min_cell_size: u32,
    pub max_cell_size: u32,
    pub step_interval_s: f32,
    pub lattice_margin: u32,
    pub cell_margin: u32,
    pub palette: Palette,
    pub click_policy: ClickPolicy,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            min_cell_size: MIN_CELL_SIZE,
            max_cell_size: MAX_CELL_SIZE,
            step_interval_s: DEFAULT_STEP_INTERVAL_S,
            lattice_margin: DEFAULT_LATTICE_MARGIN,
            cell_margin: DEFAULT_CELL_MARGIN,
            palette: Palette::default(),
            click_policy: ClickPolicy::default(),
        }
    }
}

/// Clamp a step interval into the supported range; NaN becomes the minimum
pub fn clamp_step_interval(seconds: f32) -> f32 {
    if seconds.is_nan() {
        return MIN_STEP_INTERVAL_S;
    }
    seconds.clamp(MIN_STEP_INTERVAL_S, MAX_STEP_INTERVAL_S)
}

impl SimulationSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let bundle: SettingsBundle = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    pub fn to_json(&self) -> String {
        let out = SettingsBundle {
            format_version: Some(1),
            cell_size: Some(self.cell_size),
            min_cell_size: Some(self.min_cell_size),
            max_cell_size: Some(self.max_cell_size),
            step_interval_seconds: Some(self.step_interval_s),
            lattice_margin: Some(self.lattice_margin),
            cell_margin: Some(self.cell_margin),
            palette: Some(PaletteBundle {
                wire: Some(palette::to_hex(self.palette.wire)),
                head: Some(palette::to_hex(self.palette.head)),
                tail: Some(palette::to_hex(self.palette.tail)),
                line: Some(palette::to_hex(self.palette.line)),
                background: Some(palette::to_hex(self.palette.background)),
            }),
            click_policy: Some(ClickPolicyBundle {
                left: ClickPolicy::row_names(&self.click_policy.primary),
                right: ClickPolicy::row_names(&self.click_policy.secondary),
            }),
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_bundle(bundle: SettingsBundle) -> Result<Self, String> {
        let defaults = SimulationSettings::default();

        if let Some(version) = bundle.format_version {
            if version != 1 {
                return Err(format!("unsupported settings formatVersion: {}", version));
            }
        }

        let min_cell_size = bundle.min_cell_size.unwrap_or(defaults.min_cell_size);
        let max_cell_size = bundle.max_cell_size.unwrap_or(defaults.max_cell_size);
        if min_cell_size < MIN_CELL_SIZE || max_cell_size > MAX_CELL_SIZE || min_cell_size > max_cell_size {
            return Err(format!(
                "cell size range must satisfy {} <= min <= max <= {}: got min={} max={}",
                MIN_CELL_SIZE, MAX_CELL_SIZE, min_cell_size, max_cell_size
            ));
        }

        let cell_size = bundle
            .cell_size
            .unwrap_or(defaults.cell_size)
            .clamp(min_cell_size, max_cell_size);

        let lattice_margin = bundle.lattice_margin.unwrap_or(defaults.lattice_margin);
        let cell_margin = bundle.cell_margin.unwrap_or(defaults.cell_margin);
        if lattice_margin > MAX_MARGIN || cell_margin > MAX_MARGIN {
            return Err(format!(
                "latticeMargin and cellMargin must be <= {}: got {} and {}",
                MAX_MARGIN, lattice_margin, cell_margin
            ));
        }

        let step_interval_s = match bundle.step_interval_seconds {
            Some(v) if !v.is_finite() => {
                return Err(format!("stepIntervalSeconds must be finite: {}", v));
            }
            Some(v) => clamp_step_interval(v),
            None => defaults.step_interval_s,
        };

        let palette = match bundle.palette {
            Some(p) => Palette {
                wire: color_or(p.wire.as_deref(), defaults.palette.wire)?,
                head: color_or(p.head.as_deref(), defaults.palette.head)?,
                tail: color_or(p.tail.as_deref(), defaults.palette.tail)?,
                line: color_or(p.line.as_deref(), defaults.palette.line)?,
                background: color_or(p.background.as_deref(), defaults.palette.background)?,
            },
            None => defaults.palette,
        };

        let click_policy = match bundle.click_policy {
            Some(c) => ClickPolicy::from_names(&c.left, &c.right)?,
            None => defaults.click_policy,
        };

        Ok(Self {
            cell_size,
            min_cell_size,
            max_cell_size,
            step_interval_s,
            lattice_margin,
            cell_margin,
            palette,
            click_policy,
        })
    }
}

fn color_or(value: Option<&str>, fallback: palette::Color) -> Result<palette::Color, String> {
    match value {
        Some(s) => palette::parse_hex(s),
        None => Ok(fallback),
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SettingsBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format_version: Option<u32>,
    #[serde(default)]
    cell_size: Option<u32>,
    #[serde(default)]
    min_cell_size: Option<u32>,
    #[serde(default)]
    max_cell_size: Option<u32>,
    #[serde(default)]
    step_interval_seconds: Option<f32>,
    #[serde(default)]
    lattice_margin: Option<u32>,
    #[serde(default)]
    cell_margin: Option<u32>,
    #[serde(default)]
    palette: Option<PaletteBundle>,
    #[serde(default)]
    click_policy: Option<ClickPolicyBundle>,
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PaletteBundle {
    #[serde(default)]
    wire: Option<String>,
    #[serde(default)]
    head: Option<String>,
    #[serde(default)]
    tail: Option<String>,
    #[serde(default)]
    line: Option<String>,
    #[serde(default)]
    background: Option<String>,
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ClickPolicyBundle {
    left: Vec<String>,
    right: Vec<String>,
}
