//! Paint-button state cycling
//!
//! Which state a click writes depends on the button and on what is already
//! under the pointer. The mapping is a plain table so hosts can pick their
//! own editing scheme through the settings bundle.

use super::cell::{CellState, STATE_COUNT};

/// Buttons that paint cells. Panning uses its own button and never reaches
/// the policy table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintButton {
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickPolicy {
    /// Indexed by current state id
    pub primary: [CellState; STATE_COUNT],
    pub secondary: [CellState; STATE_COUNT],
}

impl Default for ClickPolicy {
    fn default() -> Self {
        use CellState::*;
        Self {
            // empty -> wire, anything else is erased
            primary: [Wire, Empty, Empty, Empty],
            // empty/wire -> head -> tail -> erased
            secondary: [Head, Head, Tail, Empty],
        }
    }
}

impl ClickPolicy {
    pub fn next(&self, button: PaintButton, current: CellState) -> CellState {
        let row = match button {
            PaintButton::Primary => &self.primary,
            PaintButton::Secondary => &self.secondary,
        };
        row[current.index()]
    }

    pub fn from_names(primary: &[String], secondary: &[String]) -> Result<Self, String> {
        Ok(Self {
            primary: row_from_names("left", primary)?,
            secondary: row_from_names("right", secondary)?,
        })
    }

    pub fn row_names(row: &[CellState; STATE_COUNT]) -> Vec<String> {
        row.iter().map(|s| s.name().to_string()).collect()
    }
}

fn row_from_names(label: &str, names: &[String]) -> Result<[CellState; STATE_COUNT], String> {
    if names.len() != STATE_COUNT {
        return Err(format!(
            "clickPolicy.{} needs {} entries (empty, wire, head, tail), got {}",
            label,
            STATE_COUNT,
            names.len()
        ));
    }
    let mut row = [CellState::Empty; STATE_COUNT];
    for (slot, name) in row.iter_mut().zip(names.iter()) {
        *slot = CellState::from_name(name)?;
    }
    Ok(row)
}
