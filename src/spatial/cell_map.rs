//! Sparse cell storage
//!
//! Only live cells are stored, keyed by their integer coordinate. A lookup
//! that misses is the empty state; there is no sentinel cell.

use std::collections::hash_map;
use std::collections::HashMap;

use crate::core::CellPos;
use crate::domain::cell::CellState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellMap {
    cells: HashMap<CellPos, CellState>,
}

impl CellMap {
    pub fn new() -> Self {
        Self { cells: HashMap::new() }
    }

    #[inline]
    pub fn get(&self, pos: CellPos) -> CellState {
        self.cells.get(&pos).copied().unwrap_or(CellState::Empty)
    }

    #[inline]
    pub fn is_alive(&self, pos: CellPos) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Store `state` at `pos`; `Empty` removes. Returns the previous state.
    pub fn set(&mut self, pos: CellPos, state: CellState) -> CellState {
        let previous = if state.is_live() {
            self.cells.insert(pos, state)
        } else {
            self.cells.remove(&pos)
        };
        previous.unwrap_or(CellState::Empty)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, CellPos, CellState> {
        self.cells.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.cells.keys().copied()
    }

    pub fn count(&self, state: CellState) -> usize {
        if !state.is_live() {
            return 0;
        }
        self.cells.values().filter(|s| **s == state).count()
    }

    /// Number of Moore neighbors of `pos` that are heads
    #[inline]
    pub fn head_neighbors(&self, pos: CellPos) -> u8 {
        pos.neighbors()
            .filter(|n| self.get(*n) == CellState::Head)
            .count() as u8
    }

    pub(crate) fn raw(&self) -> &HashMap<CellPos, CellState> {
        &self.cells
    }

    /// Wrap a map that already holds only live states
    pub(crate) fn from_raw(cells: HashMap<CellPos, CellState>) -> Self {
        debug_assert!(cells.values().all(|s| s.is_live()));
        Self { cells }
    }
}

impl FromIterator<(CellPos, CellState)> for CellMap {
    fn from_iter<I: IntoIterator<Item = (CellPos, CellState)>>(iter: I) -> Self {
        let mut map = CellMap::new();
        for (pos, state) in iter {
            map.set(pos, state);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_absence() {
        let mut map = CellMap::new();
        let p = CellPos::new(-3, 9);
        assert_eq!(map.get(p), CellState::Empty);
        assert!(!map.is_alive(p));

        assert_eq!(map.set(p, CellState::Wire), CellState::Empty);
        assert_eq!(map.set(p, CellState::Head), CellState::Wire);
        assert_eq!(map.len(), 1);

        assert_eq!(map.set(p, CellState::Empty), CellState::Head);
        assert!(map.is_empty());
        assert_eq!(map.set(p, CellState::Empty), CellState::Empty);
    }

    #[test]
    fn counts_heads_around_a_cell() {
        let map: CellMap = [
            (CellPos::new(0, 0), CellState::Wire),
            (CellPos::new(-1, -1), CellState::Head),
            (CellPos::new(1, 0), CellState::Head),
            (CellPos::new(0, 1), CellState::Tail),
            (CellPos::new(2, 0), CellState::Head),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.head_neighbors(CellPos::new(0, 0)), 2);
        assert_eq!(map.count(CellState::Head), 3);
        assert_eq!(map.count(CellState::Empty), 0);
    }

    #[test]
    fn extreme_coordinates_are_valid_keys() {
        let mut map = CellMap::new();
        let p = CellPos::new(i32::MAX, i32::MIN);
        map.set(p, CellState::Head);
        assert!(map.is_alive(p));
        assert_eq!(map.head_neighbors(CellPos::new(i32::MAX - 1, i32::MIN)), 1);
    }

    #[test]
    fn opposite_edges_are_not_adjacent() {
        let mut map = CellMap::new();
        map.set(CellPos::new(i32::MIN, 0), CellState::Head);
        map.set(CellPos::new(i32::MIN, i32::MAX), CellState::Head);
        assert_eq!(map.head_neighbors(CellPos::new(i32::MAX, 0)), 0);
        assert_eq!(map.head_neighbors(CellPos::new(i32::MIN, i32::MIN)), 0);
        assert_eq!(map.head_neighbors(CellPos::new(i32::MIN + 1, 1)), 1);
    }
}
