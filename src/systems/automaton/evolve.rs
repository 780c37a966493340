//! Snapshot evaluation of one generation
//!
//! Every next state is read from the untouched current generation and
//! written into a fresh map. Nothing here mutates the snapshot, so the
//! result cannot depend on iteration order (or on how rayon splits work).

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::CellPos;
use crate::domain::cell::CellState;
use crate::spatial::CellMap;

/// Below this many cells the rayon split costs more than it saves
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 4096;

#[inline]
pub(crate) fn next_state_at(snapshot: &CellMap, pos: CellPos, state: CellState) -> CellState {
    match state {
        // Only wires look at their neighborhood
        CellState::Wire => state.next(snapshot.head_neighbors(pos)),
        _ => state.next(0),
    }
}

/// Next generation of every live cell in `snapshot`
pub fn evolve(snapshot: &CellMap) -> CellMap {
    #[cfg(feature = "parallel")]
    {
        if snapshot.len() >= PARALLEL_THRESHOLD {
            let next: HashMap<CellPos, CellState> = snapshot
                .raw()
                .par_iter()
                .map(|(&pos, &state)| (pos, next_state_at(snapshot, pos, state)))
                .collect();
            return CellMap::from_raw(next);
        }
    }

    evolve_in_order(snapshot, snapshot.positions())
}

/// Sequential evaluation visiting cells in the given order. Positions not
/// alive in `snapshot` are skipped.
pub fn evolve_in_order<I>(snapshot: &CellMap, order: I) -> CellMap
where
    I: IntoIterator<Item = CellPos>,
{
    let mut next = HashMap::with_capacity(snapshot.len());
    for pos in order {
        let state = snapshot.get(pos);
        if state.is_live() {
            next.insert(pos, next_state_at(snapshot, pos, state));
        }
    }
    CellMap::from_raw(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_board(n: i32) -> CellMap {
        (0..n)
            .map(|i| {
                let state = match i * 7 % 5 {
                    3 => CellState::Head,
                    4 => CellState::Tail,
                    _ => CellState::Wire,
                };
                (CellPos::new(i % 100, i / 100), state)
            })
            .collect()
    }

    #[test]
    fn large_board_matches_sequential_order() {
        let board = mixed_board(6000);
        assert!(board.len() >= 4096);

        let next = evolve(&board);
        assert_eq!(next, evolve_in_order(&board, board.positions()));
        assert_eq!(next.len(), board.len());
        assert_eq!(evolve(&next), evolve_in_order(&next, next.positions()));
    }

    #[test]
    fn reversed_order_gives_same_generation() {
        let board = mixed_board(500);
        let mut order: Vec<CellPos> = board.positions().collect();
        order.reverse();
        assert_eq!(evolve_in_order(&board, order), evolve(&board));
    }
}
