//! # Automaton Engine
//!
//! Neighbor counting and the B3/S23 generational update.
//!
//! The update is two-pass: every cell's `next` state is computed from the
//! current generation before any `current` state is overwritten. Positions
//! outside the grid contribute nothing (no toroidal wrapping).

use super::grid::{CellState, Grid};

/// Number of live cells among the 8 positions around (x, y) that lie inside the grid.
pub fn alive_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    (-1isize..=1)
        .flat_map(|dx| (-1isize..=1).map(move |dy| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter_map(|(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            grid.cell_at(nx, ny)
        })
        .filter(|state| state.is_alive())
        .count() as u8
}

/// Conway's rule: survive on 2 or 3, birth on exactly 3, otherwise dead.
pub fn next_state(current: CellState, neighbors: u8) -> CellState {
    match (current, neighbors) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Advance the grid by one generation in place.
pub fn update(grid: &mut Grid) {
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let neighbors = alive_neighbors(grid, x, y);
            let cell = grid.cell_mut(x, y);
            cell.next = next_state(cell.current, neighbors);
        }
    }

    for cell in grid.cells_mut() {
        cell.current = cell.next;
    }
}
