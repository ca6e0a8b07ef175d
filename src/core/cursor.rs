//! Cursor navigation and selected-cell mutation.
//!
//! Every move is clamped: a step that would leave the grid leaves the cursor
//! where it is.

use super::engine::alive_neighbors;
use super::grid::{CellState, Coord, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Step the cursor one cell in `direction`.
///
/// Returns `true` if the cursor moved, `false` if already at that edge.
pub fn move_cursor(grid: &mut Grid, direction: Direction) -> bool {
    let Coord { x, y } = grid.selected();
    let target = match direction {
        Direction::Up => y.checked_sub(1).map(|y| Coord::new(x, y)),
        Direction::Down => Some(Coord::new(x, y + 1)),
        Direction::Left => x.checked_sub(1).map(|x| Coord::new(x, y)),
        Direction::Right => Some(Coord::new(x + 1, y)),
    };
    target.is_some_and(|coord| grid.select(coord))
}

pub fn move_up(grid: &mut Grid) -> bool {
    move_cursor(grid, Direction::Up)
}

pub fn move_down(grid: &mut Grid) -> bool {
    move_cursor(grid, Direction::Down)
}

pub fn move_left(grid: &mut Grid) -> bool {
    move_cursor(grid, Direction::Left)
}

pub fn move_right(grid: &mut Grid) -> bool {
    move_cursor(grid, Direction::Right)
}

/// Write `state` into the cell under the cursor.
pub fn set_selected_cell(grid: &mut Grid, state: CellState) {
    let Coord { x, y } = grid.selected();
    grid.set_cell_at(x, y, state);
}

/// Live-neighbor count of the cell under the cursor.
pub fn selected_neighbors(grid: &Grid) -> u8 {
    let Coord { x, y } = grid.selected();
    alive_neighbors(grid, x, y)
}
