//! # Grid
//!
//! The cell matrix and the cursor position. Pure data plus accessors.
//!
//! ```text
//! Grid
//! ├── width, height: usize   // fixed at construction, both > 0
//! ├── cells: Vec<Cell>       // indexed [x][y], stored column by column
//! └── selected: Coord        // cursor, always in bounds
//! ```
//!
//! The cursor can only move through [`Grid::select`], which refuses
//! coordinates outside the grid. Higher-level movement lives in
//! [`crate::core::cursor`].

use rand::Rng;
use std::fmt;

/// Binary automaton state of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// `1` → Alive, `0` → Dead, anything else is not a cell state.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(CellState::Dead),
            1 => Some(CellState::Alive),
            _ => None,
        }
    }

    pub fn as_digit(self) -> u8 {
        match self {
            CellState::Dead => 0,
            CellState::Alive => 1,
        }
    }
}

/// A cell's current state plus scratch space for the next generation.
///
/// `next` only has meaning while [`crate::core::engine::update`] is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub current: CellState,
    pub next: CellState,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Largest accepted width or height. The board is drawn into a terminal,
/// whose coordinates are `u16`.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

#[derive(Debug, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was zero.
    EmptyDimension { width: usize, height: usize },
    /// A side exceeds [`MAX_DIMENSION`] or the cell count overflows `usize`.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyDimension { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            GridError::TooLarge { width, height } => write!(
                f,
                "grid {width}x{height} is too large, each side must be at most {MAX_DIMENSION}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    selected: Coord,
}

impl Grid {
    /// Create a grid with every cell dead and the cursor at (0, 0).
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension { width, height });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(GridError::TooLarge { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            selected: Coord::default(),
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Option<CellState> {
        self.contains(x, y)
            .then(|| self.cells[self.index(x, y)].current)
    }

    /// Returns `false` without touching the grid when (x, y) is out of bounds.
    pub fn set_cell_at(&mut self, x: usize, y: usize, state: CellState) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx].current = state;
        true
    }

    /// Overwrite every cell with an independent fair coin flip.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            cell.current = if rng.random_bool(0.5) {
                CellState::Alive
            } else {
                CellState::Dead
            };
        }
    }

    pub const fn selected(&self) -> Coord {
        self.selected
    }

    /// Move the cursor to `coord`. Out-of-range coordinates are refused.
    pub fn select(&mut self, coord: Coord) -> bool {
        if !self.contains(coord.x, coord.y) {
            return false;
        }
        self.selected = coord;
        true
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.current.is_alive()).count()
    }

    /// All cells as `(x, y, state)`, column by column.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / self.height, i % self.height, cell.current))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub(crate) fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }
}
