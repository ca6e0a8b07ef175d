//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::grid::{CellState, Grid};
use crate::core::state::Simulation;
use crate::tui::event::InputSource;
use crate::tui::ui::RenderSurface;

/// Counts paints and remembers the generation each one showed.
#[derive(Default)]
pub struct RecordingSurface {
    pub painted_generations: Vec<u64>,
}

impl RecordingSurface {
    pub fn paints(&self) -> usize {
        self.painted_generations.len()
    }
}

impl RenderSurface for RecordingSurface {
    fn paint(&mut self, sim: &Simulation) -> io::Result<()> {
        self.painted_generations.push(sim.generation);
        Ok(())
    }
}

/// Replays a fixed list of events, then reports nothing forever.
pub struct ScriptedInput {
    events: VecDeque<Event>,
    fail: bool,
}

impl ScriptedInput {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
            fail: false,
        }
    }

    /// A source whose first poll returns an I/O error.
    pub fn failing() -> Self {
        Self {
            events: VecDeque::new(),
            fail: true,
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if self.fail {
            return Err(io::Error::other("scripted failure"));
        }
        match self.events.pop_front() {
            Some(event) => Ok(Some(event)),
            None => {
                std::thread::sleep(timeout.min(Duration::from_millis(10)));
                Ok(None)
            }
        }
    }
}

pub fn key(c: char) -> Event {
    key_event(KeyCode::Char(c))
}

pub fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Creates a randomized simulation with a fixed seed.
pub fn test_simulation(width: usize, height: usize) -> Simulation {
    let mut sim = Simulation::new(Grid::new(width, height).unwrap(), StdRng::seed_from_u64(42));
    sim.grid.randomize(&mut sim.rng);
    sim
}

/// Builds a grid from rows of text: `x` is alive, anything else dead.
/// Each string is one row (y), each character one column (x).
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut grid = Grid::new(width, height).unwrap();
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            if c == 'x' {
                grid.set_cell_at(x, y, CellState::Alive);
            }
        }
    }
    grid
}

/// Current states of every cell, for before/after comparisons.
pub fn snapshot(grid: &Grid) -> Vec<CellState> {
    grid.iter_cells().map(|(_, _, state)| state).collect()
}
