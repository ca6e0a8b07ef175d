//! # Actions
//!
//! Everything that can happen in the simulation becomes an `Action`.
//! User presses `l`? That's `Action::MoveCursor(Direction::Right)`.
//! Timer fires? That's `Action::Tick`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an [`Effect`] telling the event loop what to do next.
//! No I/O here.
//!
//! ```text
//! Simulation + Action  →  update()  →  Effect
//! ```

use log::debug;

use crate::core::cursor::{self, Direction};
use crate::core::engine;
use crate::core::grid::CellState;
use crate::core::state::Simulation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveCursor(Direction),
    Randomize,
    SetSelected(CellState),
    TogglePause,
    /// Timer fired. Ignored while paused.
    Tick,
    /// Nothing changed but the screen needs repainting (e.g. terminal resize).
    Redraw,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

pub fn update(sim: &mut Simulation, action: Action) -> Effect {
    match action {
        Action::MoveCursor(direction) => {
            cursor::move_cursor(&mut sim.grid, direction);
            Effect::Redraw
        }
        Action::Randomize => {
            sim.grid.randomize(&mut sim.rng);
            sim.generation = 0;
            Effect::Redraw
        }
        Action::SetSelected(state) => {
            cursor::set_selected_cell(&mut sim.grid, state);
            Effect::Redraw
        }
        Action::TogglePause => {
            sim.paused = !sim.paused;
            debug!("Paused: {}", sim.paused);
            Effect::Redraw
        }
        Action::Tick if sim.paused => Effect::None,
        Action::Tick => {
            engine::update(&mut sim.grid);
            sim.generation += 1;
            Effect::Redraw
        }
        Action::Redraw => Effect::Redraw,
        Action::Quit => Effect::Quit,
    }
}
