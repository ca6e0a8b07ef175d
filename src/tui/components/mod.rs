//! # TUI Components
//!
//! Stateless, props-based display components.
//!
//! - `Board`: the grid itself, cursor cell inverted
//! - `StatusPanel`: the margin readout (neighbor count, generation, pause state, keys)
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into global state:
//!
//! ```rust,ignore
//! Board::new(&sim.grid, glyphs).render(frame, board_area);
//! StatusPanel::from_simulation(sim).render(frame, panel_area);
//! ```

pub mod board;
pub mod status_panel;

pub use board::{Board, Glyphs};
pub use status_panel::StatusPanel;
