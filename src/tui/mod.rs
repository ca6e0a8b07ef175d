//! # TUI Adapter
//!
//! The ratatui-specific layer. Acquires the terminal, turns key presses into
//! `core::action::Action` values, runs the event loop and paints the board.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! There is no frame timer. The board is painted once at startup and then
//! once after every handled event: a key press that maps to an action, or a
//! tick while running. Unmapped keys and ticks that arrive while paused do
//! not repaint.

mod component;
pub mod components;
pub mod event;
pub mod event_loop;
pub mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::SetTitle;

use crate::core::config::ResolvedConfig;
use crate::core::state::Simulation;
use crate::tui::components::Glyphs;
use crate::tui::event::CrosstermInput;
use crate::tui::ui::TerminalSurface;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), SetTitle("termlife"), Hide)?;
        info!("Terminal modes enabled (title, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub async fn run(config: ResolvedConfig) -> std::io::Result<()> {
    // Build the board before touching the terminal so a bad size fails cleanly
    let sim = Simulation::seeded(config.width, config.height, config.seed)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    info!(
        "Board {}x{} seeded with {} live cells",
        config.width,
        config.height,
        sim.grid.alive_count()
    );

    let terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    let glyphs = Glyphs {
        alive: config.alive_glyph,
        dead: config.dead_glyph,
    };

    let result = match guard {
        Ok(_guard) => {
            event_loop::run_with(
                sim,
                TerminalSurface::new(terminal, glyphs),
                CrosstermInput,
                config.tick_interval,
            )
            .await
        }
        Err(e) => Err(e),
    };

    ratatui::restore();
    let sim = result?;
    info!(
        "Shut down at generation {} with {} live cells",
        sim.generation,
        sim.grid.alive_count()
    );
    Ok(())
}
