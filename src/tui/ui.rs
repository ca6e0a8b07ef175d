use std::io;

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::Simulation;
use crate::tui::component::Component;
use crate::tui::components::{Board, Glyphs, StatusPanel};

/// Columns between the right edge of the board and the status panel.
pub const PANEL_GAP: u16 = 10;

/// Something the event loop can paint the simulation onto.
pub trait RenderSurface {
    fn paint(&mut self, sim: &Simulation) -> io::Result<()>;
}

/// A ratatui terminal plus the glyphs to draw cells with.
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    glyphs: Glyphs,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>, glyphs: Glyphs) -> Self {
        Self { terminal, glyphs }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> RenderSurface for TerminalSurface<B> {
    fn paint(&mut self, sim: &Simulation) -> io::Result<()> {
        let glyphs = self.glyphs;
        self.terminal
            .draw(|f| draw_ui(f, sim, glyphs))
            .map(|_| ())
            .map_err(|e| io::Error::other(e.to_string()))
    }
}

pub fn draw_ui(frame: &mut Frame, sim: &Simulation, glyphs: Glyphs) {
    use Constraint::{Length, Min};

    let board_width = u16::try_from(sim.grid.width()).unwrap_or(u16::MAX);
    let board_height = u16::try_from(sim.grid.height()).unwrap_or(u16::MAX);

    let [board_column, _gap, panel_area] =
        Layout::horizontal([Length(board_width), Length(PANEL_GAP), Min(0)]).areas(frame.area());
    let [board_area, _] = Layout::vertical([Length(board_height), Min(0)]).areas(board_column);

    Board::new(&sim.grid, glyphs).render(frame, board_area);
    StatusPanel::from_simulation(sim).render(frame, panel_area);
}
