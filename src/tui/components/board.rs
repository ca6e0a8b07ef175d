//! # Board Component
//!
//! Paints the grid, one terminal cell per automaton cell.
//!
//! Alive cells use the alive glyph and dead cells the dead glyph, white on
//! black. The cell under the cursor swaps foreground and background so it
//! stays visible whether alive or dead.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::grid::{CellState, Grid};
use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { alive: 'x', dead: ' ' }
    }
}

pub struct Board<'a> {
    pub grid: &'a Grid,
    pub glyphs: Glyphs,
}

impl<'a> Board<'a> {
    pub fn new(grid: &'a Grid, glyphs: Glyphs) -> Self {
        Self { grid, glyphs }
    }

    fn cell_style(&self, x: usize, y: usize) -> Style {
        let selected = self.grid.selected();
        if selected.x == x && selected.y == y {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default().fg(Color::White).bg(Color::Black)
        }
    }

    fn glyph(&self, state: CellState) -> char {
        match state {
            CellState::Alive => self.glyphs.alive,
            CellState::Dead => self.glyphs.dead,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        (0..self.grid.height())
            .map(|y| {
                let spans: Vec<Span> = (0..self.grid.width())
                    .map(|x| {
                        let state = self.grid.cell_at(x, y).unwrap_or_default();
                        Span::styled(self.glyph(state).to_string(), self.cell_style(x, y))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Component for Board<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}
