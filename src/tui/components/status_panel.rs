//! # StatusPanel Component
//!
//! The margin to the right of the board.
//!
//! Row 2 carries the live-neighbor count of the selected cell, where the
//! classic demo put it. The count never exceeds 8, so it is always a single
//! digit. The rows around it show the cursor position, generation,
//! population, run state and the key legend.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::cursor::selected_neighbors;
use crate::core::state::Simulation;
use crate::tui::component::Component;

const KEY_LEGEND: &[&str] = &[
    "h/j/k/l  move",
    "1 / 0    set alive / dead",
    "r        randomize",
    "space    pause",
    "esc      quit",
];

pub struct StatusPanel {
    pub generation: u64,
    pub cursor: (usize, usize),
    pub neighbors: u8,
    pub alive: usize,
    pub paused: bool,
}

impl StatusPanel {
    pub fn from_simulation(sim: &Simulation) -> Self {
        let selected = sim.grid.selected();
        Self {
            generation: sim.generation,
            cursor: (selected.x, selected.y),
            neighbors: selected_neighbors(&sim.grid),
            alive: sim.grid.alive_count(),
            paused: sim.paused,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let dim = Style::default().fg(Color::DarkGray);
        let state = if self.paused {
            Span::styled(
                "PAUSED",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("running", Style::default().fg(Color::Green))
        };

        let mut lines = vec![
            Line::from(format!("generation {}", self.generation)),
            Line::from(format!("cursor     {},{}", self.cursor.0, self.cursor.1)),
            Line::from(self.neighbors.to_string()),
            Line::from(format!("alive      {}", self.alive)),
            Line::from(state),
            Line::default(),
        ];
        lines.extend(
            KEY_LEGEND
                .iter()
                .map(|entry| Line::from(Span::styled(*entry, dim))),
        );
        lines
    }
}

impl Component for StatusPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}
