use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use rand::SeedableRng;
use rand::rngs::StdRng;
use termlife::core::grid::{CellState, Coord, Grid};
use termlife::core::state::Simulation;
use termlife::tui::components::Glyphs;
use termlife::tui::event::InputSource;
use termlife::tui::event_loop::run_with;
use termlife::tui::ui::{RenderSurface, TerminalSurface};

// ============================================================================
// Helper Functions
// ============================================================================

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Replays events with a pause between them, then stays quiet.
struct SlowScript {
    events: VecDeque<Event>,
}

impl SlowScript {
    fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }
}

impl InputSource for SlowScript {
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        std::thread::sleep(timeout.min(Duration::from_millis(5)));
        Ok(self.events.pop_front())
    }
}

#[derive(Default)]
struct CountingSurface {
    paints: usize,
}

impl RenderSurface for CountingSurface {
    fn paint(&mut self, _sim: &Simulation) -> io::Result<()> {
        self.paints += 1;
        Ok(())
    }
}

/// Records `(generation, paused)` for every paint, readable after the loop
/// has consumed the surface.
#[derive(Clone, Default)]
struct GenerationLog {
    paints: Arc<Mutex<Vec<(u64, bool)>>>,
}

impl RenderSurface for GenerationLog {
    fn paint(&mut self, sim: &Simulation) -> io::Result<()> {
        self.paints.lock().unwrap().push((sim.generation, sim.paused));
        Ok(())
    }
}

fn blank_simulation(width: usize, height: usize) -> Simulation {
    Simulation::new(Grid::new(width, height).unwrap(), StdRng::seed_from_u64(5))
}

// ============================================================================
// Full loop: producers + consumer
// ============================================================================

#[tokio::test]
async fn test_paused_session_edits_without_evolving() {
    // Start paused, draw a blinker against the top-left edge by hand, idle,
    // then quit. Ticks fire every millisecond, so a single one getting
    // through would turn the row into a column.
    let mut sim = blank_simulation(5, 5);
    sim.paused = true;

    let mut script = vec![
        key(KeyCode::Char('j')),
        key(KeyCode::Char('1')),
        key(KeyCode::Char('l')),
        key(KeyCode::Char('1')),
        key(KeyCode::Char('l')),
        key(KeyCode::Char('1')),
    ];
    script.extend((0..40).map(|_| Event::FocusGained));
    script.push(key(KeyCode::Esc));

    let sim = run_with(
        sim,
        CountingSurface::default(),
        SlowScript::new(script),
        Duration::from_millis(1),
    )
    .await
    .unwrap();

    assert!(sim.paused);
    assert_eq!(sim.generation, 0);
    assert_eq!(sim.grid.selected(), Coord::new(2, 1));
    assert_eq!(sim.grid.alive_count(), 3);
    for x in 0..3 {
        assert_eq!(sim.grid.cell_at(x, 1), Some(CellState::Alive));
    }
}

#[tokio::test]
async fn test_pause_key_freezes_running_board() {
    let mut sim = blank_simulation(5, 5);
    for x in 1..4 {
        sim.grid.set_cell_at(x, 2, CellState::Alive);
    }

    // Let it run for a few ticks, pause, then idle long enough for hundreds
    // of ticks before quitting
    let mut script: Vec<Event> = (0..4).map(|_| Event::FocusGained).collect();
    script.push(key(KeyCode::Char(' ')));
    script.extend((0..40).map(|_| Event::FocusGained));
    script.push(key(KeyCode::Esc));

    let recorder = GenerationLog::default();
    let sim = run_with(
        sim,
        recorder.clone(),
        SlowScript::new(script),
        Duration::from_millis(1),
    )
    .await
    .unwrap();

    let paints = recorder.paints.lock().unwrap();
    let (paused_at, _) = *paints
        .iter()
        .find(|(_, paused)| *paused)
        .expect("pause toggle repaints");
    assert!(sim.paused);
    assert_eq!(sim.generation, paused_at);
    assert!(
        paints
            .iter()
            .skip_while(|(_, paused)| !*paused)
            .all(|(generation, _)| *generation == paused_at)
    );
    assert_eq!(sim.grid.alive_count(), 3);
}

#[tokio::test]
async fn test_ticks_evolve_while_running() {
    let mut sim = blank_simulation(5, 5);
    for x in 1..4 {
        sim.grid.set_cell_at(x, 2, CellState::Alive);
    }

    // No keys for a while, then quit; ticks keep flowing in between
    let mut script: Vec<Event> = (0..40).map(|_| Event::FocusGained).collect();
    script.push(key(KeyCode::Esc));

    let sim = run_with(
        sim,
        CountingSurface::default(),
        SlowScript::new(script),
        Duration::from_millis(1),
    )
    .await
    .unwrap();

    assert!(sim.generation > 0);
    // A blinker stays a blinker whatever the phase
    assert_eq!(sim.grid.alive_count(), 3);
}

#[tokio::test]
async fn test_terminal_surface_round_trip() {
    let backend = TestBackend::new(60, 20);
    let surface = TerminalSurface::new(Terminal::new(backend).unwrap(), Glyphs::default());

    let sim = run_with(
        blank_simulation(8, 8),
        surface,
        SlowScript::new(vec![key(KeyCode::Char('1')), key(KeyCode::Esc)]),
        Duration::from_secs(3600),
    )
    .await
    .unwrap();

    assert_eq!(sim.grid.cell_at(0, 0), Some(CellState::Alive));
}
