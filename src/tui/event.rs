use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;
use crate::core::cursor::Direction;
use crate::core::grid::CellState;

/// Where input events come from.
///
/// Implementations block for at most `timeout` and return `Ok(None)` when
/// nothing arrived, so a polling thread can notice it is no longer wanted.
pub trait InputSource {
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal.
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Translate a terminal event into an action using the default keymap.
///
/// ```text
/// h / l / j / k   cursor left / right / down / up
/// r               reseed randomly
/// 1 / 0           set selected cell alive / dead
/// space           toggle pause
/// Esc, Ctrl+C     quit
/// ```
///
/// Anything else (including key releases) maps to `None`.
pub fn map_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Resize(..) => Some(Action::Redraw),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
    match (key.modifiers, key.code) {
        // Raw mode swallows SIGINT
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Esc) => Some(Action::Quit),
        (_, KeyCode::Char(' ')) => Some(Action::TogglePause),
        (_, KeyCode::Char('h')) => Some(Action::MoveCursor(Direction::Left)),
        (_, KeyCode::Char('l')) => Some(Action::MoveCursor(Direction::Right)),
        (_, KeyCode::Char('j')) => Some(Action::MoveCursor(Direction::Down)),
        (_, KeyCode::Char('k')) => Some(Action::MoveCursor(Direction::Up)),
        (_, KeyCode::Char('r')) => Some(Action::Randomize),
        (_, KeyCode::Char('1')) => Some(Action::SetSelected(CellState::Alive)),
        (_, KeyCode::Char('0')) => Some(Action::SetSelected(CellState::Dead)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{key, key_event};
    use crossterm::event::KeyEventState;

    #[test]
    fn test_default_keymap() {
        let cases = [
            ('h', Action::MoveCursor(Direction::Left)),
            ('l', Action::MoveCursor(Direction::Right)),
            ('j', Action::MoveCursor(Direction::Down)),
            ('k', Action::MoveCursor(Direction::Up)),
            ('r', Action::Randomize),
            ('1', Action::SetSelected(CellState::Alive)),
            ('0', Action::SetSelected(CellState::Dead)),
            (' ', Action::TogglePause),
        ];
        for (c, expected) in cases {
            assert_eq!(map_event(&key(c)), Some(expected), "key {c:?}");
        }
        assert_eq!(map_event(&key_event(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&event), Some(Action::Quit));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_event(&key('x')), None);
        assert_eq!(map_event(&key('c')), None);
        assert_eq!(map_event(&key_event(KeyCode::Enter)), None);
        assert_eq!(map_event(&Event::FocusGained), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&release), None);
    }

    #[test]
    fn test_resize_requests_redraw() {
        assert_eq!(map_event(&Event::Resize(100, 40)), Some(Action::Redraw));
    }
}
