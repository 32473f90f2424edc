use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::swipe::SwipeTracker;
use crate::game::{Direction, GameConfig};

/// What the player asked for, independent of the device it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Turn(Direction),
    Restart,
    TogglePause,
    Quit,
    None,
}

pub struct InputHandler {
    swipe: SwipeTracker,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            swipe: SwipeTracker::default(),
        }
    }

    /// Handler whose swipe recognition matches the configured cell geometry
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            swipe: SwipeTracker::new(config.cell_size, config.swipe_threshold),
        }
    }

    /// Map any terminal event; key releases and repeats-as-release are ignored
    pub fn handle_event(&mut self, event: &Event) -> InputAction {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(*key),
            Event::Mouse(mouse) => self
                .swipe
                .handle_mouse_event(mouse)
                .map(InputAction::Turn)
                .unwrap_or(InputAction::None),
            _ => InputAction::None,
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> InputAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => InputAction::Turn(Direction::Up),
            KeyCode::Down => InputAction::Turn(Direction::Down),
            KeyCode::Left => InputAction::Turn(Direction::Left),
            KeyCode::Right => InputAction::Turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => InputAction::Turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => InputAction::Turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => InputAction::Turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => InputAction::Turn(Direction::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Restart,
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
                InputAction::TogglePause
            }

            _ => InputAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton, MouseEvent, MouseEventKind};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        let cases = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
        ];
        for (code, dir) in cases {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(handler.handle_key_event(key), InputAction::Turn(dir));
        }
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(w), InputAction::Turn(Direction::Up));

        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(a), InputAction::Turn(Direction::Left));

        let s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(s), InputAction::Turn(Direction::Down));

        let d_upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(d_upper),
            InputAction::Turn(Direction::Right)
        );
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(q), InputAction::Quit);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), InputAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), InputAction::Quit);

        let r = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(r), InputAction::Restart);

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(space), InputAction::TogglePause);

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), InputAction::None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut handler = InputHandler::new();
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handler.handle_event(&Event::Key(release)), InputAction::None);

        let press = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_event(&Event::Key(press)),
            InputAction::Turn(Direction::Up)
        );
    }

    #[test]
    fn test_mouse_swipe_becomes_turn() {
        let mut handler = InputHandler::from_config(&GameConfig::default());

        let down = mouse(MouseEventKind::Down(MouseButton::Left), 10, 10);
        assert_eq!(handler.handle_event(&down), InputAction::None);

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 11, 4);
        assert_eq!(handler.handle_event(&up), InputAction::Turn(Direction::Up));
    }

    #[test]
    fn test_other_events_ignored() {
        let mut handler = InputHandler::new();
        assert_eq!(handler.handle_event(&Event::Resize(80, 24)), InputAction::None);
        assert_eq!(handler.handle_event(&Event::FocusLost), InputAction::None);
    }
}
