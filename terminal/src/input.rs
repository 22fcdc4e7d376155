use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use common::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Steer(Direction),
    TogglePause,
    Quit,
    None,
}

impl GameKey {
    /// Keys understood while a run is on screen.
    pub fn from_key_event(key: KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return GameKey::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => GameKey::Steer(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => GameKey::Steer(Direction::Down),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => GameKey::Steer(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => GameKey::Steer(Direction::Right),
            KeyCode::Char(' ') => GameKey::TogglePause,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameKey::Quit,
            _ => GameKey::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_steer() {
        assert_eq!(GameKey::from_key_event(key(KeyCode::Up)), GameKey::Steer(Direction::Up));
        assert_eq!(GameKey::from_key_event(key(KeyCode::Char('a'))), GameKey::Steer(Direction::Left));
        assert_eq!(GameKey::from_key_event(key(KeyCode::Char('D'))), GameKey::Steer(Direction::Right));
        assert_eq!(GameKey::from_key_event(key(KeyCode::Down)), GameKey::Steer(Direction::Down));
    }

    #[test]
    fn space_pauses_and_ctrl_c_quits() {
        assert_eq!(GameKey::from_key_event(key(KeyCode::Char(' '))), GameKey::TogglePause);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(GameKey::from_key_event(ctrl_c), GameKey::Quit);
        assert_eq!(GameKey::from_key_event(key(KeyCode::Char('x'))), GameKey::None);
    }
}
