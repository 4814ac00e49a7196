use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::grid::Direction::{self, *};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Restart,
    TogglePause,
    Quit,
    None,
}

pub fn key_action(ev: &KeyEvent) -> KeyAction {
    if is_ctrl_c(ev) {
        return KeyAction::Quit;
    }

    match ev.code {
        KeyCode::Up => KeyAction::Turn(Up),
        KeyCode::Down => KeyAction::Turn(Down),
        KeyCode::Left => KeyAction::Turn(Left),
        KeyCode::Right => KeyAction::Turn(Right),
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'w' => KeyAction::Turn(Up),
            'a' => KeyAction::Turn(Left),
            's' => KeyAction::Turn(Down),
            'd' => KeyAction::Turn(Right),
            'r' => KeyAction::Restart,
            'p' => KeyAction::TogglePause,
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        },
        KeyCode::Enter => KeyAction::Restart,
        KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(key_action(&key(KeyCode::Up)), KeyAction::Turn(Up));
        assert_eq!(key_action(&key(KeyCode::Down)), KeyAction::Turn(Down));
        assert_eq!(key_action(&key(KeyCode::Left)), KeyAction::Turn(Left));
        assert_eq!(key_action(&key(KeyCode::Right)), KeyAction::Turn(Right));

        assert_eq!(key_action(&key(KeyCode::Char('w'))), KeyAction::Turn(Up));
        assert_eq!(key_action(&key(KeyCode::Char('a'))), KeyAction::Turn(Left));
        assert_eq!(key_action(&key(KeyCode::Char('s'))), KeyAction::Turn(Down));
        assert_eq!(key_action(&key(KeyCode::Char('d'))), KeyAction::Turn(Right));

        let shifted = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(key_action(&shifted), KeyAction::Turn(Up));
    }

    #[test]
    fn controls() {
        assert_eq!(key_action(&key(KeyCode::Enter)), KeyAction::Restart);
        assert_eq!(key_action(&key(KeyCode::Char('r'))), KeyAction::Restart);
        assert_eq!(key_action(&key(KeyCode::Char('p'))), KeyAction::TogglePause);
        assert_eq!(key_action(&key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(key_action(&key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(key_action(&key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(key_action(&key(KeyCode::Tab)), KeyAction::None);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_action(&ev), KeyAction::Quit);
        assert_eq!(key_action(&key(KeyCode::Char('c'))), KeyAction::None);
    }
}
