//! Key mapping from terminal events to logical inputs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys the game understands, independent of the physical binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Left,
    Right,
    Down,
    Up,
    QuickDrop,
    Enter,
}

/// Map a keyboard event to a logical input.
pub fn map_key(key: KeyEvent) -> Option<InputKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputKey::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputKey::Right)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputKey::Down)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputKey::Up)
        }

        KeyCode::Char(' ') => Some(InputKey::QuickDrop),
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => Some(InputKey::Enter),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(code: KeyCode) -> Option<InputKey> {
        map_key(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(map(KeyCode::Left), Some(InputKey::Left));
        assert_eq!(map(KeyCode::Right), Some(InputKey::Right));
        assert_eq!(map(KeyCode::Down), Some(InputKey::Down));

        assert_eq!(map(KeyCode::Char('H')), Some(InputKey::Left));
        assert_eq!(map(KeyCode::Char('d')), Some(InputKey::Right));
        assert_eq!(map(KeyCode::Char('j')), Some(InputKey::Down));
    }

    #[test]
    fn test_rotate_and_action_keys() {
        assert_eq!(map(KeyCode::Up), Some(InputKey::Up));
        assert_eq!(map(KeyCode::Char('w')), Some(InputKey::Up));
        assert_eq!(map(KeyCode::Char(' ')), Some(InputKey::QuickDrop));
        assert_eq!(map(KeyCode::Enter), Some(InputKey::Enter));
        assert_eq!(map(KeyCode::Char('p')), Some(InputKey::Enter));
        assert_eq!(map(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_control_chords_are_not_game_input() {
        assert_eq!(map_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
