//! Keyboard mapping for the terminal UI.
//!
//! Pure translation from crossterm key events to application actions, so
//! the bindings can be unit-tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Speed;

/// UI-level actions triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Start solving (or resume when paused).
    Start,
    /// Toggle pause/resume while solving.
    TogglePause,
    /// Return to the initial position.
    Reset,
    /// Cycle through the speed presets.
    CycleSpeed,
    /// Select a specific speed preset.
    SetSpeed(Speed),
    /// Increase the disk count (idle only).
    DiskUp,
    /// Decrease the disk count (idle only).
    DiskDown,
    /// Toggle the help overlay.
    ToggleHelp,
}

/// Check for quit keys (q, Esc, Ctrl-C).
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Map a key press to an application action.
pub fn handle_key_event(key: KeyEvent) -> Option<AppAction> {
    match key.code {
        KeyCode::Enter => Some(AppAction::Start),
        KeyCode::Char(' ') => Some(AppAction::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(AppAction::Reset),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(AppAction::CycleSpeed),
        KeyCode::Char('1') => Some(AppAction::SetSpeed(Speed::Slow)),
        KeyCode::Char('2') => Some(AppAction::SetSpeed(Speed::Normal)),
        KeyCode::Char('3') => Some(AppAction::SetSpeed(Speed::Fast)),
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Some(AppAction::DiskUp),
        KeyCode::Down | KeyCode::Char('-') => Some(AppAction::DiskDown),
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
            Some(AppAction::ToggleHelp)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('c'))));
        assert!(!should_quit(key(KeyCode::Enter)));
    }

    #[test]
    fn test_control_bindings() {
        assert_eq!(handle_key_event(key(KeyCode::Enter)), Some(AppAction::Start));
        assert_eq!(
            handle_key_event(key(KeyCode::Char(' '))),
            Some(AppAction::TogglePause)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('r'))),
            Some(AppAction::Reset)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('?'))),
            Some(AppAction::ToggleHelp)
        );
    }

    #[test]
    fn test_speed_bindings() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1'))),
            Some(AppAction::SetSpeed(Speed::Slow))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('2'))),
            Some(AppAction::SetSpeed(Speed::Normal))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3'))),
            Some(AppAction::SetSpeed(Speed::Fast))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('s'))),
            Some(AppAction::CycleSpeed)
        );
    }

    #[test]
    fn test_disk_count_bindings() {
        assert_eq!(handle_key_event(key(KeyCode::Up)), Some(AppAction::DiskUp));
        assert_eq!(
            handle_key_event(key(KeyCode::Char('+'))),
            Some(AppAction::DiskUp)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Down)),
            Some(AppAction::DiskDown)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('-'))),
            Some(AppAction::DiskDown)
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(key(KeyCode::Tab)), None);
    }
}
