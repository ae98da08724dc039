//! Terminal event handling for the dashboard.
//!
//! The key map is deliberately small: space and `r` force a clean redraw,
//! and every other key press quits.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

/// Scheduler action resulting from a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Recompute dimensions and repaint everything now.
    Redraw,
    /// The terminal was resized to the given width and height.
    Resize(u16, u16),
    /// No action.
    None,
}

/// Maps crossterm events to scheduler actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Handles any terminal event.
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Resize(width, height) => Action::Resize(*width, *height),
            _ => Action::None,
        }
    }

    /// Handles a key event and returns the corresponding action.
    ///
    /// Only presses count; release and repeat events are ignored.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Action {
        if event.kind != KeyEventKind::Press {
            return Action::None;
        }

        match event.code {
            KeyCode::Char(' ' | 'r') => Action::Redraw,
            _ => Action::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_redraw_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key(key_event(KeyCode::Char(' '))), Action::Redraw);
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('r'))), Action::Redraw);
    }

    #[test]
    fn test_any_other_key_quits() {
        let handler = InputHandler::new();

        for code in [KeyCode::Char('q'), KeyCode::Char('R'), KeyCode::Esc, KeyCode::Enter, KeyCode::F(5)] {
            assert_eq!(handler.handle_key(key_event(code)), Action::Quit, "{code:?}");
        }
        assert_eq!(
            handler.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::empty(),
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(handler.handle_key(release), Action::None);
    }

    #[test]
    fn test_resize_event() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_event(&Event::Resize(120, 40)), Action::Resize(120, 40));
    }

    #[test]
    fn test_other_events_ignored() {
        let handler = InputHandler::new();
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        });

        assert_eq!(handler.handle_event(&mouse), Action::None);
        assert_eq!(handler.handle_event(&Event::FocusGained), Action::None);
        assert_eq!(handler.handle_event(&Event::Paste("x".to_string())), Action::None);
    }

    #[test]
    fn test_key_event_routed() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_event(&Event::Key(key_event(KeyCode::Char('r')))), Action::Redraw);
    }
}
