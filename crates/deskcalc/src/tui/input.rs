//! Terminal event mapping
//!
//! Buttons are pressed with the mouse. The keyboard only quits.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Actions that can be triggered by terminal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Left button pressed at a terminal cell
    Click {
        /// Column
        x: u16,
        /// Row
        y: u16,
    },
    /// Left button released
    Release,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> InputAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => InputAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> InputAction {
        if event.kind == KeyEventKind::Release {
            return InputAction::None;
        }
        match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::Quit
            }
            KeyCode::Esc | KeyCode::Char('q') => InputAction::Quit,
            _ => InputAction::None,
        }
    }

    /// Maps a mouse event to an action
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> InputAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => InputAction::Click {
                x: event.column,
                y: event.row,
            },
            MouseEventKind::Up(MouseButton::Left) => InputAction::Release,
            _ => InputAction::None,
        }
    }
}
