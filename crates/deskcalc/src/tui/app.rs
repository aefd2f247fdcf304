//! TUI application state

use crate::core::keypad::{self, Key, LAYOUT};
use crate::core::{CalcError, Calculator};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// The calculator session
    calculator: Calculator,
    /// Error from the last `=`, shown until the next key
    last_error: Option<CalcError>,
    /// Index into [`LAYOUT`] of the last pressed button
    pressed: Option<usize>,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calculator session
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the error from the last evaluation, if it failed
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Returns the highlighted button index
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a key, remembering any evaluation error for display
    pub fn press(&mut self, key: Key) {
        self.pressed = keypad::position_of(key);
        self.last_error = self.calculator.press(key).err();
    }

    /// Presses the button at an index into [`LAYOUT`]
    pub fn press_button(&mut self, index: usize) {
        if let Some(slot) = LAYOUT.get(index) {
            self.press(slot.key);
        }
    }

    /// Clears the button highlight
    pub fn release(&mut self) {
        self.pressed = None;
    }

    /// Returns the status line text
    #[must_use]
    pub fn status(&self) -> String {
        match &self.last_error {
            Some(e) => format!("Error: {e}"),
            None => String::new(),
        }
    }
}
