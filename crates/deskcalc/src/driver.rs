//! Unified calculator driver
//!
//! Behavioural checks are written once against [`CalculatorDriver`] and run
//! against every front-end: the headless [`Calculator`] session and the
//! terminal app.

use crate::core::keypad::Key;
use crate::core::{CalcError, CalcResult, Calculator};

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, key: Key) -> CalcResult<()>;

    /// Gets the committed expression line
    fn result_text(&self) -> String;

    /// Gets the current input line
    fn current_text(&self) -> String;

    /// Presses each key in order, stopping at the first failure
    fn press_all(&mut self, keys: &[Key]) -> CalcResult<()> {
        for key in keys {
            self.press(*key)?;
        }
        Ok(())
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, key: Key) -> CalcResult<()> {
        Self::press(self, key)
    }

    fn result_text(&self) -> String {
        Self::result_text(self).to_string()
    }

    fn current_text(&self) -> String {
        Self::current_text(self).to_string()
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcResult, CalculatorDriver, Key};
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, key: Key) -> CalcResult<()> {
            self.app.press(key);
            match self.app.last_error() {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        fn result_text(&self) -> String {
            self.app.calculator().result_text().to_string()
        }

        fn current_text(&self) -> String {
            self.app.calculator().current_text().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared driver checks =====
// These checks work with ANY CalculatorDriver implementation

fn keys(seq: &str) -> Vec<Key> {
    crate::core::keypad::parse_key_sequence(seq).unwrap()
}

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (seq, expected) in [("2+3=", "5"), ("10-4=", "6"), ("6*7=", "42"), ("10/4=", "2.5")] {
        driver.press(Key::Clear).unwrap();
        driver.press_all(&keys(seq)).unwrap();
        assert_eq!(driver.current_text(), expected, "{seq}");
        assert_eq!(driver.result_text(), "");
    }
}

/// Verifies that multiplication binds tighter than addition
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Key::Clear).unwrap();
    driver.press_all(&keys("2+3*4=")).unwrap();
    assert_eq!(driver.current_text(), "14");

    driver.press(Key::Clear).unwrap();
    driver.press_all(&keys("20/4/5=")).unwrap();
    assert_eq!(driver.current_text(), "1");
}

/// Verifies the two-line display while typing
pub fn verify_display_lines<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Key::Clear).unwrap();
    driver.press_all(&keys("42")).unwrap();
    assert_eq!(driver.result_text(), "");
    assert_eq!(driver.current_text(), "42");

    driver.press_all(&keys("+")).unwrap();
    assert_eq!(driver.result_text(), "42+");
    assert_eq!(driver.current_text(), "");

    driver.press_all(&keys("8")).unwrap();
    assert_eq!(driver.current_text(), "8");

    driver.press(Key::Equals).unwrap();
    assert_eq!(driver.result_text(), "");
    assert_eq!(driver.current_text(), "50");
}

/// Verifies that failed evaluations leave both lines untouched
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Key::Clear).unwrap();
    driver.press_all(&keys("1/0")).unwrap();
    assert_eq!(driver.press(Key::Equals), Err(CalcError::DivisionByZero));
    assert_eq!(driver.result_text(), "1/");
    assert_eq!(driver.current_text(), "0");

    driver.press(Key::Clear).unwrap();
    driver.press_all(&keys("5+")).unwrap();
    assert!(matches!(
        driver.press(Key::Equals),
        Err(CalcError::InvalidExpression(_))
    ));
    assert_eq!(driver.result_text(), "5+");
    assert_eq!(driver.current_text(), "");
}

/// Verifies that clear empties both lines
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&keys("9*9")).unwrap();
    driver.press(Key::Clear).unwrap();
    assert_eq!(driver.result_text(), "");
    assert_eq!(driver.current_text(), "");
}

/// Complete verification suite
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_precedence(driver);
    verify_display_lines(driver);
    verify_error_handling(driver);
    verify_clear(driver);
}
