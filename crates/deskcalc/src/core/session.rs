//! Calculator session: the state object a front-end drives
//!
//! A session owns one [`ExpressionBuilder`] and one [`Evaluator`]. Every
//! entry point runs to completion on the caller's thread; front-ends read
//! [`Calculator::result_text`] and [`Calculator::current_text`] after each
//! call to refresh their two display lines.

use tracing::{debug, info, warn};

use crate::core::evaluator::{format_number, Evaluator};
use crate::core::expression::{ExpressionBuilder, OperandToken};
use crate::core::keypad::Key;
use crate::core::{CalcResult, Operator};

/// What the current line is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The current line holds an operand being typed
    #[default]
    AcceptingInput,
    /// The current line holds the value of the last `=`
    ///
    /// A digit pressed now is appended to that value rather than starting a
    /// new operand.
    ShowingResult,
}

/// Calculator state
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    builder: ExpressionBuilder,
    evaluator: Evaluator,
    mode: Mode,
}

impl Calculator {
    /// Creates a calculator with both display lines empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed expression (top display line)
    #[must_use]
    pub fn result_text(&self) -> &str {
        self.builder.result()
    }

    /// Returns the operand being typed (bottom display line)
    #[must_use]
    pub fn current_text(&self) -> &str {
        self.builder.current()
    }

    /// Returns the display mode
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the underlying buffers
    #[must_use]
    pub fn builder(&self) -> &ExpressionBuilder {
        &self.builder
    }

    /// Handles a digit or decimal point key
    pub fn on_digit(&mut self, token: OperandToken) {
        if self.mode == Mode::ShowingResult {
            debug!(
                previous = self.builder.current(),
                "appending to previous result"
            );
        }
        self.builder.push_operand(token);
        self.mode = Mode::AcceptingInput;
        debug!(key = %token.as_char(), current = self.builder.current(), "operand key");
    }

    /// Handles an operator key
    pub fn on_operator(&mut self, op: Operator) {
        self.builder.push_operator(op);
        self.mode = Mode::AcceptingInput;
        debug!(key = %op, result = self.builder.result(), "operator key");
    }

    /// Handles the clear key
    pub fn on_clear(&mut self) {
        self.builder.clear();
        self.mode = Mode::AcceptingInput;
        debug!("cleared");
    }

    /// Handles the equals key
    ///
    /// On success the formatted value becomes the current line and the
    /// committed expression is emptied. On failure neither line changes.
    pub fn on_equals(&mut self) -> CalcResult<f64> {
        let expression = self.builder.combined();
        match self.evaluator.evaluate_str(&expression) {
            Ok(value) => {
                let text = format_number(value);
                info!(%expression, result = %text, "evaluated");
                self.builder.commit_result(text);
                self.mode = Mode::ShowingResult;
                Ok(value)
            }
            Err(e) => {
                warn!(%expression, error = %e, "evaluation failed");
                Err(e)
            }
        }
    }

    /// Dispatches a key to the matching entry point
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        match key {
            Key::Operand(token) => self.on_digit(token),
            Key::Operator(op) => self.on_operator(op),
            Key::Clear => self.on_clear(),
            Key::Equals => {
                self.on_equals()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::expression::Digit;
    use crate::core::CalcError;

    fn type_keys(calc: &mut Calculator, keys: &str) -> CalcResult<()> {
        for ch in keys.chars() {
            calc.press(Key::from_char(ch).unwrap())?;
        }
        Ok(())
    }

    #[test]
    fn test_new_is_empty() {
        let calc = Calculator::new();
        assert_eq!(calc.result_text(), "");
        assert_eq!(calc.current_text(), "");
        assert_eq!(calc.mode(), Mode::AcceptingInput);
    }

    #[test]
    fn test_digits_concatenate() {
        let mut calc = Calculator::new();
        calc.on_digit(OperandToken::Digit(Digit::ALL[1]));
        calc.on_digit(OperandToken::Decimal);
        calc.on_digit(OperandToken::Digit(Digit::ALL[5]));
        assert_eq!(calc.current_text(), "1.5");
    }

    #[test]
    fn test_operator_moves_current() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "12").unwrap();
        calc.on_operator(Operator::Multiply);
        assert_eq!(calc.result_text(), "12*");
        assert_eq!(calc.current_text(), "");
    }

    #[test]
    fn test_equals_two_plus_three() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "2+3").unwrap();
        assert_eq!(calc.on_equals(), Ok(5.0));
        assert_eq!(calc.current_text(), "5");
        assert_eq!(calc.result_text(), "");
        assert_eq!(calc.mode(), Mode::ShowingResult);
    }

    #[test]
    fn test_equals_fractional() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "10/4=").unwrap();
        assert_eq!(calc.current_text(), "2.5");
    }

    #[test]
    fn test_forty_two_plus_eight() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "42+8=").unwrap();
        assert_eq!(calc.current_text(), "50");
        assert_eq!(calc.result_text(), "");
    }

    #[test]
    fn test_division_by_zero_leaves_buffers() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "1/0").unwrap();
        assert_eq!(calc.on_equals(), Err(CalcError::DivisionByZero));
        assert_eq!(calc.result_text(), "1/");
        assert_eq!(calc.current_text(), "0");
        assert_eq!(calc.mode(), Mode::AcceptingInput);
    }

    #[test]
    fn test_trailing_operator_leaves_buffers() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "5+").unwrap();
        assert!(matches!(
            calc.on_equals(),
            Err(CalcError::InvalidExpression(_))
        ));
        assert_eq!(calc.result_text(), "5+");
        assert_eq!(calc.current_text(), "");
    }

    #[test]
    fn test_equals_on_empty_is_invalid() {
        let mut calc = Calculator::new();
        assert!(matches!(
            calc.on_equals(),
            Err(CalcError::InvalidExpression(_))
        ));
        assert_eq!(calc.current_text(), "");
    }

    #[test]
    fn test_digit_after_equals_appends_to_result() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "2+3=").unwrap();
        calc.on_digit(OperandToken::Digit(Digit::ALL[1]));
        assert_eq!(calc.current_text(), "51");
        assert_eq!(calc.mode(), Mode::AcceptingInput);
    }

    #[test]
    fn test_chaining_after_equals() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "2+3=*4=").unwrap();
        assert_eq!(calc.current_text(), "20");
    }

    #[test]
    fn test_negative_result_can_be_continued() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "2-5=+1=").unwrap();
        assert_eq!(calc.current_text(), "-2");
    }

    #[test]
    fn test_clear_from_any_state() {
        let mut calc = Calculator::new();
        type_keys(&mut calc, "7*").unwrap();
        calc.on_clear();
        assert_eq!(calc.result_text(), "");
        assert_eq!(calc.current_text(), "");

        type_keys(&mut calc, "9/3=").unwrap();
        calc.press(Key::Clear).unwrap();
        assert_eq!(calc.result_text(), "");
        assert_eq!(calc.current_text(), "");
        assert_eq!(calc.mode(), Mode::AcceptingInput);
    }

    #[test]
    fn test_press_propagates_evaluation_error() {
        let mut calc = Calculator::new();
        let result = type_keys(&mut calc, "1..2=");
        assert!(matches!(result, Err(CalcError::InvalidExpression(_))));
        assert_eq!(calc.current_text(), "1..2");
    }
}
