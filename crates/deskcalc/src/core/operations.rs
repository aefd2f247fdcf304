//! The four arithmetic operators
//!
//! Each operator knows its input symbol, its keypad label, its binding
//! strength and how to apply itself to two operands.

use crate::core::{CalcError, CalcResult};

/// Binary operator accepted by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the symbol written into the expression buffers
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the label shown on the keypad button
    #[must_use]
    pub const fn label(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '\u{00D7}',
            Self::Divide => '\u{00F7}',
        }
    }

    /// Parses an operator from either its symbol or its keypad label
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '\u{00D7}' => Some(Self::Multiply),
            '/' | '\u{00F7}' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    ///
    /// Fails with [`CalcError::DivisionByZero`] for a zero divisor and with
    /// [`CalcError::Overflow`] when the result is not finite.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };
        check_finite(result)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Rejects infinities and NaN
pub(crate) fn check_finite(value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Overflow)
    }
}
