//! Calculator core: expression buffers, parser and evaluator
//!
//! Nothing in here knows about terminals or widgets. The presentation layer
//! drives a [`Calculator`] and reads its two display lines back.

pub mod evaluator;
pub mod expression;
pub mod keypad;
mod operations;
pub mod parser;
pub mod session;

pub use operations::Operator;
pub use session::{Calculator, Mode};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The combined expression is not valid arithmetic
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),
    /// A divisor evaluated to zero
    #[error("Division by zero")]
    DivisionByZero,
    /// A literal or intermediate value is not finite
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
}

impl CalcError {
    /// Creates an invalid expression error
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidExpression(reason.into())
    }
}
