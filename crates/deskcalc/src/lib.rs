//! deskcalc - a two-line desk calculator
//!
//! The top display line shows the committed expression, the bottom line the
//! operand being typed. Pressing an operator moves the operand (with the
//! operator) up; pressing `=` evaluates both lines together with a small
//! four-operator parser and puts the value on the bottom line.
//!
//! # Example
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for key in parse_key_sequence("42+8").unwrap() {
//!     calc.press(key).unwrap();
//! }
//! assert_eq!(calc.result_text(), "42+");
//! assert_eq!(calc.current_text(), "8");
//!
//! calc.on_equals().unwrap();
//! assert_eq!(calc.result_text(), "");
//! assert_eq!(calc.current_text(), "50");
//!
//! // Failed evaluations leave both lines as they were
//! calc.on_operator(Operator::Divide);
//! calc.on_digit(OperandToken::Decimal);
//! assert!(calc.on_equals().is_err());
//! assert_eq!(calc.result_text(), "50/");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod logging;
pub mod replay;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{format_number, Evaluator};
    pub use crate::core::expression::{Digit, ExpressionBuilder, OperandToken};
    pub use crate::core::keypad::{parse_key_sequence, Key, KeySlot, UnknownKey, LAYOUT};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Calculator, Mode, Operator};
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
