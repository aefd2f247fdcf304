//! Two-buffer expression builder
//!
//! `result` holds every committed operand/operator pair, `current` holds the
//! operand being typed. Entry never validates; bad input surfaces when the
//! combined text is evaluated.

use crate::core::Operator;

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// All digits in ascending order
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, returning None above 9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

/// A token that extends the current operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandToken {
    /// A digit key
    Digit(Digit),
    /// The decimal point key
    Decimal,
}

impl OperandToken {
    /// Parses a digit or `.`
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Decimal),
            _ => ch
                .to_digit(10)
                .and_then(|d| Digit::new(d as u8))
                .map(Self::Digit),
        }
    }

    /// Returns the character appended to the buffer
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Digit(d) => d.as_char(),
            Self::Decimal => '.',
        }
    }
}

impl From<Digit> for OperandToken {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

/// The committed and in-progress halves of an expression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuilder {
    result: String,
    current: String,
}

impl ExpressionBuilder {
    /// Creates a builder with both buffers empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed expression
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Returns the operand being typed
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Returns true if both buffers are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.result.is_empty() && self.current.is_empty()
    }

    /// Appends a digit or decimal point to the current operand
    pub fn push_operand(&mut self, token: OperandToken) {
        self.current.push(token.as_char());
    }

    /// Appends `op` to the current operand and moves the whole operand into
    /// the committed expression
    pub fn push_operator(&mut self, op: Operator) {
        self.current.push(op.symbol());
        self.result.push_str(&self.current);
        self.current.clear();
    }

    /// Empties both buffers
    pub fn clear(&mut self) {
        self.result.clear();
        self.current.clear();
    }

    /// Returns the full expression without mutating either buffer
    #[must_use]
    pub fn combined(&self) -> String {
        let mut expr = String::with_capacity(self.result.len() + self.current.len());
        expr.push_str(&self.result);
        expr.push_str(&self.current);
        expr
    }

    /// Replaces the current operand with an evaluated value and drops the
    /// committed expression
    pub fn commit_result(&mut self, text: String) {
        self.current = text;
        self.result.clear();
    }
}
