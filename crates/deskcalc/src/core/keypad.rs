//! Static keypad table
//!
//! ```text
//! [        C        ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ . ] [ 0 ] [     =     ]
//! ```
//!
//! Front-ends lay buttons out from [`LAYOUT`]; the core itself never needs
//! positions.

use crate::core::expression::{Digit, OperandToken};
use crate::core::Operator;

/// A calculator key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Digit or decimal point
    Operand(OperandToken),
    /// One of the four operators
    Operator(Operator),
    /// Clear both buffers
    Clear,
    /// Evaluate
    Equals,
}

impl Key {
    /// Maps a character to a key
    ///
    /// Accepts digits, `.`, operator symbols and their `×`/`÷` glyphs, `C`/`c`
    /// and `=`.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if let Some(token) = OperandToken::from_char(ch) {
            return Some(Self::Operand(token));
        }
        if let Some(op) = Operator::from_char(ch) {
            return Some(Self::Operator(op));
        }
        match ch {
            'C' | 'c' => Some(Self::Clear),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// Returns the button label
    #[must_use]
    pub const fn label(&self) -> char {
        match self {
            Self::Operand(token) => token.as_char(),
            Self::Operator(op) => op.label(),
            Self::Clear => 'C',
            Self::Equals => '=',
        }
    }
}

/// One button in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySlot {
    /// The key this button sends
    pub key: Key,
    /// Zero-based row
    pub row: usize,
    /// Zero-based first column
    pub col: usize,
    /// Number of columns covered
    pub col_span: usize,
}

impl KeySlot {
    const fn new(key: Key, row: usize, col: usize, col_span: usize) -> Self {
        Self {
            key,
            row,
            col,
            col_span,
        }
    }

    const fn digit(d: usize, row: usize, col: usize) -> Self {
        Self::new(Key::Operand(OperandToken::Digit(Digit::ALL[d])), row, col, 1)
    }

    const fn operator(op: Operator, row: usize) -> Self {
        Self::new(Key::Operator(op), row, COLS - 1, 1)
    }

    /// Returns true if this slot covers the given cell
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.col_span
    }
}

/// Number of rows in the grid
pub const ROWS: usize = 5;

/// Number of columns in the grid
pub const COLS: usize = 4;

/// Every button, row-major
pub const LAYOUT: [KeySlot; 17] = [
    KeySlot::new(Key::Clear, 0, 0, 3),
    KeySlot::operator(Operator::Divide, 0),
    KeySlot::digit(7, 1, 0),
    KeySlot::digit(8, 1, 1),
    KeySlot::digit(9, 1, 2),
    KeySlot::operator(Operator::Multiply, 1),
    KeySlot::digit(4, 2, 0),
    KeySlot::digit(5, 2, 1),
    KeySlot::digit(6, 2, 2),
    KeySlot::operator(Operator::Subtract, 2),
    KeySlot::digit(1, 3, 0),
    KeySlot::digit(2, 3, 1),
    KeySlot::digit(3, 3, 2),
    KeySlot::operator(Operator::Add, 3),
    KeySlot::new(Key::Operand(OperandToken::Decimal), 4, 0, 1),
    KeySlot::digit(0, 4, 1),
    KeySlot::new(Key::Equals, 4, 2, 2),
];

/// Returns the button covering a grid cell
#[must_use]
pub fn slot_at(row: usize, col: usize) -> Option<&'static KeySlot> {
    LAYOUT.iter().find(|slot| slot.covers(row, col))
}

/// Returns the index of the button for a key
#[must_use]
pub fn position_of(key: Key) -> Option<usize> {
    LAYOUT.iter().position(|slot| slot.key == key)
}

/// A character in a key sequence that names no key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key '{ch}' at position {position}")]
pub struct UnknownKey {
    /// The offending character
    pub ch: char,
    /// Character index in the sequence
    pub position: usize,
}

/// Parses a typed key sequence such as `"42+8="`, ignoring whitespace
pub fn parse_key_sequence(seq: &str) -> Result<Vec<Key>, UnknownKey> {
    seq.chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, ch)| Key::from_char(ch).ok_or(UnknownKey { ch, position }))
        .collect()
}
