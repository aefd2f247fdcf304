//! Headless replay of a typed key sequence

use tracing::info_span;

use crate::core::keypad::{parse_key_sequence, UnknownKey};
use crate::core::{CalcError, Calculator};

/// Calculator state after replaying a sequence
#[derive(Debug, Clone, Default)]
pub struct Replay {
    /// The session after the last key
    pub calculator: Calculator,
    /// Error from the last key, if that key was a failed `=`
    pub last_error: Option<CalcError>,
}

impl Replay {
    /// Returns the two display lines, result line first
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{}\n{}",
            self.calculator.result_text(),
            self.calculator.current_text()
        )
    }
}

/// Presses every key in `seq`, carrying on past failed evaluations the way
/// the interactive front-end does
pub fn replay(seq: &str) -> Result<Replay, UnknownKey> {
    let keys = parse_key_sequence(seq)?;
    let _span = info_span!("replay", keys = keys.len()).entered();

    let mut state = Replay::default();
    for key in keys {
        state.last_error = state.calculator.press(key).err();
    }
    Ok(state)
}
