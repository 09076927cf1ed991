//! Input buffer and display state of the keypad.

use super::key::Key;
use crate::calculator::{CalcResult, evaluate_expression};
use tracing::debug;

/// Text shown after a failed evaluation.
pub const ERROR_TEXT: &str = "Error";

/// The keypad's input buffer and what the display currently shows.
///
/// The buffer holds keypad glyphs as typed; they are normalized only when
/// `=` hands the buffer to the evaluator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    buffer: String,
    display: String,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// The not-yet-evaluated expression.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The display text: the buffer, the last result, or [`ERROR_TEXT`].
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Apply one key press.
    ///
    /// Returns the evaluation outcome when `key` is `=`.
    pub fn press(&mut self, key: Key) -> Option<CalcResult> {
        match key {
            Key::Clear => {
                self.buffer.clear();
                self.display.clear();
            }
            Key::Backspace => {
                self.buffer.pop();
                self.show_buffer();
            }
            Key::Equals => return Some(self.evaluate()),
            Key::Parens => {
                self.toggle_paren();
                self.show_buffer();
            }
            other => {
                if let Some(symbol) = other.symbol() {
                    self.buffer.push(symbol);
                }
                self.show_buffer();
            }
        }
        None
    }

    /// Close an open parenthesis if there is one, otherwise open a new one.
    /// Opening right after an operand inserts an implicit multiplication.
    fn toggle_paren(&mut self) {
        let opens = self.buffer.chars().filter(|c| *c == '(').count();
        let closes = self.buffer.chars().filter(|c| *c == ')').count();

        if opens > closes {
            self.buffer.push(')');
            return;
        }

        if let Some(last) = self.buffer.chars().last()
            && (last.is_ascii_digit() || last == '.' || last == ')')
        {
            self.buffer.push('×');
        }
        self.buffer.push('(');
    }

    fn evaluate(&mut self) -> CalcResult {
        let result = evaluate_expression(&self.buffer);
        match &result {
            CalcResult::Success { display_result, .. } => {
                self.buffer.clone_from(display_result);
                self.display.clone_from(display_result);
            }
            CalcResult::Error { expression, message } => {
                debug!(%expression, %message, "keypad evaluation failed");
                self.buffer.clear();
                self.display = ERROR_TEXT.to_string();
            }
        }
        result
    }

    fn show_buffer(&mut self) {
        self.display.clone_from(&self.buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(keypad: &mut Keypad, labels: &str) -> Option<CalcResult> {
        let mut last = None;
        for label in labels.split_whitespace() {
            let key = Key::from_label(label).unwrap();
            last = keypad.press(key);
        }
        last
    }

    #[test]
    fn test_typing_appends_glyphs() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "1 2 × 3 − . 5 %");
        assert_eq!(keypad.buffer(), "12×3−.5%");
        assert_eq!(keypad.display(), keypad.buffer());
    }

    #[test]
    fn test_equals_replaces_buffer_with_result() {
        let mut keypad = Keypad::new();
        let result = type_keys(&mut keypad, "4 ÷ 2 =").unwrap();
        assert!(result.is_success());
        assert_eq!(keypad.buffer(), "2");
        assert_eq!(keypad.display(), "2");
    }

    #[test]
    fn test_chained_computation() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "7 ÷ 2 =");
        assert_eq!(keypad.display(), "3.5");
        type_keys(&mut keypad, "× 2 =");
        assert_eq!(keypad.display(), "7");
    }

    #[test]
    fn test_error_clears_buffer() {
        let mut keypad = Keypad::new();
        let result = type_keys(&mut keypad, "5 ÷ 0 =").unwrap();
        assert!(!result.is_success());
        assert_eq!(keypad.buffer(), "");
        assert_eq!(keypad.display(), ERROR_TEXT);

        type_keys(&mut keypad, "8");
        assert_eq!(keypad.display(), "8");
    }

    #[test]
    fn test_clear_and_backspace() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "9 ×");
        type_keys(&mut keypad, "⌫");
        assert_eq!(keypad.buffer(), "9");
        type_keys(&mut keypad, "AC");
        assert_eq!(keypad.buffer(), "");
        assert_eq!(keypad.display(), "");
        // Backspace on an empty buffer is a no-op
        type_keys(&mut keypad, "⌫");
        assert_eq!(keypad.buffer(), "");
    }

    #[test]
    fn test_paren_toggle() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "() 2 + 3 () ()");
        assert_eq!(keypad.buffer(), "(2+3)×(");
        type_keys(&mut keypad, "4 () =");
        assert_eq!(keypad.display(), "20");
    }

    #[test]
    fn test_paren_after_operator_has_no_implicit_multiply() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "2 + ()");
        assert_eq!(keypad.buffer(), "2+(");
        type_keys(&mut keypad, "AC . ()");
        assert_eq!(keypad.buffer(), ".×(");
    }

    #[test]
    fn test_percent_and_negative_input() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "5 0 % =");
        assert_eq!(keypad.display(), "0.5");
        type_keys(&mut keypad, "AC − 5 + 3 =");
        assert_eq!(keypad.display(), "-2");
    }

    #[test]
    fn test_empty_equals_is_zero() {
        let mut keypad = Keypad::new();
        type_keys(&mut keypad, "=");
        assert_eq!(keypad.display(), "0");
        assert_eq!(keypad.buffer(), "0");
    }
}
