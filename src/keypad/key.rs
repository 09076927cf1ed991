//! Keys of the calculator keypad and their layout.

/// A key on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `AC`: clear the input buffer.
    Clear,
    /// `()`: open or close a parenthesis, whichever fits.
    Parens,
    Percent,
    Divide,
    Multiply,
    Subtract,
    Add,
    /// A decimal digit, `0..=9`.
    Digit(u8),
    Point,
    Backspace,
    Equals,
}

/// Colour group of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyRole {
    Clear,
    Operator,
    Equals,
    /// Digits and the remaining editing keys.
    Plain,
}

/// Keys in display order: five rows of four.
pub const LAYOUT: [[Key; 4]; 5] = [
    [Key::Clear, Key::Parens, Key::Percent, Key::Divide],
    [Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Multiply],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Subtract],
    [Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Add],
    [Key::Digit(0), Key::Point, Key::Backspace, Key::Equals],
];

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Key {
    /// Text printed on the key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "AC",
            Self::Parens => "()",
            Self::Percent => "%",
            Self::Divide => "÷",
            Self::Multiply => "×",
            Self::Subtract => "−",
            Self::Add => "+",
            Self::Digit(d) => DIGIT_LABELS.get(d as usize).copied().unwrap_or("?"),
            Self::Point => ".",
            Self::Backspace => "⌫",
            Self::Equals => "=",
        }
    }

    /// The character this key appends to the input buffer, if it appends one.
    pub fn symbol(self) -> Option<char> {
        match self {
            Self::Percent => Some('%'),
            Self::Divide => Some('÷'),
            Self::Multiply => Some('×'),
            Self::Subtract => Some('−'),
            Self::Add => Some('+'),
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Point => Some('.'),
            Self::Clear | Self::Parens | Self::Backspace | Self::Equals => None,
        }
    }

    pub fn role(self) -> KeyRole {
        match self {
            Self::Clear => KeyRole::Clear,
            Self::Divide | Self::Multiply | Self::Subtract | Self::Add => KeyRole::Operator,
            Self::Equals => KeyRole::Equals,
            _ => KeyRole::Plain,
        }
    }

    /// Look up a key by its label or a typing-friendly alias
    /// (`*`, `/`, `-`, `bs`, `c`, ...).
    pub fn from_label(label: &str) -> Option<Key> {
        let key = match label {
            "AC" | "ac" | "c" | "C" => Self::Clear,
            "()" | "(" | ")" => Self::Parens,
            "%" => Self::Percent,
            "÷" | "/" => Self::Divide,
            "×" | "*" | "x" => Self::Multiply,
            "−" | "-" => Self::Subtract,
            "+" => Self::Add,
            "." | "," => Self::Point,
            "⌫" | "bs" | "backspace" => Self::Backspace,
            "=" => Self::Equals,
            _ => {
                let digit = label.parse::<u8>().ok().filter(|d| *d < 10)?;
                if label.len() != 1 {
                    return None;
                }
                Self::Digit(digit)
            }
        };
        Some(key)
    }

    /// Row and column of this key in [`LAYOUT`].
    pub fn position(self) -> Option<(usize, usize)> {
        LAYOUT.iter().enumerate().find_map(|(row, keys)| {
            keys.iter()
                .position(|key| *key == self)
                .map(|col| (row, col))
        })
    }
}
