use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Parse an operator symbol. Accepts the keypad glyphs and the ASCII
    /// spellings `*`, `x` and `/`.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "×" | "*" | "x" => Some(Operator::Multiply),
            "÷" | "/" => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A decimal digit, 0 through 9. Build it with [`Key::digit`] when the
    /// value is not a literal; larger values have no symbol.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Percent,
    SignToggle,
}

impl Key {
    /// Every key on the keypad, in no particular order.
    pub const ALL: [Key; 19] = [
        Key::Digit(0),
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Decimal,
        Key::Operator(Operator::Add),
        Key::Operator(Operator::Subtract),
        Key::Operator(Operator::Multiply),
        Key::Operator(Operator::Divide),
        Key::Equals,
        Key::Clear,
        Key::Percent,
        Key::SignToggle,
    ];

    /// Digit key for `d`, or `None` when `d` is not a single decimal digit.
    pub fn digit(d: u8) -> Option<Key> {
        (d <= 9).then_some(Key::Digit(d))
    }

    pub fn symbol(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Key::Digit(d) => {
                debug_assert!(d <= 9, "digit key out of range: {}", d);
                DIGITS.get(d as usize).copied().unwrap_or("?")
            }
            Key::Decimal => ".",
            Key::Operator(op) => op.symbol(),
            Key::Equals => "=",
            Key::Clear => "C",
            Key::Percent => "%",
            Key::SignToggle => "±",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key: {0:?}")]
pub struct ParseKeyError(pub String);

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(op) = Operator::from_symbol(s) {
            return Ok(Key::Operator(op));
        }
        let key = match s {
            "." => Key::Decimal,
            "=" => Key::Equals,
            "C" => Key::Clear,
            "%" => Key::Percent,
            "±" => Key::SignToggle,
            _ => match s.as_bytes() {
                [b @ b'0'..=b'9'] => Key::Digit(b - b'0'),
                _ => return Err(ParseKeyError(s.to_string())),
            },
        };
        Ok(key)
    }
}
