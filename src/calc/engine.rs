//! The single-pending-operator accumulator behind the keypad.
//!
//! Pressing an operator stashes the display as the left operand; pressing `=`
//! evaluates it against the display. There is no chaining: a second operator
//! before `=` replaces the first one and its operand.

use super::evaluator::evaluate;
use super::format::{format_number, parse_display};
use super::key::{Key, Operator};

/// Left operand and operator waiting for `=`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pending {
    pub operand: String,
    pub operator: Operator,
}

/// A completed `=` evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub lhs: String,
    pub operator: Operator,
    pub rhs: String,
    pub result: String,
}

impl Calculation {
    pub fn describe(&self) -> String {
        format!("{} {} {} = {}", self.lhs, self.operator, self.rhs, self.result)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: String,
    pending: Option<Pending>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// The stashed left operand, or `""` when nothing is pending.
    pub fn pending_operand(&self) -> &str {
        self.pending.as_ref().map(|p| p.operand.as_str()).unwrap_or("")
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Compute the state after `key`, plus the calculation if `key` completed one.
    pub fn step(&self, key: Key) -> (CalculatorState, Option<Calculation>) {
        match key {
            Key::Clear => (CalculatorState::new(), None),
            Key::Operator(operator) => (
                CalculatorState {
                    display: "0".to_string(),
                    pending: Some(Pending {
                        operand: self.display.clone(),
                        operator,
                    }),
                },
                None,
            ),
            Key::Equals => match &self.pending {
                Some(p) => {
                    let value = evaluate(
                        parse_display(&p.operand),
                        parse_display(&self.display),
                        p.operator,
                    );
                    let result = format_number(value);
                    let calculation = Calculation {
                        lhs: p.operand.clone(),
                        operator: p.operator,
                        rhs: self.display.clone(),
                        result: result.clone(),
                    };
                    (
                        CalculatorState {
                            display: result,
                            pending: None,
                        },
                        Some(calculation),
                    )
                }
                None => (self.clone(), None),
            },
            Key::Percent => (
                CalculatorState {
                    display: format_number(parse_display(&self.display) / 100.0),
                    pending: self.pending.clone(),
                },
                None,
            ),
            // Digits, the decimal point and the sign key all append. The sign
            // key has never had a handler of its own.
            Key::Digit(_) | Key::Decimal | Key::SignToggle => {
                let display = if self.display == "0" {
                    key.symbol().to_string()
                } else {
                    format!("{}{}", self.display, key.symbol())
                };
                (
                    CalculatorState {
                        display,
                        pending: self.pending.clone(),
                    },
                    None,
                )
            }
        }
    }

    pub fn handle_input(self, key: Key) -> CalculatorState {
        self.step(key).0
    }

    /// Apply `key` in place.
    pub fn press(&mut self, key: Key) -> Option<Calculation> {
        let (next, calculation) = self.step(key);
        *self = next;
        calculation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(keys: &[&str]) -> CalculatorState {
        keys.iter().fold(CalculatorState::new(), |state, k| {
            state.handle_input(k.parse().unwrap())
        })
    }

    #[test]
    fn test_fresh_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.pending_operand(), "");
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn test_simple_addition() {
        let state = run(&["5", "+", "3", "="]);
        assert_eq!(state.display(), "8.0");
        assert_eq!(state.pending_operand(), "");
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn test_operator_stashes_display() {
        let state = run(&["1", "2", "×"]);
        assert_eq!(state.display(), "0");
        assert_eq!(state.pending_operand(), "12");
        assert_eq!(state.pending_operator(), Some(Operator::Multiply));
    }

    #[test]
    fn test_clear_from_any_state() {
        for keys in [&["C"][..], &["5", "+", "3", "C"], &["9", "÷", "C"], &["4", "%", "C"]] {
            let state = run(keys);
            assert_eq!(state, CalculatorState::new(), "after {:?}", keys);
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(run(&["5", "%"]).display(), "0.05");
        let state = run(&["2", "0", "0", "-", "5", "0", "%"]);
        assert_eq!(state.display(), "0.5");
        assert_eq!(state.pending_operand(), "200");
        assert_eq!(state.pending_operator(), Some(Operator::Subtract));
    }

    #[test]
    fn test_digit_replaces_zero_then_appends() {
        assert_eq!(run(&["7"]).display(), "7");
        assert_eq!(run(&["3", "7"]).display(), "37");
        assert_eq!(run(&["0", "0"]).display(), "0");
        assert_eq!(run(&["0", "."]).display(), ".");
    }

    #[test]
    fn test_multiple_decimal_points_are_kept() {
        let state = run(&["1", ".", "2", ".", "3"]);
        assert_eq!(state.display(), "1.2.3");
        assert_eq!(run(&["1", ".", "2", ".", "3", "+", "1", "="]).display(), "1.0");
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let before = run(&["4", "2"]);
        let after = before.clone().handle_input(Key::Equals);
        assert_eq!(after, before);
        assert_eq!(run(&["="]).display(), "0");
    }

    #[test]
    fn test_second_operator_discards_first() {
        let state = run(&["5", "+", "3", "×"]);
        assert_eq!(state.pending_operand(), "3");
        assert_eq!(state.pending_operator(), Some(Operator::Multiply));
        assert_eq!(run(&["5", "+", "3", "×", "2", "="]).display(), "6.0");
    }

    #[test]
    fn test_divide_by_zero_shows_nan() {
        assert_eq!(run(&["7", "÷", "0", "="]).display(), "NaN");
    }

    #[test]
    fn test_sign_toggle_appends_symbol() {
        assert_eq!(run(&["5", "±"]).display(), "5±");
        assert_eq!(run(&["±"]).display(), "±");
        // The mangled buffer reads as zero when used as an operand.
        assert_eq!(run(&["5", "±", "+", "2", "="]).display(), "2.0");
    }

    #[test]
    fn test_digits_append_to_result() {
        assert_eq!(run(&["5", "+", "3", "=", "1"]).display(), "8.01");
    }

    #[test]
    fn test_press_reports_calculation() {
        let mut state = CalculatorState::new();
        for k in ["6", "÷", "3"] {
            assert_eq!(state.press(k.parse().unwrap()), None);
        }
        let calc = state.press(Key::Equals).unwrap();
        assert_eq!(calc.lhs, "6");
        assert_eq!(calc.operator, Operator::Divide);
        assert_eq!(calc.rhs, "3");
        assert_eq!(calc.result, "2.0");
        assert_eq!(calc.describe(), "6 ÷ 3 = 2.0");
        assert_eq!(state.display(), "2.0");
        assert_eq!(state.press(Key::Equals), None);
    }
}
