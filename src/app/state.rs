use crate::app::action::Action;
use crate::calc::{Calculation, CalculatorState, Key};
use crate::config::AppConfig;
use chrono::Local;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct TapeEntry {
    pub timestamp: String,
    pub calculation: Calculation,
}

/// Button currently drawn in its pressed style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressedKey {
    pub key: Key,
    pub until: Instant,
}

/// Keypad cell under the keyboard selection, as (row, column).
pub type Selection = (usize, usize);

pub struct AppState {
    pub config: AppConfig,
    pub calculator: CalculatorState,
    pub tape: Vec<TapeEntry>,
    /// Tape entries not yet handed to the tape logger.
    pub new_entries: Vec<TapeEntry>,
    pub selected: Selection,
    pub pressed: Option<PressedKey>,
    /// Last known terminal size, used for mouse hit testing.
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(mut config: AppConfig) -> Self {
        config.ui.timestamp_format = config.ui.checked_timestamp_format();
        Self {
            config,
            calculator: CalculatorState::new(),
            tape: Vec::new(),
            new_entries: Vec::new(),
            selected: (1, 0),
            pressed: None,
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
        }
    }

    /// Feed `key` to the calculator and return the side effects it triggers.
    pub fn press_key(&mut self, key: Key, now: Instant) -> Vec<Action> {
        if let Some(calculation) = self.calculator.press(key) {
            let entry = TapeEntry {
                timestamp: Local::now().format(&self.config.ui.timestamp_format).to_string(),
                calculation,
            };
            self.push_tape(entry);
        }
        self.pressed = Some(PressedKey {
            key,
            until: now + Duration::from_millis(self.config.ui.press_highlight_ms),
        });
        self.dirty = true;
        vec![Action::PlaySound { key }]
    }

    fn push_tape(&mut self, entry: TapeEntry) {
        self.new_entries.push(entry.clone());
        self.tape.push(entry);
        let max = self.config.ui.max_tape;
        if self.tape.len() > max {
            let excess = self.tape.len() - max;
            self.tape.drain(..excess);
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.map(|p| p.key == key).unwrap_or(false)
    }

    /// Drop the press highlight once it has expired.
    pub fn expire_highlight(&mut self, now: Instant) {
        if let Some(p) = self.pressed {
            if now >= p.until {
                self.pressed = None;
                self.dirty = true;
            }
        }
    }

    pub fn status_line(&self) -> String {
        match self.calculator.pending() {
            Some(p) => format!("{} {}", p.operand, p.operator),
            None => "Ready".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::Operator;
    use crate::config::UiConfig;

    fn press_all(state: &mut AppState, keys: &[&str], now: Instant) {
        for k in keys {
            state.press_key(k.parse().unwrap(), now);
        }
    }

    #[test]
    fn test_press_key_requests_sound_and_highlights() {
        let mut state = AppState::new(AppConfig::default());
        let now = Instant::now();
        let actions = state.press_key(Key::Digit(7), now);
        assert_eq!(actions, vec![Action::PlaySound { key: Key::Digit(7) }]);
        assert_eq!(state.calculator.display(), "7");
        assert!(state.is_pressed(Key::Digit(7)));
        assert!(!state.is_pressed(Key::Digit(8)));
    }

    #[test]
    fn test_highlight_expires() {
        let mut state = AppState::new(AppConfig::default());
        let now = Instant::now();
        state.press_key(Key::Clear, now);
        state.dirty = false;
        state.expire_highlight(now + Duration::from_millis(10));
        assert!(state.pressed.is_some());
        assert!(!state.dirty);
        state.expire_highlight(now + Duration::from_millis(150));
        assert!(state.pressed.is_none());
        assert!(state.dirty);
    }

    #[test]
    fn test_equals_records_tape_entry() {
        let mut state = AppState::new(AppConfig::default());
        press_all(&mut state, &["9", "×", "3", "="], Instant::now());
        assert_eq!(state.tape.len(), 1);
        assert_eq!(state.new_entries.len(), 1);
        let calc = &state.tape[0].calculation;
        assert_eq!(calc.operator, Operator::Multiply);
        assert_eq!(calc.result, "27.0");
        press_all(&mut state, &["="], Instant::now());
        assert_eq!(state.tape.len(), 1);
    }

    #[test]
    fn test_tape_is_capped() {
        let mut cfg = AppConfig::default();
        cfg.ui.max_tape = 2;
        let mut state = AppState::new(cfg);
        let now = Instant::now();
        for d in ["1", "2", "3"] {
            press_all(&mut state, &[d, "+", "1", "="], now);
            press_all(&mut state, &["C"], now);
        }
        assert_eq!(state.tape.len(), 2);
        assert_eq!(state.tape[0].calculation.lhs, "2");
        assert_eq!(state.new_entries.len(), 3);
    }

    #[test]
    fn test_bad_timestamp_format_does_not_break_equals() {
        let mut cfg = AppConfig::default();
        cfg.ui.timestamp_format = "%Q".to_string();
        let mut state = AppState::new(cfg);
        assert_eq!(state.config.ui.timestamp_format, UiConfig::default().timestamp_format);
        press_all(&mut state, &["5", "+", "3", "="], Instant::now());
        assert_eq!(state.calculator.display(), "8.0");
        assert_eq!(state.tape.len(), 1);
        assert!(!state.tape[0].timestamp.is_empty());
    }

    #[test]
    fn test_status_line_shows_pending_operation() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.status_line(), "Ready");
        press_all(&mut state, &["4", "2", "÷"], Instant::now());
        assert_eq!(state.status_line(), "42 ÷");
    }
}
