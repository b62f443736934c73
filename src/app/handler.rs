use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::calc::{Key, Operator};
use crate::ui::{keypad, layout};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    let now = Instant::now();
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent, now),
        AppEvent::Tick => {
            state.expire_highlight(now);
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent, now: Instant) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key, now),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse, now),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

/// Calculator key bound to a keyboard key, if any.
pub fn key_for_keyboard(key: &KeyEvent) -> Option<Key> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c @ '0'..='9') => Key::digit(c as u8 - b'0'),
        KeyCode::Char('.') | KeyCode::Char(',') => Some(Key::Decimal),
        KeyCode::Char('+') => Some(Key::Operator(Operator::Add)),
        KeyCode::Char('-') => Some(Key::Operator(Operator::Subtract)),
        KeyCode::Char('*') | KeyCode::Char('x') | KeyCode::Char('×') => {
            Some(Key::Operator(Operator::Multiply))
        }
        KeyCode::Char('/') | KeyCode::Char('÷') => Some(Key::Operator(Operator::Divide)),
        KeyCode::Char('=') | KeyCode::Enter => Some(Key::Equals),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Esc | KeyCode::Delete => Some(Key::Clear),
        KeyCode::Char('%') => Some(Key::Percent),
        KeyCode::Char('n') | KeyCode::Char('±') => Some(Key::SignToggle),
        _ => None,
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Char('q') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Left => move_selection(state, Direction::Left),
        KeyCode::Right => move_selection(state, Direction::Right),
        KeyCode::Up => move_selection(state, Direction::Up),
        KeyCode::Down => move_selection(state, Direction::Down),
        KeyCode::Char(' ') => {
            if let Some((_, button)) = keypad::locate(state.selected.0, state.selected.1) {
                return state.press_key(button.key, now);
            }
        }
        _ => {
            if let Some(calc_key) = key_for_keyboard(&key) {
                return state.press_key(calc_key, now);
            }
        }
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) -> Vec<Action> {
    if !state.config.ui.mouse {
        return vec![];
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let app_layout = layout::compute_layout(state.viewport, state.config.ui.show_tape);
    match keypad::hit_test(app_layout.keypad, mouse.column, mouse.row) {
        Some(button) => {
            if let Some(pos) = keypad::position_of(button.key) {
                state.selected = pos;
            }
            state.press_key(button.key, now)
        }
        None => vec![],
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Move the keypad selection one button, stopping at the edges. Wide buttons
/// are stepped over as a whole.
fn move_selection(state: &mut AppState, direction: Direction) {
    let (row, col) = state.selected;
    let Some((start, button)) = keypad::locate(row, col) else {
        state.selected = (0, 0);
        return;
    };
    let next = match direction {
        Direction::Left if start > 0 => (row, start - 1),
        Direction::Right if start + button.span < keypad::COLUMNS => (row, start + button.span),
        Direction::Up if row > 0 => (row - 1, col),
        Direction::Down if row + 1 < keypad::ROWS => (row + 1, col),
        _ => return,
    };
    // Snap to the start of whatever button now sits under the cursor.
    if let Some((start, _)) = keypad::locate(next.0, next.1) {
        state.selected = (next.0, start);
        state.dirty = true;
    }
}
