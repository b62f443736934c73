//! The 5×4 keypad: button table, geometry and rendering.
//!
//! ```text
//! [ C ] [ ± ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```

use crate::app::state::{AppState, Selection};
use crate::calc::{Key, Operator};
use crate::ui::theme::Theme;
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const COLUMNS: usize = 4;
pub const ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClass {
    Function,
    Number,
    Operator,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub key: Key,
    pub class: ButtonClass,
    /// Number of grid columns the button covers.
    pub span: usize,
}

const fn button(key: Key, class: ButtonClass) -> Button {
    Button { key, class, span: 1 }
}

const fn digit(d: u8) -> Button {
    button(Key::Digit(d), ButtonClass::Number)
}

const fn op(o: Operator) -> Button {
    button(Key::Operator(o), ButtonClass::Operator)
}

pub const LAYOUT: [&[Button]; ROWS] = [
    &[
        button(Key::Clear, ButtonClass::Function),
        button(Key::SignToggle, ButtonClass::Function),
        button(Key::Percent, ButtonClass::Function),
        op(Operator::Divide),
    ],
    &[digit(7), digit(8), digit(9), op(Operator::Multiply)],
    &[digit(4), digit(5), digit(6), op(Operator::Subtract)],
    &[digit(1), digit(2), digit(3), op(Operator::Add)],
    &[
        Button {
            key: Key::Digit(0),
            class: ButtonClass::Number,
            span: 2,
        },
        button(Key::Decimal, ButtonClass::Number),
        button(Key::Equals, ButtonClass::Operator),
    ],
];

/// Button covering grid cell (`row`, `col`) and the column it starts at.
pub fn locate(row: usize, col: usize) -> Option<(usize, Button)> {
    let mut start = 0;
    for b in LAYOUT.get(row)?.iter() {
        if col < start + b.span {
            return Some((start, *b));
        }
        start += b.span;
    }
    None
}

/// Grid cell where `key` starts.
pub fn position_of(key: Key) -> Option<Selection> {
    LAYOUT.iter().enumerate().find_map(|(row, buttons)| {
        let mut start = 0;
        for b in buttons.iter() {
            if b.key == key {
                return Some((row, start));
            }
            start += b.span;
        }
        None
    })
}

/// Screen rectangle of every button inside the keypad's inner area.
pub fn button_rects(inner: Rect) -> Vec<(Button, Rect)> {
    let col_w = inner.width / COLUMNS as u16;
    let row_h = inner.height / ROWS as u16;
    let mut rects = Vec::new();
    for (row, buttons) in LAYOUT.iter().enumerate() {
        let mut col = 0u16;
        for b in buttons.iter() {
            let span = b.span as u16;
            let rect = Rect::new(
                inner.x + col * col_w,
                inner.y + row as u16 * row_h,
                col_w * span,
                row_h,
            );
            rects.push((*b, rect));
            col += span;
        }
    }
    rects
}

/// The outer keypad block; its inner area is what [`button_rects`] divides.
pub fn keypad_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .style(Theme::background())
}

pub fn hit_test(area: Rect, x: u16, y: u16) -> Option<Button> {
    let inner = keypad_block().inner(area);
    button_rects(inner)
        .into_iter()
        .find(|(_, r)| r.contains(Position::new(x, y)))
        .map(|(b, _)| b)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = keypad_block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let selected = locate(state.selected.0, state.selected.1).map(|(_, b)| b.key);

    for (b, rect) in button_rects(inner) {
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        let pressed = state.is_pressed(b.key);
        let style = Theme::button(b.class, pressed);
        let border_style = if selected == Some(b.key) {
            Theme::border_focused()
        } else {
            style
        };

        // Leave a one-column gutter between buttons when there is room.
        let rect = if rect.width > 3 {
            Rect { width: rect.width - 1, ..rect }
        } else {
            rect
        };

        let label = Line::from(b.key.symbol()).centered();
        if rect.height >= 3 {
            let button_block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .style(style);
            let label_area = button_block.inner(rect);
            frame.render_widget(button_block, rect);
            let top = label_area.y + label_area.height.saturating_sub(1) / 2;
            let line_area = Rect { y: top, height: 1, ..label_area };
            frame.render_widget(Paragraph::new(label).style(style), line_area);
        } else {
            let style = if selected == Some(b.key) {
                style.add_modifier(Modifier::UNDERLINED)
            } else {
                style
            };
            frame.render_widget(Paragraph::new(label).style(style), rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_holds_every_key_once() {
        let keys: Vec<Key> = LAYOUT.iter().flat_map(|r| r.iter().map(|b| b.key)).collect();
        assert_eq!(keys.len(), 19);
        for key in Key::ALL {
            assert_eq!(keys.iter().filter(|k| **k == key).count(), 1, "{}", key);
        }
    }

    #[test]
    fn test_every_row_fills_four_columns() {
        for row in LAYOUT {
            assert_eq!(row.iter().map(|b| b.span).sum::<usize>(), COLUMNS);
        }
    }

    #[test]
    fn test_locate() {
        assert_eq!(locate(0, 0).map(|(_, b)| b.key), Some(Key::Clear));
        assert_eq!(locate(4, 0).map(|(s, b)| (s, b.key)), Some((0, Key::Digit(0))));
        assert_eq!(locate(4, 1).map(|(s, b)| (s, b.key)), Some((0, Key::Digit(0))));
        assert_eq!(locate(4, 2).map(|(s, b)| (s, b.key)), Some((2, Key::Decimal)));
        assert_eq!(locate(4, 4), None);
        assert_eq!(locate(5, 0), None);
    }

    #[test]
    fn test_position_of() {
        assert_eq!(position_of(Key::Equals), Some((4, 3)));
        assert_eq!(position_of(Key::Digit(0)), Some((4, 0)));
        assert_eq!(position_of(Key::Operator(Operator::Multiply)), Some((1, 3)));
    }

    #[test]
    fn test_zero_spans_two_columns() {
        let rects = button_rects(Rect::new(0, 0, 40, 20));
        let (_, zero) = rects.iter().find(|(b, _)| b.key == Key::Digit(0)).unwrap();
        let (_, one) = rects.iter().find(|(b, _)| b.key == Key::Digit(1)).unwrap();
        assert_eq!(zero.width, one.width * 2);
        assert_eq!(*zero, Rect::new(0, 16, 20, 4));
        assert_eq!(*one, Rect::new(0, 12, 10, 4));
    }

    #[test]
    fn test_button_rects_do_not_overlap() {
        let rects = button_rects(Rect::new(3, 2, 41, 23));
        for (i, (_, a)) in rects.iter().enumerate() {
            for (_, b) in rects.iter().skip(i + 1) {
                assert!(!a.intersects(*b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_hit_test() {
        // 42x22 keypad -> 40x20 inner area starting at (1, 1), 10x4 cells.
        let area = Rect::new(0, 0, 42, 22);
        assert_eq!(hit_test(area, 1, 1).map(|b| b.key), Some(Key::Clear));
        assert_eq!(hit_test(area, 35, 1).map(|b| b.key), Some(Key::Operator(Operator::Divide)));
        assert_eq!(hit_test(area, 15, 19).map(|b| b.key), Some(Key::Digit(0)));
        assert_eq!(hit_test(area, 25, 19).map(|b| b.key), Some(Key::Decimal));
        assert_eq!(hit_test(area, 0, 0), None);
    }
}
