use crate::ui::keypad::ButtonClass;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const DISPLAY_BG: Color = Color::Rgb(0x2D, 0x2D, 0x2D);
    pub const OPERATOR: Color = Color::Rgb(0xFF, 0x95, 0x00);
    pub const NUMBER: Color = Color::Rgb(0x50, 0x50, 0x50);
    pub const FUNCTION: Color = Color::Rgb(0x70, 0x70, 0x70);

    pub fn background() -> Style {
        Style::default().fg(Color::White).bg(Color::Black)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn display() -> Style {
        Style::default().fg(Color::White).bg(Self::DISPLAY_BG)
    }

    pub fn display_value() -> Style {
        Self::display().add_modifier(Modifier::BOLD)
    }

    pub fn display_pending() -> Style {
        Style::default().fg(Color::Gray).bg(Self::DISPLAY_BG)
    }

    pub fn button(class: ButtonClass, pressed: bool) -> Style {
        let bg = match class {
            ButtonClass::Function => Self::FUNCTION,
            ButtonClass::Number => Self::NUMBER,
            ButtonClass::Operator => Self::OPERATOR,
        };
        if pressed {
            Style::default()
                .fg(bg)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(bg)
        }
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn tape_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn tape_result() -> Style {
        Style::default().fg(Self::OPERATOR)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
