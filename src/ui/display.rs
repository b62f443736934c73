use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fit `text` into `width` columns, keeping its right end. Elided text is
/// marked with a leading `…`.
pub fn fit_right(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - 1;
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = i;
    }
    format!("…{}", &text[start..])
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
        .style(Theme::display());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let pending = match state.calculator.pending() {
        Some(p) => format!("{} {}", p.operand, p.operator),
        None => String::new(),
    };
    let lines = vec![
        Line::from(Span::styled(fit_right(&pending, width), Theme::display_pending())),
        Line::from(Span::styled(
            fit_right(state.calculator.display(), width),
            Theme::display_value(),
        )),
    ];

    // Keep the value on the bottom line when only one line fits.
    let skip = lines.len().saturating_sub(inner.height as usize);
    let paragraph = Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
        .alignment(Alignment::Right)
        .style(Theme::display());
    frame.render_widget(paragraph, inner);
}
