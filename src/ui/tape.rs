use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Tape ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());

    let visible = block.inner(area).height as usize;

    let items: Vec<ListItem> = if state.tape.is_empty() {
        vec![ListItem::new(Span::styled(" No calculations yet", Theme::timestamp()))]
    } else {
        // Newest entries at the bottom, oldest scrolled off the top.
        let skip = state.tape.len().saturating_sub(visible);
        state
            .tape
            .iter()
            .skip(skip)
            .map(|entry| {
                let c = &entry.calculation;
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", entry.timestamp), Theme::timestamp()),
                    Span::styled(format!("{} {} {} = ", c.lhs, c.operator, c.rhs), Theme::tape_text()),
                    Span::styled(c.result.clone(), Theme::tape_result()),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
