use crate::app::state::AppState;
use crate::config::SoundMode;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HINTS: &str = "0-9 . + - * / % = | c clear | n ± | arrows+space | q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        " pianocalc ",
        Style::default().fg(Theme::OPERATOR).bg(Color::DarkGray).add_modifier(Modifier::BOLD),
    ));
    parts.push(Span::styled(format!(" {} ", state.status_line()), Theme::status_bar()));

    // Sound mode indicator
    let sound = match state.config.sound.mode {
        SoundMode::Off => "off",
        SoundMode::Bell => "bell",
        SoundMode::Command => "piano",
    };
    let sound = format!(" [sound: {}] ", sound);

    // Pad to fill remaining space, dropping the hints when they do not fit
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let hints = format!(" {} ", HINTS);
    let fixed = used + sound.width();
    let hints = if fixed + hints.width() <= area.width as usize {
        hints
    } else {
        String::new()
    };
    let remaining = (area.width as usize).saturating_sub(fixed + hints.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(hints, Theme::status_bar()));
    parts.push(Span::styled(sound, Style::default().fg(Color::Cyan).bg(Color::DarkGray)));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
