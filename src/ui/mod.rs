mod display;
pub mod keypad;
pub mod layout;
mod status_bar;
mod tape;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::Theme::background()), area);

    let app_layout = layout::compute_layout(area, state.config.ui.show_tape);

    display::render(frame, app_layout.display, state);
    keypad::render(frame, app_layout.keypad, state);
    if let Some(tape_area) = app_layout.tape {
        tape::render(frame, tape_area, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
