use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Narrower terminals drop the tape panel.
const MIN_WIDTH_FOR_TAPE: u16 = 60;
const TAPE_WIDTH: u16 = 32;

pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub tape: Option<Rect>,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_tape: bool) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: calculator | tape
    let (calculator, tape) = if show_tape && content.width >= MIN_WIDTH_FOR_TAPE {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(24), Constraint::Length(TAPE_WIDTH)])
            .split(content);
        (h_chunks[0], Some(h_chunks[1]))
    } else {
        (content, None)
    };

    // Calculator: display | keypad
    let calc_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Pending operation + display value
            Constraint::Min(7),    // Keypad
        ])
        .split(calculator);

    AppLayout {
        display: calc_chunks[0],
        keypad: calc_chunks[1],
        tape,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_terminal_has_tape() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = compute_layout(area, true);
        let tape = layout.tape.unwrap();
        assert_eq!(tape.width, TAPE_WIDTH);
        assert_eq!(tape.right(), 80);
        assert_eq!(layout.status_bar, Rect::new(0, 29, 80, 1));
        assert_eq!(layout.display.height, 4);
        assert_eq!(layout.keypad.y, layout.display.bottom());
        assert_eq!(layout.keypad.bottom(), 29);
        assert!(layout.keypad.right() <= tape.x);
    }

    #[test]
    fn test_tape_hidden_when_narrow_or_disabled() {
        assert!(compute_layout(Rect::new(0, 0, 40, 30), true).tape.is_none());
        let layout = compute_layout(Rect::new(0, 0, 80, 30), false);
        assert!(layout.tape.is_none());
        assert_eq!(layout.keypad.width, 80);
    }
}
