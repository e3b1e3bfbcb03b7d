use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ShellLayout {
    pub tabs_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
}

pub struct GenerateLayout {
    pub input_area: Rect,
    pub message_area: Rect,
    pub result_area: Rect,
}

pub struct HistoryLayout {
    pub error_area: Rect,
    pub table_area: Rect,
}

pub fn calculate_shell_chunks(area: Rect) -> ShellLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    ShellLayout {
        tabs_area: chunks[0],
        body_area: chunks[1],
        status_area: chunks[2],
    }
}

pub fn calculate_generate_chunks(area: Rect) -> GenerateLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    GenerateLayout {
        input_area: chunks[0],
        message_area: chunks[1],
        result_area: chunks[2],
    }
}

pub fn calculate_history_chunks(area: Rect, has_error: bool) -> HistoryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if has_error { 1 } else { 0 }),
            Constraint::Min(3),
        ])
        .split(area);

    HistoryLayout {
        error_area: chunks[0],
        table_area: chunks[1],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_layout() {
        let layout = calculate_shell_chunks(Rect::new(0, 0, 100, 40));

        // Margin 1 leaves 38 rows: 3 for tabs, 3 for status.
        assert_eq!(layout.tabs_area.height, 3);
        assert_eq!(layout.status_area.height, 3);
        assert_eq!(layout.body_area.height, 32);
        assert_eq!(layout.body_area.y, 4);
    }

    #[test]
    fn test_generate_layout() {
        let layout = calculate_generate_chunks(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.message_area.height, 1);
        assert_eq!(layout.result_area.height, 26);
    }

    #[test]
    fn test_history_layout_error_row() {
        let without = calculate_history_chunks(Rect::new(0, 0, 80, 20), false);
        assert_eq!(without.error_area.height, 0);
        assert_eq!(without.table_area.height, 20);

        let with = calculate_history_chunks(Rect::new(0, 0, 80, 20), true);
        assert_eq!(with.error_area.height, 1);
        assert_eq!(with.table_area.height, 19);
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(80, 80, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 80);
        assert_eq!(popup.height, 40);
    }
}
