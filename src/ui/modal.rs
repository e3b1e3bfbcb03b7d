use crate::ui::layout::centered_rect;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Draw an overlay over the current frame. Nothing is drawn while closed.
/// The caller owns whatever is shown inside; `render_content` receives the
/// inner area of the bordered block.
pub fn draw_modal<F>(f: &mut Frame, is_open: bool, title: &str, render_content: F)
where
    F: FnOnce(&mut Frame, Rect),
{
    if !is_open {
        return;
    }

    let area = centered_rect(85, 85, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    render_content(f, inner);
}

/// The only way to close a modal is the explicit close key.
pub fn is_close_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && !key.modifiers.contains(KeyModifiers::CONTROL)
}
