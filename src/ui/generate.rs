use crate::tabs::{GenerateState, GenerateTab};
use crate::ui::layout::calculate_generate_chunks;
use crate::ui::quiz_display::render_quiz;
use crate::utils::{calculate_max_scroll, estimate_text_height, input_window};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_generate_tab(f: &mut Frame, area: Rect, tab: &mut GenerateTab) {
    let layout = calculate_generate_chunks(area);

    let input_width = layout.input_area.width.saturating_sub(2) as usize;
    let (visible, cursor_col) = input_window(&tab.input, tab.cursor, input_width);
    let input_text = if tab.input.is_empty() {
        Text::from(Span::styled(
            "https://en.wikipedia.org/wiki/...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Text::from(visible)
    };
    let input = Paragraph::new(input_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Wikipedia URL ")
            .border_style(if tab.is_loading() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Yellow)
            }),
    );
    f.render_widget(input, layout.input_area);
    f.set_cursor_position((
        layout.input_area.x + 1 + cursor_col as u16,
        layout.input_area.y + 1,
    ));

    let message = match &tab.state {
        GenerateState::Idle => Line::from(Span::styled(
            "Paste an article URL and press Enter to generate a quiz.",
            Style::default().fg(Color::DarkGray),
        )),
        GenerateState::Loading { started } => Line::from(Span::styled(
            format!("Generating quiz... {}s", started.elapsed().as_secs()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )),
        GenerateState::Success(record) => Line::from(Span::styled(
            format!("Generated {} questions.", record.quiz.len()),
            Style::default().fg(Color::Green),
        )),
        GenerateState::Error(error) => Line::from(Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    };
    f.render_widget(Paragraph::new(message), layout.message_area);

    let block = Block::default().borders(Borders::ALL).title(" Quiz ");
    let rendered = render_quiz(tab.result());
    match rendered {
        Some(text) => {
            let visible_height = layout.result_area.height.saturating_sub(2) as usize;
            let text_width = layout.result_area.width.saturating_sub(2) as usize;
            // Word wrapping breaks earlier than the estimate; pad it
            let content_height = estimate_text_height(&text, text_width);
            tab.max_scroll =
                calculate_max_scroll(content_height + content_height / 4, visible_height);
            tab.scroll_y = tab.scroll_y.min(tab.max_scroll);

            let quiz = Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .scroll((tab.scroll_y, 0))
                .block(block);
            f.render_widget(quiz, layout.result_area);
        }
        None => {
            tab.max_scroll = 0;
            tab.scroll_y = 0;
            f.render_widget(block, layout.result_area);
        }
    }
}
