use crate::app::{ActiveTab, App};
use crate::models::{AppTab, BackendStatus};
use crate::ui::generate::draw_generate_tab;
use crate::ui::history::draw_history_tab;
use crate::ui::layout::calculate_shell_chunks;
use crate::utils::truncate_string;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

fn help_text(app: &App) -> &'static str {
    match &app.active {
        ActiveTab::Generate(_) => "Enter Submit  ↑/↓ Scroll  Tab Switch  Esc/Ctrl+C Quit",
        ActiveTab::History(tab) if tab.is_modal_open() => "c Close  ↑/↓ Scroll  Ctrl+C Quit",
        ActiveTab::History(_) => "↑/↓ Select  Enter Details  r Refresh  Tab Switch  Esc Quit",
    }
}

fn status_spans(status: &BackendStatus) -> Vec<Span<'static>> {
    match status {
        BackendStatus::Unknown => vec![Span::styled(
            "checking...",
            Style::default().fg(Color::DarkGray),
        )],
        BackendStatus::Online => vec![Span::styled(
            "online",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )],
        BackendStatus::Unreachable(reason) => vec![
            Span::styled(
                "unreachable",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(": {}", truncate_string(reason, 48)),
                Style::default().fg(Color::Red),
            ),
        ],
    }
}

pub fn draw_app(f: &mut Frame, app: &mut App) {
    let layout = calculate_shell_chunks(f.area());

    let titles: Vec<Line> = AppTab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.selected_tab().index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" AI Wiki Quiz Generator "),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, layout.tabs_area);

    match &mut app.active {
        ActiveTab::Generate(tab) => draw_generate_tab(f, layout.body_area, tab),
        ActiveTab::History(tab) => draw_history_tab(f, layout.body_area, tab),
    }

    let mut spans = vec![
        Span::raw("Backend: "),
        Span::styled(app.base_url.clone(), Style::default().fg(Color::Cyan)),
        Span::raw(" ("),
    ];
    spans.extend(status_spans(&app.backend_status));
    spans.push(Span::raw(")   "));
    spans.push(Span::styled(
        help_text(app),
        Style::default().fg(Color::DarkGray),
    ));
    let status = Line::from(spans);
    let status_bar = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
    f.render_widget(status_bar, layout.status_area);
}
