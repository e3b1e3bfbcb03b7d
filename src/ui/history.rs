use crate::models::HistoryEntry;
use crate::tabs::{DetailState, HistoryTab, ListState};
use crate::ui::layout::calculate_history_chunks;
use crate::ui::modal::draw_modal;
use crate::ui::quiz_display::render_quiz;
use crate::utils::{calculate_max_scroll, estimate_text_height, truncate_string};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

const DATE_FORMAT_TODAY: &str = "Today %H:%M";
const DATE_FORMAT_YESTERDAY: &str = "Yesterday %H:%M";
const DATE_FORMAT_OTHER: &str = "%Y-%m-%d %H:%M";

/// The backend stores naive UTC timestamps; offset-carrying ones are also
/// accepted. Anything unparseable is shown as-is.
pub fn parse_generated_date(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().with_timezone(&Local))
}

pub fn format_generated_date(raw: &str, today: NaiveDate) -> String {
    let Some(datetime) = parse_generated_date(raw) else {
        return raw.to_string();
    };

    let date = datetime.date_naive();
    if date == today {
        datetime.format(DATE_FORMAT_TODAY).to_string()
    } else if Some(date) == today.pred_opt() {
        datetime.format(DATE_FORMAT_YESTERDAY).to_string()
    } else {
        datetime.format(DATE_FORMAT_OTHER).to_string()
    }
}

fn entry_row(entry: &HistoryEntry, selected: bool, today: NaiveDate) -> Row<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let action = if selected { "> Details" } else { "  Details" };

    Row::new(vec![
        Cell::from(entry.id.to_string()),
        Cell::from(truncate_string(&entry.title, 40)),
        Cell::from(truncate_string(&entry.url, 60)),
        Cell::from(format_generated_date(&entry.date_generated, today)),
        Cell::from(Span::styled(action, Style::default().fg(Color::Cyan))),
    ])
    .style(style)
}

fn placeholder_row(message: &str) -> Row<'static> {
    Row::new(vec![
        Cell::from(""),
        Cell::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ])
}

pub fn draw_history_tab(f: &mut Frame, area: Rect, tab: &mut HistoryTab) {
    let layout = calculate_history_chunks(area, tab.error.is_some());

    if let Some(error) = &tab.error {
        let error_line = Paragraph::new(format!("Error: {}", error))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        f.render_widget(error_line, layout.error_area);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Past Quizzes ");

    if tab.list == ListState::Loading {
        let loading = Paragraph::new("Loading history...")
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(loading, layout.table_area);
    } else {
        let today = Local::now().date_naive();
        let rows: Vec<Row> = match &tab.list {
            ListState::Loaded(entries) if !entries.is_empty() => entries
                .iter()
                .enumerate()
                .map(|(i, entry)| entry_row(entry, i == tab.selected, today))
                .collect(),
            ListState::Failed => vec![placeholder_row("History unavailable.")],
            _ => vec![placeholder_row("No quizzes generated yet.")],
        };

        let header = Row::new(vec!["ID", "Title", "URL", "Generated", ""]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(25),
                Constraint::Percentage(35),
                Constraint::Length(18),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(block);
        f.render_widget(table, layout.table_area);
    }

    draw_detail_modal(f, tab);
}

fn draw_detail_modal(f: &mut Frame, tab: &mut HistoryTab) {
    let title = match &tab.detail {
        DetailState::Loaded(record) => format!("Quiz Details - {}", record.title),
        _ => "Quiz Details".to_string(),
    };

    let is_open = tab.is_modal_open();
    draw_modal(f, is_open, &title, |f, area| {
        let detail_record = match &tab.detail {
            DetailState::Loaded(record) => Some(record),
            _ => None,
        };
        let rendered = render_quiz(detail_record);
        let body = match rendered {
            Some(text) => {
                let visible_height = area.height.saturating_sub(1) as usize;
                let content_height = estimate_text_height(&text, area.width as usize);
                tab.detail_max_scroll =
                    calculate_max_scroll(content_height + content_height / 4, visible_height);
                tab.detail_scroll_y = tab.detail_scroll_y.min(tab.detail_max_scroll);
                Paragraph::new(text)
                    .wrap(Wrap { trim: false })
                    .scroll((tab.detail_scroll_y, 0))
            }
            None => Paragraph::new("Loading quiz details...")
                .style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                )
                .alignment(Alignment::Center),
        };

        let chunks = Layout::default()
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        f.render_widget(body, chunks[0]);

        let help = Paragraph::new("c Close  ↑/↓ Scroll  PgUp/PgDn Page")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(help, chunks[1]);
    });
}
