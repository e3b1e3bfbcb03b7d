use crate::models::{Difficulty, QuizQuestion, QuizRecord};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

const OPTION_LETTERS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

pub fn answer_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

fn heading_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn difficulty_style(difficulty: Difficulty) -> Style {
    let color = match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
        Difficulty::Unknown => Color::DarkGray,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Lay out a quiz record for display. `None` in, `None` out.
pub fn render_quiz(record: Option<&QuizRecord>) -> Option<Text<'static>> {
    let record = record?;
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(
        record.title.clone(),
        heading_style().add_modifier(Modifier::UNDERLINED),
    )));
    if let Some(url) = &record.url {
        lines.push(Line::from(Span::styled(
            url.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Summary", heading_style())));
    lines.push(Line::from(record.summary.clone()));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Key Entities", heading_style())));
    lines.push(entity_line("People", &record.key_entities.people));
    lines.push(entity_line(
        "Organizations",
        &record.key_entities.organizations,
    ));
    lines.push(entity_line("Locations", &record.key_entities.locations));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("Quiz ({} questions)", record.quiz.len()),
        heading_style(),
    )));
    for (i, question) in record.quiz.iter().enumerate() {
        lines.push(Line::from(""));
        lines.extend(question_lines(i + 1, question));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Related Topics", heading_style())));
    let mut topic_spans = Vec::new();
    for topic in &record.related_topics {
        if !topic_spans.is_empty() {
            topic_spans.push(Span::from(" "));
        }
        topic_spans.push(Span::styled(
            format!("[{}]", topic),
            Style::default().fg(Color::Magenta),
        ));
    }
    lines.push(Line::from(topic_spans));

    Some(Text::from(lines))
}

fn entity_line(label: &str, values: &[String]) -> Line<'static> {
    let joined = if values.is_empty() {
        "None".to_string()
    } else {
        values.join(", ")
    };
    Line::from(vec![
        Span::styled(
            format!("  {}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from(joined),
    ])
}

fn question_lines(number: usize, question: &QuizQuestion) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{}. ", number),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            question.question.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from("  "),
        Span::styled(
            format!("[{}]", question.difficulty.label()),
            difficulty_style(question.difficulty),
        ),
    ])];

    let answer = question.answer_index();
    for (i, option) in question.options.iter().enumerate() {
        let letter = OPTION_LETTERS.get(i).copied().unwrap_or('?');
        if answer == Some(i) {
            lines.push(Line::from(Span::styled(
                format!("   ✓ {}. {}", letter, option),
                answer_style(),
            )));
        } else {
            lines.push(Line::from(format!("     {}. {}", letter, option)));
        }
    }

    lines.push(Line::from(vec![
        Span::styled(
            "   Explanation: ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
        Span::styled(
            question.explanation.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    ]));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_worker::test_support::sample_record;

    fn highlighted_lines(text: &Text) -> Vec<String> {
        text.lines
            .iter()
            .filter(|line| line.spans.iter().any(|s| s.style == answer_style()))
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn is_question_number(content: &str) -> bool {
        content
            .strip_suffix(". ")
            .is_some_and(|n| n.parse::<usize>().is_ok())
    }

    #[test]
    fn test_no_record_renders_nothing() {
        assert!(render_quiz(None).is_none());
    }

    #[test]
    fn test_five_questions_each_with_one_highlighted_option() {
        let record = sample_record("Alan Turing", 5);
        let text = render_quiz(Some(&record)).unwrap();

        let highlighted = highlighted_lines(&text);
        assert_eq!(highlighted.len(), 5);
        for (i, line) in highlighted.iter().enumerate() {
            assert!(line.contains(&format!("Option {}B", i + 1)));
        }

        let blocks = text
            .lines
            .iter()
            .filter(|line| {
                line.spans
                    .first()
                    .is_some_and(|s| is_question_number(&s.content))
            })
            .count();
        assert_eq!(blocks, 5);
    }

    #[test]
    fn test_unmatched_answer_highlights_nothing() {
        let mut record = sample_record("No match", 1);
        record.quiz[0].answer = "Not an option".to_string();
        let text = render_quiz(Some(&record)).unwrap();
        assert!(highlighted_lines(&text).is_empty());
    }

    #[test]
    fn test_sections_and_topics_rendered() {
        let record = sample_record("Alan Turing", 1);
        let text = render_quiz(Some(&record)).unwrap();
        let rendered: Vec<String> = text
            .lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert_eq!(rendered[0], "Alan Turing");
        assert!(rendered.iter().any(|l| l == "Alan Turing summary."));
        assert!(rendered.iter().any(|l| l == "  People: Alan Turing"));
        assert!(rendered.iter().any(|l| l == "  Organizations: GCHQ"));
        assert!(rendered.iter().any(|l| l == "  Locations: None"));
        assert!(rendered.iter().any(|l| l.contains("[medium]")));
        assert_eq!(rendered.last().unwrap(), "[Enigma machine] [Turing test]");
    }

    #[test]
    fn test_unknown_difficulty_label() {
        let mut record = sample_record("Odd", 1);
        record.quiz[0].difficulty = Difficulty::Unknown;
        let text = render_quiz(Some(&record)).unwrap();
        let badge = text
            .lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .find(|s| s.content == "[unknown]")
            .unwrap();
        assert_eq!(badge.style, difficulty_style(Difficulty::Unknown));
    }
}
