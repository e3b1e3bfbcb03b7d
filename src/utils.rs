use ratatui::text::Text;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shorten `s` to at most `max_len` characters, ending in "..." when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Rough number of rows `text` occupies once wrapped to `width` columns.
/// Word wrapping can only add rows, so callers pad the result.
pub fn estimate_text_height(text: &Text, width: usize) -> usize {
    if width == 0 {
        return text.lines.len();
    }
    text.lines
        .iter()
        .map(|line| {
            let line_width: usize = line.spans.iter().map(|s| s.content.width()).sum();
            line_width.div_ceil(width).max(1)
        })
        .sum()
}

pub fn calculate_max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height
        .saturating_sub(visible_height)
        .min(u16::MAX as usize) as u16
}

/// Horizontal window over a single-line input so the cursor stays visible.
/// `cursor` is a char index. Returns the visible slice and the cursor's
/// column inside it.
pub fn input_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }

    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    // Walk left from the cursor until the window is full, keeping one
    // column free for the cursor itself.
    let mut start = cursor;
    let mut used = 1;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(1);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }

    let cursor_col: usize = chars[start..cursor]
        .iter()
        .map(|c| c.width().unwrap_or(1))
        .sum();

    let mut visible = String::new();
    let mut visible_width = 0;
    for c in &chars[start..] {
        let w = c.width().unwrap_or(1);
        if visible_width + w > width {
            break;
        }
        visible.push(*c);
        visible_width += w;
    }

    (visible, cursor_col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Alan Turing", 20), "Alan Turing");
        assert_eq!(truncate_string("", 5), "");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("Church–Turing thesis and computability", 15);
        assert_eq!(result, "Church–Turin...");
        assert_eq!(result.chars().count(), 15);
    }

    #[test]
    fn test_estimate_text_height_wraps_long_lines() {
        let text = Text::from(vec![
            Line::from("short"),
            Line::from(""),
            Line::from("x".repeat(25)),
        ]);
        assert_eq!(estimate_text_height(&text, 10), 1 + 1 + 3);
    }

    #[test]
    fn test_calculate_max_scroll() {
        assert_eq!(calculate_max_scroll(50, 20), 30);
        assert_eq!(calculate_max_scroll(10, 20), 0);
    }

    #[test]
    fn test_input_window_fits() {
        let (visible, col) = input_window("https://en.wikipedia.org", 5, 40);
        assert_eq!(visible, "https://en.wikipedia.org");
        assert_eq!(col, 5);
    }

    #[test]
    fn test_input_window_scrolls_to_cursor_at_end() {
        let text = "https://en.wikipedia.org/wiki/Alan_Turing";
        let len = text.chars().count();
        let (visible, col) = input_window(text, len, 10);
        assert_eq!(visible, "an_Turing");
        assert_eq!(col, 9);
        assert!(text.ends_with(&visible));
    }

    #[test]
    fn test_input_window_cursor_at_start_of_long_text() {
        let (visible, col) = input_window("abcdefghijklmnop", 0, 5);
        assert_eq!(visible, "abcde");
        assert_eq!(col, 0);
    }

    #[test]
    fn test_input_window_zero_width() {
        assert_eq!(input_window("abc", 1, 0), (String::new(), 0));
    }
}
